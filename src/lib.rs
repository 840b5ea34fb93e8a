//! # scel2ibus
//!
//! Decoder for Sogou Pinyin `.scel` dictionaries and a converter to the
//! tab-separated phrase table imported by ibus-libpinyin.
//!
//! ```no_run
//! let buffer = std::fs::read("words.scel").unwrap();
//! let dictionary = scel2ibus::decode(&buffer).unwrap();
//! for line in dictionary.render().unwrap() {
//!     println!("{}", line);
//! }
//! ```
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    convert::{
        convert_buffer, convert_file, discover_scel_files, output_path_for, plan_conversions,
        ConversionReport, ConvertOptions, PlannedConversion,
    },
    decode,
    decode_lazy,
    format::header::{read_metadata, PINYIN_TABLE_OFFSET, SIGNATURE},
    iter::{EntryIter, LoopState},
    render,
    types::models::{Dictionary, Entry, PinyinSyllable, PinyinTable, ScelMetadata},
    utils::ByteReader,
    Result,
    ScelError,
};
