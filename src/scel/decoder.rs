//! Decoding a .scel buffer into a [`Dictionary`].
//!
//! Decoding runs in two phases: fixed-size header consumption, then the
//! pinyin table followed by a record loop bounded by the end of the buffer.

use log::{debug, info};

use super::format::{header, pinyin};
use super::iter::EntryIter;
use super::types::error::Result;
use super::types::models::{Dictionary, PinyinTable};
use super::utils::ByteReader;

/// Decodes a complete .scel buffer.
///
/// All-or-nothing: any error aborts the decode and no partial dictionary is
/// returned. An entry stream that is empty after the table is not an error.
///
/// # Errors
/// Any of [`ScelError`](crate::ScelError)'s format variants; see
/// [`read_entry`](crate::scel::format::entry::read_entry) for the record rules.
pub fn decode(buffer: &[u8]) -> Result<Dictionary> {
    let (pinyin_table, entries) = decode_lazy(buffer)?;
    let entries = entries.collect::<Result<Vec<_>>>()?;
    info!(
        "Decoded {} entries over {} pinyin syllables",
        entries.len(),
        pinyin_table.len()
    );
    Ok(Dictionary {
        pinyin_table,
        entries,
    })
}

/// Decodes the header and pinyin table eagerly and returns an iterator over
/// the entries that follow.
pub fn decode_lazy(buffer: &[u8]) -> Result<(PinyinTable, EntryIter<'_>)> {
    debug!("Decoding .scel buffer of {} bytes", buffer.len());
    let mut reader = ByteReader::new(buffer);
    header::skip(&mut reader)?;
    let pinyin_table = pinyin::read_table(&mut reader)?;
    debug!("Entry stream starts at {:#x}", reader.position());
    Ok((pinyin_table, EntryIter::new(reader)))
}
