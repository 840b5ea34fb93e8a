//! Word entry parsing.

use log::trace;

use crate::scel::types::error::{Result, ScelError};
use crate::scel::types::models::Entry;
use crate::scel::utils::ByteReader;

/// Bytes that must remain at a record boundary before the record is read at
/// all: the three u16 count/length fields. Fewer is `TruncatedInput`. A
/// record this short still fails later as malformed, since valid records
/// carry at least one index and a non-empty word.
pub const MIN_RECORD_LEN: usize = 6;

/// Reads one entry at the reader's position.
///
/// # Record Structure
/// ```text
/// [2 bytes]     pinyin index count k (u16 LE)
/// [2k bytes]    pinyin table indices (u16 LE each)
/// [2 bytes]     word byte length (u16 LE)
/// [N bytes]     word (UTF-16LE)
/// [2 bytes]     frequency byte length (u16 LE)
/// [M bytes]     frequency as decimal digits (UTF-16LE)
/// ```
///
/// `index` is the entry's position in the stream, used for error reports.
pub fn read_entry(reader: &mut ByteReader<'_>, index: usize) -> Result<Entry> {
    let offset = reader.position();
    if reader.remaining() < MIN_RECORD_LEN {
        return Err(ScelError::TruncatedInput {
            offset,
            needed: MIN_RECORD_LEN,
            remaining: reader.remaining(),
        });
    }
    let malformed = |reason: String| ScelError::MalformedEntry {
        index,
        offset,
        reason,
    };

    let pinyin_count = reader.read_u16()? as usize;
    if pinyin_count == 0 {
        return Err(malformed("no pinyin indices".to_string()));
    }
    let mut pinyin = Vec::with_capacity(pinyin_count);
    for _ in 0..pinyin_count {
        pinyin.push(reader.read_u16()?);
    }

    let word_len = reader.read_u16()? as usize;
    if word_len == 0 {
        return Err(malformed("empty word".to_string()));
    }
    if word_len % 2 != 0 {
        return Err(malformed(format!("odd word length {}", word_len)));
    }
    let word = reader.read_utf16_string(word_len)?;

    let frequency_len = reader.read_u16()? as usize;
    if frequency_len % 2 != 0 {
        return Err(malformed(format!("odd frequency length {}", frequency_len)));
    }
    let raw_frequency = reader.read_utf16_string(frequency_len)?;
    let frequency = parse_frequency(&raw_frequency).ok_or(ScelError::InvalidFrequency {
        index,
        value: raw_frequency.clone(),
    })?;

    trace!("Entry {} at {:#x}: '{}' {:?} {}", index, offset, word, pinyin, frequency);
    Ok(Entry {
        word,
        pinyin,
        frequency,
    })
}

/// Parses the decimal frequency string. Trailing NUL padding is ignored;
/// anything else besides ASCII digits is rejected.
pub fn parse_frequency(raw: &str) -> Option<u64> {
    let digits = raw.trim_end_matches('\0');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
