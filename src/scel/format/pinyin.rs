//! Pinyin table parsing.

use log::{debug, trace};

use crate::scel::types::error::Result;
use crate::scel::types::models::{PinyinSyllable, PinyinTable};
use crate::scel::utils::ByteReader;

/// Reads the pinyin table at the reader's position.
///
/// # Table Structure
/// ```text
/// [4 bytes] row count (u32 LE)
/// per row:
///   [2 bytes] index (u16 LE)
///   [2 bytes] syllable byte length (u16 LE)
///   [N bytes] syllable (UTF-16LE)
/// ```
pub fn read_table(reader: &mut ByteReader<'_>) -> Result<PinyinTable> {
    let count = reader.read_u32()?;
    debug!("Pinyin table at {:#x}: {} rows", reader.position() - 4, count);

    // The count comes straight from the file; don't let it size the allocation.
    let mut syllables = Vec::with_capacity((count as usize).min(reader.remaining() / 4));
    for _ in 0..count {
        let index = reader.read_u16()?;
        let len = reader.read_u16()? as usize;
        let syllable = reader.read_utf16_string(len)?;
        trace!("Pinyin {} => '{}'", index, syllable);
        syllables.push(PinyinSyllable { index, syllable });
    }

    PinyinTable::from_syllables(syllables)
}
