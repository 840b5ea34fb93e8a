//! Fixed-size header and metadata block.
//!
//! # Layout
//! ```text
//! 0x0000  [12 bytes]    signature
//! 0x000C  [0x124 bytes] opaque header fields
//! 0x0130  [0x208 bytes] dictionary name      (UTF-16LE, NUL padded)
//! 0x0338  [0x208 bytes] dictionary category  (UTF-16LE, NUL padded)
//! 0x0540  [0x800 bytes] description          (UTF-16LE, NUL padded)
//! 0x0D40  [0x800 bytes] example words        (UTF-16LE, NUL padded)
//! 0x1540                pinyin table
//! ```

use log::{debug, trace};

use crate::scel::types::error::{Result, ScelError};
use crate::scel::types::models::ScelMetadata;
use crate::scel::utils::{decode_utf16le, ByteReader};

/// Magic bytes at the start of every .scel file.
pub const SIGNATURE: [u8; 12] = [
    0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00,
];

/// Length of the opaque format header preceding the metadata block.
pub const HEADER_LEN: usize = 0x130;

/// Length of the metadata block holding the dictionary name and category.
pub const METADATA_LEN: usize = 0x1410;

/// Absolute offset of the pinyin table.
pub const PINYIN_TABLE_OFFSET: usize = HEADER_LEN + METADATA_LEN;

const NAME_LEN: usize = 0x208;
const CATEGORY_LEN: usize = 0x208;
const DESCRIPTION_LEN: usize = 0x800;
const EXAMPLES_LEN: usize = 0x800;

/// Consumes the header and metadata block, leaving the reader at the
/// pinyin table. Their contents are not interpreted.
pub fn skip(reader: &mut ByteReader<'_>) -> Result<()> {
    reader.skip(HEADER_LEN)?;
    reader.skip(METADATA_LEN)?;
    debug!("Skipped {} header bytes", PINYIN_TABLE_OFFSET);
    Ok(())
}

/// Reads the descriptive metadata of a .scel file.
///
/// Unlike [`skip`], this validates the signature.
///
/// # Errors
/// - [`ScelError::InvalidSignature`] if the magic bytes do not match
/// - [`ScelError::TruncatedInput`] if the buffer ends inside the metadata block
/// - [`ScelError::InvalidEncoding`] if a field is not valid UTF-16LE
pub fn read_metadata(buffer: &[u8]) -> Result<ScelMetadata> {
    let mut reader = ByteReader::new(buffer);
    if buffer.get(..SIGNATURE.len()) != Some(&SIGNATURE[..]) {
        let found = buffer.iter().take(SIGNATURE.len()).copied().collect();
        return Err(ScelError::InvalidSignature { found });
    }
    reader.skip(HEADER_LEN)?;

    let name = read_padded_field(&mut reader, NAME_LEN)?;
    let category = read_padded_field(&mut reader, CATEGORY_LEN)?;
    let description = read_padded_field(&mut reader, DESCRIPTION_LEN)?;
    let examples = read_padded_field(&mut reader, EXAMPLES_LEN)?;
    trace!("Metadata: name='{}', category='{}'", name, category);

    Ok(ScelMetadata {
        name,
        category,
        description,
        examples,
    })
}

/// Reads a fixed-width field and decodes it up to the first NUL code unit.
fn read_padded_field(reader: &mut ByteReader<'_>, width: usize) -> Result<String> {
    let offset = reader.position();
    let mut units = Vec::with_capacity(width / 2);
    for _ in 0..width / 2 {
        units.push(reader.read_u16()?);
    }
    let text_len = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    let bytes: Vec<u8> = units[..text_len]
        .iter()
        .flat_map(|u| u.to_le_bytes())
        .collect();
    decode_utf16le(&bytes)
        .map(|text| text.into_owned())
        .ok_or(ScelError::InvalidEncoding {
            offset,
            len: text_len * 2,
        })
}
