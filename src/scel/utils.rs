//! Low-level byte reading utilities

use std::borrow::Cow;

use byteorder::{ByteOrder, LittleEndian};
use encoding_rs::UTF_16LE;

use super::types::error::{Result, ScelError};

/// Sequential little-endian cursor over an in-memory buffer.
///
/// Every read is bounds-checked against the buffer. A failed read leaves the
/// cursor where it was. The underlying bytes are never modified.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn has_remaining(&self) -> bool {
        self.pos < self.buf.len()
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Reads `byte_length` bytes and decodes them as UTF-16LE.
    ///
    /// # Errors
    /// - [`ScelError::TruncatedInput`] if fewer than `byte_length` bytes remain
    /// - [`ScelError::InvalidEncoding`] on an odd length or unpaired surrogates
    pub fn read_utf16_string(&mut self, byte_length: usize) -> Result<String> {
        let bytes = self.peek(byte_length)?;
        let text = decode_utf16le(bytes).ok_or(ScelError::InvalidEncoding {
            offset: self.pos,
            len: byte_length,
        })?;
        self.pos += byte_length;
        Ok(text.into_owned())
    }

    /// Advances the cursor by `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    fn peek(&self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ScelError::TruncatedInput {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        Ok(&self.buf[self.pos..self.pos + n])
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(n)?;
        self.pos += n;
        Ok(bytes)
    }
}

/// Strict UTF-16LE decode. Returns `None` instead of substituting
/// replacement characters.
pub fn decode_utf16le(bytes: &[u8]) -> Option<Cow<'_, str>> {
    UTF_16LE.decode_without_bom_handling_and_without_replacement(bytes)
}
