//! Synthetic .scel buffers for tests.
#![allow(dead_code)]

use scel2ibus::{PINYIN_TABLE_OFFSET, SIGNATURE};

pub fn utf16(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

#[derive(Default)]
pub struct ScelBuilder {
    name: String,
    table: Vec<(u16, String)>,
    body: Vec<u8>,
}

impl ScelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn syllable(mut self, index: u16, syllable: &str) -> Self {
        self.table.push((index, syllable.to_string()));
        self
    }

    /// Appends a well-formed record.
    pub fn entry(self, word: &str, pinyin: &[u16], frequency: &str) -> Self {
        let word = utf16(word);
        let frequency = utf16(frequency);
        let mut record = (pinyin.len() as u16).to_le_bytes().to_vec();
        for index in pinyin {
            record.extend(index.to_le_bytes());
        }
        record.extend((word.len() as u16).to_le_bytes());
        record.extend(word);
        record.extend((frequency.len() as u16).to_le_bytes());
        record.extend(frequency);
        self.raw(&record)
    }

    /// Appends arbitrary bytes to the entry stream.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![0u8; PINYIN_TABLE_OFFSET];
        out[..SIGNATURE.len()].copy_from_slice(&SIGNATURE);
        let name = utf16(&self.name);
        out[0x130..0x130 + name.len()].copy_from_slice(&name);

        out.extend((self.table.len() as u32).to_le_bytes());
        for (index, syllable) in &self.table {
            let text = utf16(syllable);
            out.extend(index.to_le_bytes());
            out.extend((text.len() as u16).to_le_bytes());
            out.extend(text);
        }
        out.extend(&self.body);
        out
    }
}

/// The two-syllable table used by most tests.
pub fn ni_hao() -> ScelBuilder {
    ScelBuilder::new().syllable(1, "ni").syllable(2, "hao")
}
