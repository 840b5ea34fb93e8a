//! Core data structures for decoded .scel dictionaries.
//!
//! - [`PinyinTable`]: the per-file syllable table, looked up by index value
//! - [`Entry`]: one word with its pronunciation and frequency
//! - [`Dictionary`]: a fully decoded file
//! - [`ScelMetadata`]: the descriptive fields of the file header

use std::collections::HashMap;

use super::error::{Result, ScelError};

/// One row of the pinyin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinyinSyllable {
    pub index: u16,
    pub syllable: String,
}

/// Ordered table of pinyin syllables.
///
/// Index values are not guaranteed to be contiguous or to match the
/// position of a row, so lookups go through a map keyed by index value.
/// The table is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinyinTable {
    syllables: Vec<PinyinSyllable>,
    by_index: HashMap<u16, usize>,
}

impl PinyinTable {
    /// Builds a table from rows in file order.
    ///
    /// # Errors
    /// Returns [`ScelError::MalformedTable`] if two rows share an index.
    pub fn from_syllables(syllables: Vec<PinyinSyllable>) -> Result<Self> {
        let mut by_index = HashMap::with_capacity(syllables.len());
        for (position, row) in syllables.iter().enumerate() {
            if by_index.insert(row.index, position).is_some() {
                return Err(ScelError::MalformedTable(format!(
                    "pinyin index {} appears more than once",
                    row.index
                )));
            }
        }
        Ok(Self { syllables, by_index })
    }

    /// Resolves an index value to its syllable.
    pub fn get(&self, index: u16) -> Option<&str> {
        self.by_index
            .get(&index)
            .map(|&position| self.syllables[position].syllable.as_str())
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Rows in file order.
    pub fn iter(&self) -> impl Iterator<Item = &PinyinSyllable> {
        self.syllables.iter()
    }
}

/// A single dictionary record.
///
/// `pinyin` holds pinyin-table index values in pronunciation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub pinyin: Vec<u16>,
    pub frequency: u64,
}

/// A decoded .scel file: its pinyin table and entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pub pinyin_table: PinyinTable,
    pub entries: Vec<Entry>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders every entry as an ibus phrase line.
    ///
    /// See [`render`](crate::scel::render::render).
    pub fn render(&self) -> Result<Vec<String>> {
        crate::scel::render::render(self)
    }

    /// Renders the whole dictionary as ibus table text, one line per entry
    /// with a trailing newline.
    pub fn to_ibus(&self) -> Result<String> {
        let lines = self.render()?;
        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        Ok(text)
    }
}

/// Descriptive fields stored in the fixed-size metadata block.
///
/// None of these are reproduced in the ibus output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScelMetadata {
    pub name: String,
    pub category: String,
    pub description: String,
    pub examples: String,
}
