//! Lazy iteration over the entry stream.

use log::debug;

use super::format::entry;
use super::types::error::Result;
use super::types::models::Entry;
use super::utils::ByteReader;

/// Where the record loop currently stands. Header and table reading happen
/// before the loop exists; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    ReadingEntry,
    Done,
    Failed,
}

/// Iterator over the entries following the pinyin table.
///
/// Yields `Result<Entry>` in file order. Stops after the buffer is exhausted
/// or after the first error; both are terminal.
///
/// Created by [`decode_lazy`](crate::scel::decoder::decode_lazy).
#[derive(Debug, Clone)]
pub struct EntryIter<'a> {
    reader: ByteReader<'a>,
    next_index: usize,
    state: LoopState,
}

impl<'a> EntryIter<'a> {
    /// `reader` must be positioned at the first entry.
    pub(crate) fn new(reader: ByteReader<'a>) -> Self {
        Self {
            reader,
            next_index: 0,
            state: LoopState::ReadingEntry,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Byte offset of the next record.
    pub fn position(&self) -> usize {
        self.reader.position()
    }
}

impl<'a> Iterator for EntryIter<'a> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != LoopState::ReadingEntry {
            return None;
        }
        if !self.reader.has_remaining() {
            debug!("Entry stream exhausted after {} entries", self.next_index);
            self.state = LoopState::Done;
            return None;
        }

        let result = entry::read_entry(&mut self.reader, self.next_index);
        match result {
            Ok(_) => self.next_index += 1,
            Err(_) => self.state = LoopState::Failed,
        }
        Some(result)
    }
}

impl std::iter::FusedIterator for EntryIter<'_> {}
