//! Rendering decoded entries as ibus-libpinyin phrase lines.
//!
//! Line format: `word<TAB>syllables joined by one space<TAB>frequency`.

use log::debug;

use super::types::error::{Result, ScelError};
use super::types::models::{Dictionary, Entry, PinyinTable};

/// Renders all entries in decode order.
///
/// # Errors
/// Returns [`ScelError::UnknownPinyinIndex`] for the first entry that
/// references an index missing from the table. No lines are returned in that
/// case, including those for earlier entries.
pub fn render(dictionary: &Dictionary) -> Result<Vec<String>> {
    let lines = dictionary
        .entries
        .iter()
        .enumerate()
        .map(|(position, entry)| render_entry(&dictionary.pinyin_table, position, entry))
        .collect::<Result<Vec<_>>>()?;
    debug!("Rendered {} lines", lines.len());
    Ok(lines)
}

/// Renders a single entry. `position` is only used for error reports.
pub fn render_entry(table: &PinyinTable, position: usize, entry: &Entry) -> Result<String> {
    let syllables = entry
        .pinyin
        .iter()
        .map(|&index| {
            table.get(index).ok_or_else(|| ScelError::UnknownPinyinIndex {
                entry: position,
                word: entry.word.clone(),
                pinyin_index: index,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{}\t{}\t{}", entry.word, syllables.join(" "), entry.frequency))
}
