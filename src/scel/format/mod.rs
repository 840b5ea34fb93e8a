//! File format parsing layer for .scel dictionary files.
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐
//! │  Header         │ ← header::skip() / header::read_metadata()
//! │  Metadata       │
//! ├─────────────────┤
//! │  Pinyin Table   │ ← pinyin::read_table()
//! ├─────────────────┤
//! │  Entry Stream   │ ← entry::read_entry(), repeated until EOF
//! └─────────────────┘
//! ```

pub mod entry;
pub mod header;
pub mod pinyin;
