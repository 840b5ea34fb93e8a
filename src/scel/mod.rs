//! Core .scel decoding module

pub mod convert;
pub mod decoder;
pub mod format;
pub mod iter;
pub mod render;
pub mod types;
pub mod utils;

pub use decoder::{decode, decode_lazy};
pub use render::render;
pub use types::error::{Result, ScelError};
