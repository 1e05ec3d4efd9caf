//! Style tables: which visual attributes each token category gets.
//!
//! - [`StyleEntry`]: flags and colours for one category
//! - [`StyleTable`]: ordered category → entry mapping, built raw or resolved
//!   from definition strings with parent inheritance
//! - [`builtin`]: named tables shipped with the crate

pub mod builtin;
mod entry;
mod table;

pub use entry::{Flag, StyleEntry, color_format};
pub use table::StyleTable;
