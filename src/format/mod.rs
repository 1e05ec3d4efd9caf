//! ConTeXt output for classified token streams.
//!
//! Each style-table category is compiled into a macro (`\PYGk`, `\PYGstwo`,
//! ...) whose definition wraps its argument in font and colour switches.
//! Rendering merges consecutive tokens of the same category into runs, then
//! splits every run into lines and whitespace-separated words, wrapping each
//! word in its category's macro between the escape markers.

mod binding;
mod context;
mod escape;

pub use binding::{ColorBinding, MacroBinding, display_name};
pub use context::{ContextFormatter, Segment, segments};
pub use escape::{escape, escape_macro_name};
