pub mod category;
pub mod cli;
pub mod error;
pub mod format;
pub mod options;
pub mod raw;
pub mod style;

pub use category::Category;
pub use error::{Error, Result};
pub use format::ContextFormatter;
pub use options::FormatterOptions;
pub use style::{StyleEntry, StyleTable};
