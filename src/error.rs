use std::io;

use crate::category::Category;

/// Result type alias for formatter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building style tables, configuring the formatter,
/// reading token streams or writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A category (and every one of its ancestors) has no style entry.
    #[error("no style defined for {category} or any of its ancestors")]
    Taxonomy { category: Category },

    /// A constrained option got a value outside its closed set.
    #[error("invalid value '{value}' for option '{option}' (expected one of: {allowed})")]
    InvalidOption {
        option: String,
        value: String,
        allowed: String,
    },

    /// A colour in a style definition is not `#rgb`, `#rrggbb` or an ansi name.
    #[error("wrong color format '{0}'")]
    ColorFormat(String),

    /// A category name could not be parsed.
    #[error("invalid category name '{0}'")]
    InvalidCategory(String),

    /// A JSON style table could not be parsed.
    #[error("style table: {0}")]
    StyleFile(#[from] serde_json::Error),

    /// A line of a raw token stream is malformed.
    #[error("line {line}: {message}")]
    RawToken { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn raw_token(line: usize, message: impl Into<String>) -> Self {
        Error::RawToken {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_error_names_category() {
        let err = Error::Taxonomy {
            category: Category::new(["Keyword", "Constant"]),
        };
        assert_eq!(
            err.to_string(),
            "no style defined for Token.Keyword.Constant or any of its ancestors"
        );
    }

    #[test]
    fn invalid_option_lists_choices() {
        let err = Error::InvalidOption {
            option: "style".into(),
            value: "neon".into(),
            allowed: "default, bw".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("neon"));
        assert!(msg.contains("default, bw"));
    }

    #[test]
    fn raw_token_error_has_line() {
        assert_eq!(Error::raw_token(3, "missing tab").to_string(), "line 3: missing tab");
    }
}
