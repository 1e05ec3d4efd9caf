//! Token categories: a tree of dotted names rooted at `Token`.
//!
//! A [`Category`] is the path below the universal root, so `Token` itself is
//! the empty path and `Token.Keyword.Constant` is `["Keyword", "Constant"]`.
//! Parents are found by dropping the last segment, which makes every ancestor
//! walk finite.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{Error, Result};

/// Name of the universal root category.
pub const ROOT: &str = "Token";

/// Standard categories and their short names, in canonical order.
///
/// Keys are dotted paths below the root (`""` is the root itself).
pub const STANDARD_TYPES: &[(&str, &str)] = &[
    ("", ""),
    ("Text", ""),
    ("Text.Whitespace", "w"),
    ("Escape", "esc"),
    ("Error", "err"),
    ("Other", "x"),
    ("Keyword", "k"),
    ("Keyword.Constant", "kc"),
    ("Keyword.Declaration", "kd"),
    ("Keyword.Namespace", "kn"),
    ("Keyword.Pseudo", "kp"),
    ("Keyword.Reserved", "kr"),
    ("Keyword.Type", "kt"),
    ("Name", "n"),
    ("Name.Attribute", "na"),
    ("Name.Builtin", "nb"),
    ("Name.Builtin.Pseudo", "bp"),
    ("Name.Class", "nc"),
    ("Name.Constant", "no"),
    ("Name.Decorator", "nd"),
    ("Name.Entity", "ni"),
    ("Name.Exception", "ne"),
    ("Name.Function", "nf"),
    ("Name.Function.Magic", "fm"),
    ("Name.Property", "py"),
    ("Name.Label", "nl"),
    ("Name.Namespace", "nn"),
    ("Name.Other", "nx"),
    ("Name.Tag", "nt"),
    ("Name.Variable", "nv"),
    ("Name.Variable.Class", "vc"),
    ("Name.Variable.Global", "vg"),
    ("Name.Variable.Instance", "vi"),
    ("Name.Variable.Magic", "vm"),
    ("Literal", "l"),
    ("Literal.Date", "ld"),
    ("Literal.String", "s"),
    ("Literal.String.Affix", "sa"),
    ("Literal.String.Backtick", "sb"),
    ("Literal.String.Char", "sc"),
    ("Literal.String.Delimiter", "dl"),
    ("Literal.String.Doc", "sd"),
    ("Literal.String.Double", "s2"),
    ("Literal.String.Escape", "se"),
    ("Literal.String.Heredoc", "sh"),
    ("Literal.String.Interpol", "si"),
    ("Literal.String.Other", "sx"),
    ("Literal.String.Regex", "sr"),
    ("Literal.String.Single", "s1"),
    ("Literal.String.Symbol", "ss"),
    ("Literal.Number", "m"),
    ("Literal.Number.Bin", "mb"),
    ("Literal.Number.Float", "mf"),
    ("Literal.Number.Hex", "mh"),
    ("Literal.Number.Integer", "mi"),
    ("Literal.Number.Integer.Long", "il"),
    ("Literal.Number.Oct", "mo"),
    ("Operator", "o"),
    ("Operator.Word", "ow"),
    ("Punctuation", "p"),
    ("Punctuation.Marker", "pm"),
    ("Comment", "c"),
    ("Comment.Hashbang", "ch"),
    ("Comment.Multiline", "cm"),
    ("Comment.Preproc", "cp"),
    ("Comment.PreprocFile", "cpf"),
    ("Comment.Single", "c1"),
    ("Comment.Special", "cs"),
    ("Generic", "g"),
    ("Generic.Deleted", "gd"),
    ("Generic.Emph", "ge"),
    ("Generic.Error", "gr"),
    ("Generic.Heading", "gh"),
    ("Generic.Inserted", "gi"),
    ("Generic.Output", "go"),
    ("Generic.Prompt", "gp"),
    ("Generic.Strong", "gs"),
    ("Generic.Subheading", "gu"),
    ("Generic.EmphStrong", "ges"),
    ("Generic.Traceback", "gt"),
];

/// Shorthand first segments accepted by [`Category::parse`].
const ALIASES: &[(&str, &[&str])] = &[
    ("String", &["Literal", "String"]),
    ("Number", &["Literal", "Number"]),
    ("Whitespace", &["Text", "Whitespace"]),
];

/// A lexical category, identified by its path below [`ROOT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Category {
    path: Vec<String>,
}

impl Category {
    /// The universal root category `Token`.
    #[must_use]
    pub fn root() -> Self {
        Category { path: Vec::new() }
    }

    /// Build a category from its segments below the root.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Category {
            path: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a dotted name such as `Token.Keyword.Constant` or `Name.Builtin`.
    ///
    /// The leading `Token.` is optional, and `String`, `Number` and
    /// `Whitespace` expand to their full paths.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidCategory(name.to_string()));
        }

        let mut segments = name.split('.').peekable();
        if segments.peek() == Some(&ROOT) {
            segments.next();
        }

        let mut path = Vec::new();
        for (i, seg) in segments.enumerate() {
            if seg.is_empty() || seg.chars().any(char::is_whitespace) {
                return Err(Error::InvalidCategory(name.to_string()));
            }
            match ALIASES.iter().find(|(alias, _)| i == 0 && *alias == seg) {
                Some((_, full)) => path.extend(full.iter().map(|s| s.to_string())),
                None => path.push(seg.to_string()),
            }
        }
        Ok(Category { path })
    }

    /// A direct child of this category.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Category { path }
    }

    /// The parent category, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Category> {
        let (_, rest) = self.path.split_last()?;
        Some(Category {
            path: rest.to_vec(),
        })
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Segments below the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.path
    }

    /// Paths of this category and all its ancestors, nearest first.
    ///
    /// Each item borrows as a `Category` key, so maps keyed by `Category`
    /// can be probed without allocating.
    pub fn ancestors(&self) -> impl Iterator<Item = &[String]> {
        (0..=self.path.len()).rev().map(|len| &self.path[..len])
    }

    /// This category and its ancestors, root first.
    #[must_use]
    pub fn lineage(&self) -> Vec<Category> {
        (0..=self.path.len())
            .map(|len| Category {
                path: self.path[..len].to_vec(),
            })
            .collect()
    }
}

impl Borrow<[String]> for Category {
    fn borrow(&self) -> &[String] {
        &self.path
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT)?;
        for seg in &self.path {
            write!(f, ".{}", seg)?;
        }
        Ok(())
    }
}

fn matches_key(key: &str, path: &[String]) -> bool {
    if key.is_empty() {
        return path.is_empty();
    }
    key.split('.').eq(path.iter().map(String::as_str))
}

/// Short name of a standard category, or `None` if it is not in
/// [`STANDARD_TYPES`].
#[must_use]
pub fn standard_name(path: &[String]) -> Option<&'static str> {
    STANDARD_TYPES
        .iter()
        .find(|(key, _)| matches_key(key, path))
        .map(|(_, short)| *short)
}

/// All standard categories in canonical order.
pub fn standard_types() -> impl Iterator<Item = Category> {
    STANDARD_TYPES.iter().map(|(key, _)| {
        key.split('.')
            .filter(|seg| !seg.is_empty())
            .fold(Category::root(), |cat, seg| cat.child(seg))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_root() {
        let a = Category::parse("Token.Keyword.Constant").unwrap();
        let b = Category::parse("Keyword.Constant").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.segments(), ["Keyword", "Constant"]);
        assert!(Category::parse("Token").unwrap().is_root());
    }

    #[test]
    fn parse_expands_aliases() {
        let cat = Category::parse("String.Double").unwrap();
        assert_eq!(cat.to_string(), "Token.Literal.String.Double");
        let ws = Category::parse("Token.Whitespace").unwrap();
        assert_eq!(ws.to_string(), "Token.Text.Whitespace");
        // only the first segment is an alias
        let nested = Category::parse("Name.String").unwrap();
        assert_eq!(nested.segments(), ["Name", "String"]);
    }

    #[test]
    fn parse_rejects_bad_names() {
        assert!(Category::parse("").is_err());
        assert!(Category::parse("Keyword..Type").is_err());
        assert!(Category::parse("Key word").is_err());
        assert!(Category::parse("Keyword.").is_err());
    }

    #[test]
    fn parent_chain_ends_at_root() {
        let cat = Category::new(["Name", "Builtin", "Pseudo"]);
        let parent = cat.parent().unwrap();
        assert_eq!(parent, Category::new(["Name", "Builtin"]));
        assert_eq!(Category::root().parent(), None);
        assert_eq!(parent.child("Pseudo"), cat);
    }

    #[test]
    fn ancestors_nearest_first() {
        let cat = Category::new(["Name", "Builtin"]);
        let paths: Vec<_> = cat.ancestors().map(<[String]>::len).collect();
        assert_eq!(paths, vec![2, 1, 0]);
    }

    #[test]
    fn lineage_root_first() {
        let cat = Category::new(["Keyword", "Type"]);
        let names: Vec<_> = cat.lineage().iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Token", "Token.Keyword", "Token.Keyword.Type"]);
    }

    #[test]
    fn standard_names() {
        assert_eq!(standard_name(Category::root().segments()), Some(""));
        assert_eq!(
            standard_name(Category::new(["Literal", "String", "Double"]).segments()),
            Some("s2")
        );
        assert_eq!(standard_name(Category::new(["Keyword", "Custom"]).segments()), None);
    }

    #[test]
    fn standard_types_start_at_root() {
        let first: Vec<_> = standard_types().take(3).collect();
        assert!(first[0].is_root());
        assert_eq!(first[2], Category::new(["Text", "Whitespace"]));
        assert_eq!(standard_types().count(), STANDARD_TYPES.len());
    }
}
