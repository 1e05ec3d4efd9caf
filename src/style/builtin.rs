//! Built-in style tables, selectable by name.

use super::table::StyleTable;
use crate::category::Category;
use crate::error::{Error, Result};

/// Names accepted by [`by_name`].
pub const STYLE_NAMES: &[&str] = &["default", "bw"];

const DEFAULT: &[(&str, &str)] = &[
    ("Whitespace", "#bbbbbb"),
    ("Comment", "italic #3D7B7B"),
    ("Comment.Preproc", "noitalic #9C6500"),
    ("Keyword", "bold #008000"),
    ("Keyword.Pseudo", "nobold"),
    ("Keyword.Type", "nobold #B00040"),
    ("Operator", "#666666"),
    ("Operator.Word", "bold #AA22FF"),
    ("Name.Builtin", "#008000"),
    ("Name.Function", "#0000FF"),
    ("Name.Class", "bold #0000FF"),
    ("Name.Namespace", "bold #0000FF"),
    ("Name.Exception", "bold #CB3F38"),
    ("Name.Variable", "#19177C"),
    ("Name.Constant", "#880000"),
    ("Name.Label", "#767600"),
    ("Name.Entity", "bold #717171"),
    ("Name.Attribute", "#687822"),
    ("Name.Tag", "bold #008000"),
    ("Name.Decorator", "#AA22FF"),
    ("String", "#BA2121"),
    ("String.Doc", "italic"),
    ("String.Interpol", "bold #A45A77"),
    ("String.Escape", "bold #AA5D1F"),
    ("String.Regex", "#A45A77"),
    ("String.Symbol", "#19177C"),
    ("String.Other", "#008000"),
    ("Number", "#666666"),
    ("Generic.Heading", "bold #000080"),
    ("Generic.Subheading", "bold #800080"),
    ("Generic.Deleted", "#A00000"),
    ("Generic.Inserted", "#008400"),
    ("Generic.Error", "#E40000"),
    ("Generic.Emph", "italic"),
    ("Generic.Strong", "bold"),
    ("Generic.EmphStrong", "bold italic"),
    ("Generic.Prompt", "bold #000080"),
    ("Generic.Output", "#717171"),
    ("Generic.Traceback", "#04D"),
    ("Error", "border:#FF0000"),
];

const BW: &[(&str, &str)] = &[
    ("Comment", "italic"),
    ("Comment.Preproc", "noitalic"),
    ("Keyword", "bold"),
    ("Keyword.Pseudo", "nobold"),
    ("Keyword.Type", "nobold"),
    ("Operator.Word", "bold"),
    ("Name.Class", "bold"),
    ("Name.Namespace", "bold"),
    ("Name.Exception", "bold"),
    ("Name.Entity", "bold"),
    ("Name.Tag", "bold"),
    ("String", "italic"),
    ("String.Interpol", "bold"),
    ("String.Escape", "bold"),
    ("Generic.Heading", "bold"),
    ("Generic.Subheading", "bold"),
    ("Generic.Emph", "italic"),
    ("Generic.Strong", "bold"),
    ("Generic.EmphStrong", "bold italic"),
    ("Generic.Prompt", "bold"),
    ("Error", "border:#FF0000"),
];

/// Resolve a built-in style table by name.
pub fn by_name(name: &str) -> Result<StyleTable> {
    let definitions = match name {
        "default" => DEFAULT,
        "bw" => BW,
        _ => {
            return Err(Error::InvalidOption {
                option: "style".to_string(),
                value: name.to_string(),
                allowed: STYLE_NAMES.join(", "),
            });
        }
    };
    let parsed = definitions
        .iter()
        .map(|(cat, def)| Ok((Category::parse(cat)?, *def)))
        .collect::<Result<Vec<_>>>()?;
    StyleTable::from_definitions(parsed)
}
