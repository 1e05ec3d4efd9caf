//! Compiled per-category markup: macro and colour bindings.

use rustc_hash::FxHashMap;

use super::escape::escape_macro_name;
use crate::category::{Category, standard_name};
use crate::style::{Flag, StyleEntry};

/// Font switches, applied in this order.
const FLAG_RULES: &[(Flag, &str)] = &[
    (Flag::Bold, r"\bf{}"),
    (Flag::Italic, r"\it{}"),
    (Flag::Underline, r"\underbar{}"),
    (Flag::Roman, r"\rm{}"),
    (Flag::Sans, r"\ss{}"),
    (Flag::Mono, r"\tt{}"),
];

/// Styling macro for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroBinding {
    /// Display name derived from the category (`k`, `s2`, `nFoo`).
    pub name: String,
    /// Control sequence, e.g. `\PYGstwo`.
    pub command: String,
    /// Markup placed before the argument.
    pub prefix: String,
    /// Markup placed after the argument.
    pub suffix: String,
}

/// A named colour definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBinding {
    /// Colour value as found in the style table.
    pub value: String,
    /// Generated name, `<prefix>@Color@<n>`.
    pub name: String,
    /// Invocation of the generated name.
    pub command: String,
}

/// Colours in first-use order, de-duplicated by value.
#[derive(Debug, Clone, Default)]
pub(crate) struct ColorRegistry {
    bindings: Vec<ColorBinding>,
    by_value: FxHashMap<String, usize>,
}

impl ColorRegistry {
    /// Name for `value`, registering it on first use.
    pub(crate) fn name_for(&mut self, prefix: &str, value: &str) -> &str {
        let idx = match self.by_value.get(value) {
            Some(&i) => i,
            None => {
                let i = self.bindings.len();
                let name = format!("{}@Color@{}", prefix, i);
                self.bindings.push(ColorBinding {
                    value: value.to_string(),
                    command: format!("\\{}{{}}", name),
                    name,
                });
                self.by_value.insert(value.to_string(), i);
                i
            }
        };
        &self.bindings[idx].name
    }

    pub(crate) fn bindings(&self) -> &[ColorBinding] {
        &self.bindings
    }
}

/// Human-readable name of a category.
///
/// Standard categories use their short name; others append the segments
/// below their nearest standard ancestor, so `Name.Foo.Bar` becomes `nFooBar`.
#[must_use]
pub fn display_name(category: &Category) -> String {
    let path = category.segments();
    let (depth, short) = (0..=path.len())
        .rev()
        .find_map(|len| standard_name(&path[..len]).map(|short| (len, short)))
        .unwrap_or((0, ""));
    let mut name = short.to_string();
    for seg in &path[depth..] {
        name.push_str(seg);
    }
    name
}

/// Compile the macro for one category, registering its colour if it has one.
pub(crate) fn compile(
    category: &Category,
    style: &StyleEntry,
    commandprefix: &str,
    colors: &mut ColorRegistry,
) -> MacroBinding {
    let name = display_name(category);
    let mut prefix = String::new();
    let mut suffix = String::new();

    for (flag, markup) in FLAG_RULES {
        if style.has(*flag) {
            prefix.push_str(markup);
        }
    }
    if let Some(color) = style.color.as_deref() {
        let color_name = colors.name_for(commandprefix, color);
        prefix.push_str(&format!("\\startcolor[{}]{{}}", color_name));
        suffix.push_str(r"\stopcolor{}");
    }

    MacroBinding {
        command: format!("\\{}{}", commandprefix, escape_macro_name(&name)),
        name,
        prefix,
        suffix,
    }
}
