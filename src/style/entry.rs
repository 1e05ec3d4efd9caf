//! Per-category visual attributes and the style-definition mini language.

use crate::error::{Error, Result};

/// Terminal colour names passed through unchanged.
const ANSI_COLORS: &[&str] = &[
    "ansiblack",
    "ansired",
    "ansigreen",
    "ansiyellow",
    "ansiblue",
    "ansimagenta",
    "ansicyan",
    "ansigray",
    "ansibrightblack",
    "ansibrightred",
    "ansibrightgreen",
    "ansibrightyellow",
    "ansibrightblue",
    "ansibrightmagenta",
    "ansibrightcyan",
    "ansiwhite",
];

/// Boolean style attributes, in the order markup is emitted for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Bold,
    Italic,
    Underline,
    Roman,
    Sans,
    Mono,
}

/// Visual attributes of one category.
///
/// Colours are stored normalised: six hex digits without `#`, or an ansi
/// colour name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleEntry {
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub bgcolor: Option<String>,
    pub border: Option<String>,
    pub roman: bool,
    pub sans: bool,
    pub mono: bool,
}

impl StyleEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_flag(mut self, flag: Flag) -> Self {
        *self.flag_mut(flag) = true;
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.with_flag(Flag::Bold)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.with_flag(Flag::Italic)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.with_flag(Flag::Underline)
    }

    /// Set the foreground colour (already normalised, e.g. `"ff0000"`).
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn has(&self, flag: Flag) -> bool {
        match flag {
            Flag::Bold => self.bold,
            Flag::Italic => self.italic,
            Flag::Underline => self.underline,
            Flag::Roman => self.roman,
            Flag::Sans => self.sans,
            Flag::Mono => self.mono,
        }
    }

    fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::Bold => &mut self.bold,
            Flag::Italic => &mut self.italic,
            Flag::Underline => &mut self.underline,
            Flag::Roman => &mut self.roman,
            Flag::Sans => &mut self.sans,
            Flag::Mono => &mut self.mono,
        }
    }

    /// Apply a style definition such as `"bold #008000"` on top of `self`.
    ///
    /// `noinherit` is handled by the caller, which picks the base entry; here
    /// it is accepted and ignored.
    pub fn apply(&mut self, definition: &str) -> Result<()> {
        for word in definition.split_whitespace() {
            match word {
                "noinherit" => {}
                "bold" => self.bold = true,
                "nobold" => self.bold = false,
                "italic" => self.italic = true,
                "noitalic" => self.italic = false,
                "underline" => self.underline = true,
                "nounderline" => self.underline = false,
                "roman" => self.roman = true,
                "sans" => self.sans = true,
                "mono" => self.mono = true,
                _ => {
                    if let Some(c) = word.strip_prefix("bg:") {
                        self.bgcolor = color_format(c)?;
                    } else if let Some(c) = word.strip_prefix("border:") {
                        self.border = color_format(c)?;
                    } else {
                        self.color = color_format(word)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Normalise a colour word. Empty means "no colour".
pub fn color_format(text: &str) -> Result<Option<String>> {
    if text.is_empty() {
        return Ok(None);
    }
    if ANSI_COLORS.contains(&text) {
        return Ok(Some(text.to_string()));
    }
    let hex = text
        .strip_prefix('#')
        .filter(|h| h.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| Error::ColorFormat(text.to_string()))?;
    match hex.len() {
        6 => Ok(Some(hex.to_string())),
        3 => Ok(Some(hex.chars().flat_map(|c| [c, c]).collect())),
        _ => Err(Error::ColorFormat(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_formats() {
        assert_eq!(color_format("#008000").unwrap().as_deref(), Some("008000"));
        assert_eq!(color_format("#04D").unwrap().as_deref(), Some("0044DD"));
        assert_eq!(color_format("ansired").unwrap().as_deref(), Some("ansired"));
        assert_eq!(color_format("").unwrap(), None);
    }

    #[test]
    fn bad_colors_rejected() {
        for bad in ["red", "#12", "#1234", "#ggg", "008000"] {
            assert!(
                matches!(color_format(bad), Err(Error::ColorFormat(_))),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn apply_definition_words() {
        let mut entry = StyleEntry::new();
        entry
            .apply("bold italic underline roman sans mono #f00 bg:#eee border:#000")
            .unwrap();
        assert!(entry.bold && entry.italic && entry.underline);
        assert!(entry.roman && entry.sans && entry.mono);
        assert_eq!(entry.color.as_deref(), Some("ff0000"));
        assert_eq!(entry.bgcolor.as_deref(), Some("eeeeee"));
        assert_eq!(entry.border.as_deref(), Some("000000"));
    }

    #[test]
    fn apply_negations_override_inherited() {
        let mut entry = StyleEntry::new().bold().italic().underline();
        entry.apply("nobold noitalic nounderline").unwrap();
        assert_eq!(entry, StyleEntry::new());
    }

    #[test]
    fn apply_rejects_unknown_word() {
        let mut entry = StyleEntry::new();
        assert!(entry.apply("bold blinking").is_err());
    }

    #[test]
    fn has_matches_fields() {
        let entry = StyleEntry::new().bold().underline();
        assert!(entry.has(Flag::Bold));
        assert!(!entry.has(Flag::Italic));
        assert!(entry.has(Flag::Underline));
    }
}
