//! Escaping for ConTeXt text and macro identifiers.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("digit pattern compiles"));

const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Escape literal text for a ConTeXt verbatim buffer.
///
/// Backslashes are handled first (`\\` becomes four backslashes, a lone `\`
/// becomes `\letterbackslash{}`), then `{ } & % $ #` each get a leading
/// backslash. The braces of `\letterbackslash{}` are escaped by that second
/// pass too.
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace("\\\\", "\x00")
        .replace('\\', "\x01")
        .replace('\x01', "\\letterbackslash{}")
        .replace('\x00', "\\\\\\\\")
        .replace('{', "\\{")
        .replace('}', "\\}")
        .replace('&', "\\&")
        .replace('%', "\\%")
        .replace('$', "\\$")
        .replace('#', "\\#")
}

/// Make a name usable as a TeX control sequence by spelling out digits.
#[must_use]
pub fn escape_macro_name(name: &str) -> String {
    DIGIT
        .replace_all(name, |caps: &Captures<'_>| {
            DIGIT_WORDS[usize::from(caps[0].as_bytes()[0] - b'0')]
        })
        .into_owned()
}
