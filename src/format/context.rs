//! The ConTeXt formatter: style definitions and token rendering.

use std::io::{self, Write};
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use super::binding::{ColorBinding, ColorRegistry, MacroBinding, compile};
use super::escape::escape;
use crate::category::Category;
use crate::error::{Error, Result};
use crate::options::FormatterOptions;
use crate::style::{StyleTable, builtin};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace pattern compiles"));

/// A piece of a line: a single whitespace character or the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Space(&'a str),
    Word(&'a str),
}

/// Split a line into alternating words and single whitespace characters.
/// Empty words are dropped.
#[must_use]
pub fn segments(line: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in WHITESPACE.find_iter(line) {
        if m.start() > last {
            out.push(Segment::Word(&line[last..m.start()]));
        }
        out.push(Segment::Space(m.as_str()));
        last = m.end();
    }
    if last < line.len() {
        out.push(Segment::Word(&line[last..]));
    }
    out
}

/// Formats `(category, text)` token streams as ConTeXt verbatim code.
///
/// Construction compiles one [`MacroBinding`] per style-table category; the
/// formatter is then read-only, so one instance can render any number of
/// streams.
#[derive(Debug, Clone)]
pub struct ContextFormatter {
    options: FormatterOptions,
    bindings: Vec<(Category, MacroBinding)>,
    index: FxHashMap<Category, usize>,
    colors: ColorRegistry,
}

impl ContextFormatter {
    /// Build a formatter using the built-in style named by `options.style`.
    pub fn new(options: FormatterOptions) -> Result<Self> {
        let table = builtin::by_name(&options.style)?;
        Self::with_style_table(options, &table)
    }

    /// Build a formatter from an explicit style table.
    ///
    /// Fails with [`Error::Taxonomy`] if the table has no entry for the root
    /// category, since some tokens could then never be styled.
    pub fn with_style_table(options: FormatterOptions, table: &StyleTable) -> Result<Self> {
        let root = Category::root();
        if !table.contains(&root) {
            return Err(Error::Taxonomy { category: root });
        }

        let mut colors = ColorRegistry::default();
        let mut bindings = Vec::with_capacity(table.len());
        let mut index = FxHashMap::default();
        for (category, style) in table.iter() {
            let binding = compile(category, style, &options.commandprefix, &mut colors);
            index.insert(category.clone(), bindings.len());
            bindings.push((category.clone(), binding));
        }

        tracing::debug!(
            macros = bindings.len(),
            colors = colors.bindings().len(),
            prefix = %options.commandprefix,
            "compiled context formatter"
        );

        Ok(Self {
            options,
            bindings,
            index,
            colors,
        })
    }

    #[must_use]
    pub fn options(&self) -> &FormatterOptions {
        &self.options
    }

    /// Macro bindings in style-table order.
    pub fn bindings(&self) -> impl Iterator<Item = (&Category, &MacroBinding)> {
        self.bindings.iter().map(|(c, b)| (c, b))
    }

    /// Colour bindings in first-use order.
    #[must_use]
    pub fn colors(&self) -> &[ColorBinding] {
        self.colors.bindings()
    }

    /// The binding registered for exactly `category`, without fallback.
    #[must_use]
    pub fn binding(&self, category: &Category) -> Option<&MacroBinding> {
        self.index.get(category).map(|&i| &self.bindings[i].1)
    }

    /// Nearest ancestor of `category` (itself included) that has a binding.
    pub fn resolve(&self, category: &Category) -> Result<(&Category, &MacroBinding)> {
        let i = self.resolve_index(category)?;
        let (cat, binding) = &self.bindings[i];
        Ok((cat, binding))
    }

    fn resolve_index(&self, category: &Category) -> Result<usize> {
        category
            .ancestors()
            .find_map(|path| self.index.get(path).copied())
            .ok_or_else(|| Error::Taxonomy {
                category: category.clone(),
            })
    }

    /// Colour and macro definitions to include once per document.
    #[must_use]
    pub fn style_defs(&self) -> String {
        let mut lines = vec![r"\setupcolor[hex]".to_string()];
        for color in self.colors.bindings() {
            lines.push(format!(r"\definecolor[{}][h={}]", color.name, color.value));
        }
        for (_, b) in &self.bindings {
            lines.push(format!("\\def{}#1{{{}{{#1}}{}}}", b.command, b.prefix, b.suffix));
        }
        lines.join("\n")
    }

    /// Render a token stream to `out`.
    ///
    /// Consecutive tokens that resolve to the same binding are merged into
    /// one run before being written. Output is written as runs complete, so
    /// on error whatever was already written stays written.
    pub fn format<I, S, W>(&self, tokens: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: AsRef<str>,
        W: Write + ?Sized,
    {
        self.try_format(tokens.into_iter().map(Ok::<_, Error>), out)
    }

    /// Render a stream of fallible tokens, such as a [`RawTokenReader`].
    ///
    /// On the first `Err` item the pending run is written and the error is
    /// returned; `\stop<codename>` is not written, so a truncated document
    /// stays visibly unterminated.
    ///
    /// [`RawTokenReader`]: crate::raw::RawTokenReader
    pub fn try_format<I, S, E, W>(&self, tokens: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = std::result::Result<(Category, S), E>>,
        S: AsRef<str>,
        E: Into<Error>,
        W: Write + ?Sized,
    {
        writeln!(out, "\\start{}", self.options.codename)?;

        let mut current: Option<usize> = None;
        let mut text = String::new();
        for item in tokens {
            let (category, value) = match item {
                Ok(token) => token,
                Err(e) => {
                    if let Some(prev) = current.filter(|_| !text.is_empty()) {
                        self.write_run(&text, prev, out)?;
                    }
                    return Err(e.into());
                }
            };
            let idx = self.resolve_index(&category)?;
            if current == Some(idx) {
                text.push_str(value.as_ref());
                continue;
            }
            if let Some(prev) = current.filter(|_| !text.is_empty()) {
                self.write_run(&text, prev, out)?;
            }
            text.clear();
            text.push_str(value.as_ref());
            current = Some(idx);
        }
        if let Some(prev) = current.filter(|_| !text.is_empty()) {
            self.write_run(&text, prev, out)?;
        }

        writeln!(out, "\\stop{}", self.options.codename)?;
        Ok(())
    }

    /// Render a token stream into a new string.
    pub fn format_to_string<I, S>(&self, tokens: I) -> Result<String>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: AsRef<str>,
    {
        let mut buf = Vec::new();
        self.format(tokens, &mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write_run<W: Write + ?Sized>(&self, text: &str, idx: usize, out: &mut W) -> io::Result<()> {
        let (category, binding) = &self.bindings[idx];
        tracing::trace!(%category, len = text.len(), "flushing run");
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.write_all(b"\n")?;
            }
            for seg in segments(line) {
                match seg {
                    Segment::Space(ws) => out.write_all(escape(ws).as_bytes())?,
                    Segment::Word(word) => self.write_token(word, binding, out)?,
                }
            }
        }
        Ok(())
    }

    fn write_token<W: Write + ?Sized>(
        &self,
        token: &str,
        binding: &MacroBinding,
        out: &mut W,
    ) -> io::Result<()> {
        write!(
            out,
            "{}{{{}{{{}}} }}{}",
            self.options.escapeopen,
            binding.command,
            escape(token),
            self.options.escapeclose
        )
    }
}
