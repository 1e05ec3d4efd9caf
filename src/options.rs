//! Formatter configuration.

/// Options controlling the generated ConTeXt markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Name of the `\start<codename>` / `\stop<codename>` environment.
    pub codename: String,
    /// Marker written before every styled token.
    pub escapeopen: String,
    /// Marker written after every styled token.
    pub escapeclose: String,
    /// Namespace prefix for generated macro and colour names.
    pub commandprefix: String,
    /// Built-in style table to use when none is supplied.
    pub style: String,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            codename: "code".into(),
            escapeopen: "/BTEX".into(),
            escapeclose: "/ETEX".into(),
            commandprefix: "PYG".into(),
            style: "default".into(),
        }
    }
}

impl FormatterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn codename(mut self, value: impl Into<String>) -> Self {
        self.codename = value.into();
        self
    }

    #[must_use]
    pub fn escapeopen(mut self, value: impl Into<String>) -> Self {
        self.escapeopen = value.into();
        self
    }

    #[must_use]
    pub fn escapeclose(mut self, value: impl Into<String>) -> Self {
        self.escapeclose = value.into();
        self
    }

    #[must_use]
    pub fn commandprefix(mut self, value: impl Into<String>) -> Self {
        self.commandprefix = value.into();
        self
    }

    #[must_use]
    pub fn style(mut self, value: impl Into<String>) -> Self {
        self.style = value.into();
        self
    }

    /// Set a single option by name. Returns `false` for unknown names.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "codename" => &mut self.codename,
            "escapeopen" => &mut self.escapeopen,
            "escapeclose" => &mut self.escapeclose,
            "commandprefix" => &mut self.commandprefix,
            "style" => &mut self.style,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Build options from `(key, value)` pairs on top of the defaults.
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            if !options.set(key.as_ref(), value) {
                tracing::debug!(option = key.as_ref(), "ignoring unknown formatter option");
            }
        }
        options
    }
}

/// Split a `key=value,key=value` option string into pairs.
///
/// A key without `=` gets the value `"True"`; empty items are skipped.
#[must_use]
pub fn parse_option_list(text: &str) -> Vec<(String, String)> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item.split_once('=') {
            Some((k, v)) => (k.trim().to_string(), v.trim().to_string()),
            None => (item.to_string(), "True".to_string()),
        })
        .collect()
}
