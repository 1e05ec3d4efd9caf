use rustc_hash::FxHashMap;

use super::entry::StyleEntry;
use crate::category::{Category, standard_types};
use crate::error::Result;

/// Insertion-ordered mapping from category to resolved style.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    entries: Vec<(Category, StyleEntry)>,
    index: FxHashMap<Category, usize>,
}

impl StyleTable {
    /// An empty table; categories are added verbatim with [`insert`](Self::insert).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `category`. Replacing keeps the original
    /// position.
    pub fn insert(&mut self, category: Category, entry: StyleEntry) {
        match self.index.get(&category) {
            Some(&i) => self.entries[i].1 = entry,
            None => {
                self.index.insert(category.clone(), self.entries.len());
                self.entries.push((category, entry));
            }
        }
    }

    /// Chaining form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, category: Category, entry: StyleEntry) -> Self {
        self.insert(category, entry);
        self
    }

    #[must_use]
    pub fn get(&self, category: &Category) -> Option<&StyleEntry> {
        self.index.get(category).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.index.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &StyleEntry)> {
        self.entries.iter().map(|(c, e)| (c, e))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve style definitions into a complete table.
    ///
    /// Definitions are visited in the order given, followed by every standard
    /// category not already defined. Each category is materialised together
    /// with its ancestors, root first, and starts from its parent's resolved
    /// entry (or the root's, with `noinherit`) before its own words apply.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Category, S)>,
        S: Into<String>,
    {
        let mut order: Vec<Category> = Vec::new();
        let mut defs: FxHashMap<Category, String> = FxHashMap::default();
        for (category, def) in definitions {
            if defs.insert(category.clone(), def.into()).is_none() {
                order.push(category);
            }
        }
        for category in standard_types() {
            if !defs.contains_key(&category) {
                defs.insert(category.clone(), String::new());
                order.push(category);
            }
        }

        let mut table = StyleTable::new();
        for category in &order {
            for token in category.lineage() {
                if table.contains(&token) {
                    continue;
                }
                let def = defs.get(&token).map_or("", String::as_str);
                let mut entry = match token.parent() {
                    None => StyleEntry::new(),
                    Some(_) if def.split_whitespace().any(|w| w == "noinherit") => {
                        table.get(&Category::root()).cloned().unwrap_or_default()
                    }
                    Some(parent) => table.get(&parent).cloned().unwrap_or_default(),
                };
                entry.apply(def)?;
                table.insert(token, entry);
            }
        }

        tracing::debug!(
            defined = defs.len(),
            resolved = table.len(),
            "resolved style definitions"
        );
        Ok(table)
    }

    /// Parse a JSON object of `"Category": "definition"` pairs, keeping
    /// document order, and resolve it with [`from_definitions`](Self::from_definitions).
    pub fn from_json(text: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
        let mut definitions = Vec::with_capacity(map.len());
        for (name, value) in map {
            let def: Option<String> = serde_json::from_value(value)?;
            definitions.push((Category::parse(&name)?, def.unwrap_or_default()));
        }
        Self::from_definitions(definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::STANDARD_TYPES;
    use crate::error::Error;

    fn cat(name: &str) -> Category {
        Category::parse(name).unwrap()
    }

    #[test]
    fn insert_keeps_first_position() {
        let table = StyleTable::new()
            .with(cat("Keyword"), StyleEntry::new())
            .with(cat("Name"), StyleEntry::new())
            .with(cat("Keyword"), StyleEntry::new().bold());
        let order: Vec<_> = table.iter().map(|(c, _)| c.to_string()).collect();
        assert_eq!(order, ["Token.Keyword", "Token.Name"]);
        assert!(table.get(&cat("Keyword")).unwrap().bold);
    }

    #[test]
    fn definitions_inherit_from_parent() {
        let table = StyleTable::from_definitions([
            (cat("Keyword"), "bold #008000"),
            (cat("Keyword.Type"), "nobold #B00040"),
        ])
        .unwrap();

        let kw = table.get(&cat("Keyword")).unwrap();
        assert!(kw.bold);
        assert_eq!(kw.color.as_deref(), Some("008000"));

        let kt = table.get(&cat("Keyword.Type")).unwrap();
        assert!(!kt.bold);
        assert_eq!(kt.color.as_deref(), Some("B00040"));

        // undefined standard child picks up the parent's style
        let kc = table.get(&cat("Keyword.Constant")).unwrap();
        assert_eq!(kc, kw);
    }

    #[test]
    fn noinherit_starts_from_root() {
        let table = StyleTable::from_definitions([
            (cat("Token"), "mono"),
            (cat("Comment"), "italic #888888"),
            (cat("Comment.Special"), "noinherit bold"),
        ])
        .unwrap();
        let cs = table.get(&cat("Comment.Special")).unwrap();
        assert!(cs.mono && cs.bold);
        assert!(!cs.italic);
        assert_eq!(cs.color, None);
    }

    #[test]
    fn ancestors_come_first_in_order() {
        let table = StyleTable::from_definitions([(cat("Name.Custom.Thing"), "bold")]).unwrap();
        let order: Vec<_> = table.iter().take(4).map(|(c, _)| c.to_string()).collect();
        assert_eq!(
            order,
            [
                "Token",
                "Token.Name",
                "Token.Name.Custom",
                "Token.Name.Custom.Thing"
            ]
        );
        assert_eq!(table.len(), STANDARD_TYPES.len() + 2);
    }

    #[test]
    fn bad_color_fails() {
        let err = StyleTable::from_definitions([(cat("Keyword"), "bold #zzzzzz")]).unwrap_err();
        assert!(matches!(err, Error::ColorFormat(_)));
    }

    #[test]
    fn json_keeps_document_order() {
        let table = StyleTable::from_json(
            r##"{ "Name.Zeta": "#111111", "Comment": "italic", "Name.Alpha": null }"##,
        )
        .unwrap();
        let order: Vec<_> = table.iter().take(5).map(|(c, _)| c.to_string()).collect();
        assert_eq!(
            order,
            [
                "Token",
                "Token.Name",
                "Token.Name.Zeta",
                "Token.Comment",
                "Token.Name.Alpha"
            ]
        );
        assert!(table.get(&cat("Comment.Single")).unwrap().italic);
    }

    #[test]
    fn json_rejects_non_string_definition() {
        let err = StyleTable::from_json(r#"{ "Keyword": 3 }"#).unwrap_err();
        assert!(matches!(err, Error::StyleFile(_)));
        assert!(StyleTable::from_json("[1, 2]").is_err());
    }
}
