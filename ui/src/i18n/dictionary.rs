//! Section-keyed translation dictionary.
//!
//! Locale files look like:
//!
//! ```json
//! {
//!   "common": { "common.language": "Language", "submit": "Submit" },
//!   "home":   { "title": "Remote Desktop Generator" }
//! }
//! ```
//!
//! Parsing is lenient below the top level: a section that is not an object is
//! skipped, and only scalar entries are kept (numbers and booleans in their
//! JSON text form). Empty strings are stored but never returned by lookups, so
//! an empty translation falls through to the next tier.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::i18n::LoadError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(src: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(src).map_err(|err| LoadError::Malformed(err.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let Value::Object(root) = value else {
            return Err(LoadError::Malformed(format!(
                "expected an object of sections, found {}",
                json_kind(&value)
            )));
        };

        let mut sections = BTreeMap::new();
        for (name, body) in root {
            let Value::Object(entries) = body else {
                continue;
            };
            let entries = entries
                .into_iter()
                .filter_map(|(key, v)| scalar_text(v).map(|text| (key, text)))
                .collect();
            sections.insert(name, entries);
        }

        Ok(Self { sections })
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, section: &str, key: &str, text: &str) -> Self {
        self.insert(section, key, text);
        self
    }

    pub fn insert(&mut self, section: &str, key: &str, text: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(BTreeMap::is_empty)
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// `(section, key)` pairs in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .flat_map(|(section, keys)| keys.keys().map(move |key| (section.as_str(), key.as_str())))
    }

    /// Non-empty translation stored at `section.key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Text for a `data-i18n` marker: page section, then the common section.
    /// Keys are matched verbatim; a dotted key is not split.
    pub fn lookup_text(&self, section: &str, common: &str, key: &str) -> Option<&str> {
        self.get(section, key).or_else(|| self.get(common, key))
    }

    /// Text for a `data-i18n-placeholder` marker: page section only.
    pub fn lookup_placeholder(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key)
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> Dictionary {
        Dictionary::from_json(r#"{ "common": { "greeting": "Hi" }, "home": { "greeting": "Hello" } }"#)
            .expect("valid dictionary")
    }

    #[test]
    fn section_overrides_common() {
        assert_eq!(greeting().lookup_text("home", "common", "greeting"), Some("Hello"));
    }

    #[test]
    fn absent_section_uses_common() {
        assert_eq!(greeting().lookup_text("other", "common", "greeting"), Some("Hi"));
    }

    #[test]
    fn dotted_key_is_matched_verbatim() {
        let dict = Dictionary::new()
            .with("missing", "key", "X")
            .with("common", "common.language", "Language");
        assert_eq!(dict.lookup_text("home", "common", "missing.key"), None);
        assert_eq!(dict.lookup_text("home", "common", "common.language"), Some("Language"));
    }

    #[test]
    fn empty_translation_falls_through() {
        let dict = Dictionary::new().with("home", "title", "").with("common", "title", "Generator");
        assert_eq!(dict.lookup_text("home", "common", "title"), Some("Generator"));
        assert_eq!(dict.lookup_placeholder("home", "title"), None);
    }

    #[test]
    fn placeholder_ignores_common() {
        assert_eq!(greeting().lookup_placeholder("other", "greeting"), None);
        assert_eq!(greeting().lookup_placeholder("home", "greeting"), Some("Hello"));
    }

    #[test]
    fn lenient_below_top_level() {
        let dict = Dictionary::from_json(
            r#"{ "common": { "port": 21116, "on": true, "gone": null, "list": [1], "ok": "yes" }, "version": 3 }"#,
        )
        .expect("valid dictionary");
        assert_eq!(dict.get("common", "port"), Some("21116"));
        assert_eq!(dict.get("common", "on"), Some("true"));
        assert_eq!(dict.get("common", "gone"), None);
        assert_eq!(dict.get("common", "list"), None);
        assert_eq!(dict.get("common", "ok"), Some("yes"));
        assert_eq!(dict.sections().collect::<Vec<_>>(), vec!["common"]);
    }

    #[test]
    fn non_object_root_is_malformed() {
        assert!(matches!(Dictionary::from_json("[]"), Err(LoadError::Malformed(_))));
        assert!(matches!(Dictionary::from_json("\"en\""), Err(LoadError::Malformed(_))));
        assert!(matches!(Dictionary::from_json("<html>404</html>"), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn empty_object_is_an_empty_dictionary() {
        let dict = Dictionary::from_json("{}").expect("valid dictionary");
        assert!(dict.is_empty());
        assert_eq!(dict.entries().count(), 0);
    }
}
