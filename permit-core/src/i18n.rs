//! Translated strings looked up by dotted key.
//!
//! Locale files are nested JSON objects. Leaves are strings or arrays of
//! strings; `{{name}}` placeholders are filled by [`Translations::t_with`].
//! Missing keys render as the key itself so gaps are visible on the page.

use crate::error::DocumentError;
use serde_json::Value;
use std::rc::Rc;

/// Embedded English locale.
pub static EN_LOCALE: &str = include_str!("../locales/en.json");

/// Read-only translation table, cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct Translations {
    root: Rc<Value>,
}

impl Translations {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_str(json)?;
        if !root.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(Self {
            root: Rc::new(root),
        })
    }

    /// The built-in English strings.
    pub fn english() -> Result<Self, DocumentError> {
        Self::from_json(EN_LOCALE)
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(self.root.as_ref(), |node, part| node.get(part))
    }

    /// Translated string for `key`, or the key itself if missing.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(s)) => s.clone(),
            _ => {
                log::warn!("missing translation for {}", key);
                key.to_string()
            }
        }
    }

    /// Like [`t`](Self::t), replacing `{{name}}` placeholders from `args`.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
    }

    /// String array for `key`; empty if missing or not an array.
    pub fn t_list(&self, key: &str) -> Vec<String> {
        match self.lookup(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => {
                log::warn!("missing translation list for {}", key);
                Vec::new()
            }
        }
    }
}
