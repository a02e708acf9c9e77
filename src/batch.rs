//! Translation batches: `{ "<key>": "<translated text>", ... }` files for a
//! single language.

use std::{collections::HashMap, fs, io, path::Path, sync::LazyLock};

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Error, FileKind, Result};

// `,` directly before a closing `}` or `]`, ignoring whitespace.
static TRAILING_COMMA_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\}").unwrap());
static TRAILING_COMMA_ARRAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*\]").unwrap());

/// Key to translated text for one language, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationBatch {
    entries: Vec<(String, String)>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl TranslationBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a key. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = text,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, text));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Parse strict JSON. The error is a human-readable reason.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    /// Parse JSON, falling back to best-effort repair of hand-edited files:
    /// trailing commas are dropped, then missing outer braces are added.
    ///
    /// The repair is textual, so a string value that itself contains `, }`
    /// would be altered. Only use this for files known to be hand-written.
    pub fn parse_lenient(content: &str) -> std::result::Result<Self, String> {
        let strict_error = match Self::parse(content) {
            Ok(batch) => return Ok(batch),
            Err(reason) => reason,
        };

        let without_commas = strip_trailing_commas(content);
        if let Ok(batch) = Self::parse(&without_commas) {
            return Ok(batch);
        }

        let trimmed = without_commas.trim();
        let mut braced = String::with_capacity(trimmed.len() + 2);
        if !trimmed.starts_with('{') {
            braced.push('{');
        }
        braced.push_str(trimmed);
        if !trimmed.ends_with('}') {
            braced.push('}');
        }
        let braced = strip_trailing_commas(&braced);
        Self::parse(&braced).map_err(|_| strict_error)
    }

    /// Load a batch file. `lenient` enables [`Self::parse_lenient`].
    pub fn load(path: &Path, lenient: bool) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                kind: FileKind::Translations,
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => Error::MalformedInput {
                kind: FileKind::Translations,
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".to_string(),
            },
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let parsed = if lenient {
            Self::parse_lenient(&content)
        } else {
            Self::parse(&content)
        };
        parsed.map_err(|reason| Error::MalformedInput {
            kind: FileKind::Translations,
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Render as a pretty JSON object, the same format [`Self::parse`] reads.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, text)| (key.clone(), Value::String(text.clone())))
            .collect();
        serde_json::to_string_pretty(&Value::Object(map))
    }

    fn from_value(value: Value) -> std::result::Result<Self, String> {
        let Value::Object(map) = value else {
            return Err("expected a JSON object of key/translation pairs".to_string());
        };

        let mut batch = Self::new();
        for (key, value) in map {
            match value {
                Value::String(text) => batch.insert(key, text),
                other => {
                    return Err(format!(
                        "value for \"{}\" must be a string, found {}",
                        key,
                        json_type_name(&other)
                    ));
                }
            }
        }
        Ok(batch)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationBatch {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut batch = Self::new();
        for (key, text) in iter {
            batch.insert(key, text);
        }
        batch
    }
}

fn strip_trailing_commas(content: &str) -> String {
    let content = TRAILING_COMMA_OBJECT.replace_all(content, "}");
    TRAILING_COMMA_ARRAY.replace_all(&content, "]").into_owned()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
