//! The string catalog document.
//!
//! A catalog is an `.xcstrings` JSON file:
//!
//! ```text
//! {
//!   "sourceLanguage": "en",
//!   "strings": {
//!     "<key>": {
//!       "localizations": {
//!         "<lang>": { "stringUnit": { "state": "translated", "value": "..." } }
//!       }
//!     }
//!   },
//!   "version": "1.0"
//! }
//! ```
//!
//! Everything outside `strings` is carried through untouched and in its
//! original order.

pub mod entry;
pub mod store;

use std::{fs, io, path::Path};

use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

pub use entry::{LocalizedValue, StringEntry, StringEntryMut, TranslationState};

use crate::error::{Error, FileKind, Result};

const STRINGS_FIELD: &str = "strings";

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Top-level fields. `strings` holds a placeholder at its original
    /// position; the real map lives in `strings`.
    document: Map<String, Value>,
    strings: Map<String, Value>,
}

impl Catalog {
    /// Build a catalog holding only the given string entries.
    pub fn from_strings(strings: Map<String, Value>) -> Self {
        let mut document = Map::new();
        document.insert(STRINGS_FIELD.to_string(), Value::Null);
        Self { document, strings }
    }

    /// Parse catalog content. The error is a human-readable reason.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
        let Value::Object(mut document) = value else {
            return Err("root of the catalog must be an object".to_string());
        };

        let strings = match document.get_mut(STRINGS_FIELD) {
            Some(slot) => match slot.take() {
                Value::Object(strings) => strings,
                _ => return Err("\"strings\" must be an object".to_string()),
            },
            None => return Err("missing \"strings\" object".to_string()),
        };

        if let Some((key, _)) = strings.iter().find(|(_, entry)| !entry.is_object()) {
            return Err(format!("entry \"{}\" must be an object", key));
        }

        Ok(Self { document, strings })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound {
                kind: FileKind::Catalog,
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => Error::MalformedInput {
                kind: FileKind::Catalog,
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".to_string(),
            },
            _ => Error::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::parse(&content).map_err(|reason| Error::MalformedInput {
            kind: FileKind::Catalog,
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Serialize and atomically replace `path`.
    ///
    /// Output uses 2-space indentation, literal non-ASCII text and a
    /// trailing newline.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_json().map_err(|err| Error::WriteFailure {
            path: path.to_path_buf(),
            source: io::Error::other(err),
        })?;
        store::write_atomic(path, format!("{}\n", content).as_bytes())
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The catalog's declared source language, if any.
    pub fn source_language(&self) -> Option<&str> {
        self.document.get("sourceLanguage").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }

    pub fn entry(&self, key: &str) -> Option<StringEntry<'_>> {
        self.strings
            .get(key)
            .and_then(Value::as_object)
            .map(StringEntry::new)
    }

    pub fn entry_mut(&mut self, key: &str) -> Option<StringEntryMut<'_>> {
        self.strings
            .get_mut(key)
            .and_then(Value::as_object_mut)
            .map(StringEntryMut::new)
    }

    /// All entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, StringEntry<'_>)> {
        self.strings.iter().filter_map(|(key, value)| {
            value
                .as_object()
                .map(|fields| (key.as_str(), StringEntry::new(fields)))
        })
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.document.len()))?;
        for (key, value) in &self.document {
            if key == STRINGS_FIELD {
                map.serialize_entry(key, &self.strings)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
