//! Typed views over a single string entry of the catalog.
//!
//! Entries are kept as raw JSON objects so that fields this tool does not
//! know about (`comment`, `extractionState`, `variations`, ...) survive a
//! load/save cycle unchanged. The views below only interpret the parts the
//! merge needs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const LOCALIZATIONS_FIELD: &str = "localizations";
pub const STRING_UNIT_FIELD: &str = "stringUnit";
pub const SHOULD_TRANSLATE_FIELD: &str = "shouldTranslate";

/// Review status attached to a localized value.
///
/// Unknown states are kept verbatim so a round trip never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TranslationState {
    Translated,
    NeedsReview,
    New,
    Stale,
    Other(String),
}

impl TranslationState {
    pub fn as_str(&self) -> &str {
        match self {
            TranslationState::Translated => "translated",
            TranslationState::NeedsReview => "needs_review",
            TranslationState::New => "new",
            TranslationState::Stale => "stale",
            TranslationState::Other(state) => state,
        }
    }
}

impl From<String> for TranslationState {
    fn from(state: String) -> Self {
        match state.as_str() {
            "translated" => TranslationState::Translated,
            "needs_review" => TranslationState::NeedsReview,
            "new" => TranslationState::New,
            "stale" => TranslationState::Stale,
            _ => TranslationState::Other(state),
        }
    }
}

impl From<TranslationState> for String {
    fn from(state: TranslationState) -> Self {
        match state {
            TranslationState::Other(state) => state,
            known => known.as_str().to_string(),
        }
    }
}

/// One language's translation of a string entry.
///
/// Stored in the catalog as `{"stringUnit": {"state": ..., "value": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedValue {
    pub state: TranslationState,
    pub value: String,
}

impl LocalizedValue {
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            state: TranslationState::Translated,
            value: value.into(),
        }
    }

    /// Read a localization object. Returns `None` for any shape other than a
    /// well-formed `stringUnit` (plural variations, missing fields, ...).
    pub fn from_localization(localization: &Value) -> Option<Self> {
        let unit = localization.get(STRING_UNIT_FIELD)?;
        serde_json::from_value(unit.clone()).ok()
    }

    pub fn to_localization(&self) -> Value {
        json!({
            "stringUnit": {
                "state": self.state.as_str(),
                "value": self.value,
            }
        })
    }
}

/// Read-only view of a string entry.
#[derive(Debug, Clone, Copy)]
pub struct StringEntry<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> StringEntry<'a> {
    pub(crate) fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn localizations(&self) -> Option<&'a Map<String, Value>> {
        self.fields.get(LOCALIZATIONS_FIELD)?.as_object()
    }

    pub fn has_localization(&self, language: &str) -> bool {
        self.localizations()
            .is_some_and(|localizations| localizations.contains_key(language))
    }

    /// The language's value if it has the `stringUnit` shape.
    pub fn localization(&self, language: &str) -> Option<LocalizedValue> {
        LocalizedValue::from_localization(self.localizations()?.get(language)?)
    }

    /// Text of a language's localization, accepting a bare `value` field as
    /// well as the `stringUnit` shape.
    pub fn text(&self, language: &str) -> Option<&'a str> {
        let localization = self.localizations()?.get(language)?;
        localization
            .get(STRING_UNIT_FIELD)
            .and_then(|unit| unit.get("value"))
            .or_else(|| localization.get("value"))
            .and_then(Value::as_str)
    }

    pub fn should_translate(&self) -> bool {
        self.fields
            .get(SHOULD_TRANSLATE_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }

    /// Entries without a localizations map, or explicitly marked
    /// `shouldTranslate: false`, are not counted towards coverage.
    pub fn is_translatable(&self) -> bool {
        self.localizations().is_some() && self.should_translate()
    }
}

/// Mutable view of a string entry.
#[derive(Debug)]
pub struct StringEntryMut<'a> {
    fields: &'a mut Map<String, Value>,
}

impl<'a> StringEntryMut<'a> {
    pub(crate) fn new(fields: &'a mut Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn as_view(&self) -> StringEntry<'_> {
        StringEntry::new(&*self.fields)
    }

    /// Write a language's value, creating the localizations map if needed.
    ///
    /// An existing `stringUnit` is updated in place so sibling fields are
    /// kept; any other shape is replaced by a plain `stringUnit`.
    pub fn set_localization(&mut self, language: &str, value: &LocalizedValue) {
        let localizations = self
            .fields
            .entry(LOCALIZATIONS_FIELD)
            .or_insert_with(|| Value::Object(Map::new()));
        if !localizations.is_object() {
            *localizations = Value::Object(Map::new());
        }

        let Value::Object(localizations) = localizations else {
            return;
        };
        let slot = localizations
            .entry(language)
            .or_insert_with(|| Value::Object(Map::new()));

        if let Some(unit) = slot
            .get_mut(STRING_UNIT_FIELD)
            .and_then(Value::as_object_mut)
        {
            unit.insert("state".to_string(), json!(value.state.as_str()));
            unit.insert("value".to_string(), json!(value.value));
            return;
        }
        *slot = value.to_localization();
    }
}
