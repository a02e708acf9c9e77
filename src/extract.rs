//! Extraction of untranslated strings into a batch for translators.
//!
//! The output is a [`TranslationBatch`] holding the source-language text of
//! every key the target language lacks. Once translated it is fed back
//! through `apply`.

use crate::batch::TranslationBatch;
use crate::catalog::Catalog;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Key to source text of every missing translation, in catalog order.
    pub missing: TranslationBatch,
    /// Translatable entries with a source localization.
    pub total: usize,
    pub translated: usize,
    /// Keys whose source localization has no readable text.
    pub unreadable: Vec<String>,
}

impl Extraction {
    pub fn missing_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.missing.len() as f64 * 100.0 / self.total as f64
        }
    }
}

/// Default output file name for a language.
pub fn default_output_name(language: &str) -> String {
    format!("missing_{}_translations.json", language)
}

/// Collect the source text of every entry missing `language`.
///
/// Only translatable entries that carry a `source_language` localization
/// are considered.
pub fn missing_translations(catalog: &Catalog, language: &str, source_language: &str) -> Extraction {
    let mut extraction = Extraction::default();

    for (key, entry) in catalog.entries() {
        if !entry.is_translatable() || !entry.has_localization(source_language) {
            continue;
        }
        extraction.total += 1;

        if entry.has_localization(language) {
            extraction.translated += 1;
            continue;
        }
        match entry.text(source_language) {
            Some(text) => extraction.missing.insert(key, text),
            None => extraction.unreadable.push(key.to_string()),
        }
    }

    extraction
}
