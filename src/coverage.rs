//! Per-language translation coverage of a catalog.

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCoverage {
    pub language: String,
    /// Translatable entries that have a localization for `language`.
    pub translated: usize,
    /// Translatable entries with a source-language localization.
    pub total: usize,
    pub is_source: bool,
}

impl LanguageCoverage {
    /// Percentage of translatable entries covered. The source language is
    /// always complete; an empty catalog counts as 0%.
    pub fn percent(&self) -> f64 {
        if self.is_source {
            100.0
        } else if self.total == 0 {
            0.0
        } else {
            self.translated as f64 * 100.0 / self.total as f64
        }
    }

    pub fn missing(&self) -> usize {
        if self.is_source {
            0
        } else {
            self.total - self.translated
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    /// All string keys, translatable or not.
    pub total_keys: usize,
    pub translatable: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl Coverage {
    /// Languages whose coverage is strictly below `threshold` percent.
    pub fn below(&self, threshold: f64) -> Vec<&LanguageCoverage> {
        self.languages
            .iter()
            .filter(|language| language.percent() < threshold)
            .collect()
    }
}

/// Compute coverage for `languages`, in the given order.
///
/// Only translatable entries with a `source_language` localization count,
/// the same entries [`crate::extract::missing_translations`] looks at.
/// Entries with nothing to translate from cannot be completed.
pub fn coverage(catalog: &Catalog, languages: &[String], source_language: &str) -> Coverage {
    let mut translatable = 0;
    let mut translated = vec![0usize; languages.len()];

    for (_, entry) in catalog.entries() {
        if !entry.is_translatable() || !entry.has_localization(source_language) {
            continue;
        }
        translatable += 1;
        for (count, language) in translated.iter_mut().zip(languages) {
            if entry.has_localization(language) {
                *count += 1;
            }
        }
    }

    let languages = languages
        .iter()
        .zip(translated)
        .map(|(language, translated)| LanguageCoverage {
            language: language.clone(),
            translated,
            total: translatable,
            is_source: language == source_language,
        })
        .collect();

    Coverage {
        total_keys: catalog.len(),
        translatable,
        languages,
    }
}
