//! Merging a translation batch into a catalog.
//!
//! The catalog's key set is authoritative: batch keys it does not contain
//! are reported as not found and never inserted. Every write produces a
//! `stringUnit` localization with state `translated`.

mod policy;

use std::ops::AddAssign;

pub use policy::{ConflictPolicy, ResolveConflict, Resolution, SameValue, Strategy};

use crate::batch::TranslationBatch;
use crate::catalog::{Catalog, LocalizedValue};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub policy: ConflictPolicy,
    pub same_value: SameValue,
}

/// What happened to one batch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Added,
    Updated,
    Skipped,
    NotFound,
}

impl KeyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyOutcome::Added => "added",
            KeyOutcome::Updated => "updated",
            KeyOutcome::Skipped => "skipped",
            KeyOutcome::NotFound => "not found",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeCounts {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    pub not_found: usize,
}

impl MergeCounts {
    pub fn record(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::Added => self.added += 1,
            KeyOutcome::Updated => self.updated += 1,
            KeyOutcome::Skipped => self.skipped += 1,
            KeyOutcome::NotFound => self.not_found += 1,
        }
    }

    /// Number of keys whose value was written.
    pub fn changed(&self) -> usize {
        self.added + self.updated
    }

    pub fn total(&self) -> usize {
        self.added + self.updated + self.skipped + self.not_found
    }
}

impl AddAssign for MergeCounts {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.updated += other.updated;
        self.skipped += other.skipped;
        self.not_found += other.not_found;
    }
}

/// Result of merging one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub language: String,
    pub counts: MergeCounts,
    /// Per-key outcomes in batch order.
    pub outcomes: Vec<(String, KeyOutcome)>,
}

impl MergeReport {
    pub fn keys_with(&self, outcome: KeyOutcome) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(move |(_, o)| *o == outcome)
            .map(|(key, _)| key.as_str())
    }
}

/// Merge `batch` into `catalog` for `language`.
///
/// `language` is not validated here; callers restrict it to the supported
/// set.
pub fn merge(
    catalog: &mut Catalog,
    language: &str,
    batch: &TranslationBatch,
    options: MergeOptions,
) -> MergeReport {
    let strategy = options.policy.strategy(options.same_value);
    let mut counts = MergeCounts::default();
    let mut outcomes = Vec::with_capacity(batch.len());

    for (key, text) in batch.iter() {
        let outcome = merge_key(catalog, language, key, text, &strategy);
        counts.record(outcome);
        outcomes.push((key.to_string(), outcome));
    }

    MergeReport {
        language: language.to_string(),
        counts,
        outcomes,
    }
}

fn merge_key(
    catalog: &mut Catalog,
    language: &str,
    key: &str,
    text: &str,
    strategy: &Strategy,
) -> KeyOutcome {
    let Some(mut entry) = catalog.entry_mut(key) else {
        return KeyOutcome::NotFound;
    };

    let view = entry.as_view();
    let outcome = if view.has_localization(language) {
        match strategy.resolve(view.text(language), text) {
            Resolution::Keep => return KeyOutcome::Skipped,
            Resolution::Overwrite => KeyOutcome::Updated,
        }
    } else {
        KeyOutcome::Added
    };

    entry.set_localization(language, &LocalizedValue::translated(text));
    outcome
}
