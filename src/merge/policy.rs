//! Conflict policies: what to do when the target language already has a value.

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// Policy applied when a key already has a value for the target language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep the existing value.
    #[default]
    Skip,
    /// Overwrite the existing value.
    Replace,
}

/// How `replace` counts a key whose existing text equals the incoming text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SameValue {
    /// Leave the entry untouched and count it as skipped.
    #[default]
    Skip,
    /// Rewrite the entry and count it as updated.
    Update,
}

/// Decision for a key whose target language is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Keep,
    Overwrite,
}

#[enum_dispatch]
pub trait ResolveConflict {
    /// `existing` is the current text (`stringUnit.value` or a bare
    /// `value`), `None` when the localization has no readable text.
    fn resolve(&self, existing: Option<&str>, incoming: &str) -> Resolution;
}

#[derive(Debug, Clone, Copy)]
pub struct KeepExisting;

impl ResolveConflict for KeepExisting {
    fn resolve(&self, _existing: Option<&str>, _incoming: &str) -> Resolution {
        Resolution::Keep
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Overwrite {
    pub same_value: SameValue,
}

impl ResolveConflict for Overwrite {
    fn resolve(&self, existing: Option<&str>, incoming: &str) -> Resolution {
        match (existing, self.same_value) {
            (Some(current), SameValue::Skip) if current == incoming => Resolution::Keep,
            _ => Resolution::Overwrite,
        }
    }
}

/// Strategy selected from a [`ConflictPolicy`].
#[enum_dispatch(ResolveConflict)]
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    KeepExisting,
    Overwrite,
}

impl ConflictPolicy {
    pub fn strategy(self, same_value: SameValue) -> Strategy {
        match self {
            ConflictPolicy::Skip => KeepExisting.into(),
            ConflictPolicy::Replace => Overwrite { same_value }.into(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConflictPolicy::Skip => "skip",
            ConflictPolicy::Replace => "replace",
        }
    }
}
