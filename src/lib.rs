//! xcmerge - translation merging for Xcode string catalogs
//!
//! xcmerge is a CLI tool and library for merging translation files into an
//! `.xcstrings` catalog. Each run loads the catalog, merges one or more
//! `key -> text` batches under a conflict policy, backs the catalog up and
//! replaces it atomically.
//!
//! ## Module Structure
//!
//! - `batch`: Translation batch files (strict and lenient parsing)
//! - `catalog`: Catalog document model and durable persistence
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `coverage`: Per-language translation coverage
//! - `error`: Error taxonomy shared by all operations
//! - `extract`: Untranslated-string extraction for translators
//! - `merge`: The merge operation and conflict policies

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod extract;
pub mod merge;

pub use error::{Error, Result};
