use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which input a file-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Translations,
    Catalog,
    Config,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Translations => "translations",
            FileKind::Catalog => "catalog",
            FileKind::Config => "config",
        };
        f.write_str(name)
    }
}

/// Errors that end an invocation.
///
/// Per-key problems (a batch key missing from the catalog) are not errors;
/// they are counted in [`crate::merge::MergeCounts`].
#[derive(Debug, Error)]
pub enum Error {
    /// Arguments are individually valid but cannot be combined.
    #[error("{0}")]
    Usage(String),
    /// The target language is not in the configured language list.
    #[error(
        "language '{language}' is not supported. Supported languages are: {}",
        supported.join(", ")
    )]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },
    /// An input file does not exist.
    #[error("{kind} file not found: {}", path.display())]
    FileNotFound { kind: FileKind, path: PathBuf },
    /// An input file exists but its content is not usable.
    #[error("invalid {kind} file {}: {reason}", path.display())]
    MalformedInput {
        kind: FileKind,
        path: PathBuf,
        reason: String,
    },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Backup, temporary write or atomic replace failed.
    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
