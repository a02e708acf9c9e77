use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, FileKind, Result};
use crate::merge::{ConflictPolicy, MergeOptions, SameValue};

pub const CONFIG_FILE_NAME: &str = ".xcmergerc.json";

pub const DEFAULT_CATALOG: &str = "Localizable.xcstrings";

pub const DEFAULT_LANGUAGES: &[&str] = &[
    "ar", "de", "en", "es", "fa", "fr", "ja", "ko", "nl", "pt-BR", "sv", "sw", "th", "tr",
    "zh-Hans", "zh-Hant",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_catalog")]
    pub catalog: String,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
    #[serde(default)]
    pub policy: ConflictPolicy,
    #[serde(default)]
    pub same_value: SameValue,
    #[serde(default)]
    pub lenient_batches: bool,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_supported_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|code| code.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            source_language: default_source_language(),
            supported_languages: default_supported_languages(),
            policy: ConflictPolicy::default(),
            same_value: SameValue::default(),
            lenient_batches: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The language list must be non-empty, free of duplicates and contain
    /// the source language.
    pub fn validate(&self) -> Result<()> {
        if self.supported_languages.is_empty() {
            return Err(Error::Config(
                "'supportedLanguages' must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for language in &self.supported_languages {
            if !seen.insert(language.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate language in 'supportedLanguages': \"{}\"",
                    language
                )));
            }
        }

        if !seen.contains(self.source_language.as_str()) {
            return Err(Error::Config(format!(
                "'sourceLanguage' \"{}\" is not listed in 'supportedLanguages'",
                self.source_language
            )));
        }

        Ok(())
    }

    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|code| code == language)
    }

    /// Fail with [`Error::UnsupportedLanguage`] unless `language` is listed.
    pub fn ensure_supported(&self, language: &str) -> Result<()> {
        if self.is_supported(language) {
            Ok(())
        } else {
            Err(Error::UnsupportedLanguage {
                language: language.to_string(),
                supported: self.supported_languages.clone(),
            })
        }
    }

    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            policy: self.policy,
            same_value: self.same_value,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config)
        .map_err(|err| Error::Config(format!("failed to generate default config: {}", err)))
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative paths in the config resolve against: the config
    /// file's directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    /// Catalog path: the explicit one if given, otherwise the configured one.
    pub fn catalog_path(&self, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.base_dir.join(&self.config.catalog),
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            let config: Config =
                serde_json::from_str(&content).map_err(|err| Error::MalformedInput {
                    kind: FileKind::Config,
                    path: path.clone(),
                    reason: err.to_string(),
                })?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
