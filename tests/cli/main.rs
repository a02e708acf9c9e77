use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod apply_all;
mod extract;
mod stats;

const BIN_NAME: &str = "xcmerge";

pub const CATALOG: &str = "Localizable.xcstrings";

/// `hello` is English only, `bye` already has French, `brand` is marked
/// do-not-translate.
pub const SAMPLE_CATALOG: &str = r#"{
  "sourceLanguage" : "en",
  "strings" : {
    "hello" : {
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "translated", "value" : "Hello" } }
      }
    },
    "bye" : {
      "comment" : "Shown on logout",
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "translated", "value" : "Goodbye" } },
        "fr" : { "stringUnit" : { "state" : "translated", "value" : "Au revoir" } }
      }
    },
    "brand" : {
      "shouldTranslate" : false,
      "localizations" : {
        "en" : { "stringUnit" : { "state" : "translated", "value" : "Acme" } }
      }
    }
  },
  "version" : "1.0"
}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the test directory.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project holding [`SAMPLE_CATALOG`] at the default catalog path.
    pub fn with_catalog() -> Result<Self> {
        Self::with_file(CATALOG, SAMPLE_CATALOG)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn exists(&self, path: &str) -> bool {
        self.project_dir.join(path).exists()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn apply_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("apply");
        cmd
    }

    pub fn apply_all_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("apply-all");
        cmd
    }

    pub fn extract_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("extract");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }

    /// `stringUnit.value` of `key` for `language` in the default catalog.
    pub fn localized(&self, key: &str, language: &str) -> Result<Option<String>> {
        let catalog = self.read_json(CATALOG)?;
        Ok(catalog["strings"][key]["localizations"][language]["stringUnit"]["value"]
            .as_str()
            .map(str::to_string))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
