//! File-backed rule source.
//!
//! Reads a rule array from a JSON (`.json`) or YAML (`.yaml`/`.yml`) file.
//! A missing file is not an error: the service starts with no rules and every
//! query falls through to the generic fallback.

use crate::models::Rule;
use crate::storage::traits::RuleSource;
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maximum rule file size (8MB).
const MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// On-disk rule file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFileFormat {
    /// JSON array of rules.
    Json,
    /// YAML sequence of rules.
    Yaml,
}

impl RuleFileFormat {
    /// Detects the format from a path's extension. Unknown extensions are
    /// read as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Rule source reading a single file.
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
    format: RuleFileFormat,
}

impl FileRuleSource {
    /// Creates a source for `path`, detecting the format from its extension.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = RuleFileFormat::from_path(&path);
        Self { path, format }
    }

    /// Overrides the detected format.
    #[must_use]
    pub const fn with_format(mut self, format: RuleFileFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file format.
    #[must_use]
    pub const fn format(&self) -> RuleFileFormat {
        self.format
    }

    fn parse(&self, content: &str) -> Result<Vec<Rule>> {
        match self.format {
            RuleFileFormat::Json => {
                serde_json::from_str(content).map_err(|e| Error::OperationFailed {
                    operation: "parse_rules_json".to_string(),
                    cause: format!("{}: {e}", self.path.display()),
                })
            },
            RuleFileFormat::Yaml => {
                serde_yaml_ng::from_str(content).map_err(|e| Error::OperationFailed {
                    operation: "parse_rules_yaml".to_string(),
                    cause: format!("{}: {e}", self.path.display()),
                })
            },
        }
    }
}

impl RuleSource for FileRuleSource {
    fn load_rules(&self) -> Result<Vec<Rule>> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Rule file not found, starting with an empty rule set"
                );
                return Ok(Vec::new());
            },
            Err(e) => {
                return Err(Error::OperationFailed {
                    operation: "read_rules_metadata".to_string(),
                    cause: format!("{}: {e}", self.path.display()),
                });
            },
        };

        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::InvalidInput(format!(
                "Rule file exceeds maximum size of {MAX_FILE_SIZE} bytes: {}",
                self.path.display()
            )));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| Error::OperationFailed {
            operation: "read_rules_file".to_string(),
            cause: format!("{}: {e}", self.path.display()),
        })?;

        let rules = self.parse(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            count = rules.len(),
            "Loaded rules from file"
        );
        Ok(rules)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
