//! Collector configuration.
//!
//! A [`CollectorConfig`] carries the blacklist and every path a run touches.
//! Values usually come from the command line and can be overridden by a JSON
//! document (a file or an inline string). Each key present in the document
//! replaces the command-line value; keys it does not mention are untouched.
//!
//! # Example
//!
//! ```rust
//! use groupmeta::config::CollectorConfig;
//!
//! # fn main() -> groupmeta::Result<()> {
//! let config = CollectorConfig::new()
//!     .with_blacklist(["Family"])
//!     .merge_json_str(r#"{"group_blacklist": ["Work", "5511-1600000000"]}"#)?;
//!
//! assert_eq!(config.group_blacklist, ["Work", "5511-1600000000"]);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::filter::Blacklist;
use crate::core::output::ExportPaths;
use crate::error::{GroupMetaError, Result};

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Name of the session profile directory inside the output directory.
pub const DEFAULT_PROFILE_DIR_NAME: &str = "profile";

/// File name of the error log inside the output directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "log_grupos.txt";

/// Settings for one collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Group titles or short ids to skip (default: empty)
    pub group_blacklist: Vec<String>,

    /// Root of all exports (default: `data`)
    pub output_dir: PathBuf,

    /// Session profile directory; `<output_dir>/profile` when unset
    pub profile_dir: Option<PathBuf>,

    /// Error log; `<output_dir>/log_grupos.txt` when unset
    pub log_file: Option<PathBuf>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            group_blacklist: Vec::new(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            profile_dir: None,
            log_file: None,
        }
    }
}

/// Keys a JSON override document may set.
#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    group_blacklist: Option<Vec<String>>,
    output_dir: Option<PathBuf>,
    profile_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl CollectorConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the blacklist.
    #[must_use]
    pub fn with_blacklist<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_blacklist = entries.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the session profile directory.
    #[must_use]
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(dir.into());
        self
    }

    /// Sets the error log path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Applies overrides from an inline JSON document.
    ///
    /// # Errors
    ///
    /// Fails with [`GroupMetaError::Json`] if the document is not valid JSON
    /// or a known key has the wrong type, and with
    /// [`GroupMetaError::Config`] if it is not a JSON object.
    pub fn merge_json_str(mut self, json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(GroupMetaError::config("override document must be a JSON object"));
        }
        let overrides: ConfigOverrides = serde_json::from_value(value)?;

        if let Some(blacklist) = overrides.group_blacklist {
            self.group_blacklist = blacklist;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(dir) = overrides.profile_dir {
            self.profile_dir = Some(dir);
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        Ok(self)
    }

    /// Applies overrides from a JSON file.
    pub fn merge_json_file(self, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        self.merge_json_str(&content)
    }

    /// Applies the file override if given, otherwise the inline one.
    pub fn merge_overrides(self, file: Option<&Path>, inline: Option<&str>) -> Result<Self> {
        match (file, inline) {
            (Some(path), _) => self.merge_json_file(path),
            (None, Some(json)) => self.merge_json_str(json),
            (None, None) => Ok(self),
        }
    }

    /// The blacklist as a lookup set.
    pub fn blacklist(&self) -> Blacklist {
        self.group_blacklist.iter().cloned().collect()
    }

    /// Export locations for a run on `date`.
    pub fn export_paths(&self, date: NaiveDate) -> ExportPaths {
        ExportPaths::for_date(&self.output_dir, date)
    }

    /// Session profile location.
    pub fn profile_path(&self) -> PathBuf {
        self.profile_dir
            .clone()
            .unwrap_or_else(|| self.output_dir.join(DEFAULT_PROFILE_DIR_NAME))
    }

    /// Error log location.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.output_dir.join(DEFAULT_LOG_FILE_NAME))
    }
}
