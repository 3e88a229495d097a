//! Per-group and daily aggregate JSON export.
//!
//! Every record is written twice:
//! - `<per_group_dir>/grupos_<short_id>.json` holds one JSON document and is
//!   overwritten on every run, so it always reflects the latest collection.
//! - `all_grupos_<YYYY-MM-DD>.json` is a newline-delimited log opened in
//!   append mode. It is never truncated; running twice on the same day
//!   appends the group twice.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::core::models::GroupRecord;
use crate::error::{ExportTarget, GroupMetaError, Result};

/// File name prefix of standalone group files.
pub const GROUP_FILE_PREFIX: &str = "grupos_";

/// Directory (under the output dir) holding standalone group files.
pub const GROUP_DIR_NAME: &str = "grupos";

/// Where a run writes its exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    /// Directory for standalone group files
    pub per_group_dir: PathBuf,
    /// The day's newline-delimited aggregate
    pub daily_batch_path: PathBuf,
}

impl ExportPaths {
    /// Creates paths from explicit locations.
    pub fn new(
        per_group_dir: impl Into<PathBuf>,
        daily_batch_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            per_group_dir: per_group_dir.into(),
            daily_batch_path: daily_batch_path.into(),
        }
    }

    /// Standard layout under `output_dir` for the given run date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use groupmeta::core::output::ExportPaths;
    /// use std::path::Path;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    /// let paths = ExportPaths::for_date("/data", date);
    /// assert_eq!(paths.per_group_dir, Path::new("/data/grupos"));
    /// assert_eq!(paths.daily_batch_path, Path::new("/data/all_grupos_2024-03-09.json"));
    /// ```
    pub fn for_date(output_dir: impl AsRef<Path>, date: NaiveDate) -> Self {
        let output_dir = output_dir.as_ref();
        let batch_name = format!("all_grupos_{}.json", date.format("%Y-%m-%d"));
        Self {
            per_group_dir: output_dir.join(GROUP_DIR_NAME),
            daily_batch_path: output_dir.join(batch_name),
        }
    }

    /// Path of the standalone file for a group short id.
    ///
    /// Path separators and `%` are percent-encoded, so the file stays inside
    /// `per_group_dir` and distinct ids never share a file.
    pub fn group_file(&self, short_id: &str) -> PathBuf {
        let key = escape_file_key(short_id);
        self.per_group_dir.join(format!("{GROUP_FILE_PREFIX}{key}.json"))
    }
}

fn escape_file_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '%' => escaped.push_str("%25"),
            '/' => escaped.push_str("%2F"),
            '\\' => escaped.push_str("%5C"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Serializes a record as a single JSON line (with trailing newline).
pub fn to_json_line(record: &GroupRecord) -> Result<String> {
    let mut line = serde_json::to_string(record)?;
    line.push('\n');
    Ok(line)
}

/// Writes records for one collection run.
///
/// The aggregate file handle stays open for the lifetime of the writer and
/// is closed when it is dropped.
#[derive(Debug)]
pub struct ExportWriter {
    paths: ExportPaths,
    aggregate: File,
    written: usize,
}

impl ExportWriter {
    /// Creates the per-group directory and opens the aggregate for appending.
    pub fn open(paths: ExportPaths) -> Result<Self> {
        fs::create_dir_all(&paths.per_group_dir).map_err(|e| {
            GroupMetaError::write(ExportTarget::GroupFile, &paths.per_group_dir, e)
        })?;

        if let Some(parent) = paths.daily_batch_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    GroupMetaError::write(ExportTarget::Aggregate, &paths.daily_batch_path, e)
                })?;
            }
        }

        let aggregate = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.daily_batch_path)
            .map_err(|e| {
                GroupMetaError::write(ExportTarget::Aggregate, &paths.daily_batch_path, e)
            })?;

        Ok(Self {
            paths,
            aggregate,
            written: 0,
        })
    }

    /// Writes the standalone group file, then appends to the aggregate.
    ///
    /// If the group file succeeds and the append fails, the group file stays
    /// on disk and the returned error names the aggregate.
    pub fn write(&mut self, record: &GroupRecord) -> Result<()> {
        let line = to_json_line(record)?;

        let group_path = self.paths.group_file(record.short_id());
        fs::write(&group_path, &line)
            .map_err(|e| GroupMetaError::write(ExportTarget::GroupFile, &group_path, e))?;

        self.aggregate
            .write_all(line.as_bytes())
            .and_then(|()| self.aggregate.flush())
            .map_err(|e| {
                GroupMetaError::write(ExportTarget::Aggregate, &self.paths.daily_batch_path, e)
            })?;

        self.written += 1;
        debug!(group = %record.group_id, path = %group_path.display(), "record written");
        Ok(())
    }

    /// Locations this writer exports to.
    pub fn paths(&self) -> &ExportPaths {
        &self.paths
    }

    /// Number of records written by this writer.
    pub fn written(&self) -> usize {
        self.written
    }
}
