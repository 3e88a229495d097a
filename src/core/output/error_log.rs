//! Flat-file log of runs that ended in an error.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;

/// Formats the single diagnostic line for a failed run.
///
/// ```
/// use chrono::{Local, TimeZone};
/// use groupmeta::core::output::error_line;
///
/// let at = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
/// assert_eq!(error_line(at, " boom \n"), "2024-05-01 08:30:00.000000 >> Error:\tboom");
/// ```
pub fn error_line(at: DateTime<Local>, message: &str) -> String {
    format!(
        "{} >> Error:\t{}",
        at.format("%Y-%m-%d %H:%M:%S%.6f"),
        message.trim()
    )
}

/// Appends one timestamped error line to `path`, creating it if needed.
pub fn append_error(path: &Path, at: DateTime<Local>, message: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", error_line(at, message))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_append_error_accumulates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs/log_grupos.txt");
        let at = Local.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();

        append_error(&path, at, "first").unwrap();
        append_error(&path, at, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(">> Error:\tfirst"));
        assert!(lines[1].starts_with("2024-05-01 08:30:00"));
    }
}
