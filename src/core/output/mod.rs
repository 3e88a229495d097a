//! Export writers.
//!
//! - [`ExportWriter`] - per-group JSON files plus the daily JSONL aggregate
//! - [`append_error`] - the flat error log written when a run fails
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> groupmeta::Result<()> {
//! use chrono::Local;
//! use groupmeta::core::assembler::assemble;
//! use groupmeta::core::models::Conversation;
//! use groupmeta::core::output::{ExportPaths, ExportWriter};
//!
//! let paths = ExportPaths::for_date("data", Local::now().date_naive());
//! let mut writer = ExportWriter::open(paths)?;
//!
//! let record = assemble(&Conversation::group("5511-1600000000@g.us", "Team"), &[])?;
//! writer.write(&record)?;
//! # Ok(())
//! # }
//! ```

mod error_log;
mod export_writer;

pub use error_log::{append_error, error_line};
pub use export_writer::{
    ExportPaths, ExportWriter, GROUP_DIR_NAME, GROUP_FILE_PREFIX, to_json_line,
};
