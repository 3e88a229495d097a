//! # groupmeta
//!
//! Collects metadata for every group conversation a messaging account
//! belongs to: title, creator, creation time and member roster.
//!
//! ## Overview
//!
//! A run logs in through a [`Collaborator`](collaborator::Collaborator),
//! lists every conversation, drops direct messages and blacklisted groups,
//! and writes one [`GroupRecord`](core::models::GroupRecord) per remaining
//! group:
//! - `<output>/grupos/grupos_<short_id>.json` — latest record for the group
//! - `<output>/all_grupos_<YYYY-MM-DD>.json` — newline-delimited log of the day
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use groupmeta::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = CollectorConfig::new()
//!         .with_output_dir("data")
//!         .with_blacklist(["Family"]);
//!
//!     let mut source = SnapshotSource::open("account.json");
//!     let stats = Collector::new(config).run(&mut source)?;
//!
//!     println!("{} groups exported", stats.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`codec`] — decoding `<creator>-<epoch>@<suffix>` identifiers
//! - [`normalize`] — text cleanup for titles and names
//! - [`core`] — models, blacklist filter, record assembly, export writers
//! - [`collaborator`] — the session-layer trait
//! - [`sources`] — collaborator implementations ([`SnapshotSource`](sources::SnapshotSource))
//! - [`collector`] — the orchestrator ([`Collector`](collector::Collector))
//! - [`config`] — [`CollectorConfig`](config::CollectorConfig) and JSON overrides
//! - [`error`] — [`GroupMetaError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod collaborator;
pub mod collector;
pub mod config;
pub mod core;
pub mod error;
pub mod normalize;
pub mod sources;

// Re-export the main types at the crate root for convenience
pub use error::{GroupMetaError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use groupmeta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{GroupMetaError, Result};

    pub use crate::collaborator::Collaborator;
    pub use crate::collector::{CollectionStats, Collector, CollectorState};
    pub use crate::config::CollectorConfig;

    pub use crate::core::assembler::assemble;
    pub use crate::core::filter::Blacklist;
    pub use crate::core::models::{Conversation, GroupRecord, Participant, ParticipantRaw};
    pub use crate::core::output::{ExportPaths, ExportWriter};

    pub use crate::sources::{Snapshot, SnapshotSource};
}
