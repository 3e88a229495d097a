//! Core pipeline pieces for groupmeta.
//!
//! This module contains:
//! - [`models`] - Conversations, participants and the exported [`GroupRecord`]
//! - [`filter`] - Which conversations get collected ([`Blacklist`])
//! - [`assembler`] - Building a [`GroupRecord`] from collaborator data
//! - [`output`] - Per-group and aggregate writers, plus the error log

pub mod assembler;
pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use assembler::assemble;
pub use filter::{Blacklist, Exclusion};
pub use models::{Conversation, Creation, GroupRecord, Participant, ParticipantRaw};
pub use output::{ExportPaths, ExportWriter};
