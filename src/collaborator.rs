//! The session layer the collector drives.
//!
//! A [`Collaborator`] logs into the messaging client, keeps its profile for
//! the next run, and lists conversations and their members. The collector
//! never looks behind this trait, so tests can plug in a fake and the binary
//! can replay a snapshot (see [`sources`](crate::sources)).
//!
//! Implementations report failures as
//! [`GroupMetaError::Collaborator`](crate::GroupMetaError::Collaborator).
//!
//! # Example
//!
//! ```rust
//! use groupmeta::collaborator::Collaborator;
//! use groupmeta::core::models::{Conversation, ParticipantRaw};
//! use groupmeta::Result;
//!
//! struct Fixed(Vec<Conversation>);
//!
//! impl Collaborator for Fixed {
//!     fn wait_for_login(&mut self) -> Result<()> { Ok(()) }
//!     fn persist_session_profile(&mut self) -> Result<()> { Ok(()) }
//!     fn list_conversations(&mut self) -> Result<Vec<Conversation>> { Ok(self.0.clone()) }
//!     fn list_participants(&mut self, _id: &str) -> Result<Vec<ParticipantRaw>> { Ok(vec![]) }
//!     fn close_session(&mut self) -> Result<()> { Ok(()) }
//! }
//! ```

use crate::core::models::{Conversation, ParticipantRaw};
use crate::error::Result;

/// Operations the collector consumes from the session layer.
pub trait Collaborator {
    /// Blocks until the account is authenticated.
    fn wait_for_login(&mut self) -> Result<()>;

    /// Saves the session profile so the next run can skip login.
    fn persist_session_profile(&mut self) -> Result<()>;

    /// Every conversation visible to the account, direct and group.
    fn list_conversations(&mut self) -> Result<Vec<Conversation>>;

    /// Members of one conversation, in the order the client reports them.
    fn list_participants(&mut self, conversation_id: &str) -> Result<Vec<ParticipantRaw>>;

    /// Ends the session. Called exactly once per run, on every exit path.
    fn close_session(&mut self) -> Result<()>;

    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str {
        "collaborator"
    }
}
