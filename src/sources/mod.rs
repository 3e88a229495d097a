//! Concrete [`Collaborator`](crate::collaborator::Collaborator) implementations.
//!
//! - [`SnapshotSource`] - replays a JSON snapshot of conversations and members

pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotConversation, SnapshotSource};
