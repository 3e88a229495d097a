//! Collaborator backed by a JSON snapshot of the account.
//!
//! The snapshot mirrors what the web client exposes:
//!
//! ```json
//! {
//!   "conversations": [
//!     {
//!       "id": "5511999999999-1600000000@g.us",
//!       "name": "Team Sync",
//!       "isGroup": true,
//!       "kind": "group",
//!       "participants": [
//!         {"id": "5511999999999@c.us", "verified_name": "Ana", "is_business": false}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! "Logging in" loads the file; persisting the profile records which
//! snapshot was used under the profile directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collaborator::Collaborator;
use crate::core::models::{Conversation, ParticipantRaw};
use crate::error::{GroupMetaError, Result};

/// Name of the session marker written into the profile directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Full account snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub conversations: Vec<SnapshotConversation>,
}

/// One conversation and its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConversation {
    #[serde(flatten)]
    pub conversation: Conversation,
    #[serde(default)]
    pub participants: Vec<ParticipantRaw>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add a conversation with its members.
    #[must_use]
    pub fn with_conversation(
        mut self,
        conversation: Conversation,
        participants: Vec<ParticipantRaw>,
    ) -> Self {
        self.conversations.push(SnapshotConversation {
            conversation,
            participants,
        });
        self
    }

    /// Parses a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Serialize)]
struct SessionMarker<'a> {
    source: &'a str,
    conversations: usize,
    loaded_at: String,
}

/// Replays a [`Snapshot`] through the [`Collaborator`] interface.
#[derive(Debug)]
pub struct SnapshotSource {
    path: Option<PathBuf>,
    profile_dir: Option<PathBuf>,
    snapshot: Option<Snapshot>,
    logged_in: bool,
    closed: bool,
}

impl SnapshotSource {
    /// Source that loads `path` when the session logs in.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            profile_dir: None,
            snapshot: None,
            logged_in: false,
            closed: false,
        }
    }

    /// Source over an in-memory snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            path: None,
            profile_dir: None,
            snapshot: Some(snapshot),
            logged_in: false,
            closed: false,
        }
    }

    /// Sets where the session profile is persisted.
    #[must_use]
    pub fn with_profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(dir.into());
        self
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn session(&self, operation: &'static str) -> Result<&Snapshot> {
        if self.closed {
            return Err(GroupMetaError::collaborator(operation, "session is closed"));
        }
        match (&self.snapshot, self.logged_in) {
            (Some(snapshot), true) => Ok(snapshot),
            _ => Err(GroupMetaError::collaborator(operation, "not logged in")),
        }
    }

    fn source_label(&self) -> String {
        self.path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}

fn load(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path).map_err(|e| {
        GroupMetaError::collaborator(
            "wait_for_login",
            format!("cannot read snapshot {}: {e}", path.display()),
        )
    })?;
    Snapshot::from_json(&content).map_err(|e| {
        GroupMetaError::collaborator(
            "wait_for_login",
            format!("invalid snapshot {}: {e}", path.display()),
        )
    })
}

impl Collaborator for SnapshotSource {
    fn wait_for_login(&mut self) -> Result<()> {
        if self.closed {
            return Err(GroupMetaError::collaborator("wait_for_login", "session is closed"));
        }
        if self.snapshot.is_none() {
            if let Some(path) = &self.path {
                self.snapshot = Some(load(path)?);
            }
        }
        if self.snapshot.is_none() {
            return Err(GroupMetaError::collaborator("wait_for_login", "no snapshot to load"));
        }
        self.logged_in = true;
        Ok(())
    }

    fn persist_session_profile(&mut self) -> Result<()> {
        let conversations = self.session("persist_session_profile")?.conversations.len();
        let Some(dir) = &self.profile_dir else {
            return Ok(());
        };

        let source = self.source_label();
        let marker = SessionMarker {
            source: &source,
            conversations,
            loaded_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        let path = dir.join(SESSION_FILE_NAME);
        let written = fs::create_dir_all(dir)
            .and_then(|()| {
                let json = serde_json::to_string_pretty(&marker)?;
                fs::write(&path, json)
            });
        written.map_err(|e| {
            GroupMetaError::collaborator(
                "persist_session_profile",
                format!("cannot write {}: {e}", path.display()),
            )
        })?;

        info!(path = %path.display(), "session profile saved");
        Ok(())
    }

    fn list_conversations(&mut self) -> Result<Vec<Conversation>> {
        let snapshot = self.session("list_conversations")?;
        Ok(snapshot
            .conversations
            .iter()
            .map(|c| c.conversation.clone())
            .collect())
    }

    fn list_participants(&mut self, conversation_id: &str) -> Result<Vec<ParticipantRaw>> {
        let snapshot = self.session("list_participants")?;
        snapshot
            .conversations
            .iter()
            .find(|c| c.conversation.id == conversation_id)
            .map(|c| c.participants.clone())
            .ok_or_else(|| {
                GroupMetaError::collaborator(
                    "list_participants",
                    format!("unknown conversation '{conversation_id}'"),
                )
            })
    }

    fn close_session(&mut self) -> Result<()> {
        if self.closed {
            return Err(GroupMetaError::collaborator("close_session", "session already closed"));
        }
        self.closed = true;
        self.logged_in = false;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "snapshot"
    }
}
