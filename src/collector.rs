//! Collection orchestrator.
//!
//! A [`Collector`] drives one run against a [`Collaborator`]:
//!
//! ```text
//! Idle ──login──▶ LoggedIn ──list──▶ Collecting ──close──▶ Closed
//!   │                │                   │
//!   └────────────────┴───────────────────┴──error──▶ Failed
//! ```
//!
//! Conversations are handled one at a time in the order the collaborator
//! returns them. The session is closed on every exit path. On failure the
//! remaining conversations are abandoned, records already written stay on
//! disk, and the original error is returned.
//!
//! # Example
//!
//! ```rust,no_run
//! use groupmeta::collector::Collector;
//! use groupmeta::config::CollectorConfig;
//! use groupmeta::sources::SnapshotSource;
//!
//! # fn main() -> groupmeta::Result<()> {
//! let config = CollectorConfig::new().with_blacklist(["Family"]);
//! let mut source = SnapshotSource::open("snapshot.json")
//!     .with_profile_dir(config.profile_path());
//!
//! let stats = Collector::new(config).run(&mut source)?;
//! println!("{} groups written", stats.written);
//! # Ok(())
//! # }
//! ```

use std::fmt;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::collaborator::Collaborator;
use crate::config::CollectorConfig;
use crate::core::assembler::assemble;
use crate::core::filter::{Blacklist, Exclusion};
use crate::core::output::ExportWriter;
use crate::error::Result;

/// Where a [`Collector`] is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    Idle,
    LoggedIn,
    Collecting,
    Closed,
    Failed,
}

impl fmt::Display for CollectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectorState::Idle => write!(f, "idle"),
            CollectorState::LoggedIn => write!(f, "logged in"),
            CollectorState::Collecting => write!(f, "collecting"),
            CollectorState::Closed => write!(f, "closed"),
            CollectorState::Failed => write!(f, "failed"),
        }
    }
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionStats {
    /// Conversations returned by the collaborator
    pub conversations: usize,
    /// Group records written
    pub written: usize,
    /// Direct messages skipped
    pub skipped_direct: usize,
    /// Groups skipped by the blacklist
    pub skipped_blacklisted: usize,
}

impl CollectionStats {
    /// Total conversations left out of the export.
    pub fn skipped(&self) -> usize {
        self.skipped_direct + self.skipped_blacklisted
    }
}

/// Runs the extraction-and-export pipeline.
#[derive(Debug)]
pub struct Collector {
    config: CollectorConfig,
    blacklist: Blacklist,
    run_date: Option<NaiveDate>,
    state: CollectorState,
}

impl Collector {
    pub fn new(config: CollectorConfig) -> Self {
        let blacklist = config.blacklist();
        Self {
            config,
            blacklist,
            run_date: None,
            state: CollectorState::Idle,
        }
    }

    /// Pins the date used to name the daily aggregate (default: today, local).
    #[must_use]
    pub fn with_run_date(mut self, date: NaiveDate) -> Self {
        self.run_date = Some(date);
        self
    }

    pub fn state(&self) -> CollectorState {
        self.state
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Runs one collection against `collaborator`.
    ///
    /// The session is closed exactly once whatever happens. If collection
    /// failed, a failure to close is logged and the collection error is
    /// returned; if collection succeeded, a failure to close is returned.
    pub fn run<C: Collaborator + ?Sized>(
        &mut self,
        collaborator: &mut C,
    ) -> Result<CollectionStats> {
        self.state = CollectorState::Idle;
        let date = self.run_date.unwrap_or_else(|| Local::now().date_naive());
        info!(date = %date, source = collaborator.name(), "collecting group metadata");

        let outcome = self
            .login(collaborator)
            .and_then(|()| self.collect(collaborator, date));
        let closed = collaborator.close_session();

        match (outcome, closed) {
            (Ok(stats), Ok(())) => {
                self.state = CollectorState::Closed;
                info!(
                    written = stats.written,
                    skipped = stats.skipped(),
                    "collection finished"
                );
                Ok(stats)
            }
            (Ok(_), Err(err)) => {
                self.state = CollectorState::Failed;
                Err(err)
            }
            (Err(err), closed) => {
                if let Err(close_err) = closed {
                    warn!(error = %close_err, "failed to close session after error");
                }
                self.state = CollectorState::Failed;
                Err(err)
            }
        }
    }

    fn login<C: Collaborator + ?Sized>(&mut self, collaborator: &mut C) -> Result<()> {
        info!("waiting for login");
        collaborator.wait_for_login()?;
        collaborator.persist_session_profile()?;
        self.state = CollectorState::LoggedIn;
        info!("session ready");
        Ok(())
    }

    fn collect<C: Collaborator + ?Sized>(
        &mut self,
        collaborator: &mut C,
        date: NaiveDate,
    ) -> Result<CollectionStats> {
        let mut writer = ExportWriter::open(self.config.export_paths(date))?;
        info!(
            aggregate = %writer.paths().daily_batch_path.display(),
            blacklist = self.blacklist.len(),
            "export opened"
        );
        if self.blacklist.is_empty() {
            debug!("no blacklist configured");
        }

        let conversations = collaborator.list_conversations()?;
        self.state = CollectorState::Collecting;
        info!(count = conversations.len(), "conversations loaded");

        let mut stats = CollectionStats {
            conversations: conversations.len(),
            ..CollectionStats::default()
        };

        for conversation in &conversations {
            match self.blacklist.exclusion(conversation) {
                Some(Exclusion::NotGroup) => {
                    stats.skipped_direct += 1;
                    continue;
                }
                Some(Exclusion::Blacklisted) => {
                    debug!(group = %conversation.id, "blacklisted, skipping");
                    stats.skipped_blacklisted += 1;
                    continue;
                }
                None => {}
            }

            let participants = collaborator.list_participants(&conversation.id)?;
            let record = assemble(conversation, &participants)?;
            writer.write(&record)?;
            stats.written += 1;
            debug!(
                group = %record.group_id,
                members = record.members.len(),
                "group collected"
            );
        }

        Ok(stats)
    }
}
