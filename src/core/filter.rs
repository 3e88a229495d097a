//! Decide which conversations are collected.
//!
//! Direct messages are never collected. Groups are collected unless their
//! normalized title or their short identifier appears in the blacklist.
//!
//! # Example
//!
//! ```
//! use groupmeta::core::filter::Blacklist;
//! use groupmeta::core::models::Conversation;
//!
//! let blacklist = Blacklist::new().with_entry("Family");
//!
//! assert!(blacklist.is_excluded(&Conversation::group("1-2@g.us", " Family ")));
//! assert!(!blacklist.is_excluded(&Conversation::group("1-3@g.us", "Work")));
//! assert!(blacklist.is_excluded(&Conversation::direct("5511@c.us", "Work")));
//! ```

use std::collections::HashSet;

use crate::codec;
use crate::core::models::Conversation;
use crate::normalize::normalize;

/// Why a conversation was left out of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Not a group; always skipped.
    NotGroup,
    /// Title or short id is blacklisted.
    Blacklisted,
}

/// Set of group titles and short ids to skip.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Creates an empty blacklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one title or short id.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entries.insert(entry.into());
        self
    }

    /// Returns `true` if `entry` is blacklisted.
    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is blacklisted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classifies a conversation, returning the reason it is skipped.
    pub fn exclusion(&self, conversation: &Conversation) -> Option<Exclusion> {
        if !conversation.is_group {
            return Some(Exclusion::NotGroup);
        }

        let title = normalize(&conversation.name);
        if self.contains(&title) || self.contains(codec::short_id(&conversation.id)) {
            return Some(Exclusion::Blacklisted);
        }

        None
    }

    /// Returns `true` if the conversation must not be collected.
    pub fn is_excluded(&self, conversation: &Conversation) -> bool {
        self.exclusion(conversation).is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_message_always_excluded() {
        let dm = Conversation::direct("5511999999999@c.us", "Alice");
        assert_eq!(Blacklist::new().exclusion(&dm), Some(Exclusion::NotGroup));

        let blacklist: Blacklist = ["something else"].into_iter().collect();
        assert!(blacklist.is_excluded(&dm));
    }

    #[test]
    fn test_group_not_in_blacklist_retained() {
        let group = Conversation::group("5511-1600000000@g.us", "Team");
        let blacklist: Blacklist = ["Other", "9999-1@g.us"].into_iter().collect();
        assert!(!blacklist.is_excluded(&group));
        assert!(!Blacklist::new().is_excluded(&group));
    }

    #[test]
    fn test_blacklisted_by_normalized_title() {
        let group = Conversation::group("5511-1600000000@g.us", " Team\tSync \r");
        let blacklist = Blacklist::new().with_entry("Team Sync");
        assert_eq!(blacklist.exclusion(&group), Some(Exclusion::Blacklisted));
    }

    #[test]
    fn test_blacklisted_by_short_id() {
        let group = Conversation::group("5511-1600000000@g.us", "Team");
        let blacklist = Blacklist::new().with_entry("5511-1600000000");
        assert!(blacklist.is_excluded(&group));
    }

    #[test]
    fn test_full_id_does_not_match() {
        let group = Conversation::group("5511-1600000000@g.us", "Team");
        let blacklist = Blacklist::new().with_entry("5511-1600000000@g.us");
        assert!(!blacklist.is_excluded(&group));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let group = Conversation::group("5511-1600000000@g.us", "Team");
        let blacklist = Blacklist::new().with_entry("team");
        assert!(!blacklist.is_excluded(&group));
    }

    #[test]
    fn test_len_and_dedup() {
        let blacklist: Blacklist = ["a", "a", "b"].into_iter().collect();
        assert_eq!(blacklist.len(), 2);
        assert!(!blacklist.is_empty());
        assert!(Blacklist::new().is_empty());
    }
}
