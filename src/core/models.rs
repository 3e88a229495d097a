//! Core data models: conversations, participants and the exported record.

use serde::{Deserialize, Serialize};

/// A chat thread as reported by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Composite identifier (`<creator>-<epoch>@<suffix>` for groups)
    pub id: String,
    /// Display name, not yet normalized
    pub name: String,
    /// `false` for direct messages
    #[serde(rename = "isGroup")]
    pub is_group: bool,
    /// Opaque kind tag, exported verbatim
    pub kind: String,
}

impl Conversation {
    /// Creates a group conversation.
    pub fn group(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_group: true,
            kind: "group".to_string(),
        }
    }

    /// Creates a direct-message conversation.
    pub fn direct(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_group: false,
            kind: "chat".to_string(),
        }
    }

    /// Builder-style method to set the kind tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

/// A group member exactly as the session layer returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRaw {
    /// Handle of the member
    pub id: String,
    #[serde(default)]
    pub verified_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub formatted_name: Option<String>,
    #[serde(default)]
    pub is_business: bool,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl ParticipantRaw {
    /// Creates a participant with only a handle.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Builder-style method to set the verified name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.verified_name = Some(name.into());
        self
    }

    /// Builder-style method to set the short name.
    #[must_use]
    pub fn with_short_name(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Builder-style method to set the formatted name.
    #[must_use]
    pub fn with_formatted_name(mut self, name: impl Into<String>) -> Self {
        self.formatted_name = Some(name.into());
        self
    }

    /// Builder-style method to set the business flag.
    #[must_use]
    pub fn with_business(mut self, is_business: bool) -> Self {
        self.is_business = is_business;
        self
    }

    /// Builder-style method to set the profile picture reference.
    #[must_use]
    pub fn with_profile_pic(mut self, pic: impl Into<String>) -> Self {
        self.profile_pic = Some(pic.into());
        self
    }
}

/// A member entry in an exported record.
///
/// Serialized keys keep the historical export names (`nome_formatado`,
/// `number`, `isBusiness`) so existing consumers keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: Option<String>,
    pub short_name: Option<String>,
    #[serde(rename = "nome_formatado")]
    pub formatted_name: Option<String>,
    #[serde(rename = "number")]
    pub id: String,
    #[serde(rename = "isBusiness")]
    pub is_business: bool,
    pub profile_pic: Option<String>,
}

/// Creation date and raw timestamp of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creation {
    /// Local date-time, `YYYY-MM-DD HH:MM:SS`
    pub creation_date: String,
    /// Epoch seconds exactly as found in the group identifier
    pub creation_timestamp: String,
}

/// The unit of export: metadata for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub group_id: String,
    pub creator: String,
    pub kind: String,
    pub creation: Creation,
    pub title: String,
    /// In collaborator order, duplicates kept
    pub members: Vec<Participant>,
}

impl GroupRecord {
    /// The group identifier truncated at `@`.
    pub fn short_id(&self) -> &str {
        crate::codec::short_id(&self.group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_wire_names() {
        let json = r#"{"id":"1-2@g.us","name":"Team","isGroup":true,"kind":"group"}"#;
        let conv: Conversation = serde_json::from_str(json).unwrap();
        assert_eq!(conv, Conversation::group("1-2@g.us", "Team"));
    }

    #[test]
    fn test_participant_raw_defaults() {
        let raw: ParticipantRaw = serde_json::from_str(r#"{"id":"5511"}"#).unwrap();
        assert_eq!(raw, ParticipantRaw::new("5511"));
        assert!(!raw.is_business);
        assert!(raw.profile_pic.is_none());
    }

    #[test]
    fn test_participant_export_keys() {
        let member = Participant {
            name: Some("Alice".into()),
            short_name: None,
            formatted_name: Some("+55 11".into()),
            id: "5511".into(),
            is_business: true,
            profile_pic: None,
        };
        let value = serde_json::to_value(&member).unwrap();
        assert_eq!(value["nome_formatado"], "+55 11");
        assert_eq!(value["number"], "5511");
        assert_eq!(value["isBusiness"], true);
        assert!(value["short_name"].is_null());
        assert!(value["profile_pic"].is_null());
    }
}
