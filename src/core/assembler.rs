//! Builds [`GroupRecord`]s from a conversation and its members.

use crate::codec;
use crate::core::models::{Conversation, Creation, GroupRecord, Participant, ParticipantRaw};
use crate::error::Result;
use crate::normalize::normalize;

/// Assembles the export record for one group.
///
/// Creator and creation time come from the conversation identifier. The
/// title and member names are normalized. Members keep their source order
/// and are neither deduplicated nor validated.
///
/// # Errors
///
/// Returns [`GroupMetaError::MalformedIdentifier`](crate::GroupMetaError::MalformedIdentifier)
/// if the conversation id cannot be decoded.
///
/// # Example
///
/// ```
/// use groupmeta::core::assembler::assemble;
/// use groupmeta::core::models::{Conversation, ParticipantRaw};
///
/// # fn main() -> groupmeta::Result<()> {
/// let conv = Conversation::group("5511-1600000000@g.us", " Team\tSync ");
/// let record = assemble(&conv, &[ParticipantRaw::new("5511")])?;
///
/// assert_eq!(record.creator, "5511");
/// assert_eq!(record.title, "Team Sync");
/// assert_eq!(record.creation.creation_timestamp, "1600000000");
/// # Ok(())
/// # }
/// ```
pub fn assemble(
    conversation: &Conversation,
    participants: &[ParticipantRaw],
) -> Result<GroupRecord> {
    let decoded = codec::decode(&conversation.id)?;
    let creation_date = codec::format_local(&decoded.epoch)?;

    Ok(GroupRecord {
        group_id: conversation.id.clone(),
        creator: decoded.creator,
        kind: conversation.kind.clone(),
        creation: Creation {
            creation_date,
            creation_timestamp: decoded.epoch,
        },
        title: normalize(&conversation.name),
        members: participants.iter().map(project_participant).collect(),
    })
}

/// Maps a raw member onto the exported shape.
pub fn project_participant(raw: &ParticipantRaw) -> Participant {
    Participant {
        name: raw.verified_name.as_deref().map(normalize),
        short_name: raw.short_name.as_deref().map(normalize),
        formatted_name: raw.formatted_name.as_deref().map(normalize),
        id: normalize(&raw.id),
        is_business: raw.is_business,
        profile_pic: raw.profile_pic.clone(),
    }
}
