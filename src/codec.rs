//! Composite conversation identifier codec.
//!
//! Group conversations are identified by strings of the form
//! `<creator-handle>-<epoch-seconds>@<domain-suffix>`, for example
//! `5511999999999-1600000000@g.us`. This module pulls the creator handle and
//! the creation epoch back out of them.
//!
//! The epoch is kept as the original string. Changing that to a numeric type
//! changes the export schema.
//!
//! # Example
//!
//! ```
//! use groupmeta::codec;
//!
//! # fn main() -> groupmeta::Result<()> {
//! let id = codec::decode("5511999999999-1600000000@g.us")?;
//! assert_eq!(id.creator, "5511999999999");
//! assert_eq!(id.epoch, "1600000000");
//!
//! assert_eq!(codec::short_id("5511999999999-1600000000@g.us"), "5511999999999-1600000000");
//! # Ok(())
//! # }
//! ```

use chrono::{Local, TimeZone};

use crate::error::{GroupMetaError, Result};

/// Format of `creation.creation_date` in exported records.
pub const CREATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parts decoded from a composite identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedId {
    /// Handle of the account that created the group.
    pub creator: String,
    /// Creation time in epoch seconds, exactly as it appears in the identifier.
    pub epoch: String,
}

/// Splits a composite identifier into creator handle and creation epoch.
///
/// The creator is everything before the first `-`. The epoch is the segment
/// after the last `-`, cut at the first `@`.
///
/// # Errors
///
/// Returns [`GroupMetaError::MalformedIdentifier`] when the identifier has no
/// `-` or the epoch segment is not a decimal number.
pub fn decode(identifier: &str) -> Result<DecodedId> {
    let Some((creator, _)) = identifier.split_once('-') else {
        return Err(GroupMetaError::malformed_identifier(
            identifier,
            "missing '-' separator",
        ));
    };

    // rsplit always yields at least one item
    let tail = identifier.rsplit('-').next().unwrap_or_default();
    let epoch = tail.split('@').next().unwrap_or_default();

    if !is_decimal(epoch) {
        return Err(GroupMetaError::malformed_identifier(
            identifier,
            format!("timestamp segment '{epoch}' is not numeric"),
        ));
    }

    Ok(DecodedId {
        creator: creator.to_string(),
        epoch: epoch.to_string(),
    })
}

/// Returns the identifier truncated at the first `@`.
///
/// Used as the per-group file key and as a blacklist token.
pub fn short_id(identifier: &str) -> &str {
    identifier.split('@').next().unwrap_or(identifier)
}

/// Parses a decoded epoch string as floating-point seconds.
pub fn epoch_seconds(epoch: &str) -> Result<f64> {
    if !is_decimal(epoch) {
        return Err(GroupMetaError::malformed_identifier(
            epoch,
            "timestamp is not numeric",
        ));
    }
    epoch
        .parse::<f64>()
        .map_err(|e| GroupMetaError::malformed_identifier(epoch, e.to_string()))
}

/// Formats an epoch string as a local `YYYY-MM-DD HH:MM:SS` date-time.
///
/// # Errors
///
/// Fails with [`GroupMetaError::MalformedIdentifier`] if the epoch is not
/// numeric or lies outside the range chrono can represent.
pub fn format_local(epoch: &str) -> Result<String> {
    let seconds = epoch_seconds(epoch)?;
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1e9).round() as u32;

    if whole > i64::MAX as f64 {
        return Err(GroupMetaError::malformed_identifier(
            epoch,
            "timestamp out of range",
        ));
    }

    Local
        .timestamp_opt(whole as i64, nanos.min(999_999_999))
        .single()
        .map(|dt| dt.format(CREATION_DATE_FORMAT).to_string())
        .ok_or_else(|| GroupMetaError::malformed_identifier(epoch, "timestamp out of range"))
}

/// ASCII digits with at most one `.` and at least one digit.
fn is_decimal(s: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed() {
        let id = decode("5511999999999-1600000000@g.us").unwrap();
        assert_eq!(id.creator, "5511999999999");
        assert_eq!(id.epoch, "1600000000");
    }

    #[test]
    fn test_decode_uses_first_and_last_dash() {
        let id = decode("abc-def-1234@g.us").unwrap();
        assert_eq!(id.creator, "abc");
        assert_eq!(id.epoch, "1234");
    }

    #[test]
    fn test_decode_without_suffix() {
        let id = decode("42-1600000000").unwrap();
        assert_eq!(id.creator, "42");
        assert_eq!(id.epoch, "1600000000");
    }

    #[test]
    fn test_decode_keeps_epoch_verbatim() {
        let id = decode("42-0001600000000@g.us").unwrap();
        assert_eq!(id.epoch, "0001600000000");

        let id = decode("42-1600000000.5@g.us").unwrap();
        assert_eq!(id.epoch, "1600000000.5");
    }

    #[test]
    fn test_decode_missing_dash() {
        let err = decode("nodash@suffix").unwrap_err();
        assert!(err.is_malformed_identifier());
        assert!(err.to_string().contains("nodash@suffix"));
    }

    #[test]
    fn test_decode_non_numeric_epoch() {
        assert!(decode("123-abc@g.us").unwrap_err().is_malformed_identifier());
        assert!(decode("123-@g.us").unwrap_err().is_malformed_identifier());
        assert!(decode("123-1e9@g.us").unwrap_err().is_malformed_identifier());
        assert!(decode("123-1.2.3@g.us").unwrap_err().is_malformed_identifier());
        assert!(decode("123-NaN@g.us").unwrap_err().is_malformed_identifier());
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("5511-1600000000@g.us"), "5511-1600000000");
        assert_eq!(short_id("no-suffix"), "no-suffix");
        assert_eq!(short_id("a@b@c"), "a");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_epoch_seconds() {
        assert!((epoch_seconds("1600000000").unwrap() - 1_600_000_000.0).abs() < f64::EPSILON);
        assert!((epoch_seconds("1.5").unwrap() - 1.5).abs() < f64::EPSILON);
        assert!(epoch_seconds("-5").is_err());
    }

    #[test]
    fn test_format_local_matches_chrono() {
        let expected = Local
            .timestamp_opt(1_600_000_000, 0)
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(format_local("1600000000").unwrap(), expected);
    }

    #[test]
    fn test_format_local_shape() {
        let formatted = format_local("0").unwrap();
        assert_eq!(formatted.len(), "1970-01-01 00:00:00".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
    }

    #[test]
    fn test_format_local_out_of_range() {
        let err = format_local("99999999999999999999999").unwrap_err();
        assert!(err.is_malformed_identifier());
    }
}
