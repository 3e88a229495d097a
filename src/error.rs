//! Unified error types for groupmeta.
//!
//! Every failure in a collection run surfaces as a [`GroupMetaError`]. Nothing
//! is retried internally: errors unwind to the
//! [`Collector`](crate::collector::Collector), which closes the session and
//! hands the error back to the caller.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for groupmeta operations.
///
/// # Example
///
/// ```rust
/// use groupmeta::error::Result;
/// use groupmeta::codec;
///
/// fn creator_of(id: &str) -> Result<String> {
///     Ok(codec::decode(id)?.creator)
/// }
///
/// assert_eq!(creator_of("123-1600000000@g.us").unwrap(), "123");
/// ```
pub type Result<T> = std::result::Result<T, GroupMetaError>;

/// The export target a write error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportTarget {
    /// The standalone `grupos_<short_id>.json` file.
    GroupFile,
    /// The daily newline-delimited aggregate.
    Aggregate,
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::GroupFile => write!(f, "per-group file"),
            ExportTarget::Aggregate => write!(f, "daily aggregate"),
        }
    }
}

/// The error type for all groupmeta operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupMetaError {
    /// A conversation identifier could not be decoded.
    ///
    /// The collaborator is expected to hand out identifiers of the form
    /// `<creator>-<epoch>@<suffix>`; anything else breaks date derivation.
    #[error("Malformed identifier '{identifier}': {reason}")]
    MalformedIdentifier {
        /// The identifier as received
        identifier: String,
        /// What is wrong with it
        reason: String,
    },

    /// The session layer failed (login, listing, participant fetch, close).
    #[error("Collaborator error during {operation}: {message}")]
    Collaborator {
        /// The collaborator operation that failed
        operation: &'static str,
        /// Description reported by the collaborator
        message: String,
    },

    /// Writing one of the export targets failed.
    #[error("Failed to write {target} ({}): {source}", path.display())]
    Write {
        /// Which export target failed
        target: ExportTarget,
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An I/O error outside the export targets.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration override document is unusable.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl GroupMetaError {
    /// Creates a malformed identifier error.
    pub fn malformed_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        GroupMetaError::MalformedIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Creates a collaborator error for the named operation.
    pub fn collaborator(operation: &'static str, message: impl Into<String>) -> Self {
        GroupMetaError::Collaborator {
            operation,
            message: message.into(),
        }
    }

    /// Creates a write error for one of the export targets.
    pub fn write(target: ExportTarget, path: impl Into<PathBuf>, source: io::Error) -> Self {
        GroupMetaError::Write {
            target,
            path: path.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        GroupMetaError::Config {
            message: message.into(),
        }
    }

    /// Returns `true` for any I/O failure, including export writes.
    pub fn is_io(&self) -> bool {
        matches!(self, GroupMetaError::Io(_) | GroupMetaError::Write { .. })
    }

    /// Returns `true` if this is a malformed identifier error.
    pub fn is_malformed_identifier(&self) -> bool {
        matches!(self, GroupMetaError::MalformedIdentifier { .. })
    }

    /// Returns `true` if this is a collaborator error.
    pub fn is_collaborator(&self) -> bool {
        matches!(self, GroupMetaError::Collaborator { .. })
    }

    /// Returns the failing export target for write errors.
    pub fn export_target(&self) -> Option<ExportTarget> {
        match self {
            GroupMetaError::Write { target, .. } => Some(*target),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
