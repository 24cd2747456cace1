//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::NoteId;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A loaded note arrived for an id the rendering queue does not hold.
    ///
    /// Staleness is filtered before the engine is reached, so this is an
    /// invariant break rather than an expected race.
    #[error("Note {0} is not waiting in the rendering queue")]
    NoteNotQueued(NoteId),

    /// A lifecycle edge was requested from a state that does not have it
    #[error("Invalid transition for note {note_id}: cannot {action} from {from}")]
    InvalidTransition {
        note_id: NoteId,
        from: String,
        action: String,
    },

    /// File does not exist in storage
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Target path is already taken
    #[error("Path already exists: {0}")]
    PathConflict(String),

    /// Path could not be mapped to a storage location
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, missing file, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::FileNotFound(_) | Self::PathConflict(_) | Self::InvalidPath(_) => true,
            Self::NoteNotQueued(_) | Self::InvalidTransition { .. } | Self::StorageError(_) => {
                false
            }
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_expected() {
        assert!(CoreError::FileNotFound("/a.txt".to_string()).is_expected());
    }

    #[test]
    fn invariant_breaks_are_not_expected() {
        assert!(!CoreError::NoteNotQueued(3).is_expected());
        assert!(!CoreError::InvalidTransition {
            note_id: 1,
            from: "Deleted".to_string(),
            action: "mark synced".to_string(),
        }
        .is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::NoteNotQueued(7)).unwrap();
        assert_eq!(json["code"], "NoteNotQueued");
        assert_eq!(json["details"], 7);
    }
}
