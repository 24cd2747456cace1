//! Note 类型定义
//!
//! Each lifecycle state is its own struct carrying exactly the fields that
//! exist in that state; `Note` is the closed sum over them. Transitions live
//! in [`crate::lifecycle`] and consume the source value.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::utils::path_title::{path_to_title, title_from_text};

/// Session-unique note identifier, assigned monotonically
pub type NoteId = u64;

/// Known to exist in storage, content not fetched yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefNote {
    pub(crate) id: NoteId,
    pub(crate) path: String,
    pub(crate) title: String,
}

impl RefNote {
    /// Reference a stored file; the title is decoded from the path.
    #[must_use]
    pub fn new(id: NoteId, path: impl Into<String>) -> Self {
        let path = path.into();
        let title = path_to_title(&path);
        Self { id, path, title }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Created client-side from a title, not persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatingFromTitleNote {
    pub(crate) id: NoteId,
    pub(crate) title: String,
}

impl CreatingFromTitleNote {
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Created client-side from a body of text, not persisted yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatingFromTextNote {
    pub(crate) id: NoteId,
    pub(crate) title: String,
    /// Draft body; becomes the note text once a path is settled
    pub(crate) draft: String,
}

impl CreatingFromTextNote {
    /// The title is taken from the first non-empty line of `text`.
    #[must_use]
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        let draft = text.into();
        let title = title_from_text(&draft);
        Self { id, title, draft }
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }
}

macro_rules! stored_note {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $field:ident: $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub(crate) id: NoteId,
            pub(crate) path: String,
            pub(crate) title: String,
            pub(crate) text: String,
            $($(#[$fmeta])* pub(crate) $field: $ty,)*
        }

        impl $name {
            pub fn id(&self) -> NoteId {
                self.id
            }

            pub fn path(&self) -> &str {
                &self.path
            }

            pub fn title(&self) -> &str {
                &self.title
            }

            pub fn text(&self) -> &str {
                &self.text
            }
        }
    };
}

stored_note! {
    /// Path, title and text consistent with storage
    SyncedNote {}
}

stored_note! {
    /// A write, rename or delete is in flight
    SyncingNote {}
}

/// Storage call an out-of-sync note repeats on retry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncOperation {
    /// Create the file; never overwrites (create, restore)
    Create,
    /// Overwrite the file at the note's path (text update, failed rename)
    Write,
    /// Remove the file
    Delete,
}

impl SyncOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Write => "write",
            Self::Delete => "delete",
        }
    }
}

stored_note! {
    /// Last sync attempt failed
    OutOfSyncNote {
        /// The storage call that failed
        operation: SyncOperation,
        /// Description of the failure, shown to the user
        error: String,
    }
}

stored_note! {
    /// Removed from storage, kept around for undo
    DeletedNote {}
}

impl OutOfSyncNote {
    pub fn operation(&self) -> SyncOperation {
        self.operation
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

/// A note in exactly one lifecycle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Note {
    Ref(RefNote),
    CreatingFromTitle(CreatingFromTitleNote),
    CreatingFromText(CreatingFromTextNote),
    Synced(SyncedNote),
    Syncing(SyncingNote),
    OutOfSync(OutOfSyncNote),
    Deleted(DeletedNote),
}

impl Note {
    pub fn id(&self) -> NoteId {
        match self {
            Self::Ref(n) => n.id,
            Self::CreatingFromTitle(n) => n.id,
            Self::CreatingFromText(n) => n.id,
            Self::Synced(n) => n.id,
            Self::Syncing(n) => n.id,
            Self::OutOfSync(n) => n.id,
            Self::Deleted(n) => n.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Ref(n) => &n.title,
            Self::CreatingFromTitle(n) => &n.title,
            Self::CreatingFromText(n) => &n.title,
            Self::Synced(n) => &n.title,
            Self::Syncing(n) => &n.title,
            Self::OutOfSync(n) => &n.title,
            Self::Deleted(n) => &n.title,
        }
    }

    /// Storage path; `None` while the note is still being created
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Ref(n) => Some(&n.path),
            Self::CreatingFromTitle(_) | Self::CreatingFromText(_) => None,
            Self::Synced(n) => Some(&n.path),
            Self::Syncing(n) => Some(&n.path),
            Self::OutOfSync(n) => Some(&n.path),
            Self::Deleted(n) => Some(&n.path),
        }
    }

    /// Note body; `None` until the content has been fetched or persisted
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Ref(_) | Self::CreatingFromTitle(_) | Self::CreatingFromText(_) => None,
            Self::Synced(n) => Some(&n.text),
            Self::Syncing(n) => Some(&n.text),
            Self::OutOfSync(n) => Some(&n.text),
            Self::Deleted(n) => Some(&n.text),
        }
    }

    /// Whether the content is known, i.e. the note may be shown
    pub fn is_loaded(&self) -> bool {
        self.text().is_some()
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Ref(_) => "Ref",
            Self::CreatingFromTitle(_) => "CreatingFromTitle",
            Self::CreatingFromText(_) => "CreatingFromText",
            Self::Synced(_) => "Synced",
            Self::Syncing(_) => "Syncing",
            Self::OutOfSync(_) => "OutOfSync",
            Self::Deleted(_) => "Deleted",
        }
    }
}

macro_rules! note_variant_conversions {
    ($($variant:ident => $ty:ident, $expected:literal;)*) => {
        $(
            impl From<$ty> for Note {
                fn from(note: $ty) -> Self {
                    Self::$variant(note)
                }
            }

            impl TryFrom<Note> for $ty {
                type Error = CoreError;

                fn try_from(note: Note) -> Result<Self, Self::Error> {
                    match note {
                        Note::$variant(inner) => Ok(inner),
                        other => Err(CoreError::InvalidTransition {
                            note_id: other.id(),
                            from: other.state_name().to_string(),
                            action: $expected.to_string(),
                        }),
                    }
                }
            }
        )*
    };
}

note_variant_conversions! {
    Ref => RefNote, "treat as an unloaded reference";
    CreatingFromTitle => CreatingFromTitleNote, "treat as a title draft";
    CreatingFromText => CreatingFromTextNote, "treat as a text draft";
    Synced => SyncedNote, "treat as synced";
    Syncing => SyncingNote, "treat as syncing";
    OutOfSync => OutOfSyncNote, "treat as out of sync";
    Deleted => DeletedNote, "treat as deleted";
}
