//! Note lifecycle transitions
//!
//! ```text
//!   Ref ──loaded──▶ Synced ◀──synced── Syncing ──failed──▶ OutOfSync
//!                     │                 ▲  ▲  │                │
//!                     └─start_*─────────┘  │  └─deleted─▶ Deleted
//!   CreatingFromTitle ─start_sync──────────┤               │
//!   CreatingFromText  ─start_sync──────────┤◀──restore─────┘
//!                                          └◀──retry── OutOfSync
//! ```
//!
//! Every edge is a method consuming the source state and returning the
//! target state, so an undefined edge (say `Deleted` straight to `Synced`)
//! simply does not type-check. Fields not touched by an edge are carried
//! forward unchanged; `id` never changes.

use crate::types::{
    CreatingFromTextNote, CreatingFromTitleNote, DeletedNote, OutOfSyncNote, RefNote,
    SyncOperation, SyncedNote, SyncingNote,
};
use crate::utils::path_title::path_to_title;

impl RefNote {
    /// Content fetched from storage.
    #[must_use]
    pub fn loaded(self, text: impl Into<String>) -> SyncedNote {
        SyncedNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: text.into(),
        }
    }
}

impl CreatingFromTitleNote {
    /// Persisting under `path` has started; the note starts out empty.
    #[must_use]
    pub fn start_sync(self, path: impl Into<String>) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: path.into(),
            title: self.title,
            text: String::new(),
        }
    }
}

impl CreatingFromTextNote {
    /// Persisting under `path` has started; the draft becomes the text.
    #[must_use]
    pub fn start_sync(self, path: impl Into<String>) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: path.into(),
            title: self.title,
            text: self.draft,
        }
    }
}

impl SyncedNote {
    /// A text write has been issued.
    #[must_use]
    pub fn start_text_update(self, text: impl Into<String>) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: text.into(),
        }
    }

    /// A move to `path` has been issued; the title follows the new path.
    #[must_use]
    pub fn start_rename(self, path: impl Into<String>) -> SyncingNote {
        let path = path.into();
        SyncingNote {
            id: self.id,
            title: path_to_title(&path),
            path,
            text: self.text,
        }
    }

    /// A removal has been issued.
    #[must_use]
    pub fn start_delete(self) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
        }
    }
}

impl SyncingNote {
    /// Storage confirmed the write or rename.
    #[must_use]
    pub fn synced(self) -> SyncedNote {
        SyncedNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
        }
    }

    /// Storage confirmed the removal. Text is kept for undo.
    #[must_use]
    pub fn deleted(self) -> DeletedNote {
        DeletedNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
        }
    }

    /// The in-flight `operation` failed.
    #[must_use]
    pub fn failed(self, operation: SyncOperation, error: impl Into<String>) -> OutOfSyncNote {
        OutOfSyncNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
            operation,
            error: error.into(),
        }
    }
}

impl OutOfSyncNote {
    /// Try the failed operation again; the error is cleared.
    #[must_use]
    pub fn retry(self) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
        }
    }
}

impl DeletedNote {
    /// Undo: the file is being written back.
    #[must_use]
    pub fn restore(self) -> SyncingNote {
        SyncingNote {
            id: self.id,
            path: self.path,
            title: self.title,
            text: self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CoreError;
    use crate::types::{
        CreatingFromTextNote, CreatingFromTitleNote, Note, RefNote, SyncOperation, SyncedNote,
    };

    fn synced(id: u64) -> SyncedNote {
        RefNote::new(id, "/Plan.txt").loaded("step one")
    }

    #[test]
    fn ref_loads_into_synced_keeping_identity() {
        let note = RefNote::new(4, "/work/Plan~~2.txt").loaded("body");
        assert_eq!(note.id(), 4);
        assert_eq!(note.path(), "/work/Plan~~2.txt");
        assert_eq!(note.title(), "Plan");
        assert_eq!(note.text(), "body");
    }

    #[test]
    fn title_draft_settles_with_empty_text() {
        let syncing = CreatingFromTitleNote::new(1, "Ideas").start_sync("/Ideas.txt");
        let note = Note::from(syncing.synced());
        assert_eq!(note.path(), Some("/Ideas.txt"));
        assert_eq!(note.text(), Some(""));
        assert_eq!(note.title(), "Ideas");
    }

    #[test]
    fn text_draft_carries_draft_into_text() {
        let draft = CreatingFromTextNote::new(2, "Ideas\nmore");
        assert_eq!(Note::from(draft.clone()).path(), None);
        assert_eq!(Note::from(draft.clone()).text(), None);

        let syncing = draft.start_sync("/Ideas.txt");
        assert_eq!(syncing.text(), "Ideas\nmore");
        assert_eq!(syncing.title(), "Ideas");
    }

    #[test]
    fn rename_rederives_title() {
        let note = synced(1).start_rename("/Roadmap.txt").synced();
        assert_eq!(note.title(), "Roadmap");
        assert_eq!(note.text(), "step one");
    }

    #[test]
    fn failure_then_retry_clears_error() {
        let failed = synced(1)
            .start_text_update("step two")
            .failed(SyncOperation::Write, "disk full");
        assert_eq!(failed.error(), "disk full");
        assert_eq!(failed.operation(), SyncOperation::Write);
        assert_eq!(failed.text(), "step two");

        let resynced = failed.retry().synced();
        assert_eq!(resynced.text(), "step two");
    }

    #[test]
    fn deleted_restores_through_syncing() {
        let deleted = synced(9).start_delete().deleted();
        assert_eq!(deleted.text(), "step one");

        let restored = deleted.restore().synced();
        assert_eq!(restored.id(), 9);
        assert_eq!(restored.path(), "/Plan.txt");
    }

    #[test]
    fn wrong_state_conversion_reports_invalid_transition() {
        let note = Note::from(synced(3).start_delete().deleted());
        let err = SyncedNote::try_from(note).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTransition {
                note_id: 3,
                from: "Deleted".to_string(),
                action: "treat as synced".to_string(),
            }
        );
    }
}
