//! 文件列表更新逻辑

use notes_sync_core::types::FileList;
use notes_sync_core::{FileListRetrieved, PaginationState};

use crate::command::Command;
use crate::model::App;

/// Replace whatever was shown with the new listing and request its first pages.
pub fn handle_success(app: &mut App, paths: Vec<String>) -> Command {
    let (version, next_note_id) = match &app.pagination {
        PaginationState::RetrievingFileList => (0, 0),
        PaginationState::FileListRetrieved(previous) => {
            (previous.file_list_version() + 1, previous.last_used_note_id())
        }
    };

    let total = paths.len();
    let mut retrieved = FileListRetrieved::new(FileList::new(paths, version), next_note_id);

    let mut notes = Vec::new();
    for _ in 0..app.preload_pages {
        notes.extend(retrieved.shift_notes_to_load_for_next_page(app.page_size));
    }

    log::info!(
        "File list v{version} retrieved: {total} files, loading {}",
        notes.len()
    );

    app.pagination = PaginationState::FileListRetrieved(retrieved);
    app.last_error = None;
    app.clear_status();

    Command::LoadNotes {
        notes,
        file_list_version: version,
    }
}

/// Keep the current state; surface the error.
pub fn handle_failure(app: &mut App, error: &str) {
    log::error!("Retrieving file list failed: {error}");
    app.set_status(format!("Could not retrieve notes: {error}"));
    app.last_error = Some(error.to_string());
}
