//! 笔记内容更新逻辑

use notes_sync_core::types::{Note, NoteId};
use notes_sync_core::{CoreResult, FileListRetrieved};

use crate::command::Command;
use crate::model::App;

/// Shift the next page, if any, for loading.
///
/// Always takes at least one note, so repeated requests drain the listing.
pub fn handle_next_page(app: &mut App) -> Command {
    let page_size = app.page_size.max(1);
    let Some(retrieved) = app.pagination.as_retrieved_mut() else {
        log::debug!("Next page requested before a file list arrived");
        return Command::None;
    };
    if !retrieved.has_more_pages() {
        return Command::None;
    }

    let notes = retrieved.shift_notes_to_load_for_next_page(page_size);
    Command::LoadNotes {
        notes,
        file_list_version: retrieved.file_list_version(),
    }
}

/// Hand a loaded note to the engine unless it belongs to a superseded listing.
pub fn handle_success(app: &mut App, note: Note, file_list_version: u64) -> CoreResult<()> {
    let Some(retrieved) = current_listing(app, note.id(), file_list_version) else {
        return Ok(());
    };
    retrieved.handle_loaded_note(note)?;
    Ok(())
}

/// The note stays queued (and so do the notes behind it); the error is surfaced.
pub fn handle_failure(app: &mut App, note_id: NoteId, file_list_version: u64, error: &str) {
    if current_listing(app, note_id, file_list_version).is_none() {
        return;
    }
    log::warn!("Note {note_id} could not be loaded: {error}");
    app.set_status(format!("Could not load a note: {error}"));
    app.last_error = Some(error.to_string());
}

/// The current listing, if `file_list_version` still refers to it.
fn current_listing(
    app: &mut App,
    note_id: NoteId,
    file_list_version: u64,
) -> Option<&mut FileListRetrieved> {
    match app.pagination.as_retrieved_mut() {
        Some(retrieved) if retrieved.file_list_version() == file_list_version => Some(retrieved),
        Some(retrieved) => {
            log::debug!(
                "Discarding stale result for note {note_id} (v{file_list_version}, current v{})",
                retrieved.file_list_version()
            );
            None
        }
        None => {
            log::debug!("Discarding result for note {note_id}: no file list yet");
            None
        }
    }
}
