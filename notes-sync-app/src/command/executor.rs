//! 命令执行器

use std::sync::Arc;

use notes_sync_core::services::{NoteLoadService, ServiceContext};
use notes_sync_core::types::RefNote;
use tokio::sync::mpsc::UnboundedSender;

use super::Command;
use crate::message::AppMessage;

/// Runs commands as background tasks and reports back through `dispatch`.
///
/// Must be used inside a tokio runtime. Results are never sent from within
/// `execute` itself, only from the spawned tasks, so the event loop is not
/// re-entered while it is still handling the message that produced the
/// command.
pub struct CommandExecutor {
    loader: Arc<NoteLoadService>,
    dispatch: UnboundedSender<AppMessage>,
}

impl CommandExecutor {
    pub fn new(ctx: Arc<ServiceContext>, dispatch: UnboundedSender<AppMessage>) -> Self {
        Self {
            loader: Arc::new(NoteLoadService::new(ctx)),
            dispatch,
        }
    }

    /// 执行命令
    pub fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::RetrieveFileList => self.retrieve_file_list(),
            Command::LoadNotes {
                notes,
                file_list_version,
            } => {
                for note in notes {
                    self.load_note(note, file_list_version);
                }
            }
        }
    }

    fn retrieve_file_list(&self) {
        let loader = Arc::clone(&self.loader);
        let dispatch = self.dispatch.clone();

        tokio::spawn(async move {
            let msg = match loader.list_files().await {
                Ok(file_list) => AppMessage::RetrieveFileListSuccess { file_list },
                Err(e) => {
                    log::error!("Failed to retrieve file list: {e}");
                    AppMessage::RetrieveFileListFailure {
                        error: e.to_string(),
                    }
                }
            };
            send(&dispatch, msg);
        });
    }

    fn load_note(&self, note: RefNote, file_list_version: u64) {
        let loader = Arc::clone(&self.loader);
        let dispatch = self.dispatch.clone();

        tokio::spawn(async move {
            let note_id = note.id();
            let path = note.path().to_string();
            let msg = match loader.load(note).await {
                Ok(loaded) => AppMessage::LoadNoteContentSuccess {
                    note: loaded.into(),
                    file_list_version,
                },
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("Failed to load note {note_id} ({path}): {e}");
                    } else {
                        log::error!("Failed to load note {note_id} ({path}): {e}");
                    }
                    AppMessage::LoadNoteContentFailure {
                        note_id,
                        file_list_version,
                        error: e.to_string(),
                    }
                }
            };
            send(&dispatch, msg);
        });
    }
}

fn send(dispatch: &UnboundedSender<AppMessage>, msg: AppMessage) {
    if dispatch.send(msg).is_err() {
        log::debug!("Event loop has stopped, dropping command result");
    }
}
