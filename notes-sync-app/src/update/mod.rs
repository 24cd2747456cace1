//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! `update` is the orchestrator: given the current model and one message it
//! mutates the model and returns the single `Command` to run next. It never
//! blocks and never performs I/O, so the same inputs always produce the same
//! model and command.
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod listing;        // 文件列表消息处理
//!         mod content;        // 笔记内容消息处理
//!         mod template;       // 模板笔记消息处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 过期结果（stale results）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     Each `RetrieveFileListSuccess` starts a new listing version. In-flight
//!     loads of the old listing are not cancelled; when their results arrive
//!     tagged with the old version they are dropped at the door, leaving the
//!     model untouched.
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 错误
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     Expected conditions (stale results, unknown messages, storage
//!     failures) are handled here and yield `Command::None`. Only a broken
//!     engine invariant, such as a current-version result for a note that is
//!     not queued, comes back as `Err`.
//! ```
//!

mod content;
mod listing;
mod template;

use notes_sync_core::CoreResult;

use crate::command::Command;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态，返回下一步要执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> CoreResult<Command> {
    match msg {
        AppMessage::Start | AppMessage::Refresh => {
            app.last_error = None;
            app.set_status("Retrieving notes...");
            Ok(Command::RetrieveFileList)
        }

        AppMessage::RetrieveFileListSuccess { file_list } => {
            Ok(listing::handle_success(app, file_list))
        }

        AppMessage::RetrieveFileListFailure { error } => {
            listing::handle_failure(app, &error);
            Ok(Command::None)
        }

        AppMessage::LoadNextPage => Ok(content::handle_next_page(app)),

        AppMessage::LoadNoteContentSuccess {
            note,
            file_list_version,
        } => {
            content::handle_success(app, note, file_list_version)?;
            Ok(Command::None)
        }

        AppMessage::LoadNoteContentFailure {
            note_id,
            file_list_version,
            error,
        } => {
            content::handle_failure(app, note_id, file_list_version, &error);
            Ok(Command::None)
        }

        AppMessage::Template(template_msg) => {
            template::update(app, template_msg);
            Ok(Command::None)
        }

        AppMessage::Quit => {
            app.should_quit = true;
            Ok(Command::None)
        }

        AppMessage::Noop => {
            log::debug!("Ignoring unrecognized message");
            Ok(Command::None)
        }
    }
}
