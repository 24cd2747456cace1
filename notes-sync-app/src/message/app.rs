//! 应用主消息

use notes_sync_core::types::{Note, NoteId};

use super::TemplateMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // ========== 文件列表 ==========
    /// 启动：请求文件列表
    Start,
    /// 刷新：重新请求文件列表
    Refresh,
    /// 文件列表获取成功
    RetrieveFileListSuccess { file_list: Vec<String> },
    /// 文件列表获取失败
    RetrieveFileListFailure { error: String },

    // ========== 笔记内容 ==========
    /// 加载下一页
    LoadNextPage,
    /// 笔记内容加载成功
    LoadNoteContentSuccess { note: Note, file_list_version: u64 },
    /// 笔记内容加载失败
    LoadNoteContentFailure {
        note_id: NoteId,
        file_list_version: u64,
        error: String,
    },

    // ========== 模板笔记 ==========
    Template(TemplateMessage),

    /// 退出
    Quit,
    /// 无操作，用于代替无法识别的输入
    Noop,
}
