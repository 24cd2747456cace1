//!
//! src/command/mod.rs
//! Command 层：副作用描述
//!
//! The reducer never performs I/O. It returns one `Command` per message
//! describing the effect to run next, and the `CommandExecutor` turns that
//! description into tokio tasks whose results come back as messages.
//!

mod executor;

pub use executor::CommandExecutor;

use notes_sync_core::types::RefNote;

/// 待执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 无操作
    None,
    /// 获取文件列表
    RetrieveFileList,
    /// 加载这些笔记的内容，结果带上请求时的列表版本
    LoadNotes {
        notes: Vec<RefNote>,
        file_list_version: u64,
    },
}
