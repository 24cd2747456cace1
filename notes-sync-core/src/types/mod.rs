//! 类型定义模块

mod file_list;
mod note;

pub use file_list::FileList;
pub use note::{
    CreatingFromTextNote, CreatingFromTitleNote, DeletedNote, Note, NoteId, OutOfSyncNote,
    RefNote, SyncOperation, SyncedNote, SyncingNote,
};
