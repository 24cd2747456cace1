//! Order-preserving pagination
//!
//! The remote listing is consumed page by page:
//!
//! ```text
//!   unprocessed files ──shift──▶ rendering queue ──ready prefix──▶ notes
//!   (paths, version)             (Ref / loaded, FIFO)               (visible)
//! ```
//!
//! Content loads finish in any order. A loaded note replaces its `Ref`
//! entry in the queue, and only the longest run of loaded entries at the
//! queue head moves into `notes`. The three containers always partition the
//! listing, and reading them front to back gives the listing order.

mod rendering_queue;
mod state;

pub use rendering_queue::RenderingQueue;
pub use state::{FileListRetrieved, UnprocessedFiles};

/// Notes requested per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Pagination state of the note list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaginationState {
    /// No listing has arrived yet
    #[default]
    RetrievingFileList,
    /// A listing is being paged through
    FileListRetrieved(FileListRetrieved),
}

impl PaginationState {
    /// Listing version, if a listing has been retrieved
    pub fn file_list_version(&self) -> Option<u64> {
        match self {
            Self::RetrievingFileList => None,
            Self::FileListRetrieved(retrieved) => Some(retrieved.file_list_version()),
        }
    }

    pub fn as_retrieved(&self) -> Option<&FileListRetrieved> {
        match self {
            Self::RetrievingFileList => None,
            Self::FileListRetrieved(retrieved) => Some(retrieved),
        }
    }

    pub fn as_retrieved_mut(&mut self) -> Option<&mut FileListRetrieved> {
        match self {
            Self::RetrievingFileList => None,
            Self::FileListRetrieved(retrieved) => Some(retrieved),
        }
    }
}
