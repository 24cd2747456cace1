//! Notes Sync Core Library
//!
//! Provides the platform-independent heart of the notes client, including:
//! - Note lifecycle (Ref / Creating / Synced / Syncing / `OutOfSync` / Deleted)
//! - Order-preserving pagination over a remote file listing
//! - Path/title codec for storage file names
//! - Note loading and syncing services on top of a `FileStorage` trait
//!
//! Storage is abstracted through traits, so the same engine runs against a
//! local directory, an in-memory store, or a remote file API.

pub mod error;
pub mod lifecycle;
pub mod pagination;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use pagination::{FileListRetrieved, PaginationState, DEFAULT_PAGE_SIZE};
pub use services::ServiceContext;
pub use traits::FileStorage;
pub use types::{FileList, Note, NoteId};
