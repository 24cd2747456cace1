//!
//! src/backend/mod.rs
//! Backend 层：存储适配器
//!
//! Implementations of `notes-sync-core`'s `FileStorage` trait.
//!
//! ```text
//!     mod local_file_storage;     // 本地目录（tokio::fs）
//! ```
//!

mod local_file_storage;

pub use local_file_storage::LocalFileStorage;
