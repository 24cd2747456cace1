//! Storage layer abstraction trait definition

mod file_storage;

pub use file_storage::FileStorage;
