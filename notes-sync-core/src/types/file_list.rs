//! Remote file listing

use serde::{Deserialize, Serialize};

/// An ordered storage listing tagged with the refresh it came from.
///
/// `version` increases by one every time a fresh listing replaces the
/// previous one, so loads dispatched against an older listing can be told
/// apart from current ones.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    pub paths: Vec<String>,
    pub version: u64,
}

impl FileList {
    #[must_use]
    pub fn new(paths: Vec<String>, version: u64) -> Self {
        Self { paths, version }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
