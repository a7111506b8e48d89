//! Result types for async project operations.

use std::path::PathBuf;

use crate::canvas::SavedProject;

/// Result of an async save operation
pub struct SaveResult {
    pub path: PathBuf,
    /// Store revision that was written
    pub revision: u64,
    pub error: Option<String>,
}

/// Result of an async load operation
pub struct LoadResult {
    pub path: PathBuf,
    pub saved_project: Option<SavedProject>,
    pub error: Option<String>,
}
