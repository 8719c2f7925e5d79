//! Repository-level filesystem operations.
//!
//! Generic file I/O scoped to the repository root. Which files are read and
//! rewritten is decided by the commands, not by implementations of this port.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level repository filesystem operations.
///
/// All `path` arguments are relative to the repository root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Replace a file's content in full.
    ///
    /// Readers observe either the previous content or the new content, never a
    /// partial write.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Resolve a relative path to an absolute path within the repository root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
