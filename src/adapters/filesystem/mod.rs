//! Local-disk `RepositoryFilesystem`.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Repository files on local disk, confined to `root`.
#[derive(Debug, Clone)]
pub struct LocalRepositoryFilesystem {
    root: PathBuf,
}

impl LocalRepositoryFilesystem {
    /// A relative `root` is anchored at the current directory.
    pub fn new(root: PathBuf) -> Self {
        let root = std::path::absolute(&root).unwrap_or(root);
        Self { root }
    }

    /// Reject paths that leave the root once `.` and `..` are folded away.
    fn ensure_within_root(&self, path: &Path) -> Result<(), AppError> {
        if lexical_normalize(path).starts_with(lexical_normalize(&self.root)) {
            Ok(())
        } else {
            Err(AppError::PathTraversal(path.display().to_string()))
        }
    }
}

/// Fold `.` and `..` without touching the filesystem, so missing
/// intermediate directories cannot hide an escape.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
