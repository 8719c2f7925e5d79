//! `RepositoryFilesystem` implementation for `LocalRepositoryFilesystem`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::LocalRepositoryFilesystem;

impl RepositoryFilesystem for LocalRepositoryFilesystem {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.ensure_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.ensure_within_root(&full_path)?;
        // Write through a symlinked target rather than replacing the link itself.
        let is_link =
            fs::symlink_metadata(&full_path).is_ok_and(|meta| meta.file_type().is_symlink());
        let full_path = if is_link { fs::canonicalize(&full_path)? } else { full_path };
        let parent = full_path.parent().unwrap_or(&self.root).to_path_buf();
        fs::create_dir_all(&parent)?;

        // Stage next to the target so the final rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(&parent)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;
        if let Ok(metadata) = fs::metadata(&full_path) {
            fs::set_permissions(staged.path(), metadata.permissions())?;
        }
        staged.persist(&full_path).map_err(|err| AppError::from(err.error))?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.ensure_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
