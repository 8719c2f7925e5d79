use crate::ports::RepositoryFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem> {
    filesystem: F,
}

impl<F: RepositoryFilesystem> AppContext<F> {
    /// Create a new application context.
    pub fn new(filesystem: F) -> Self {
        Self { filesystem }
    }

    /// Get a reference to the repository filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
