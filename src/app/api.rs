//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::filesystem::LocalRepositoryFilesystem;
use crate::app::{
    AppContext,
    commands::{configure, links},
};

pub use crate::app::commands::configure::{ConfigureOptions, ConfigureOutcome, TargetOutcome};
pub use crate::app::commands::links::LinksOutcome;
pub use crate::domain::{AppError, InjectionTarget, RepositoryIdentity};

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<LocalRepositoryFilesystem> {
    AppContext::new(LocalRepositoryFilesystem::new(path))
}

/// Resolve the repository identity from an explicit value or `GITHUB_REPOSITORY`.
///
/// An explicit value takes precedence.
pub fn resolve_repository(explicit: Option<&str>) -> Result<RepositoryIdentity, AppError> {
    let from_env = std::env::var(crate::domain::paths::REPOSITORY_ENV).ok();
    RepositoryIdentity::from_optional(explicit.or(from_env.as_deref()))
}

// =============================================================================
// Configure Command API
// =============================================================================

/// Inject `config.txt` parameters and rewrite README links in the current directory.
pub fn configure(repository: Option<&str>) -> Result<ConfigureOutcome, AppError> {
    let repository = resolve_repository(repository)?;
    configure_at(
        std::env::current_dir()?,
        Path::new(crate::domain::paths::CONFIG_FILE),
        &repository,
    )
}

/// Inject parameters from `config` (relative to `root`) and rewrite README links.
pub fn configure_at(
    root: impl Into<PathBuf>,
    config: &Path,
    repository: &RepositoryIdentity,
) -> Result<ConfigureOutcome, AppError> {
    let config_path = config
        .to_str()
        .ok_or_else(|| {
            AppError::config_error(format!(
                "Config path contains invalid unicode: {}",
                config.display()
            ))
        })?
        .to_string();

    let ctx = create_context(root.into());
    let options = ConfigureOptions { config_path, repository: repository.clone() };
    configure::execute(&ctx, &options)
}

// =============================================================================
// Links Command API
// =============================================================================

/// Rewrite README links in the current directory.
pub fn links(repository: Option<&str>) -> Result<LinksOutcome, AppError> {
    let repository = resolve_repository(repository)?;
    links_at(std::env::current_dir()?, &repository)
}

/// Rewrite README links under `root`.
pub fn links_at(
    root: impl Into<PathBuf>,
    repository: &RepositoryIdentity,
) -> Result<LinksOutcome, AppError> {
    let ctx = create_context(root.into());
    links::execute(&ctx, repository)
}
