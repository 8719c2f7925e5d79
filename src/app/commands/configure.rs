//! Full catalog configuration: parameter injection followed by README links.
//!
//! Every input is read and every new text computed before the first write, so
//! a missing target or malformed parameter file leaves the repository as it was.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::links::{self, LinksOutcome};
use crate::domain::{
    AppError, ConfigEntry, InjectionTarget, RepositoryIdentity, inject, parse_config_content,
};
use crate::ports::RepositoryFilesystem;

/// Options for the configure command.
#[derive(Debug, Clone)]
pub struct ConfigureOptions {
    /// Repository-relative path of the parameter file.
    pub config_path: String,
    pub repository: RepositoryIdentity,
}

/// Per-target injection result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    pub target: InjectionTarget,
    pub applied: Vec<String>,
    pub missing: Vec<String>,
    /// Whether the target file was written.
    pub rewritten: bool,
}

/// Outcome of the configure command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    pub entries: usize,
    pub targets: Vec<TargetOutcome>,
    /// Parameter names no target accepts.
    pub unrecognized: Vec<String>,
    pub links: LinksOutcome,
}

impl ConfigureOutcome {
    pub fn target(&self, target: InjectionTarget) -> Option<&TargetOutcome> {
        self.targets.iter().find(|outcome| outcome.target == target)
    }
}

pub fn execute<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    options: &ConfigureOptions,
) -> Result<ConfigureOutcome, AppError> {
    let filesystem = ctx.filesystem();

    let entries = load_entries(filesystem, &options.config_path)?;
    let unrecognized = unrecognized_names(&entries);
    for name in &unrecognized {
        warn!(parameter = %name, "parameter is not used by any catalog script");
    }

    let mut pending = Vec::new();
    for target in InjectionTarget::ALL {
        let original = filesystem.read_file(target.path())?;
        let report = inject(&original, target, &entries)?;
        for name in &report.missing {
            warn!(%target, parameter = %name, path = target.path(), "parameter not found in script");
        }
        let changed = report.changed(&original);
        pending.push((target, report, changed));
    }
    let readme = links::plan(filesystem, &options.repository)?;

    let mut targets = Vec::new();
    for (target, report, changed) in pending {
        if changed {
            filesystem.write_file(target.path(), &report.text)?;
        }
        info!(%target, applied = report.applied.len(), "injected parameters");
        targets.push(TargetOutcome {
            target,
            applied: report.applied,
            missing: report.missing,
            rewritten: changed,
        });
    }
    let links = readme.apply(filesystem)?;

    Ok(ConfigureOutcome { entries: entries.len(), targets, unrecognized, links })
}

fn load_entries<F: RepositoryFilesystem>(
    filesystem: &F,
    path: &str,
) -> Result<Vec<ConfigEntry>, AppError> {
    if !filesystem.file_exists(path) {
        return Err(AppError::ConfigFileMissing(path.to_string()));
    }
    let content = filesystem.read_file(path)?;
    parse_config_content(&content)
}

fn unrecognized_names(entries: &[ConfigEntry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let used = InjectionTarget::ALL.iter().any(|target| target.accepts(&entry.name));
        if !used && !names.contains(&entry.name) {
            names.push(entry.name.clone());
        }
    }
    names
}
