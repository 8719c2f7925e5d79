//! README link rewriting command.

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, LinkRewrite, RepositoryIdentity, paths, rewrite_links};
use crate::ports::RepositoryFilesystem;

/// Outcome of rewriting README links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinksOutcome {
    pub repository: RepositoryIdentity,
    pub demo_url: String,
    pub workflow_url: String,
    pub demo_replacements: usize,
    pub workflow_replacements: usize,
    /// Whether README.md was written.
    pub rewritten: bool,
}

/// Rewrite the README's template links for `repository`.
pub fn execute<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    repository: &RepositoryIdentity,
) -> Result<LinksOutcome, AppError> {
    plan(ctx.filesystem(), repository)?.apply(ctx.filesystem())
}

/// README content computed but not yet written.
pub(crate) struct ReadmePlan {
    repository: RepositoryIdentity,
    original: String,
    rewrite: LinkRewrite,
}

pub(crate) fn plan<F: RepositoryFilesystem>(
    filesystem: &F,
    repository: &RepositoryIdentity,
) -> Result<ReadmePlan, AppError> {
    let original = filesystem.read_file(paths::README)?;
    let rewrite = rewrite_links(&original, repository);

    if rewrite.demo_replacements == 0 {
        debug!(url = crate::domain::readme::TEMPLATE_DEMO_URL, "template demo URL not present");
    }
    if rewrite.workflow_replacements == 0 {
        debug!(
            url = crate::domain::readme::TEMPLATE_WORKFLOW_URL,
            "template workflow URL not present"
        );
    }

    Ok(ReadmePlan { repository: repository.clone(), original, rewrite })
}

impl ReadmePlan {
    pub(crate) fn apply<F: RepositoryFilesystem>(
        self,
        filesystem: &F,
    ) -> Result<LinksOutcome, AppError> {
        let rewritten = self.rewrite.text != self.original;
        if rewritten {
            filesystem.write_file(paths::README, &self.rewrite.text)?;
        }

        info!(
            repository = %self.repository,
            demo = self.rewrite.demo_replacements,
            workflow = self.rewrite.workflow_replacements,
            "rewrote README links"
        );

        Ok(LinksOutcome {
            repository: self.repository,
            demo_url: self.rewrite.demo_url,
            workflow_url: self.rewrite.workflow_url,
            demo_replacements: self.rewrite.demo_replacements,
            workflow_replacements: self.rewrite.workflow_replacements,
            rewritten,
        })
    }
}
