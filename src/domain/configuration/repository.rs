//! Hosting repository identity and the URLs derived from it.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// `owner/repository` pair identifying the hosting repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    owner: String,
    repository: String,
}

impl RepositoryIdentity {
    /// Parse `owner/repository`. Exactly one `/` with non-empty sides is accepted.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let value = value.trim();
        let mut parts = value.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repository), None) if !owner.is_empty() && !repository.is_empty() => {
                Ok(Self { owner: owner.to_string(), repository: repository.to_string() })
            }
            _ => Err(AppError::InvalidRepository(value.to_string())),
        }
    }

    /// Parse an optional value, treating absent or blank as `RepositoryMissing`.
    pub fn from_optional(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::parse(value),
            None => Err(AppError::RepositoryMissing),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// GitHub Pages URL of the rendered demo page.
    pub fn demo_url(&self) -> String {
        format!("https://{}.github.io/{}/public/demo.html", self.owner, self.repository)
    }

    /// URL of the catalog build workflow on the default branch.
    pub fn workflow_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/blob/master/.github/workflows/build_catalog.yml",
            self.owner, self.repository
        )
    }
}

impl FromStr for RepositoryIdentity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repository)
    }
}
