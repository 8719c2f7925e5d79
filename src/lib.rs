//! ezcat: Configure a static-site data catalog from a small parameter file.
//!
//! Parameters from `config.txt` are spliced into the generated browser and
//! harvester scripts, and the README's template links are pointed at the
//! hosting repository.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigureOptions, ConfigureOutcome, LinksOutcome, TargetOutcome, configure, configure_at,
    links, links_at, resolve_repository,
};
pub use domain::{AppError, ConfigEntry, InjectionTarget, RepositoryIdentity};
