pub mod configuration;
pub mod error;
pub mod injection;
pub mod paths;
pub mod readme;

pub use configuration::{ConfigEntry, RepositoryIdentity, parse_config_content};
pub use error::AppError;
pub use injection::{InjectionReport, InjectionTarget, inject};
pub use readme::{LinkRewrite, rewrite_links};
