pub mod entry;
pub mod repository;

pub use entry::{ConfigEntry, parse_config_content};
pub use repository::RepositoryIdentity;
