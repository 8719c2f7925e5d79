pub mod configure;
pub mod links;
