pub mod ports;

pub use ports::{MockRepositoryFs, TestFiles};
