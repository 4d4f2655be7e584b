pub mod batch_config;

pub use batch_config::{BatchConfig, RepositoryDescriptor};
