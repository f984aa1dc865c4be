pub mod bitbucket;
pub mod cli;
pub mod config;
pub mod errors;
pub mod resource;
pub mod state;

pub use errors::ProviderError;
pub use resource::{ReadOutcome, RepositoryConfig, RepositoryId, RepositoryResource};
