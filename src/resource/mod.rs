//! Repository resource lifecycle
//!
//! Maps a [`RepositoryConfig`] onto a Bitbucket Server repository through the
//! four lifecycle calls a provider host invokes, plus import. Every call is a
//! straight request/response sequence; there are no retries and no rollback.
//!
//! Create and Update are two-phase: the write, then a confirmatory Read. Create
//! records the identity as soon as the POST succeeds, so a failing Read leaves
//! a created repository with a known identity rather than an orphan.

pub mod id;
pub mod types;

pub use id::RepositoryId;
pub use types::RepositoryConfig;

use crate::bitbucket::{HttpClient, HttpResponse, RemoteRepository};
use crate::errors::{ProviderError, Result};
use reqwest::Method;
use tracing::{debug, info, warn};

/// Result of reading a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The record was refreshed from the server
    Found,
    /// The server answered 404; the record is untouched
    NotFound,
    /// Any other non-200 status (auth, outage); the record is untouched
    Unavailable(u16),
}

impl ReadOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ReadOutcome::Found)
    }
}

/// Lifecycle operations for a Bitbucket Server repository
pub struct RepositoryResource<C: HttpClient> {
    client: C,
}

impl<C: HttpClient> RepositoryResource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Create the repository, record its identity, then read it back
    pub async fn create(&self, config: &mut RepositoryConfig) -> Result<ReadOutcome> {
        let body = serde_json::to_vec(&RemoteRepository::from(&*config))?;
        let path = config.repo_path();

        self.send(Method::POST, &path, Some(body)).await?;

        let id = RepositoryId::new(config.project_key.clone(), config.effective_slug());
        info!("Created repository {}", id);
        config.set_id(&id);

        self.read(config).await
    }

    /// Refresh the record from the server
    pub async fn read(&self, config: &mut RepositoryConfig) -> Result<ReadOutcome> {
        // Locate through the identity without touching the record until the read succeeds
        let mut located = config.clone();
        located.apply_id()?;

        let path = located.repo_path();
        let response = self.client.request(Method::GET, &path, None).await?;

        match response.status {
            200 => {}
            404 => {
                warn!("Repository at {} not found, leaving record unchanged", path);
                return Ok(ReadOutcome::NotFound);
            }
            status => {
                warn!(
                    "Repository at {} not readable (status {}), leaving record unchanged",
                    path, status
                );
                return Ok(ReadOutcome::Unavailable(status));
            }
        }

        let remote: RemoteRepository = serde_json::from_slice(&response.body)?;
        located.apply_remote(&remote);
        *config = located;
        debug!("Read repository {}/{}", config.project_key, config.effective_slug());

        Ok(ReadOutcome::Found)
    }

    /// Push the record to the server, then read it back
    pub async fn update(&self, config: &mut RepositoryConfig) -> Result<ReadOutcome> {
        config.apply_id()?;

        let body = serde_json::to_vec(&RemoteRepository::from(&*config))?;
        let path = config.repo_path();

        self.send(Method::PUT, &path, Some(body)).await?;
        info!("Updated repository {}/{}", config.project_key, config.effective_slug());

        self.read(config).await
    }

    /// Delete the repository
    pub async fn delete(&self, config: &mut RepositoryConfig) -> Result<()> {
        config.apply_id()?;

        let path = config.repo_path();
        self.send(Method::DELETE, &path, None).await?;
        info!("Deleted repository {}/{}", config.project_key, config.effective_slug());

        Ok(())
    }

    /// Adopt an existing repository by its `project_key/slug` identity.
    ///
    /// Returns `None` when the server does not have it.
    pub async fn import(&self, id: &str) -> Result<Option<RepositoryConfig>> {
        let id = RepositoryId::parse(id)?;
        let mut config = RepositoryConfig::from_id(id);

        match self.read(&mut config).await? {
            ReadOutcome::Found => Ok(Some(config)),
            ReadOutcome::NotFound => Ok(None),
            ReadOutcome::Unavailable(status) => Err(ProviderError::bitbucket_api(
                "GET",
                &config.repo_path(),
                status,
                "repository could not be read",
            )),
        }
    }

    /// Issue a write and turn any non-success status into a request error
    async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<HttpResponse> {
        let response = self.client.request(method.clone(), path, body).await?;

        if !response.is_success() {
            return Err(ProviderError::bitbucket_api(
                method.as_str(),
                path,
                response.status,
                &response.text(),
            ));
        }

        Ok(response)
    }
}
