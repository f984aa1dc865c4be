use super::id::RepositoryId;
use crate::bitbucket::RemoteRepository;
use crate::errors::{ProviderError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

fn default_scm_id() -> String {
    "git".to_string()
}

fn default_public() -> bool {
    true
}

/// Config-side view of a repository resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// `project_key/slug`, set once the repository has been created or imported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "scmId", default = "default_scm_id")]
    pub scm_id: String,
    #[serde(default)]
    pub project_key: String,
    #[serde(default = "default_public")]
    pub public: bool,
    #[serde(default)]
    pub forkable: bool,
    #[serde(default)]
    pub description: String,
    pub name: String,
    /// Server-assigned when left empty
    #[serde(default)]
    pub slug: String,
    /// Computed by the server
    #[serde(default)]
    pub clone_https: String,
    /// Computed by the server
    #[serde(default)]
    pub clone_ssh: String,
}

impl RepositoryConfig {
    /// A record with the schema defaults applied
    pub fn new<N: Into<String>, P: Into<String>>(name: N, project_key: P) -> Self {
        Self {
            id: None,
            scm_id: default_scm_id(),
            project_key: project_key.into(),
            public: default_public(),
            forkable: false,
            description: String::new(),
            name: name.into(),
            slug: String::new(),
            clone_https: String::new(),
            clone_ssh: String::new(),
        }
    }

    /// A record carrying only an identity, as produced by import
    pub fn from_id(id: RepositoryId) -> Self {
        let identity = id.to_string();
        let mut config = Self::new("", id.project_key);
        config.slug = id.slug;
        config.id = Some(identity);
        config
    }

    /// `slug` when set, otherwise `name`
    pub fn effective_slug(&self) -> &str {
        if self.slug.is_empty() {
            &self.name
        } else {
            &self.slug
        }
    }

    /// REST path of the repository this record points at
    pub fn repo_path(&self) -> String {
        format!(
            "/rest/api/1.0/projects/{}/repos/{}",
            self.project_key,
            self.effective_slug()
        )
    }

    /// Parse the stored identity; an empty identity counts as unset
    pub fn parsed_id(&self) -> Result<Option<RepositoryId>> {
        match self.id.as_deref() {
            None | Some("") => Ok(None),
            Some(id) => RepositoryId::parse(id).map(Some),
        }
    }

    pub fn set_id(&mut self, id: &RepositoryId) {
        self.id = Some(id.to_string());
    }

    /// Derive `project_key` and `slug` from the identity, which wins over both
    pub fn apply_id(&mut self) -> Result<()> {
        if let Some(id) = self.parsed_id()? {
            self.project_key = id.project_key;
            self.slug = id.slug;
        }
        Ok(())
    }

    /// Overwrite the record with what the server reports
    pub fn apply_remote(&mut self, remote: &RemoteRepository) {
        self.scm_id = remote.scm_id.clone();
        self.public = remote.origin.public;
        self.name = remote.name.clone();
        // An auto-generated slug equal to the name must not clobber an unset slug
        if !remote.slug.is_empty() && remote.slug != remote.name {
            self.slug = remote.slug.clone();
        }
        self.forkable = remote.forkable;
        self.description = remote.origin.project.description.clone();
        self.project_key = remote.origin.project.key.clone();

        for link in &remote.origin.links.clone {
            if link.name == "https" {
                self.clone_https = link.href.clone();
            } else {
                if link.name != "ssh" {
                    warn!(
                        "Treating clone link '{}' ({}) as ssh",
                        link.name, link.href
                    );
                }
                self.clone_ssh = link.href.clone();
            }
        }
    }

    /// Check the fields the schema layer would enforce
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ProviderError::validation("`name` is required"));
        }
        if self.project_key.contains('/') {
            return Err(ProviderError::validation(format!(
                "`project_key` must not contain '/': {}",
                self.project_key
            )));
        }
        if self.effective_slug().contains('/') {
            return Err(ProviderError::validation(format!(
                "repository slug must not contain '/': {}",
                self.effective_slug()
            )));
        }
        Ok(())
    }

    /// Carry the user-settable fields of `desired` over, keeping identity and computed fields
    pub fn merge_desired(&mut self, desired: &RepositoryConfig) {
        self.scm_id = desired.scm_id.clone();
        self.public = desired.public;
        self.forkable = desired.forkable;
        self.description = desired.description.clone();
        self.name = desired.name.clone();
        if !desired.slug.is_empty() {
            self.slug = desired.slug.clone();
        }
    }
}

impl From<&RepositoryConfig> for RemoteRepository {
    fn from(config: &RepositoryConfig) -> Self {
        let mut repo = RemoteRepository {
            scm_id: config.scm_id.clone(),
            forkable: config.forkable,
            name: config.name.clone(),
            slug: config.slug.clone(),
            ..Default::default()
        };
        repo.origin.project.key = config.project_key.clone();
        repo.origin.project.description = config.description.clone();
        repo.origin.public = config.public;
        repo
    }
}
