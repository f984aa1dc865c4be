use crate::errors::{ProviderError, Result};
use std::fmt;
use std::str::FromStr;

/// Composite identity of a remote repository: `project_key/slug`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryId {
    pub project_key: String,
    pub slug: String,
}

impl RepositoryId {
    pub fn new<P: Into<String>, S: Into<String>>(project_key: P, slug: S) -> Self {
        Self {
            project_key: project_key.into(),
            slug: slug.into(),
        }
    }

    /// Parse an identity string, which must split on `/` into exactly two parts
    pub fn parse(id: &str) -> Result<Self> {
        let parts: Vec<&str> = id.split('/').collect();
        if parts.len() != 2 {
            return Err(ProviderError::invalid_id());
        }
        Ok(Self::new(parts[0], parts[1]))
    }
}

impl FromStr for RepositoryId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project_key, self.slug)
    }
}
