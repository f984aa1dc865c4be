use crate::errors::{ProviderError, Result};
use crate::resource::RepositoryConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Last known record of a managed repository, kept between invocations
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the stored record, or `None` if nothing is stored yet
    pub fn load(&self) -> Result<Option<RepositoryConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content).map_err(|e| {
            ProviderError::config(format!(
                "Failed to parse state file {}: {e}",
                self.path.display()
            ))
        })?;

        Ok(Some(config))
    }

    /// Load the stored record, failing if there is none
    pub fn load_required(&self) -> Result<RepositoryConfig> {
        self.load()?.ok_or_else(|| {
            ProviderError::config(format!(
                "No state at {}; create or import the repository first",
                self.path.display()
            ))
        })
    }

    /// Write the record atomically
    pub fn save(&self, config: &RepositoryConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(config)?;

        // Write to temporary file first, then rename for atomic write
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved state to {}", self.path.display());
        Ok(())
    }

    /// Forget the record; returns whether anything was removed
    pub fn remove(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        tracing::debug!("Removed state {}", self.path.display());
        Ok(true)
    }
}
