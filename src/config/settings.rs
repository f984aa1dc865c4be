use crate::errors::{ProviderError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection settings for a Bitbucket Server instance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BitbucketSettings {
    pub url: String,
    pub username: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BitbucketSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: None,
            token: None,
            timeout_secs: 30,
        }
    }
}

impl BitbucketSettings {
    /// Load settings from an optional JSON file, overlaid with `BITBUCKET_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(ProviderError::config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Json)
                    .required(true),
            );
        }

        // BITBUCKET_URL -> url, BITBUCKET_TIMEOUT_SECS -> timeout_secs
        let built = builder
            .add_source(config::Environment::with_prefix("BITBUCKET").try_parsing(true))
            .build()
            .map_err(|e| ProviderError::config(format!("Failed to load settings: {e}")))?;

        let settings: BitbucketSettings = built
            .try_deserialize()
            .map_err(|e| ProviderError::config(format!("Failed to parse settings: {e}")))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ProviderError::config(
                "Bitbucket URL is not set (use a settings file or BITBUCKET_URL)",
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ProviderError::config(
                "Bitbucket URL must start with http:// or https://",
            ));
        }
        url::Url::parse(&self.url)?;

        if self.timeout_secs == 0 {
            return Err(ProviderError::config("Timeout must be at least 1 second"));
        }

        Ok(())
    }
}
