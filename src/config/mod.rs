pub mod settings;

pub use settings::BitbucketSettings;

use crate::errors::Result;
use std::path::Path;

/// Load provider settings, logging where they came from
pub fn load_settings(path: Option<&Path>) -> Result<BitbucketSettings> {
    match path {
        Some(path) => tracing::debug!("Loading settings from {}", path.display()),
        None => tracing::debug!("Loading settings from environment"),
    }

    let settings = BitbucketSettings::load(path)?;
    tracing::debug!("Using Bitbucket Server at {}", settings.url);
    Ok(settings)
}
