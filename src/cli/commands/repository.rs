use crate::bitbucket::HttpClient;
use crate::cli::output::Output;
use crate::errors::{ProviderError, Result};
use crate::resource::{ReadOutcome, RepositoryConfig, RepositoryResource};
use crate::state::StateFile;
use std::fs;
use std::path::Path;

/// Read a desired repository record from a JSON file
pub fn load_record(path: &Path) -> Result<RepositoryConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        ProviderError::config(format!("Failed to read {}: {e}", path.display()))
    })?;

    let record: RepositoryConfig = serde_json::from_str(&content).map_err(|e| {
        ProviderError::validation(format!("Invalid repository record {}: {e}", path.display()))
    })?;

    record.validate()?;
    Ok(record)
}

fn ensure_unmanaged(state: &StateFile) -> Result<()> {
    if let Some(existing) = state.load()? {
        return Err(ProviderError::validation(format!(
            "State {} already tracks {}; delete it or use update",
            state.path().display(),
            existing.id.as_deref().unwrap_or(&existing.name)
        )));
    }
    Ok(())
}

/// Create a repository from `config_path` and record it in `state`
pub async fn create<C: HttpClient>(
    resource: &RepositoryResource<C>,
    config_path: &Path,
    state: &StateFile,
) -> Result<()> {
    ensure_unmanaged(state)?;
    let mut config = load_record(config_path)?;

    let result = resource.create(&mut config).await;

    // The POST may have succeeded even if the read-back failed
    if config.id.is_some() {
        state.save(&config)?;
    }

    let outcome = result?;
    Output::success(format!("Created repository '{}'", config.name));
    if !outcome.is_found() {
        Output::warning("Repository was created but could not be read back");
    }
    Output::repository(&config);
    Ok(())
}

/// Refresh the recorded repository; forget it if the server no longer has it
pub async fn read<C: HttpClient>(resource: &RepositoryResource<C>, state: &StateFile) -> Result<()> {
    let mut config = state.load_required()?;

    match resource.read(&mut config).await? {
        ReadOutcome::Found => {
            state.save(&config)?;
            Output::success(format!("Repository '{}' is up to date", config.name));
            Output::repository(&config);
        }
        ReadOutcome::NotFound => {
            state.remove()?;
            Output::warning(format!(
                "Repository {} no longer exists; removed it from state",
                config.id.as_deref().unwrap_or(&config.name)
            ));
            Output::tip("Run create again to recreate it");
        }
        ReadOutcome::Unavailable(status) => {
            return Err(ProviderError::bitbucket_api(
                "GET",
                &config.repo_path(),
                status,
                "repository could not be read; state left in place",
            ));
        }
    }

    Ok(())
}

/// Apply the record in `config_path` to the recorded repository
pub async fn update<C: HttpClient>(
    resource: &RepositoryResource<C>,
    config_path: &Path,
    state: &StateFile,
) -> Result<()> {
    let mut config = state.load_required()?;
    let desired = load_record(config_path)?;

    if !desired.project_key.is_empty() && desired.project_key != config.project_key {
        return Err(ProviderError::validation(format!(
            "project_key cannot change in place ({} -> {}); delete and recreate the repository",
            config.project_key, desired.project_key
        )));
    }

    config.merge_desired(&desired);
    let outcome = resource.update(&mut config).await?;
    state.save(&config)?;

    Output::success(format!("Updated repository '{}'", config.name));
    if !outcome.is_found() {
        Output::warning("Repository was updated but could not be read back");
    }
    Output::repository(&config);
    Ok(())
}

/// Delete the recorded repository and forget it
pub async fn delete<C: HttpClient>(
    resource: &RepositoryResource<C>,
    state: &StateFile,
) -> Result<()> {
    let mut config = state.load_required()?;

    resource.delete(&mut config).await?;
    state.remove()?;

    Output::success(format!(
        "Deleted repository {}/{}",
        config.project_key,
        config.effective_slug()
    ));
    Ok(())
}

/// Start tracking an existing repository
pub async fn import<C: HttpClient>(
    resource: &RepositoryResource<C>,
    id: &str,
    state: &StateFile,
) -> Result<()> {
    ensure_unmanaged(state)?;

    let config = resource.import(id).await?.ok_or_else(|| {
        ProviderError::request(format!("Cannot import {id}: repository not found"))
    })?;
    state.save(&config)?;

    Output::success(format!("Imported repository '{}'", config.name));
    Output::repository(&config);
    Ok(())
}
