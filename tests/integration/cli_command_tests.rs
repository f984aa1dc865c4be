use super::test_helpers::{repository_json, resource, REPO1_PATH};
use bitbucket_repo_provider::cli::commands::repository;
use bitbucket_repo_provider::state::StateFile;
use bitbucket_repo_provider::ProviderError;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_record(dir: &TempDir, record: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("repo.json");
    fs::write(&path, record.to_string()).unwrap();
    path
}

/// Full lifecycle through the command layer: create, read, update, delete
#[tokio::test]
async fn test_repository_lifecycle_commands() {
    let mut server = mockito::Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let state = StateFile::new(temp_dir.path().join("repo1.state.json"));

    let _post = server
        .mock("POST", REPO1_PATH)
        .with_status(201)
        .create_async()
        .await;
    let _put = server
        .mock("PUT", REPO1_PATH)
        .with_status(200)
        .create_async()
        .await;
    let _get = server
        .mock("GET", REPO1_PATH)
        .with_status(200)
        .with_body(repository_json("repo1", "repo1", "Team repository").to_string())
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", REPO1_PATH)
        .with_status(202)
        .expect(1)
        .create_async()
        .await;

    let resource = resource(&server);
    let record = write_record(
        &temp_dir,
        json!({ "name": "repo1", "project_key": "PROJ", "description": "Team repository" }),
    );

    repository::create(&resource, &record, &state).await.unwrap();
    let stored = state.load().unwrap().unwrap();
    assert_eq!(stored.id.as_deref(), Some("PROJ/repo1"));
    assert!(!stored.clone_https.is_empty());

    // A second create against the same state is refused
    let err = repository::create(&resource, &record, &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Validation(_)));

    repository::read(&resource, &state).await.unwrap();
    assert!(state.exists());

    let record = write_record(
        &temp_dir,
        json!({ "name": "repo1", "project_key": "PROJ", "forkable": true }),
    );
    repository::update(&resource, &record, &state).await.unwrap();

    repository::delete(&resource, &state).await.unwrap();
    delete.assert_async().await;
    assert!(!state.exists());
}

/// A repository that disappeared server-side is dropped from state on read
#[tokio::test]
async fn test_read_drops_missing_repository() {
    let mut server = mockito::Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let state = StateFile::new(temp_dir.path().join("state.json"));

    let mut config = bitbucket_repo_provider::RepositoryConfig::new("repo1", "PROJ");
    config.id = Some("PROJ/repo1".to_string());
    state.save(&config).unwrap();

    let _get = server
        .mock("GET", REPO1_PATH)
        .with_status(404)
        .create_async()
        .await;

    repository::read(&resource(&server), &state).await.unwrap();
    assert!(!state.exists());
}

/// Auth failures and outages keep the recorded identity
#[tokio::test]
async fn test_read_keeps_state_on_server_error() {
    for status in [401, 503] {
        let mut server = mockito::Server::new_async().await;
        let temp_dir = TempDir::new().unwrap();
        let state = StateFile::new(temp_dir.path().join("state.json"));

        let mut config = bitbucket_repo_provider::RepositoryConfig::new("repo1", "PROJ");
        config.id = Some("PROJ/repo1".to_string());
        state.save(&config).unwrap();

        let _get = server
            .mock("GET", REPO1_PATH)
            .with_status(status)
            .create_async()
            .await;

        let err = repository::read(&resource(&server), &state)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Request(_)));
        assert!(err.to_string().contains(&status.to_string()));
        assert!(state.exists());
        assert_eq!(state.load().unwrap(), Some(config));
    }
}

/// Identity is persisted even when the confirmatory read fails after a create
#[tokio::test]
async fn test_create_records_identity_before_read_back() {
    let mut server = mockito::Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let state = StateFile::new(temp_dir.path().join("state.json"));

    let _post = server
        .mock("POST", REPO1_PATH)
        .with_status(201)
        .create_async()
        .await;
    let _get = server
        .mock("GET", REPO1_PATH)
        .with_status(200)
        .with_body("<html>proxy error</html>")
        .create_async()
        .await;

    let record = write_record(&temp_dir, json!({ "name": "repo1", "project_key": "PROJ" }));
    let err = repository::create(&resource(&server), &record, &state)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Serialization(_)));
    let stored = state.load().unwrap().unwrap();
    assert_eq!(stored.id.as_deref(), Some("PROJ/repo1"));
}

/// Moving a repository between projects is not an in-place update
#[tokio::test]
async fn test_update_refuses_project_change() {
    let server = mockito::Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let state = StateFile::new(temp_dir.path().join("state.json"));

    let mut config = bitbucket_repo_provider::RepositoryConfig::new("repo1", "PROJ");
    config.id = Some("PROJ/repo1".to_string());
    state.save(&config).unwrap();

    let record = write_record(&temp_dir, json!({ "name": "repo1", "project_key": "OTHER" }));
    let err = repository::update(&resource(&server), &record, &state)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Validation(_)));
}

/// Import stores the repository; a malformed id never reaches the server
#[tokio::test]
async fn test_import_command() {
    let mut server = mockito::Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let state = StateFile::new(temp_dir.path().join("state.json"));

    let err = repository::import(&resource(&server), "PROJ", &state)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Format(_)));

    let _get = server
        .mock("GET", REPO1_PATH)
        .with_status(200)
        .with_body(repository_json("repo1", "repo1", "").to_string())
        .create_async()
        .await;

    repository::import(&resource(&server), "PROJ/repo1", &state)
        .await
        .unwrap();

    let stored = state.load().unwrap().unwrap();
    assert_eq!(stored.id.as_deref(), Some("PROJ/repo1"));
    assert_eq!(stored.name, "repo1");
}

/// Records missing the required name are rejected before any request
#[tokio::test]
async fn test_invalid_record_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let record = write_record(&temp_dir, json!({ "project_key": "PROJ" }));

    let err = repository::load_record(&record).unwrap_err();
    assert!(matches!(err, ProviderError::Validation(_)));
}
