use bitbucket_repo_provider::bitbucket::BitbucketClient;
use bitbucket_repo_provider::config::BitbucketSettings;
use bitbucket_repo_provider::RepositoryResource;
use serde_json::{json, Value};

pub const REPO1_PATH: &str = "/rest/api/1.0/projects/PROJ/repos/repo1";

pub fn settings(url: String) -> BitbucketSettings {
    BitbucketSettings {
        url,
        username: None,
        token: Some("testtoken".to_string()),
        timeout_secs: 5,
    }
}

pub fn resource(server: &mockito::ServerGuard) -> RepositoryResource<BitbucketClient> {
    RepositoryResource::new(BitbucketClient::new(&settings(server.url())).unwrap())
}

/// Repository body as Bitbucket Server returns it
pub fn repository_json(name: &str, slug: &str, description: &str) -> Value {
    json!({
        "id": 11,
        "slug": slug,
        "name": name,
        "scmId": "git",
        "state": "AVAILABLE",
        "forkable": false,
        "origin": {
            "project": { "key": "PROJ", "description": description },
            "public": true,
            "links": {
                "clone": [
                    { "href": format!("https://bitbucket.example.com/scm/proj/{slug}.git"), "name": "https" },
                    { "href": format!("ssh://git@bitbucket.example.com:7999/proj/{slug}.git"), "name": "ssh" }
                ]
            }
        }
    })
}
