use serde::{Deserialize, Serialize};

/// Repository payload sent to and returned by the repos endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RemoteRepository {
    #[serde(rename = "scmId", default, skip_serializing_if = "String::is_empty")]
    pub scm_id: String,
    #[serde(default)]
    pub forkable: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,
    /// Server-assigned numeric id, never sent
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,
    #[serde(default)]
    pub origin: Origin,
}

/// Project, visibility and links of a repository
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Origin {
    #[serde(default)]
    pub project: ProjectRef,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// Project information
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ProjectRef {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Repository links
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Links {
    #[serde(default)]
    pub clone: Vec<CloneLink>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.clone.is_empty()
    }
}

/// Clone link information
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CloneLink {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub name: String,
}
