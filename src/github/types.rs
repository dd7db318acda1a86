use serde::{Deserialize, Serialize};

/// A GitHub account as it appears in the `author` and `uploader` positions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Actor {
    pub login: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub html_url: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub site_admin: bool,
}

/// Represents a GitHub release asset
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub uploader: Option<Actor>,
}

/// Represents a GitHub release
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Release {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    /// RFC3339, `null` for drafts
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<Actor>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}
