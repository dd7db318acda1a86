use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::repo::RepoId;
use super::types::Release;

/// Default GitHub REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    /// Fetches the release list for `repo`, in the order upstream returns it.
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    http_client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http_client, api_url))]
    pub fn new(http_client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn releases_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self))]
    async fn get_releases(&self, repo: &RepoId) -> Result<Vec<Release>> {
        let url = self.releases_url(repo);
        debug!("Fetching releases from {}...", url);

        let releases: Vec<Release> = self
            .http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch releases for {}", repo))?;

        debug!("{} returned {} release(s)", repo, releases.len());
        Ok(releases)
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}
