//! Runtime configuration and construction of the outbound HTTP client.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::github::{DEFAULT_API_URL, GitHub};
use crate::http::HttpClient;

/// Where callers are sent when they get the query wrong.
pub const DEFAULT_HOMEPAGE: &str = "https://github-latest-release.vercel.app";

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("ghlr/", env!("GHLR_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub api_url: String,
    pub homepage: String,
    /// Bound on the single outbound call made per request
    pub timeout: Duration,
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Build an HTTP client with the configured timeout and optional token
pub fn build_http_client(config: &Config) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );

    if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
            .context("GITHUB_TOKEN contains characters not allowed in a header")?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);
        debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(token));
    }

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(HttpClient::new(client))
}

/// Build the GitHub release source from configuration
pub fn build_github(config: &Config) -> Result<GitHub> {
    let http_client = build_http_client(config)?;
    Ok(GitHub::new(http_client, Some(config.api_url.clone())))
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
