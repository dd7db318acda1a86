use std::net::IpAddr;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use ghlr::config::{Config, DEFAULT_HOMEPAGE, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use ghlr::github::DEFAULT_API_URL;

/// ghlr - redirect to the latest GitHub release asset
///
/// Serves `GET /api/download?repo=owner/repo&name=asset.zip` and answers with a
/// temporary redirect to that asset of the repository's newest release.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// This is useful for avoiding rate limits.
#[derive(Parser, Debug)]
#[command(author, version = env!("GHLR_VERSION"), about)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "GHLR_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// GitHub API URL
    #[arg(long = "api-url", env = "GHLR_API_URL", value_name = "URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Page linked from error messages about a bad `repo` parameter
    #[arg(long, env = "GHLR_HOMEPAGE", value_name = "URL", default_value = DEFAULT_HOMEPAGE)]
    homepage: String,

    /// Timeout for the upstream request, in seconds
    #[arg(long, env = "GHLR_TIMEOUT", value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    #[arg(long, env = "GITHUB_TOKEN", hide = true, hide_env_values = true)]
    token: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            host: cli.host,
            port: cli.port,
            api_url: cli.api_url,
            homepage: cli.homepage,
            timeout: Duration::from_secs(cli.timeout),
            token: cli.token,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    ghlr::server::serve(cli.into()).await
}
