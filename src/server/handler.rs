use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Redirect, Response},
};
use log::{debug, info, warn};

use crate::github::{RepoError, RepoId};
use crate::http::UpstreamError;
use crate::release::{find_asset, find_latest};

use super::AppState;
use super::response::{LookupError, method_not_allowed};

/// `GET /api/download?repo=<owner>/<repo>&name=<asset>`
///
/// Redirects (307) to the named asset of the newest release, or answers with
/// an error envelope.
pub async fn download_latest(
    State(state): State<Arc<AppState>>,
    method: Method,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if method != Method::GET {
        debug!("rejecting {} request", method);
        return method_not_allowed();
    }

    let repo = query_param(&params, "repo");
    let name = query_param(&params, "name");

    match resolve_download(&state, repo, name).await {
        Ok(url) => {
            info!("download link: {}", url);
            Redirect::temporary(&url).into_response()
        }
        Err(e) => {
            warn!("lookup failed for repo '{}', name '{}': {}", repo, name, e);
            e.into_response()
        }
    }
}

/// First value for `key`, empty when absent.
fn query_param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or_default()
}

/// Runs the lookup and returns the asset's download URL.
#[tracing::instrument(skip(state))]
pub async fn resolve_download(
    state: &AppState,
    repo: &str,
    name: &str,
) -> Result<String, LookupError> {
    let repo_id: RepoId = repo.parse().map_err(|e| match e {
        RepoError::Empty => LookupError::MissingRepo {
            homepage: state.homepage.clone(),
        },
        RepoError::Malformed(repo) => LookupError::InvalidRepo {
            repo,
            homepage: state.homepage.clone(),
        },
    })?;

    debug!("repo name: {}, api: {}", repo_id, state.releases.api_url());

    let releases = state.releases.get_releases(&repo_id).await.map_err(|e| {
        warn!("fetching releases for {} failed: {:#}", repo_id, e);
        let reason = match e.downcast_ref::<UpstreamError>() {
            Some(upstream) => upstream.to_string(),
            None => "request failed".to_string(),
        };
        LookupError::Upstream {
            repo: repo_id.clone(),
            reason,
        }
    })?;

    let latest = find_latest(&releases).ok_or_else(|| LookupError::NoRelease {
        repo: repo_id.clone(),
    })?;
    debug!("latest release of {}: {}", repo_id, latest.tag_name);

    let url = find_asset(latest, name).map_err(|source| LookupError::Asset {
        repo: repo_id.clone(),
        source,
    })?;

    Ok(url.to_string())
}
