//! The JSON envelope and the single error type every failed lookup
//! converges on.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::github::RepoId;
use crate::release::AssetError;

/// `code` value carried by every error envelope.
pub const ERROR_CODE: i32 = -1;

/// Body of every non-redirect answer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope {
    pub code: i32,
    pub msg: String,
}

impl Envelope {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: ERROR_CODE,
            msg: msg.into(),
        }
    }
}

/// Reasons a lookup ends without a redirect.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("please provide repo name, for more detail, visit: {homepage}")]
    MissingRepo { homepage: String },
    #[error("please check your repo name({repo}), for more detail, visit: {homepage}")]
    InvalidRepo { repo: String, homepage: String },
    #[error("upstream error: {reason}")]
    Upstream { repo: RepoId, reason: String },
    #[error("repo: {repo} has no release jet")]
    NoRelease { repo: RepoId },
    #[error("get repo: {repo}'s asset err: {source}")]
    Asset { repo: RepoId, source: AssetError },
}

/// Errors are reported with HTTP 200; callers read `code` instead.
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(Envelope::error(self.to_string()))).into_response()
    }
}

/// 405 for anything but GET, with the `Allow` header part of the response.
pub fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> RepoId {
        "owner/repo".parse().unwrap()
    }

    #[test]
    fn test_envelope_serialization() {
        let json = serde_json::to_string(&Envelope::error("boom")).unwrap();
        assert_eq!(json, r#"{"code":-1,"msg":"boom"}"#);
    }

    #[test]
    fn test_lookup_error_messages() {
        let homepage = "https://example.com".to_string();

        let err = LookupError::MissingRepo {
            homepage: homepage.clone(),
        };
        assert_eq!(
            err.to_string(),
            "please provide repo name, for more detail, visit: https://example.com"
        );

        let err = LookupError::InvalidRepo {
            repo: "nope".to_string(),
            homepage,
        };
        assert_eq!(
            err.to_string(),
            "please check your repo name(nope), for more detail, visit: https://example.com"
        );

        let err = LookupError::NoRelease { repo: repo() };
        assert_eq!(err.to_string(), "repo: owner/repo has no release jet");

        let err = LookupError::Asset {
            repo: repo(),
            source: AssetError::NotFound,
        };
        assert_eq!(
            err.to_string(),
            "get repo: owner/repo's asset err: not found"
        );

        let err = LookupError::Upstream {
            repo: repo(),
            reason: "rate limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "upstream error: rate limit exceeded");
    }

    #[test]
    fn test_lookup_error_response_is_ok_status() {
        let response = LookupError::NoRelease { repo: repo() }.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_method_not_allowed() {
        let response = method_not_allowed();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET");
    }
}
