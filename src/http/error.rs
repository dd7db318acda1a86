//! Classification of upstream failures into caller-facing reasons.

use reqwest::{StatusCode, header::HeaderMap};

/// GitHub sets this to `0` once the caller's quota is exhausted.
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Failures talking to the upstream release API.
///
/// The `Display` text is what callers see after `upstream error: `, so it
/// stays short and never includes URLs or tokens.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    #[error("authentication failed")]
    AuthenticationFailed,
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    #[error("access forbidden")]
    Forbidden,
    #[error("repository not found")]
    NotFound,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid response body")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Wraps an error raised before a response was received.
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            UpstreamError::Timeout(error)
        } else {
            UpstreamError::Transport(error)
        }
    }
}

/// Classifies a response status. Returns `None` for 2xx.
pub fn classify_status(status: StatusCode, headers: &HeaderMap) -> Option<UpstreamError> {
    if status.is_success() {
        return None;
    }

    let error = match status {
        StatusCode::UNAUTHORIZED => UpstreamError::AuthenticationFailed,
        StatusCode::FORBIDDEN if quota_exhausted(headers) => UpstreamError::RateLimitExceeded,
        StatusCode::FORBIDDEN => UpstreamError::Forbidden,
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimitExceeded,
        StatusCode::NOT_FOUND => UpstreamError::NotFound,
        s => UpstreamError::Status(s.as_u16()),
    };
    Some(error)
}

fn quota_exhausted(headers: &HeaderMap) -> bool {
    headers
        .get(RATE_LIMIT_REMAINING)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_success_is_not_an_error() {
        assert!(classify_status(StatusCode::OK, &HeaderMap::new()).is_none());
        assert!(classify_status(StatusCode::NO_CONTENT, &HeaderMap::new()).is_none());
    }

    #[test]
    fn test_classify_unauthorized() {
        let err = classify_status(StatusCode::UNAUTHORIZED, &HeaderMap::new()).unwrap();
        assert!(matches!(err, UpstreamError::AuthenticationFailed));
    }

    #[test]
    fn test_classify_forbidden_with_exhausted_quota() {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_static("0"));

        let err = classify_status(StatusCode::FORBIDDEN, &headers).unwrap();
        assert!(matches!(err, UpstreamError::RateLimitExceeded));
        assert_eq!(err.to_string(), "rate limit exceeded");
    }

    #[test]
    fn test_classify_forbidden_with_quota_left() {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_static("12"));

        let err = classify_status(StatusCode::FORBIDDEN, &headers).unwrap();
        assert!(matches!(err, UpstreamError::Forbidden));
    }

    #[test]
    fn test_classify_too_many_requests() {
        let err = classify_status(StatusCode::TOO_MANY_REQUESTS, &HeaderMap::new()).unwrap();
        assert!(matches!(err, UpstreamError::RateLimitExceeded));
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify_status(StatusCode::NOT_FOUND, &HeaderMap::new()).unwrap();
        assert_eq!(err.to_string(), "repository not found");
    }

    #[test]
    fn test_classify_server_error() {
        let err = classify_status(StatusCode::BAD_GATEWAY, &HeaderMap::new()).unwrap();
        assert!(matches!(err, UpstreamError::Status(502)));
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
