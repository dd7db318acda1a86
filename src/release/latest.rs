use chrono::DateTime;
use log::warn;

use crate::github::Release;

/// Converts a `published_at` value to Unix seconds.
///
/// Missing, empty and unparsable timestamps all count as `0`, so a draft
/// never beats a published release.
pub fn published_unix(published_at: Option<&str>) -> i64 {
    let Some(s) = published_at.filter(|s| !s.is_empty()) else {
        return 0;
    };

    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => t.timestamp(),
        Err(e) => {
            warn!("time parse: {}, err: {}", s, e);
            0
        }
    }
}

/// Returns the release with the greatest publication time.
///
/// Ties keep the first release seen, so upstream order decides between
/// releases published in the same second.
pub fn find_latest(releases: &[Release]) -> Option<&Release> {
    let (first, rest) = releases.split_first()?;

    let mut latest = first;
    let mut latest_ts = published_unix(first.published_at.as_deref());
    for release in rest {
        let ts = published_unix(release.published_at.as_deref());
        if ts > latest_ts {
            latest = release;
            latest_ts = ts;
        }
    }
    Some(latest)
}
