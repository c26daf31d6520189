use std::{collections::HashSet, hash::Hash};

use crate::types::{OutputTableRow, RunStatus};

/// Derives the playlist identifier from a share link.
///
/// Takes the last path segment and drops any query string, so
/// `https://open.spotify.com/playlist/71PSYf0Nrc0XgUenDY1yXo?si=0539` yields
/// `71PSYf0Nrc0XgUenDY1yXo`. A bare identifier is returned unchanged.
pub fn playlist_id_from_link(link: &str) -> String {
    let segment = link.rsplit('/').next().unwrap_or(link);
    segment.split('?').next().unwrap_or(segment).to_string()
}

/// Keeps the first element for every key and drops later duplicates.
pub fn dedup_by_key<T, K, F>(items: &mut Vec<T>, key: F)
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(key(item)));
}

/// Returns the final `/`-separated segment of a blob key.
pub fn base_name(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

pub fn success_status(recipient: &str) -> RunStatus {
    RunStatus::ok(format!("Email sent to {recipient}"))
}

pub fn sort_output_rows(rows: &mut [OutputTableRow]) {
    rows.sort_by(|a, b| a.source.cmp(&b.source).then_with(|| a.entity.cmp(&b.entity)));
}
