//! In-place merge: only the `tr` segment changes.

use url::form_urlencoded;

use super::TRANSFORM_PARAM;

pub(super) fn merge(path: &str, query: Option<&str>, tokens: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(tokens.as_bytes()).collect();
    let replacement = format!("{TRANSFORM_PARAM}={encoded}");

    let Some(query) = query else {
        return format!("{path}?{replacement}");
    };

    let mut placed = false;
    let mut segments: Vec<&str> = Vec::new();
    for segment in query.split('&') {
        if !is_transform_segment(segment) {
            segments.push(segment);
        } else if !placed {
            segments.push(&replacement);
            placed = true;
        }
    }
    if !placed {
        segments.push(&replacement);
    }
    format!("{path}?{}", segments.join("&"))
}

fn is_transform_segment(segment: &str) -> bool {
    let name = segment.split_once('=').map_or(segment, |(name, _)| name);
    name == TRANSFORM_PARAM
}
