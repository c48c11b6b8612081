//! URL merger: put a token string into a URL's `tr` query parameter.
//!
//! Everything except the `tr` parameter is carried over. There is no error
//! path: malformed URLs produce a best-effort string, and an empty token
//! string returns the base URL untouched.

mod reserialize;
mod splice;

use serde::{Deserialize, Serialize};

/// Query parameter the delivery service reads transformations from.
pub const TRANSFORM_PARAM: &str = "tr";

/// How the query string is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Parse the query into name→value pairs and serialize it again.
    /// Duplicate names collapse (last value wins, first position kept).
    #[default]
    Reserialize,
    /// Replace the `tr` segment in place and leave every other byte alone.
    Splice,
}

/// Merge with the default [`MergeStrategy::Reserialize`].
pub fn merge(base_url: &str, tokens: &str) -> String {
    merge_with(base_url, tokens, MergeStrategy::default())
}

pub fn merge_with(base_url: &str, tokens: &str, strategy: MergeStrategy) -> String {
    if tokens.is_empty() || base_url.is_empty() {
        return base_url.to_string();
    }

    let parts = UrlParts::split(base_url);
    let mut out = match strategy {
        MergeStrategy::Reserialize => reserialize::merge(parts.path, parts.query, tokens),
        MergeStrategy::Splice => splice::merge(parts.path, parts.query, tokens),
    };
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }

    tracing::trace!(base = base_url, ?strategy, output = %out, "merged transformation");
    out
}

/// A URL cut at its first `#` and then at its first `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UrlParts<'a> {
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    fn split(url: &'a str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query).filter(|q| !q.is_empty())),
            None => (rest, None),
        };
        Self {
            path,
            query,
            fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query_map(url: &str) -> HashMap<String, String> {
        let parsed = url::Url::parse(url).unwrap();
        parsed.query_pairs().into_owned().collect()
    }

    #[test]
    fn empty_tokens_return_base_verbatim() {
        for base in [
            "https://img.example/i.jpg",
            "https://img.example/i.jpg?a=%7e&tr=h-100#frag",
            "not a url at all?x=%%",
            "",
        ] {
            assert_eq!(merge(base, ""), base);
            assert_eq!(merge_with(base, "", MergeStrategy::Splice), base);
        }
    }

    #[test]
    fn empty_base_stays_empty() {
        assert_eq!(merge("", "w-50"), "");
    }

    #[test]
    fn appends_to_url_without_query() {
        assert_eq!(
            merge("https://img.example/i.jpg", "h-300,w-400,f-webp,e-grayscale"),
            "https://img.example/i.jpg?tr=h-300%2Cw-400%2Cf-webp%2Ce-grayscale"
        );
    }

    #[test]
    fn replaces_existing_tr_and_keeps_foreign_params() {
        let out = merge("https://x/y?a=1&tr=h-100", "w-50");
        let map = query_map(&out);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("tr").map(String::as_str), Some("w-50"));
        assert_eq!(out, "https://x/y?a=1&tr=w-50");
    }

    #[test]
    fn duplicate_names_collapse_last_wins() {
        let out = merge("https://x/y?a=1&b=2&a=3", "w-50");
        assert_eq!(out, "https://x/y?a=3&b=2&tr=w-50");
    }

    #[test]
    fn fragment_is_kept_after_query() {
        let out = merge("https://x/y?a=1#top", "w-50");
        assert_eq!(out, "https://x/y?a=1&tr=w-50#top");
    }

    #[test]
    fn trailing_question_mark() {
        assert_eq!(merge("https://x/y?", "w-50"), "https://x/y?tr=w-50");
    }

    #[test]
    fn url_parts() {
        let parts = UrlParts::split("https://x/y?a=1?b#f#g");
        assert_eq!(parts.path, "https://x/y");
        assert_eq!(parts.query, Some("a=1?b"));
        assert_eq!(parts.fragment, Some("f#g"));
    }

    #[test]
    fn splice_leaves_other_bytes_untouched() {
        let base = "https://x/y?z=%7E&tr=h-100&a=1+2";
        assert_eq!(
            merge_with(base, "w-50,h-20", MergeStrategy::Splice),
            "https://x/y?z=%7E&tr=w-50%2Ch-20&a=1+2"
        );
    }

    #[test]
    fn reserialize_normalizes_encoding() {
        let base = "https://x/y?z=%7E&tr=h-100&a=1+2";
        assert_eq!(
            merge(base, "w-50"),
            "https://x/y?z=%7E&a=1+2&tr=w-50"
        );
    }

    #[test]
    fn strategy_from_config_string() {
        #[derive(Deserialize)]
        struct Holder {
            s: MergeStrategy,
        }
        let h: Holder = toml::from_str(r#"s = "splice""#).unwrap();
        assert_eq!(h.s, MergeStrategy::Splice);
    }
}
