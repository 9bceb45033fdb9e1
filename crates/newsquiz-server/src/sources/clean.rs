//! Text cleanup for upstream content

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static NUMERIC_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("valid entity pattern"));
// NewsAPI cuts `content` at 200 chars and appends "… [+1234 chars]"
static TRUNCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*(?:…|\.\.\.)?\s*\[\+\d+ chars\]\s*$").expect("valid truncation pattern")
});

const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lsquo;", "‘"),
    ("&rsquo;", "’"),
    ("&ldquo;", "“"),
    ("&rdquo;", "”"),
    ("&mdash;", "—"),
    ("&ndash;", "–"),
    ("&hellip;", "…"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    // last, so "&amp;lt;" decodes to "&lt;" and not "<"
    ("&amp;", "&"),
];

/// Collapse runs of whitespace to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Remove HTML tags and decode common entities, leaving plain text
pub fn strip_html(text: &str) -> String {
    let without_tags = TAG_RE.replace_all(text, " ");
    let numeric = NUMERIC_ENTITY_RE.replace_all(&without_tags, |caps: &regex::Captures| {
        let code = &caps[1];
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        value
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });
    let mut decoded = numeric.into_owned();
    for (entity, replacement) in NAMED_ENTITIES {
        decoded = decoded.replace(entity, replacement);
    }
    collapse_whitespace(&decoded)
}

/// Remove NewsAPI's "[+N chars]" truncation marker
pub fn strip_truncation_marker(text: &str) -> String {
    TRUNCATION_RE.replace(text, "").into_owned()
}

/// Normalise a feed date to RFC 3339 (UTC); unparseable dates are kept as-is
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw));
    Some(match parsed {
        Ok(date) => date
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => raw.to_string(),
    })
}

/// Stable short id for content without an upstream id
pub fn document_id(seed: &str) -> String {
    let digest = Sha256::digest(seed.trim().as_bytes());
    hex::encode(digest)[..16].to_string()
}

/// arXiv id from an entry id URL (`http://arxiv.org/abs/2401.01234v1` → `2401.01234v1`)
pub fn arxiv_id(entry_id: &str) -> String {
    entry_id
        .trim()
        .trim_end_matches('/')
        .rsplit("/abs/")
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>AT&amp;T said &#8220;hi&#8221;&nbsp;<b>today</b>.</p>\n\n"),
            "AT&T said “hi” today ."
        );
    }

    #[test]
    fn test_truncation_marker() {
        assert_eq!(
            strip_truncation_marker("The launch went well… [+2345 chars]"),
            "The launch went well"
        );
        assert_eq!(strip_truncation_marker("No marker here."), "No marker here.");
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(
            normalize_date("Tue, 10 Jun 2025 14:30:00 +0200").as_deref(),
            Some("2025-06-10T12:30:00Z")
        );
        assert_eq!(
            normalize_date("2024-01-05T18:00:00Z").as_deref(),
            Some("2024-01-05T18:00:00Z")
        );
        assert_eq!(normalize_date("yesterday").as_deref(), Some("yesterday"));
        assert_eq!(normalize_date("  "), None);
    }

    #[test]
    fn test_ids() {
        let id = document_id("https://example.com/a");
        assert_eq!(id.len(), 16);
        assert_eq!(id, document_id(" https://example.com/a "));
        assert_eq!(arxiv_id("http://arxiv.org/abs/2401.01234v1"), "2401.01234v1");
        assert_eq!(arxiv_id("http://arxiv.org/abs/hep-th/9901001v2"), "hep-th/9901001v2");
    }
}
