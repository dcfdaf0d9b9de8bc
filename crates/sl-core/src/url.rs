//! URL normalization and bulk-input parsing
//!
//! These functions are the heuristic gate for user-entered text, not a full
//! URL parser. They operate on the normalized lowercase form throughout.

use std::collections::BTreeMap;

/// Normalize a URL: lowercase, strip a leading `http://`/`https://`, strip a
/// leading `www.`, strip trailing `/` characters.
///
/// Empty input yields an empty string.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let lower = raw.to_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(lower.as_str());
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    rest.trim_end_matches('/').to_string()
}

/// Extract the domain portion: everything before the first `/` of the
/// normalized form.
pub fn extract_domain(url: &str) -> String {
    let normalized = normalize(url);
    match normalized.find('/') {
        Some(pos) => normalized[..pos].to_string(),
        None => normalized,
    }
}

/// Check if a byte is valid inside the label part of a domain.
#[inline]
fn is_label_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_' || b == b'.'
}

/// Check whether a string looks like a valid URL or domain.
///
/// Succeeds only if the normalized, non-empty string is one or more label
/// characters, then a dot, then a 2+ letter TLD, then an optional path.
pub fn is_valid_url_or_domain(s: &str) -> bool {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return false;
    }

    let host = match normalized.find('/') {
        Some(pos) => &normalized[..pos],
        None => normalized.as_str(),
    };

    let (labels, tld) = match host.rsplit_once('.') {
        Some(parts) => parts,
        None => return false,
    };

    !labels.is_empty()
        && tld.len() >= 2
        && labels.bytes().all(is_label_byte)
        && tld.bytes().all(|b| b.is_ascii_lowercase())
}

/// Split free-form pasted text into URL tokens.
///
/// Separators are runs of whitespace (including newlines) and commas. Input
/// order is preserved; no de-duplication and no normalization happens here.
pub fn parse_bulk_urls(input: &str) -> Vec<String> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Group URLs by their extracted domain, preserving input order per group.
pub fn group_urls_by_domain(urls: &[String]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for url in urls {
        groups.entry(extract_domain(url)).or_default().push(url.clone());
    }
    groups
}
