//! Wildcard pattern matching for allow/block list rules

use log::warn;
use regex::Regex;

use crate::url::normalize;

/// Check if a URL matches a wildcard pattern.
///
/// Both operands are normalized first. The pattern is a literal string
/// except `*`, which matches any run of characters (including empty).
/// Matching is anchored at both ends and case-insensitive.
pub fn matches_pattern(url: &str, pattern: &str) -> bool {
    let url = normalize(url);
    let pattern = normalize(pattern);

    // Escape every regex metacharacter, then turn the escaped `*` back into
    // a wildcard.
    let compiled = regex::escape(&pattern).replace("\\*", ".*");

    match Regex::new(&format!("^(?i){compiled}$")) {
        Ok(re) => re.is_match(&url),
        Err(err) => {
            warn!("wildcard pattern {pattern:?} failed to compile: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_subdomain() {
        assert!(matches_pattern("sub.example.com", "*.example.com"));
        assert!(!matches_pattern("example.org", "*.example.com"));
    }

    #[test]
    fn test_wildcard_matches_empty_run() {
        assert!(matches_pattern("example.com", "example*.com"));
        assert!(matches_pattern("example-extra.com", "example*.com"));
    }

    #[test]
    fn test_exact_pattern_without_wildcard() {
        assert!(matches_pattern("https://www.example.com/", "example.com"));
        assert!(!matches_pattern("example.com/path", "example.com"));
    }

    #[test]
    fn test_anchored_both_ends() {
        assert!(!matches_pattern("sub.example.com.evil.org", "*.example.com"));
        assert!(!matches_pattern("prefix-example.com", "example.com"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        // '.' must not act as a regex wildcard
        assert!(!matches_pattern("exampleXcom", "example.com"));
        // '+', '?', parens, brackets stay literal
        assert!(matches_pattern("a+b.com", "a+b.com"));
        assert!(matches_pattern("odd?.com", "odd?.com"));
        assert!(matches_pattern("x(1).com", "x(1).com"));
        assert!(matches_pattern("x[1].com", "x[1].com"));
        assert!(!matches_pattern("ab.com", "a+b.com"));
    }

    #[test]
    fn test_multiple_wildcards() {
        assert!(matches_pattern("cdn.media.example.com/video", "*.example.com/*"));
        assert!(!matches_pattern("cdn.media.example.com", "*.example.com/*"));
    }
}
