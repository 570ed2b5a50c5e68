//! Link Extractor
//!
//! Finds the first well-formed URL in a text fragment. Detection is strictly
//! scheme based: `api.example.com` without a `scheme://` prefix is never a link.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Candidate `scheme://authority...` run, stopping at whitespace and markdown delimiters.
/// A bracketed IPv6 host is allowed directly after `://`.
static LINK_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://(?:\[[0-9A-Fa-f:.]+\])?[^\s<>"'`\[\]{}]*"#)
        .expect("link candidate pattern is valid")
});

/// Characters that end a sentence rather than a URL
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '*', '_', '~'];

/// Return the first syntactically valid URL in `text`, as written.
///
/// The match is returned verbatim (minus trailing punctuation), so
/// `https://api.example.com` stays without a trailing slash.
pub fn find_first_link(text: &str) -> Option<String> {
    LINK_CANDIDATE
        .find_iter(text)
        .map(|m| trim_candidate(m.as_str()))
        .find(|candidate| is_valid_link(candidate))
        .map(String::from)
}

/// Strip sentence punctuation and closing parens that have no opening partner
fn trim_candidate(candidate: &str) -> &str {
    let mut trimmed = candidate;
    loop {
        let next = trimmed.trim_end_matches(TRAILING_PUNCTUATION);
        let next = match next.strip_suffix(')') {
            Some(rest) if next.matches('(').count() < next.matches(')').count() => rest,
            _ => next,
        };
        if next.len() == trimmed.len() {
            return trimmed;
        }
        trimmed = next;
    }
}

/// A link must parse and carry a host (scheme + authority form)
fn is_valid_link(candidate: &str) -> bool {
    Url::parse(candidate)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false)
}
