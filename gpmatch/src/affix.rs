//! Prefix and suffix matching of string labels.
//!
//! A rule label such as `"ab" . x . "yz"` matches a host string if
//! the host starts with `"ab"`, ends with `"yz"`, and
//! the string variable `x` can be bound to whatever lies between.
//! The functions in this module find the boundaries of the literal parts,
//! so that the caller knows where in the host string to resume matching.
//!
//! All positions are byte indices.

/// Test whether `rule` is a prefix of `host`.
///
/// If so, return the index of the host byte directly after the prefix.
///
/// ~~~
/// use gpmatch::affix::match_prefix;
/// assert_eq!(match_prefix("ab", "abcd"), Some(2));
/// assert_eq!(match_prefix("", "abcd"), Some(0));
/// assert_eq!(match_prefix("abcd", "abcd"), Some(4));
/// assert_eq!(match_prefix("bc", "abcd"), None);
/// assert_eq!(match_prefix("abcde", "abcd"), None);
/// ~~~
pub fn match_prefix(rule: &str, host: &str) -> Option<usize> {
    let (rule, host) = (rule.as_bytes(), host.as_bytes());
    if host.starts_with(rule) {
        Some(rule.len())
    } else {
        None
    }
}

/// Test whether `rule` is a suffix of `host`.
///
/// If so, return the index of the host byte directly preceding the suffix.
/// When `rule` equals `host`, nothing precedes the suffix, and
/// the start of the string (0) is returned.
///
/// ~~~
/// use gpmatch::affix::match_suffix;
/// assert_eq!(match_suffix("cd", "abcd"), Some(1));
/// assert_eq!(match_suffix("", "abcd"), Some(3));
/// assert_eq!(match_suffix("abcd", "abcd"), Some(0));
/// assert_eq!(match_suffix("bc", "abcd"), None);
/// ~~~
pub fn match_suffix(rule: &str, host: &str) -> Option<usize> {
    let (rule, host) = (rule.as_bytes(), host.as_bytes());
    if !host.ends_with(rule) {
        return None;
    }
    // `host.len() > rule.len()` unless both are equal
    Some((host.len() - rule.len()).saturating_sub(1))
}

/// Return the part of `host` between a literal `prefix` and `suffix`.
///
/// This is the value that a string variable placed between
/// the two literals has to take.
/// Fails if `host` does not start with `prefix` or does not end with `suffix`,
/// or if prefix and suffix overlap in `host`.
///
/// ~~~
/// use gpmatch::affix::remainder;
/// assert_eq!(remainder("ab", "yz", "abcxyz"), Some("cx"));
/// assert_eq!(remainder("ab", "", "ab"), Some(""));
/// assert_eq!(remainder("ab", "bc", "abc"), None);
/// ~~~
pub fn remainder<'h>(prefix: &str, suffix: &str, host: &'h str) -> Option<&'h str> {
    let start = match_prefix(prefix, host)?;
    let rest = &host[start..];
    match_suffix(suffix, rest)?;
    Some(&rest[..rest.len() - suffix.len()])
}
