//! Backslash escape codec and wildcard accounting.
//!
//! Query syntax reserves a number of characters (operators, grouping,
//! punctuation with grammar meaning); values carry them behind `\`. This
//! module decodes such values, re-encodes tokens headed back into query
//! syntax, and counts the wildcard markers that remain active after
//! escaping is accounted for.

use thiserror::Error;

/// Characters that must be escaped when a bare token is re-serialized into
/// query syntax. Sorted and deduplicated; `contains` relies on the order
/// only for readability, membership is what matters.
///
/// `A`, `a`, `O`, `o` are included so that re-emitted tokens can never be
/// mistaken for the AND/OR operator keywords.
pub const NEEDS_ESCAPES: &[char] = &[
    '\t', '\n', '\x0C', '\r', '!', '"', '#', '$', '&', '\'', '(', ')', ',', '.', '/', ':', '<',
    '=', '>', '@', 'A', 'O', '[', ']', '^', 'a', 'o',
];

/// Failure decoding a backslash-escaped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    /// The value ended in a lone `\` with nothing left to escape.
    #[error("invalid escape sequence at end of string")]
    TrailingBackslash,
}

/// Decode `\x` sequences to their literal character.
///
/// A trailing unmatched `\` is an error, never silent truncation.
///
/// ```
/// use quarry_core::escape::unescape;
/// assert_eq!(unescape(r"a\*b").unwrap(), "a*b");
/// assert_eq!(unescape("plain").unwrap(), "plain");
/// assert!(unescape(r"oops\").is_err());
/// ```
pub fn unescape(s: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => return Err(EscapeError::TrailingBackslash),
            }
        } else {
            out.push(ch);
        }
    }
    Ok(out)
}

/// Prefix every character from `needs_escape` with `\`.
///
/// Inverse direction of [`unescape`], used when a token is re-serialized
/// into query syntax. Pass [`NEEDS_ESCAPES`] for the full reserved set.
pub fn escape(s: &str, needs_escape: &[char]) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if needs_escape.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Count the wildcard markers (`*`, `?`, `~`) that are active, i.e. not
/// themselves escaped.
///
/// Escaping is tracked with an alternating flag rather than a full
/// backslash count, so `\\*` reads as "literal backslash, active wildcard"
/// while `\*` reads as a literal asterisk. This matches the classifier's
/// tolerance for doubled-backslash idioms.
pub fn count_valid_wildcards(s: &str) -> usize {
    let mut active = 0;
    let mut in_escape = false;

    for ch in s.chars() {
        if matches!(ch, '*' | '?' | '~') && !in_escape {
            active += 1;
        }
        in_escape = !in_escape && ch == '\\';
    }

    active
}
