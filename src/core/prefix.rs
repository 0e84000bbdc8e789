//! Authorization-scheme prefix detection and stripping.
//!
//! Tokens pasted from HTTP headers often carry a scheme prefix such as
//! `Bearer ` or `Token `. This module classifies a raw input string
//! against the common conventions and optionally removes the prefix
//! before the token reaches the decode pipeline.
//!
//! Detection is pure and deterministic: patterns are tested in a fixed
//! priority order and the first match wins. Absence of a match is a
//! valid outcome, never an error.

/// A recognized authorization-scheme prefix, or the lack of one.
///
/// Ordering here is the detection priority: `Bearer` > `Token` > `JWT`
/// > `Basic` > raw `eyJ...` heuristic > `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedPrefix {
    /// `Bearer <token>`
    Bearer,
    /// `Token <token>`
    Token,
    /// `JWT <token>`
    Jwt,
    /// `Basic <credentials>`
    Basic,
    /// No scheme prefix, but the input starts with `eyJ` (the base64url
    /// encoding of `{"`), i.e. a bare JWT.
    RawJwt,
    /// Nothing recognized.
    Unknown,
}

impl DetectedPrefix {
    /// Human-readable name, as shown in reports.
    pub fn name(&self) -> &'static str {
        match self {
            DetectedPrefix::Bearer => "Bearer",
            DetectedPrefix::Token => "Token",
            DetectedPrefix::Jwt => "JWT",
            DetectedPrefix::Basic => "Basic",
            DetectedPrefix::RawJwt => "Raw JWT",
            DetectedPrefix::Unknown => "Unknown",
        }
    }
}

/// The outcome of prefix detection and optional stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedToken {
    /// The token string to hand to the decode pipeline.
    pub token: String,
    /// Which prefix pattern fired.
    pub prefix: DetectedPrefix,
}

/// Scheme words tested in priority order. Each must be followed by at
/// least one whitespace character to count as a prefix.
const SCHEME_PREFIXES: [(DetectedPrefix, &str); 4] = [
    (DetectedPrefix::Bearer, "Bearer"),
    (DetectedPrefix::Token, "Token"),
    (DetectedPrefix::Jwt, "JWT"),
    (DetectedPrefix::Basic, "Basic"),
];

/// Classify `raw` by its authorization-scheme prefix and optionally
/// strip it.
///
/// Surrounding whitespace is ignored for detection. When `strip` is true
/// and a scheme prefix matched, the returned token is the remainder
/// after the prefix and its trailing whitespace, trimmed. In every other
/// case (raw JWT, unknown input, or stripping disabled) the input is
/// passed through unchanged.
pub fn clean_token(raw: &str, strip: bool) -> CleanedToken {
    let trimmed = raw.trim();

    for (prefix, word) in SCHEME_PREFIXES {
        if let Some(rest) = match_scheme(trimmed, word) {
            let token = if strip {
                rest.trim_end().to_string()
            } else {
                raw.to_string()
            };
            return CleanedToken { token, prefix };
        }
    }

    let prefix = if starts_with_ignore_case(trimmed, "eyJ") {
        DetectedPrefix::RawJwt
    } else {
        DetectedPrefix::Unknown
    };
    CleanedToken {
        token: raw.to_string(),
        prefix,
    }
}

/// Match `word` case-insensitively at the start of `s`, requiring at
/// least one whitespace character after it. Returns the remainder after
/// the whitespace run.
fn match_scheme<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    if !starts_with_ignore_case(s, word) {
        return None;
    }
    let rest = &s[word.len()..];
    let stripped = rest.trim_start();
    if stripped.len() == rest.len() {
        // No whitespace after the scheme word, so it is not a prefix
        // ("Tokenized..." must not match "Token").
        return None;
    }
    Some(stripped)
}

/// ASCII case-insensitive prefix test that never panics on multi-byte
/// input.
fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
