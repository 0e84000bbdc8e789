//! JWT decoding logic.
//!
//! Splits a token string into its three dot-separated segments,
//! base64url-decodes the header and payload, and parses each as JSON.
//! Decoding requires no key: the signature segment is carried through
//! verbatim for the verifier.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::error::JwtForgeError;

/// The decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of claim data through error chains or
/// debug formatting.
pub struct DecodedToken {
    /// The parsed JWT header (typically contains `alg` and `typ`).
    pub header: Value,
    /// The parsed JWT payload (claims).
    pub payload: Value,
    /// The raw base64url-encoded signature segment, possibly empty.
    pub signature: String,
}

impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Decode a token string into its constituent parts.
///
/// The input must consist of exactly three dot-separated segments. The
/// header and payload segments are base64url-decoded (URL-safe alphabet,
/// no padding) and parsed as JSON; the signature segment is returned
/// as-is and may be empty (unsigned tokens).
///
/// # Errors
///
/// Fails with the malformed-token error family when the segment
/// structure is wrong, a segment is not valid base64url, or a decoded
/// segment is not valid JSON. No partial result is produced.
pub fn decode_token(token: &str) -> Result<DecodedToken, JwtForgeError> {
    let mut segments = token.split('.');
    let (header, payload, signature) = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(h), Some(p), Some(s), None) => (h, p, s),
        _ => return Err(JwtForgeError::MalformedToken),
    };

    Ok(DecodedToken {
        header: decode_json_segment(header, "header")?,
        payload: decode_json_segment(payload, "payload")?,
        signature: signature.to_string(),
    })
}

/// Base64url-decode one segment and parse it as JSON.
fn decode_json_segment(encoded: &str, segment: &'static str) -> Result<Value, JwtForgeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| JwtForgeError::SegmentDecode { segment })?;

    serde_json::from_slice(&bytes).map_err(|e| JwtForgeError::SegmentJson {
        segment,
        reason: e.to_string(),
    })
}
