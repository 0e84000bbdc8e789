//! Signature verification, independent of decoding.
//!
//! Verification is a follow-up operation on a token that already
//! decoded successfully: its outcome never prevents the header and
//! payload from being reported. A cryptographic failure therefore maps
//! to [`VerificationStatus::Invalid`] with a human-readable reason
//! instead of an error.

use std::collections::HashSet;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;

/// The outcome of a signature verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    /// The signature is cryptographically valid and temporal claims
    /// (when present) hold.
    Valid,
    /// Verification was attempted and failed.
    Invalid {
        /// Human-readable reason for the failure.
        reason: String,
    },
    /// Verification was not requested, or no secret was supplied.
    NotAttempted,
}

impl VerificationStatus {
    /// Stable status label used in machine-readable output.
    pub fn label(&self) -> &'static str {
        match self {
            VerificationStatus::Valid => "valid",
            VerificationStatus::Invalid { .. } => "invalid",
            VerificationStatus::NotAttempted => "not_attempted",
        }
    }
}

/// Verify a token's signature with the supplied secret, if verification
/// was requested at all.
///
/// `token` must be the exact string that was decoded (prefix-stripped or
/// not, whichever the decode pipeline actually consumed). Returns
/// [`VerificationStatus::NotAttempted`] when `requested` is false or the
/// secret is absent/empty, a distinct, non-error outcome.
///
/// The algorithm is taken from the token header: HS256/384/512 use the
/// secret directly as the HMAC key, RS256/384/512 expect the secret to
/// hold a PEM-encoded RSA public key. Anything else is reported as
/// unsupported.
pub fn verify_token(token: &str, requested: bool, secret: Option<&str>) -> VerificationStatus {
    if !requested {
        return VerificationStatus::NotAttempted;
    }
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return VerificationStatus::NotAttempted;
    };

    let header = match jsonwebtoken::decode_header(token) {
        Ok(header) => header,
        Err(e) => {
            return VerificationStatus::Invalid {
                reason: failure_reason(e.kind()),
            }
        }
    };

    let key = match decoding_key_for(header.alg, secret) {
        Ok(key) => key,
        Err(reason) => return VerificationStatus::Invalid { reason },
    };

    // No claim is required to be present and audiences are not matched;
    // `exp`/`nbf` are checked only when the payload carries them.
    let mut validation = Validation::new(header.alg);
    validation.required_spec_claims = HashSet::new();
    validation.validate_aud = false;
    validation.validate_nbf = true;

    match decode::<Value>(token, &key, &validation) {
        Ok(_) => VerificationStatus::Valid,
        Err(e) => VerificationStatus::Invalid {
            reason: failure_reason(e.kind()),
        },
    }
}

/// Build the decoding key appropriate for the token's declared algorithm.
fn decoding_key_for(alg: Algorithm, secret: &str) -> Result<DecodingKey, String> {
    match alg {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(DecodingKey::from_secret(secret.as_bytes()))
        }
        Algorithm::RS256 | Algorithm::RS384 | Algorithm::RS512 => {
            DecodingKey::from_rsa_pem(secret.as_bytes())
                .map_err(|_| "secret is not a valid PEM-encoded RSA public key".to_string())
        }
        other => Err(format!(
            "algorithm {other:?} is not supported for secret-based verification"
        )),
    }
}

/// Map a `jsonwebtoken` error kind to a stable, user-facing reason.
fn failure_reason(kind: &ErrorKind) -> String {
    match kind {
        ErrorKind::InvalidSignature => "signature does not match".to_string(),
        ErrorKind::ExpiredSignature => "token has expired".to_string(),
        ErrorKind::ImmatureSignature => "token is not yet valid".to_string(),
        ErrorKind::InvalidAlgorithm => "algorithm mismatch between token and key".to_string(),
        ErrorKind::InvalidAlgorithmName => "unrecognized algorithm in token header".to_string(),
        ErrorKind::InvalidKeyFormat => "key material is not valid for this algorithm".to_string(),
        ErrorKind::Base64(_) => "signature segment is not valid base64url".to_string(),
        ErrorKind::Json(_) => "token header does not declare a supported algorithm".to_string(),
        ErrorKind::InvalidToken => "token does not have the expected structure".to_string(),
        other => format!("{other:?}"),
    }
}
