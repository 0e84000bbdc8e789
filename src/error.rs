//! Domain error types for jwt-forge.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.
//!
//! Verification failure is deliberately *not* an error: decoding and
//! verifying are independent outcomes, so a bad signature is reported as
//! a [`VerificationStatus`](crate::core::verifier::VerificationStatus)
//! alongside the decoded output instead of aborting the pipeline.

use thiserror::Error;

/// Errors that can occur during JWT decode and encode operations.
#[derive(Debug, Error)]
pub enum JwtForgeError {
    /// The token does not have the expected three-part structure.
    #[error("malformed token: expected 'header.payload.signature' structure")]
    MalformedToken,

    /// A token segment is not valid base64url.
    #[error("malformed token: {segment} segment is not valid base64url")]
    SegmentDecode {
        /// Which segment failed to decode ("header" or "payload").
        segment: &'static str,
    },

    /// A decoded token segment is not valid JSON.
    #[error("malformed token: {segment} segment is not valid JSON: {reason}")]
    SegmentJson {
        /// Which segment failed to parse ("header" or "payload").
        segment: &'static str,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The header text supplied to the encode pipeline is not valid JSON.
    #[error("invalid header JSON: {reason}")]
    InvalidHeaderJson {
        /// Description of the validation failure.
        reason: String,
    },

    /// The payload text supplied to the encode pipeline is not valid JSON.
    #[error("invalid payload JSON: {reason}")]
    InvalidPayloadJson {
        /// Description of the validation failure.
        reason: String,
    },

    /// Signing failed (bad key material or unusable algorithm/key combination).
    #[error("signing failed: {reason}")]
    Signing {
        /// Description of the signing failure.
        reason: String,
    },

    /// The selected algorithm needs a signing secret but none was given.
    #[error("algorithm {algorithm} requires a signing secret: pass --secret or --secret-env")]
    MissingSecret {
        /// The algorithm that was selected.
        algorithm: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// No payload JSON was provided via any input method.
    #[error("no payload provided: pass claims JSON via --payload or through stdin")]
    NoPayloadProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_token_display() {
        let err = JwtForgeError::MalformedToken;
        assert_eq!(
            err.to_string(),
            "malformed token: expected 'header.payload.signature' structure"
        );
    }

    #[test]
    fn test_segment_decode_display_includes_segment() {
        let err = JwtForgeError::SegmentDecode { segment: "header" };
        assert_eq!(
            err.to_string(),
            "malformed token: header segment is not valid base64url"
        );
    }

    #[test]
    fn test_segment_json_display_includes_segment_and_reason() {
        let err = JwtForgeError::SegmentJson {
            segment: "payload",
            reason: "unexpected EOF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed token: payload segment is not valid JSON: unexpected EOF"
        );
    }

    #[test]
    fn test_invalid_header_json_display() {
        let err = JwtForgeError::InvalidHeaderJson {
            reason: "trailing comma at line 3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid header JSON: trailing comma at line 3"
        );
    }

    #[test]
    fn test_invalid_payload_json_display() {
        let err = JwtForgeError::InvalidPayloadJson {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid payload JSON: expected value at line 1"
        );
    }

    #[test]
    fn test_signing_display() {
        let err = JwtForgeError::Signing {
            reason: "InvalidRsaKey".to_string(),
        };
        assert_eq!(err.to_string(), "signing failed: InvalidRsaKey");
    }

    #[test]
    fn test_missing_secret_display_names_algorithm() {
        let err = JwtForgeError::MissingSecret {
            algorithm: "HS256".to_string(),
        };
        assert!(err.to_string().contains("HS256"));
        assert!(err.to_string().contains("--secret"));
    }

    #[test]
    fn test_no_token_provided_display() {
        let err = JwtForgeError::NoTokenProvided;
        assert!(err.to_string().contains("no token provided"));
        assert!(err.to_string().contains("--token-env"));
        assert!(err.to_string().contains("stdin"));
    }

    #[test]
    fn test_no_payload_provided_display() {
        let err = JwtForgeError::NoPayloadProvided;
        assert!(err.to_string().contains("no payload provided"));
        assert!(err.to_string().contains("--payload"));
    }

    #[test]
    fn test_env_var_not_found_display() {
        let err = JwtForgeError::EnvVarNotFound {
            name: "JWT_TOKEN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "environment variable 'JWT_TOKEN' is not set"
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JwtForgeError>();
    }
}
