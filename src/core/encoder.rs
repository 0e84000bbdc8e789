//! Token construction: validate JSON inputs, build the header, sign.
//!
//! The encode pipeline is a linear validate → parse → sign sequence
//! with no retries; identical inputs always produce identical output.
//! Signing operates on the raw base64url signing input via
//! `jsonwebtoken::crypto`, so arbitrary user-supplied header fields
//! survive verbatim instead of being squeezed through a fixed header
//! struct.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{Algorithm, EncodingKey};
use serde_json::{Map, Value};

use crate::error::JwtForgeError;

/// Signing algorithms offered on the encode side.
///
/// `None` produces an unsigned token with an empty signature segment.
/// It exists for debugging and interoperability experiments only and is
/// never suitable for production verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlg {
    /// No signature (empty signature segment).
    #[default]
    None,
    /// HMAC with SHA-256.
    Hs256,
    /// HMAC with SHA-384.
    Hs384,
    /// HMAC with SHA-512.
    Hs512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-384.
    Rs384,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    Rs512,
}

impl SigningAlg {
    /// The algorithm name as it appears in the token header.
    pub fn name(&self) -> &'static str {
        match self {
            SigningAlg::None => "none",
            SigningAlg::Hs256 => "HS256",
            SigningAlg::Hs384 => "HS384",
            SigningAlg::Hs512 => "HS512",
            SigningAlg::Rs256 => "RS256",
            SigningAlg::Rs384 => "RS384",
            SigningAlg::Rs512 => "RS512",
        }
    }

    /// Whether signing needs a secret at all.
    pub fn requires_secret(&self) -> bool {
        !matches!(self, SigningAlg::None)
    }

    /// The `jsonwebtoken` algorithm, or `None` for unsigned tokens.
    fn jwt_algorithm(&self) -> Option<Algorithm> {
        match self {
            SigningAlg::None => None,
            SigningAlg::Hs256 => Some(Algorithm::HS256),
            SigningAlg::Hs384 => Some(Algorithm::HS384),
            SigningAlg::Hs512 => Some(Algorithm::HS512),
            SigningAlg::Rs256 => Some(Algorithm::RS256),
            SigningAlg::Rs384 => Some(Algorithm::RS384),
            SigningAlg::Rs512 => Some(Algorithm::RS512),
        }
    }
}

/// Scheme prefix prepended to the encoded token for display/copy.
///
/// Purely textual: the prefix never enters the signed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPrefix {
    /// No prefix.
    #[default]
    None,
    /// `Bearer <token>`
    Bearer,
    /// `Token <token>`
    Token,
    /// `JWT <token>`
    Jwt,
    /// `Basic <token>`
    Basic,
}

impl OutputPrefix {
    /// The literal text prepended to the token (including the trailing
    /// space), or the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputPrefix::None => "",
            OutputPrefix::Bearer => "Bearer ",
            OutputPrefix::Token => "Token ",
            OutputPrefix::Jwt => "JWT ",
            OutputPrefix::Basic => "Basic ",
        }
    }
}

/// Everything the encode pipeline needs for one token.
#[derive(Clone, Copy)]
pub struct EncodeRequest<'a> {
    /// Header JSON text; must parse to a JSON object.
    pub header_json: &'a str,
    /// Payload (claims) JSON text; must parse to a JSON object.
    pub payload_json: &'a str,
    /// Signing secret: raw HMAC key for HS*, PEM private key for RS*,
    /// ignored for `none`.
    pub secret: &'a str,
    /// The selected signing algorithm.
    pub algorithm: SigningAlg,
    /// Prefix for the display value.
    pub prefix: OutputPrefix,
}

/// A freshly constructed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    /// The bare token string.
    pub token: String,
    /// The display/copy value: `prefix + token`.
    pub display: String,
}

/// Construct a signed (or unsigned) token from raw JSON inputs.
///
/// Header and payload are validated independently so the failing field
/// can be identified. The final header starts from
/// `{"alg": <selected>, "typ": "JWT"}`, takes the user's fields on top,
/// and then forces `alg` back to the selected algorithm. The header can
/// therefore never disagree with how the token was actually signed.
///
/// # Errors
///
/// Fails with `InvalidHeaderJson`/`InvalidPayloadJson` on syntactically
/// invalid (or non-object) inputs, `MissingSecret` when a signing
/// algorithm was selected without a secret, and `Signing` on bad key
/// material. No partial output is produced.
pub fn encode_token(request: &EncodeRequest<'_>) -> Result<EncodedToken, JwtForgeError> {
    let header_overrides = parse_object(request.header_json)
        .map_err(|reason| JwtForgeError::InvalidHeaderJson { reason })?;
    let payload = parse_object(request.payload_json)
        .map_err(|reason| JwtForgeError::InvalidPayloadJson { reason })?;

    if request.algorithm.requires_secret() && request.secret.is_empty() {
        return Err(JwtForgeError::MissingSecret {
            algorithm: request.algorithm.name().to_string(),
        });
    }

    let header = finalize_header(header_overrides, request.algorithm);
    let signing_input = format!(
        "{}.{}",
        encode_segment(&Value::Object(header))?,
        encode_segment(&Value::Object(payload))?
    );

    let token = match request.algorithm.jwt_algorithm() {
        None => format!("{signing_input}."),
        Some(algorithm) => {
            let key = encoding_key_for(algorithm, request.secret)?;
            let signature = jsonwebtoken::crypto::sign(signing_input.as_bytes(), &key, algorithm)
                .map_err(|e| JwtForgeError::Signing {
                    reason: e.to_string(),
                })?;
            format!("{signing_input}.{signature}")
        }
    };

    let display = format!("{}{token}", request.prefix.as_str());
    Ok(EncodedToken { token, display })
}

/// Parse a JSON text and require it to be an object.
fn parse_object(text: &str) -> Result<Map<String, Value>, String> {
    let value: Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!(
            "must be a JSON object, got {}",
            json_type_name(&other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Merge the user header over the defaults, then force `alg` to the
/// selected algorithm.
fn finalize_header(overrides: Map<String, Value>, algorithm: SigningAlg) -> Map<String, Value> {
    let mut header = Map::new();
    header.insert("alg".to_string(), Value::String(algorithm.name().to_string()));
    header.insert("typ".to_string(), Value::String("JWT".to_string()));
    for (key, value) in overrides {
        header.insert(key, value);
    }
    header.insert("alg".to_string(), Value::String(algorithm.name().to_string()));
    header
}

/// Serialize a JSON value and base64url-encode it (no padding).
fn encode_segment(value: &Value) -> Result<String, JwtForgeError> {
    let bytes = serde_json::to_vec(value).map_err(|e| JwtForgeError::Signing {
        reason: e.to_string(),
    })?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Build the encoding key appropriate for the selected algorithm.
fn encoding_key_for(algorithm: Algorithm, secret: &str) -> Result<EncodingKey, JwtForgeError> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(EncodingKey::from_secret(secret.as_bytes()))
        }
        _ => EncodingKey::from_rsa_pem(secret.as_bytes()).map_err(|e| JwtForgeError::Signing {
            reason: format!("invalid RSA private key: {e}"),
        }),
    }
}
