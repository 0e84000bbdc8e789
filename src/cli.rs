//! CLI argument definitions for jwt-forge.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//! Selector enums (`AlgorithmArg`, `PrefixArg`) live here and convert
//! into the clap-free core enums.
//!
//! # Security
//!
//! `DecodeArgs` and `EncodeArgs` implement custom `Debug` to redact
//! sensitive fields (tokens and secrets) and prevent accidental leakage
//! through debug formatting, error chains, or logging.

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};
use zeroize::Zeroizing;

use crate::core::encoder::{OutputPrefix, SigningAlg};

/// A fast, offline CLI for decoding, verifying, and constructing
/// JSON Web Tokens (JWTs).
#[derive(Debug, Parser)]
#[command(name = "jwt-forge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode a JWT into its header and payload, optionally verifying
    /// the signature.
    Decode(DecodeArgs),

    /// Construct a token from raw header/payload JSON and a signing
    /// algorithm.
    Encode(EncodeArgs),
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The JWT token to decode. If omitted, reads from stdin. A common
    /// scheme prefix (Bearer, Token, JWT, Basic) is stripped
    /// automatically unless --keep-prefix is given.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Verify the signature after decoding. Without a secret the
    /// verification is skipped, which is reported but is not an error.
    #[arg(long)]
    pub verify: bool,

    /// Secret for verification: the HMAC shared secret for HS*, or a
    /// PEM-encoded RSA public key for RS* tokens.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in
    /// shell history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string, allow_hyphen_values = true)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the verification secret from the specified environment
    /// variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Keep a detected scheme prefix instead of stripping it before
    /// decoding.
    #[arg(long)]
    pub keep_prefix: bool,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts token and secret fields.
impl fmt::Debug for DecodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("verify", &self.verify)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("keep_prefix", &self.keep_prefix)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `encode` subcommand.
#[derive(clap::Args)]
pub struct EncodeArgs {
    /// Header JSON. Fields are merged over the generated defaults; the
    /// `alg` field always reflects the selected algorithm.
    #[arg(long, value_name = "JSON", default_value = r#"{"alg":"none","typ":"JWT"}"#)]
    pub header: String,

    /// Payload (claims) JSON. If omitted, reads from stdin.
    #[arg(long, value_name = "JSON")]
    pub payload: Option<String>,

    /// Signing secret: the HMAC key for HS* algorithms, or a
    /// PEM-encoded RSA private key for RS* algorithms. Not used with
    /// `none`.
    ///
    /// WARNING: Passing secrets via CLI arguments may expose them in
    /// shell history. Prefer using --secret-env instead.
    #[arg(long, value_name = "SECRET", value_parser = parse_zeroizing_string, allow_hyphen_values = true)]
    pub secret: Option<Zeroizing<String>>,

    /// Read the signing secret from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub secret_env: Option<String>,

    /// Signing algorithm. `none` produces an unsigned token and is only
    /// suitable for debugging.
    #[arg(long, value_enum, default_value = "none", ignore_case = true)]
    pub algorithm: AlgorithmArg,

    /// Scheme prefix prepended to the printed token. Purely textual,
    /// never part of the signed content.
    #[arg(long, value_enum, default_value = "none", ignore_case = true)]
    pub prefix: PrefixArg,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the secret field.
impl fmt::Debug for EncodeArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodeArgs")
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("secret_env", &self.secret_env)
            .field("algorithm", &self.algorithm)
            .field("prefix", &self.prefix)
            .field("json", &self.json)
            .finish()
    }
}

/// CLI selector for the signing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Unsigned token with an empty signature segment (debug only).
    #[default]
    #[value(name = "none")]
    None,
    #[value(name = "HS256")]
    Hs256,
    #[value(name = "HS384")]
    Hs384,
    #[value(name = "HS512")]
    Hs512,
    #[value(name = "RS256")]
    Rs256,
    #[value(name = "RS384")]
    Rs384,
    #[value(name = "RS512")]
    Rs512,
}

impl From<AlgorithmArg> for SigningAlg {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::None => SigningAlg::None,
            AlgorithmArg::Hs256 => SigningAlg::Hs256,
            AlgorithmArg::Hs384 => SigningAlg::Hs384,
            AlgorithmArg::Hs512 => SigningAlg::Hs512,
            AlgorithmArg::Rs256 => SigningAlg::Rs256,
            AlgorithmArg::Rs384 => SigningAlg::Rs384,
            AlgorithmArg::Rs512 => SigningAlg::Rs512,
        }
    }
}

/// CLI selector for the output prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrefixArg {
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

impl From<PrefixArg> for OutputPrefix {
    fn from(arg: PrefixArg) -> Self {
        match arg {
            PrefixArg::None => OutputPrefix::None,
            PrefixArg::Bearer => OutputPrefix::Bearer,
            PrefixArg::Token => OutputPrefix::Token,
            PrefixArg::Jwt => OutputPrefix::Jwt,
            PrefixArg::Basic => OutputPrefix::Basic,
        }
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_structure_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_decode_args_debug_redacts_sensitive_fields() {
        let cli = Cli::try_parse_from([
            "jwt-forge",
            "decode",
            "my.secret.token",
            "--verify",
            "--secret",
            "hunter2",
        ])
        .unwrap();
        let debug_output = format!("{cli:?}");
        assert!(!debug_output.contains("my.secret.token"));
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_encode_args_debug_redacts_secret() {
        let cli = Cli::try_parse_from([
            "jwt-forge",
            "encode",
            "--payload",
            "{}",
            "--secret",
            "hunter2",
            "--algorithm",
            "HS256",
        ])
        .unwrap();
        let debug_output = format!("{cli:?}");
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_algorithm_arg_accepts_any_case() {
        for spelling in ["HS256", "hs256", "Hs256"] {
            let cli =
                Cli::try_parse_from(["jwt-forge", "encode", "--algorithm", spelling]).unwrap();
            match cli.command {
                Commands::Encode(args) => assert_eq!(args.algorithm, AlgorithmArg::Hs256),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_algorithm_arg_converts_to_core_enum() {
        assert_eq!(SigningAlg::from(AlgorithmArg::None), SigningAlg::None);
        assert_eq!(SigningAlg::from(AlgorithmArg::Rs384), SigningAlg::Rs384);
    }

    #[test]
    fn test_prefix_arg_converts_to_core_enum() {
        assert_eq!(OutputPrefix::from(PrefixArg::Bearer), OutputPrefix::Bearer);
        assert_eq!(OutputPrefix::from(PrefixArg::None), OutputPrefix::None);
    }

    #[test]
    fn test_encode_defaults_match_the_interactive_form() {
        let cli = Cli::try_parse_from(["jwt-forge", "encode"]).unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.header, r#"{"alg":"none","typ":"JWT"}"#);
                assert_eq!(args.algorithm, AlgorithmArg::None);
                assert_eq!(args.prefix, PrefixArg::None);
                assert!(args.payload.is_none());
            }
            _ => unreachable!(),
        }
    }
}
