//! Handler for the `decode` subcommand.
//!
//! Runs the full decode path: input resolution, prefix
//! detection/stripping, segment decoding, and the optional signature
//! verification. Verification failure never suppresses the decoded
//! output; the handler returns the status so `main` can reflect it in
//! the exit code.

use anyhow::Result;

use crate::cli::DecodeArgs;
use crate::core::decoder::decode_token;
use crate::core::prefix::clean_token;
use crate::core::verifier::{verify_token, VerificationStatus};
use crate::display::report::{render_decode, DecodeReport};
use crate::error::JwtForgeError;

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<VerificationStatus> {
    let raw = super::resolve_input(args.token.as_deref(), args.token_env.as_deref())?
        .ok_or(JwtForgeError::NoTokenProvided)?;
    if raw.trim().is_empty() {
        return Err(JwtForgeError::NoTokenProvided.into());
    }

    let cleaned = clean_token(&raw, !args.keep_prefix);
    let decoded = decode_token(&cleaned.token)?;

    let secret = super::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;
    // Verify against the exact string that was decoded.
    let verification = verify_token(
        &cleaned.token,
        args.verify,
        secret.as_ref().map(|s| s.as_str()),
    );

    let report = DecodeReport {
        decoded,
        prefix: cleaned.prefix,
        processed_token: cleaned.token,
        verification: verification.clone(),
        verify_requested: args.verify,
    };
    render_decode(&report, args.json);

    Ok(verification)
}
