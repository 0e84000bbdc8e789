//! Handler for the `encode` subcommand.
//!
//! Validates the header/payload JSON, signs with the selected
//! algorithm, and prints the display value (`prefix + token`) so stdout
//! doubles as the copy string. `--json` emits a structured object
//! instead.

use anyhow::Result;
use serde_json::json;

use crate::cli::EncodeArgs;
use crate::core::encoder::{encode_token, EncodeRequest, OutputPrefix, SigningAlg};
use crate::display::json_printer;
use crate::error::JwtForgeError;

/// Execute the `encode` subcommand with the given arguments.
pub fn execute(args: &EncodeArgs) -> Result<()> {
    let payload = super::resolve_input(args.payload.as_deref(), None)?
        .ok_or(JwtForgeError::NoPayloadProvided)?;
    let secret = super::resolve_secret(args.secret.as_ref(), args.secret_env.as_deref())?;

    let algorithm = SigningAlg::from(args.algorithm);
    let prefix = OutputPrefix::from(args.prefix);
    let encoded = encode_token(&EncodeRequest {
        header_json: &args.header,
        payload_json: &payload,
        secret: secret.as_ref().map(|s| s.as_str()).unwrap_or(""),
        algorithm,
        prefix,
    })?;

    if args.json {
        let object = json!({
            "token": encoded.token,
            "display": encoded.display,
            "algorithm": algorithm.name(),
            "prefix": prefix.as_str(),
        });
        println!("{}", json_printer::plain_pretty(&object));
    } else {
        println!("{}", encoded.display);
    }

    Ok(())
}
