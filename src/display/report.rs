//! Decode report rendering.
//!
//! The command layer assembles a [`DecodeReport`]; this module turns it
//! into either the human-readable sectioned output or a single
//! machine-readable JSON object. The core never prints; it hands the
//! exact strings here.

use colored::Colorize;
use serde_json::{json, Value};

use crate::core::decoder::DecodedToken;
use crate::core::prefix::DetectedPrefix;
use crate::core::verifier::VerificationStatus;
use crate::display::json_printer;

/// Everything a successful decode produced, ready for rendering.
pub struct DecodeReport {
    /// The decoded header and payload plus the raw signature segment.
    pub decoded: DecodedToken,
    /// Which prefix pattern fired on the raw input.
    pub prefix: DetectedPrefix,
    /// The token string that was actually decoded (prefix-stripped or
    /// not).
    pub processed_token: String,
    /// Outcome of the optional signature verification.
    pub verification: VerificationStatus,
    /// Whether verification was requested at all; distinguishes
    /// "skipped, no secret" from "not asked for".
    pub verify_requested: bool,
}

/// Render the report to stdout.
pub fn render_decode(report: &DecodeReport, machine: bool) {
    if machine {
        println!("{}", json_printer::plain_pretty(&machine_object(report)));
        return;
    }

    println!("{}", "--- Header ---".bold());
    json_printer::print_json(&report.decoded.header, true);
    println!();
    println!("{}", "--- Payload ---".bold());
    json_printer::print_json(&report.decoded.payload, true);
    println!();
    println!("{}", "--- Token ---".bold());
    if report.prefix != DetectedPrefix::RawJwt {
        println!("Detected prefix: {}", report.prefix.name());
    }
    println!("Processed token: {}", report.processed_token);
    println!("{}", signature_line(report));
}

/// The signature status line, colored by outcome.
fn signature_line(report: &DecodeReport) -> String {
    match &report.verification {
        VerificationStatus::Valid => format!("Signature: {}", "VALID".green().bold()),
        VerificationStatus::Invalid { reason } => {
            format!("Signature: {} ({reason})", "INVALID".red().bold())
        }
        VerificationStatus::NotAttempted if report.verify_requested => format!(
            "Signature: {}",
            "skipped (no secret provided)".yellow()
        ),
        VerificationStatus::NotAttempted if report.decoded.signature.is_empty() => {
            "Signature: none (unsigned token)".to_string()
        }
        VerificationStatus::NotAttempted => "Signature: not checked".to_string(),
    }
}

/// One JSON object for `--json` mode.
fn machine_object(report: &DecodeReport) -> Value {
    let reason = match &report.verification {
        VerificationStatus::Invalid { reason } => Value::String(reason.clone()),
        _ => Value::Null,
    };
    json!({
        "header": report.decoded.header,
        "payload": report.decoded.payload,
        "prefix": report.prefix.name(),
        "processed_token": report.processed_token,
        "signature": {
            "status": report.verification.label(),
            "reason": reason,
            "present": !report.decoded.signature.is_empty(),
        },
    })
}
