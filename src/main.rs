//! jwt-forge: a fast, offline CLI for decoding, verifying, and
//! constructing JSON Web Tokens.
//!
//! Entry point for the application. Parses CLI arguments and delegates
//! to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::core::verifier::VerificationStatus;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and dispatch to the appropriate command handler.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors (including `Zeroizing`) to run.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Decode(args) => {
            let verification = commands::decode::execute(args)?;
            // A decode that was asked to verify and failed still prints
            // the full report, but the exit code reflects the failure.
            Ok(match verification {
                VerificationStatus::Invalid { .. } => ExitCode::FAILURE,
                _ => ExitCode::SUCCESS,
            })
        }
        Commands::Encode(args) => {
            commands::encode::execute(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
