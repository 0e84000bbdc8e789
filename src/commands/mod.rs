//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes
//! a single `execute` function that receives the parsed arguments.
//! Shared input resolution (argument → environment variable → stdin)
//! lives here.

pub mod decode;
pub mod encode;

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use zeroize::Zeroizing;

use crate::error::JwtForgeError;

/// Resolve an input value from an explicit argument, a named
/// environment variable, or piped stdin, in that order.
///
/// Stdin is only consulted when it is not a terminal; its content is
/// trimmed (tolerating trailing newlines from `echo`/heredocs) and an
/// empty read counts as no input. Returns `None` when nothing was
/// supplied; the caller decides whether that is an error.
fn resolve_input(arg: Option<&str>, env_var: Option<&str>) -> Result<Option<String>> {
    if let Some(value) = arg {
        return Ok(Some(value.to_string()));
    }

    if let Some(name) = env_var {
        let value = std::env::var(name).map_err(|_| JwtForgeError::EnvVarNotFound {
            name: name.to_string(),
        })?;
        return Ok(Some(value));
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Resolve a secret from `--secret` or `--secret-env`, keeping it
/// zeroized. Secrets are never read from stdin, which is reserved for
/// the token/payload.
fn resolve_secret(
    arg: Option<&Zeroizing<String>>,
    env_var: Option<&str>,
) -> Result<Option<Zeroizing<String>>> {
    if let Some(secret) = arg {
        return Ok(Some(secret.clone()));
    }
    if let Some(name) = env_var {
        let value = std::env::var(name).map_err(|_| JwtForgeError::EnvVarNotFound {
            name: name.to_string(),
        })?;
        return Ok(Some(Zeroizing::new(value)));
    }
    Ok(None)
}
