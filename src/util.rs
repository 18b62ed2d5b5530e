use std::env::VarError;

use anyhow::{Result, anyhow, bail};

/// Get an env var as a String; decoding failures are reported as
/// errors.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

/// Interpret a string as a boolean flag the way our env vars are
/// expected to be written.
pub fn parse_bool_flag(s: &str) -> bool {
    match s {
        "0" | "" | "off" | "false" | "no" => false,
        _ => true
    }
}

/// Unset vars count as false.
pub fn getenv_bool(name: &str) -> Result<bool> {
    Ok(getenv(name)?.map(|s| parse_bool_flag(&s)).unwrap_or(false))
}

/// Parse a numeric env var, with a fallback for when it is unset.
pub fn getenv_usize(name: &str, fallbackvalue: usize) -> Result<usize> {
    match getenv(name)? {
        Some(s) => s.trim().parse().map_err(
            |e| anyhow!("{name:?} env var: can't parse {s:?} as number: {e}")),
        None => Ok(fallbackvalue)
    }
}
