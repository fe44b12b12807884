//! Utilities for the witness scripts.

use std::{fs, path::Path, str::FromStr};

use alloy_primitives::U256;
use serde_json::Value;
use tracing::Level;

use crate::{cli::LogMode, errors::ScriptError};

/// Installs the global logger for the given mode
pub fn setup_logging(mode: LogMode) {
    let builder = tracing_subscriber::fmt();
    match mode {
        LogMode::Development => builder.pretty().with_max_level(Level::DEBUG).init(),
        LogMode::Production => builder.compact().with_max_level(Level::INFO).init(),
    }
}

/// Parses an unsigned integer given in decimal or `0x`-prefixed hex
pub fn parse_u256(s: &str) -> Result<U256, ScriptError> {
    U256::from_str(s.trim()).map_err(|e| ScriptError::ArgumentParsing(format!("{s:?}: {e}")))
}

/// Parses a list of unsigned integers, see [`parse_u256`]
pub fn parse_u256s<S: AsRef<str>>(values: &[S]) -> Result<Vec<U256>, ScriptError> {
    values.iter().map(|s| parse_u256(s.as_ref())).collect()
}

/// Decodes a hex string, with or without a `0x` prefix
pub fn parse_hex(s: &str) -> Result<Vec<u8>, ScriptError> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(stripped).map_err(|e| ScriptError::ArgumentParsing(format!("{s:?}: {e}")))
}

/// Writes a JSON document to `path`, pretty-printed
pub fn write_json(path: &Path, doc: &Value) -> Result<(), ScriptError> {
    let contents =
        serde_json::to_string_pretty(doc).map_err(|e| ScriptError::Serde(e.to_string()))?;
    fs::write(path, contents).map_err(|e| ScriptError::WriteOutput(e.to_string()))
}
