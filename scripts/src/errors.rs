//! Definitions of errors that can occur during the execution of the witness scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the witness scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error parsing a command-line argument
    ArgumentParsing(String),
    /// Error constructing the MiMC sponge from its configuration
    Config(String),
    /// Error hashing inputs with the MiMC sponge
    Hashing(String),
    /// Error decomposing or producing a signature
    Signing(String),
    /// Error building a witness input document
    Witness(String),
    /// Error de/serializing a document
    Serde(String),
    /// Error writing an output file
    WriteOutput(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArgumentParsing(s) => write!(f, "error parsing argument: {}", s),
            ScriptError::Config(s) => write!(f, "invalid configuration: {}", s),
            ScriptError::Hashing(s) => write!(f, "error hashing: {}", s),
            ScriptError::Signing(s) => write!(f, "error signing: {}", s),
            ScriptError::Witness(s) => write!(f, "error building witness: {}", s),
            ScriptError::Serde(s) => write!(f, "error de/serializing document: {}", s),
            ScriptError::WriteOutput(s) => write!(f, "error writing output: {}", s),
        }
    }
}

impl Error for ScriptError {}
