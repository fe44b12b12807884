//! Errors stemming from witness documents & proof conversion

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use zklogin_common::{backends::ProverError, errors::ConversionError};

/// Errors that can occur when building witness documents or converting proofs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessError {
    /// A proof did not have the expected number of coordinates
    InvalidProofShape(String),
    /// The proof carried an unexpected number of public signals
    PublicSignalCount {
        /// The number of signals expected
        expected: usize,
        /// The number of signals present
        actual: usize,
    },
    /// A public signal was requested past the end of the signals
    PublicSignalIndex(usize),
    /// A document could not be (de)serialized
    Serde(String),
    /// A document field could not be converted
    Conversion(ConversionError),
    /// The proving backend failed
    Prover(ProverError),
}

impl Display for WitnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            WitnessError::InvalidProofShape(e) => write!(f, "invalid proof shape: {e}"),
            WitnessError::PublicSignalCount { expected, actual } => {
                write!(f, "expected {expected} public signals, got {actual}")
            }
            WitnessError::PublicSignalIndex(i) => write!(f, "public signal index out of range: {i}"),
            WitnessError::Serde(e) => write!(f, "serde error: {e}"),
            WitnessError::Conversion(e) => write!(f, "{e}"),
            WitnessError::Prover(e) => write!(f, "{e}"),
        }
    }
}

impl Error for WitnessError {}

impl From<ConversionError> for WitnessError {
    fn from(e: ConversionError) -> Self {
        WitnessError::Conversion(e)
    }
}

impl From<ProverError> for WitnessError {
    fn from(e: ProverError) -> Self {
        WitnessError::Prover(e)
    }
}

impl From<serde_json::Error> for WitnessError {
    fn from(e: serde_json::Error) -> Self {
        WitnessError::Serde(e.to_string())
    }
}
