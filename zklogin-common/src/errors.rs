//! Errors stemming from conversions between integers, registers, and witness fields

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::U256;

/// Errors that can occur when converting values into or out of their circuit representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A register held a value that does not fit in 64 bits
    LimbOverflow {
        /// The index of the offending register
        index: usize,
        /// The offending value
        value: U256,
    },
    /// A witness field could not be parsed back into an integer
    BadWitnessField {
        /// The name of the document field
        field: &'static str,
        /// The index of the offending element within the field
        index: usize,
        /// The raw value that failed to parse
        value: String,
    },
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::LimbOverflow { index, value } => {
                write!(f, "register[{index}] exceeds uint64: {value}")
            }
            ConversionError::BadWitnessField {
                field,
                index,
                value,
            } => write!(f, "invalid witness field {field}[{index}]: {value:?}"),
        }
    }
}

impl Error for ConversionError {}
