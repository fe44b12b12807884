//! Errors stemming from MiMC sponge construction & invocation

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use zklogin_common::constants::MAX_MIMC_ROUNDS;

/// Errors that can occur when constructing or invoking the MiMC sponge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimcError {
    /// No inputs were given to the multi-hash
    EmptyInputs,
    /// A non-positive number of outputs was requested from the multi-hash
    InvalidOutputs,
    /// The constants seed was empty
    EmptySeed,
    /// The number of rounds was outside of `[1, MAX_MIMC_ROUNDS]`
    InvalidRounds(usize),
    /// A textual address could not be parsed
    InvalidAddress(String),
}

impl Display for MimcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MimcError::EmptyInputs => write!(f, "inputs cannot be empty"),
            MimcError::InvalidOutputs => write!(f, "number of outputs must be greater than 0"),
            MimcError::EmptySeed => write!(f, "seed cannot be empty"),
            MimcError::InvalidRounds(n) => write!(
                f,
                "number of rounds must be in [1, {MAX_MIMC_ROUNDS}], got {n}"
            ),
            MimcError::InvalidAddress(s) => write!(f, "invalid address: {s:?}"),
        }
    }
}

impl Error for MimcError {}
