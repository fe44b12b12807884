//! Errors stemming from signature decomposition, recovery, and precomputation

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::Address;

/// Errors that can occur when building ECDSA witnesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcdsaError {
    /// The signature was not 65 bytes long
    BadSignatureLength(usize),
    /// The `s` component of the signature exceeded half the group order
    HighS,
    /// The normalized `v` value was neither 27 nor 28
    BadV(u8),
    /// The hex-encoded x-coordinate was not 64 characters long
    BadXLength(usize),
    /// The x-coordinate does not correspond to a point on the curve
    BadPoint,
    /// `r` has no inverse modulo the group order
    NoInverse,
    /// The address recovered from a signature did not match the signer's
    VerificationFailed {
        /// The signer's address
        expected: Address,
        /// The address recovered from the signature
        recovered: Address,
    },
    /// A private key was zero or not below the group order
    PrivateKeyOutOfRange,
    /// The public key could not be recovered from the signature
    PublicKeyRecovery(String),
    /// The underlying signer failed
    Signing(String),
    /// No message template exists for the given role
    InvalidRole(u8),
    /// A message template references a parameter that was not supplied
    MissingMessageParam(String),
}

impl Display for EcdsaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EcdsaError::BadSignatureLength(len) => {
                write!(f, "invalid signature length: expected 65, got {len}")
            }
            EcdsaError::HighS => write!(f, "signature 's' value too high"),
            EcdsaError::BadV(v) => write!(f, "invalid 'v' value: {v}"),
            EcdsaError::BadXLength(len) => {
                write!(f, "invalid x-coordinate length: expected 64 hex chars, got {len}")
            }
            EcdsaError::BadPoint => write!(f, "x-coordinate is not on the curve"),
            EcdsaError::NoInverse => write!(f, "r has no inverse modulo the group order"),
            EcdsaError::VerificationFailed {
                expected,
                recovered,
            } => write!(
                f,
                "signature verification failed: expected {expected}, recovered {recovered}"
            ),
            EcdsaError::PrivateKeyOutOfRange => write!(f, "invalid private key, out of range"),
            EcdsaError::PublicKeyRecovery(e) => write!(f, "public key recovery failed: {e}"),
            EcdsaError::Signing(e) => write!(f, "error signing message: {e}"),
            EcdsaError::InvalidRole(role) => {
                write!(f, "invalid role {role} specified for message generation")
            }
            EcdsaError::MissingMessageParam(name) => {
                write!(f, "missing message parameter: {name}")
            }
        }
    }
}

impl Error for EcdsaError {}
