//! "Backends" representing functionality that is delegated either to external
//! collaborators, or to native Rust code.
//!
//! This abstraction exists primarly to enable mocks for testing.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use alloy_primitives::keccak256;

use crate::{constants::HASH_OUTPUT_SIZE, types::ZkProof};

/// A hashing backend for deriving constants & addresses
pub trait HashBackend {
    /// Compute the Keccak-256 hash of the input
    fn hash(input: &[u8]) -> [u8; HASH_OUTPUT_SIZE];
}

/// A hashing backend that runs natively
pub struct NativeHasher;

impl HashBackend for NativeHasher {
    fn hash(input: &[u8]) -> [u8; HASH_OUTPUT_SIZE] {
        keccak256(input).0
    }
}

/// An error reported by the external proving backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProverError(pub String);

impl Display for ProverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "prover error: {}", self.0)
    }
}

impl Error for ProverError {}

/// A backend that turns a witness input document into a Groth16 proof.
///
/// The type that implements this trait wraps the witness calculator & prover of a given
/// circuit. It may block; callers needing cancellation must enforce it at this boundary.
pub trait ProvingBackend {
    /// Generates a proof & public signals from the JSON-encoded witness input document
    fn prove(&self, input_json: &[u8]) -> Result<ZkProof, ProverError>;
}
