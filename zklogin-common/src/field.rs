//! Conversions between the BN254 scalar field and its integer & byte representations.
//!
//! Arithmetic itself is provided by [`ScalarField`], which is held in Montgomery form
//! internally; everything exposed here deals in canonical representatives in `[0, r)`.

use alloy_primitives::U256;
use ark_ff::{BigInteger, PrimeField};

use crate::{constants::NUM_BYTES_FELT, types::ScalarField};

/// Interprets the given bytes as a big-endian unsigned integer and reduces it into the field
pub fn scalar_from_be_bytes(bytes: &[u8]) -> ScalarField {
    ScalarField::from_be_bytes_mod_order(bytes)
}

/// Reduces the given 256-bit unsigned integer into the field
pub fn u256_to_scalar(value: U256) -> ScalarField {
    scalar_from_be_bytes(&value.to_be_bytes::<NUM_BYTES_FELT>())
}

/// Converts a field element into its canonical integer representative
pub fn scalar_to_u256(scalar: ScalarField) -> U256 {
    U256::from_be_slice(&scalar.into_bigint().to_bytes_be())
}
