//! Precomputation of the `T` & `U` circuit inputs from a signature and message hash.
//!
//! Given the `R` point of a signature and `w = -(r⁻¹·m) mod N`, the circuit verifies
//! `Q = r⁻¹·s·R + w·G` with windowed scalar multiplication over `R`, reading
//! the multiples of `R` from a table rather than computing them in-circuit.

use std::time::Instant;

use alloy_primitives::{B256, U256};
use k256::{
    elliptic_curve::{
        ops::Reduce,
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
    AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, Scalar,
};
use serde::Serialize;
use tracing::debug;
use zklogin_common::{
    constants::{
        NUM_BYTES_COMPRESSED_POINT, NUM_BYTES_U256, NUM_HEX_CHARS_COORDINATE, NUM_STRIDES, STRIDE,
        WINDOW_SIZE,
    },
    registers::Registers,
    types::PointRegisters,
};

use super::{errors::EcdsaError, signature::Signature};

/// SEC1 tag of a compressed point with an even y-coordinate
const EVEN_Y_TAG: u8 = 0x02;
/// SEC1 tag of a compressed point with an odd y-coordinate
const ODD_Y_TAG: u8 = 0x03;

/// Multiples of the `R` point of a signature, in registers.
///
/// Cell `[i][j]` holds `(j · 2^(8i)) · R`; the identity at `j = 0` is encoded as zeros.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrecomputeTable(Vec<Vec<PointRegisters>>);

impl PrecomputeTable {
    /// Builds the table of multiples of `point`.
    ///
    /// Each stride's base `2^(8i) · point` is reached by doubling the previous one,
    /// and the window multiples by repeated addition of the base.
    pub fn build(point: &AffinePoint) -> Self {
        let start = Instant::now();

        let mut base = ProjectivePoint::from(*point);
        let mut strides = Vec::with_capacity(NUM_STRIDES);
        for _ in 0..NUM_STRIDES {
            let mut row = Vec::with_capacity(WINDOW_SIZE);
            let mut acc = ProjectivePoint::IDENTITY;
            row.push(point_registers(&acc.to_affine()));
            for _ in 1..WINDOW_SIZE {
                acc += base;
                row.push(point_registers(&acc.to_affine()));
            }
            strides.push(row);

            for _ in 0..STRIDE {
                base = base.double();
            }
        }

        debug!(elapsed = ?start.elapsed(), "built point precompute table");
        PrecomputeTable(strides)
    }

    /// The registers of `(window · 2^(8·stride)) · R`, if in range
    pub fn get(&self, stride: usize, window: usize) -> Option<&PointRegisters> {
        self.0.get(stride).and_then(|row| row.get(window))
    }

    /// The rows of the table, one per stride
    pub fn strides(&self) -> &[Vec<PointRegisters>] {
        &self.0
    }
}

/// The circuit inputs derived from a signature
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Precomputes {
    /// The signature, split into registers
    pub signature: Signature,
    /// The multiples of the signature's `R` point
    pub t: PrecomputeTable,
    /// The point `w · G`
    pub u: PointRegisters,
}

impl Precomputes {
    /// Computes the precomputes for a signature over the given message hash
    pub fn new(signature: &Signature, hash: &B256) -> Result<Self, EcdsaError> {
        let r_point = point_from_x(&signature.r_hex(), signature.is_y_odd())?;
        let r_inv = r_inverse(signature.r().to_u256())?;
        let w = compute_w(&r_inv, U256::from_be_bytes(hash.0));

        Ok(Precomputes {
            signature: *signature,
            t: PrecomputeTable::build(&r_point),
            u: compute_u(&w),
        })
    }
}

/// Reconstructs the curve point with the given hex x-coordinate & y parity
pub fn point_from_x(x_hex: &str, is_y_odd: bool) -> Result<AffinePoint, EcdsaError> {
    if x_hex.len() != NUM_HEX_CHARS_COORDINATE {
        return Err(EcdsaError::BadXLength(x_hex.len()));
    }

    let mut encoded = [0u8; NUM_BYTES_COMPRESSED_POINT];
    encoded[0] = if is_y_odd { ODD_Y_TAG } else { EVEN_Y_TAG };
    hex::decode_to_slice(x_hex, &mut encoded[1..]).map_err(|_| EcdsaError::BadPoint)?;

    let encoded = EncodedPoint::from_bytes(encoded).map_err(|_| EcdsaError::BadPoint)?;
    Option::from(AffinePoint::from_encoded_point(&encoded)).ok_or(EcdsaError::BadPoint)
}

/// Computes `r⁻¹ mod N`, reducing `r` into the group order first
pub fn r_inverse(r: U256) -> Result<Scalar, EcdsaError> {
    Option::from(u256_to_scalar(r).invert()).ok_or(EcdsaError::NoInverse)
}

/// Computes `w = -(r⁻¹ · m) mod N`
pub fn compute_w(r_inv: &Scalar, msg_hash: U256) -> Scalar {
    -(*r_inv * u256_to_scalar(msg_hash))
}

/// Computes `U = w · G` in registers
pub fn compute_u(w: &Scalar) -> PointRegisters {
    point_registers(&(ProjectivePoint::GENERATOR * w).to_affine())
}

/// Computes `T = r⁻¹ · R`
pub fn compute_t_point(r_inv: &Scalar, r_point: &AffinePoint) -> AffinePoint {
    (ProjectivePoint::from(*r_point) * r_inv).to_affine()
}

/// Splits the affine coordinates of a point into registers; the identity maps to zeros
pub fn point_registers(point: &AffinePoint) -> PointRegisters {
    let encoded = point.to_encoded_point(false /* compress */);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => [
            Registers::split(U256::from_be_slice(x)),
            Registers::split(U256::from_be_slice(y)),
        ],
        _ => [Registers::ZERO; 2],
    }
}

/// Reduces an integer into the secp256k1 scalar field
pub fn u256_to_scalar(value: U256) -> Scalar {
    let bytes = FieldBytes::from(value.to_be_bytes::<NUM_BYTES_U256>());
    <Scalar as Reduce<k256::U256>>::reduce_bytes(&bytes)
}

/// Converts a secp256k1 scalar into its canonical integer representative
pub fn scalar_to_u256(scalar: &Scalar) -> U256 {
    U256::from_be_slice(&scalar.to_bytes())
}
