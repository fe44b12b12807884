//! Conversion of proving backend output into the layout consumed on-chain

use alloy_primitives::U256;
use tracing::debug;
use zklogin_common::{
    registers::parse_decimal,
    types::{Groth16Proof, ProofData, ZkProof},
};

use super::errors::WitnessError;

/// The number of affine coordinates taken from each proof point
const NUM_AFFINE_COORDS: usize = 2;

/// Converts a proof into the on-chain layout.
///
/// Projective `z` coordinates are dropped, and the coefficients of each `B`
/// coordinate are swapped into the order the pairing precompile expects.
pub fn convert_proof(proof: &ProofData) -> Result<Groth16Proof, WitnessError> {
    let pi_a = g1_coords("pi_a", &proof.a)?;
    let pi_c = g1_coords("pi_c", &proof.c)?;

    if proof.b.len() < NUM_AFFINE_COORDS || proof.b[..NUM_AFFINE_COORDS].iter().any(|c| c.len() < 2)
    {
        return Err(WitnessError::InvalidProofShape("invalid pi_b structure".to_string()));
    }

    let mut pi_b = [[U256::ZERO; 2]; NUM_AFFINE_COORDS];
    for (i, coord) in pi_b.iter_mut().enumerate() {
        for (j, coeff) in coord.iter_mut().enumerate() {
            *coeff = parse_decimal("pi_b", 2 * i + j, &proof.b[i][1 - j])?;
        }
    }

    debug!(protocol = %proof.protocol, curve = %proof.curve, "converted proof");
    Ok(Groth16Proof { pi_a, pi_b, pi_c })
}

/// Parses the affine coordinates of a G1 point
fn g1_coords(field: &'static str, coords: &[String]) -> Result<[U256; 2], WitnessError> {
    if coords.len() < NUM_AFFINE_COORDS {
        return Err(WitnessError::InvalidProofShape(format!(
            "invalid {field} length: got {}",
            coords.len()
        )));
    }

    Ok([
        parse_decimal(field, 0, &coords[0])?,
        parse_decimal(field, 1, &coords[1])?,
    ])
}

/// Parses exactly `K` public signals
pub fn public_signals<const K: usize>(proof: &ZkProof) -> Result<[U256; K], WitnessError> {
    if proof.pub_signals.len() != K {
        return Err(WitnessError::PublicSignalCount {
            expected: K,
            actual: proof.pub_signals.len(),
        });
    }

    let mut signals = [U256::ZERO; K];
    for (i, (signal, raw)) in signals.iter_mut().zip(&proof.pub_signals).enumerate() {
        *signal = parse_decimal("pub_signals", i, raw)?;
    }

    Ok(signals)
}

/// Parses the public signal at `index`
pub fn public_signal(proof: &ZkProof, index: usize) -> Result<U256, WitnessError> {
    let raw = proof
        .pub_signals
        .get(index)
        .ok_or(WitnessError::PublicSignalIndex(index))?;
    Ok(parse_decimal("pub_signals", index, raw)?)
}
