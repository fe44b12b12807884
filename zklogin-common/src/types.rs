//! Common types used throughout the witness construction core

use alloy_primitives::U256;
use ark_bn254::Fr;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{constants::NUM_COORDINATES, registers::Registers};

/// Type alias for an element of the scalar field of the Bn254 curve
pub type ScalarField = Fr;

/// The affine coordinates of a secp256k1 point, each split into registers
pub type PointRegisters = [Registers; NUM_COORDINATES];

/// A Groth16 proof as emitted by the external proving backend.
///
/// All coordinates are decimal strings, with projective `z` coordinates
/// optionally trailing each point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofData {
    /// The `A` point of the proof, in G1
    #[serde(rename = "pi_a")]
    pub a: Vec<String>,
    /// The `B` point of the proof, in G2
    #[serde(rename = "pi_b")]
    pub b: Vec<Vec<String>>,
    /// The `C` point of the proof, in G1
    #[serde(rename = "pi_c")]
    pub c: Vec<String>,
    /// The proof system used
    #[serde(default)]
    pub protocol: String,
    /// The curve over which the proof is defined
    #[serde(default)]
    pub curve: String,
}

/// A proof together with its public signals, as emitted by the external proving backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZkProof {
    /// The Groth16 proof
    pub proof: ProofData,
    /// The public signals of the proof, as decimal strings
    pub pub_signals: Vec<String>,
}

/// A Groth16 proof in the layout expected by the on-chain verifier
#[serde_as]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Groth16Proof {
    /// The `A` point of the proof
    #[serde_as(as = "[DisplayFromStr; 2]")]
    pub pi_a: [U256; 2],
    /// The `B` point of the proof, with the coefficients of each coordinate
    /// ordered as expected by the pairing precompile
    #[serde_as(as = "[[DisplayFromStr; 2]; 2]")]
    pub pi_b: [[U256; 2]; 2],
    /// The `C` point of the proof
    #[serde_as(as = "[DisplayFromStr; 2]")]
    pub pi_c: [U256; 2],
}
