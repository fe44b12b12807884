//! The MiMC-Sponge hash over the BN254 scalar field.
//!
//! A Feistel network with the `x⁵` round function is used both as a keyed permutation
//! ([`MimcSponge::encrypt`] / [`MimcSponge::decrypt`]) and, absorbed in sponge mode, as the
//! hash used for Merkle tree nodes & address leaves.

pub mod constants;
pub mod errors;

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use ark_ff::{Field, Zero};
use tracing::debug;
use zklogin_common::{
    backends::NativeHasher,
    constants::{DEFAULT_MIMC_RIGHT, DEFAULT_MIMC_ROUNDS, DEFAULT_MIMC_SEED, MAX_MIMC_ROUNDS},
    field::{scalar_to_u256, u256_to_scalar},
    types::ScalarField,
};

use self::{constants::derive_constants, errors::MimcError};

/// Parameters of a MiMC sponge instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MimcConfig {
    /// The seed from which the round constants are derived
    pub seed: String,
    /// The number of Feistel rounds
    pub num_rounds: usize,
    /// The right-hand operand used when hashing a lone address
    pub right: U256,
}

impl Default for MimcConfig {
    fn default() -> Self {
        MimcConfig {
            seed: DEFAULT_MIMC_SEED.to_string(),
            num_rounds: DEFAULT_MIMC_ROUNDS,
            right: DEFAULT_MIMC_RIGHT,
        }
    }
}

/// A MiMC sponge with its round constants derived.
///
/// Immutable after construction, so a single instance may be shared freely across threads.
#[derive(Clone, Debug)]
pub struct MimcSponge {
    /// The seed the constants were derived from
    seed: String,
    /// The number of Feistel rounds
    num_rounds: usize,
    /// The round constants, one per round
    constants: Vec<ScalarField>,
    /// The right-hand operand used by [`MimcSponge::hash_address`]
    right: ScalarField,
}

impl MimcSponge {
    /// Constructs a sponge, deriving its round constants from `seed`
    pub fn new(seed: &str, num_rounds: usize, right: U256) -> Result<Self, MimcError> {
        if num_rounds == 0 || num_rounds > MAX_MIMC_ROUNDS {
            return Err(MimcError::InvalidRounds(num_rounds));
        }

        let constants = derive_constants::<NativeHasher>(seed.as_bytes(), num_rounds)?;
        debug!(seed, num_rounds, "derived MiMC round constants");

        Ok(MimcSponge {
            seed: seed.to_string(),
            num_rounds,
            constants,
            right: u256_to_scalar(right),
        })
    }

    /// Constructs a sponge from a config
    pub fn from_config(config: &MimcConfig) -> Result<Self, MimcError> {
        Self::new(&config.seed, config.num_rounds, config.right)
    }

    /// The seed the round constants were derived from
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// The number of Feistel rounds
    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }

    /// The round constants
    pub fn constants(&self) -> &[ScalarField] {
        &self.constants
    }

    /// The right-hand operand used when hashing a lone address
    pub fn right(&self) -> U256 {
        scalar_to_u256(self.right)
    }

    /// Applies the keyed Feistel permutation to the pair `(x_l, x_r)`
    pub fn encrypt(
        &self,
        x_l: ScalarField,
        x_r: ScalarField,
        k: ScalarField,
    ) -> (ScalarField, ScalarField) {
        self.feistel(x_l, x_r, k, false /* reverse */)
    }

    /// Inverts [`MimcSponge::encrypt`] under the same key
    pub fn decrypt(
        &self,
        x_l: ScalarField,
        x_r: ScalarField,
        k: ScalarField,
    ) -> (ScalarField, ScalarField) {
        self.feistel(x_l, x_r, k, true /* reverse */)
    }

    /// Runs the Feistel network, visiting the constants in reverse & subtracting
    /// the round output when `reverse` is set
    fn feistel(
        &self,
        mut x_l: ScalarField,
        mut x_r: ScalarField,
        k: ScalarField,
        reverse: bool,
    ) -> (ScalarField, ScalarField) {
        let n = self.num_rounds;
        for i in 0..n {
            let idx = if reverse { n - 1 - i } else { i };
            let c = self.constants[idx];

            // The first round carries no constant, matching the circuit
            let mut t = x_l + k;
            if i != 0 {
                t += c;
            }

            let t2 = t.square();
            let t5 = t2.square() * t;
            let round = if reverse { x_r - t5 } else { x_r + t5 };

            if i < n - 1 {
                x_r = x_l;
                x_l = round;
            } else {
                x_r = round;
            }
        }

        (x_l, x_r)
    }

    /// Absorbs `inputs` into the sponge under key `key` (zero if `None`) and squeezes
    /// `num_outputs` field elements
    pub fn multi_hash(
        &self,
        inputs: &[U256],
        key: Option<ScalarField>,
        num_outputs: usize,
    ) -> Result<Vec<U256>, MimcError> {
        if inputs.is_empty() {
            return Err(MimcError::EmptyInputs);
        }
        if num_outputs == 0 {
            return Err(MimcError::InvalidOutputs);
        }

        let k = key.unwrap_or_else(ScalarField::zero);
        let (mut r, mut c) = self.absorb(inputs, k);

        let mut outputs = Vec::with_capacity(num_outputs);
        outputs.push(scalar_to_u256(r));
        for _ in 1..num_outputs {
            (r, c) = self.feistel(r, c, k, false /* reverse */);
            outputs.push(scalar_to_u256(r));
        }

        Ok(outputs)
    }

    /// Hashes a pair of Merkle tree nodes, left operand first
    pub fn hash_left_right(&self, left: U256, right: U256) -> U256 {
        // The first squeezed element of `multi_hash([left, right], 0, 1)`
        let (r, _) = self.absorb(&[left, right], ScalarField::zero());
        scalar_to_u256(r)
    }

    /// Absorbs `inputs` into a zeroed sponge state, returning the `(r, c)` state
    fn absorb(&self, inputs: &[U256], k: ScalarField) -> (ScalarField, ScalarField) {
        let (mut r, mut c) = (ScalarField::zero(), ScalarField::zero());
        for input in inputs {
            r += u256_to_scalar(*input);
            (r, c) = self.feistel(r, c, k, false /* reverse */);
        }

        (r, c)
    }

    /// Hashes an address into a Merkle leaf, pairing it with the configured right operand
    pub fn hash_address(&self, address: &Address) -> U256 {
        let left = U256::from_be_slice(address.as_slice());
        self.hash_left_right(left, scalar_to_u256(self.right))
    }

    /// Parses a `0x`-prefixed hex address and hashes it into a Merkle leaf
    pub fn hash_address_str(&self, address: &str) -> Result<U256, MimcError> {
        let parsed =
            Address::from_str(address).map_err(|_| MimcError::InvalidAddress(address.to_string()))?;
        Ok(self.hash_address(&parsed))
    }

    /// Hashes a batch of addresses into Merkle leaves, preserving order
    pub fn hash_addresses(&self, addresses: &[Address]) -> Vec<U256> {
        addresses.iter().map(|address| self.hash_address(address)).collect()
    }
}
