//! Derivation of the MiMC round constants from a seed by iterated Keccak-256

use ark_ff::Zero;
use zklogin_common::{backends::HashBackend, field::scalar_from_be_bytes, types::ScalarField};

use super::errors::MimcError;

/// Derives `num_rounds` round constants from the given seed.
///
/// The table is `[0, Keccak²(seed), Keccak³(seed), …, Keccak^{N-1}(seed)]` with the last
/// entry then forced to zero, each digest read as a big-endian integer reduced into the
/// field. Index 0 is never written by the derivation loop; this schedule is what the
/// deployed circuits & verifiers are wired to.
pub fn derive_constants<H: HashBackend>(
    seed: &[u8],
    num_rounds: usize,
) -> Result<Vec<ScalarField>, MimcError> {
    if seed.is_empty() {
        return Err(MimcError::EmptySeed);
    }
    if num_rounds == 0 {
        return Err(MimcError::InvalidRounds(num_rounds));
    }

    let mut constants = vec![ScalarField::zero(); num_rounds];
    let mut digest = H::hash(seed);
    for constant in constants.iter_mut().skip(1) {
        digest = H::hash(&digest);
        *constant = scalar_from_be_bytes(&digest);
    }

    constants[num_rounds - 1] = ScalarField::zero();
    Ok(constants)
}
