use alloy_primitives::U256;
use eyre::Result;
use rand::{thread_rng, Rng};
use zklogin_common::constants::{DEFAULT_MIMC_RIGHT, DEFAULT_MIMC_ROUNDS, DEFAULT_MIMC_SEED};
use zklogin_core::mimc::MimcSponge;

use crate::utils::global_setup;

pub const FUZZ_ROUNDS: usize = 16;

/// `hash_left_right(0, 0)` under the default sponge, which is also the
/// hash of the zero address when `RIGHT = 0`
pub const ZERO_ADDRESS_HASH: &str =
    "20636625426020718969131298365984859231982649550971729229988535915544421356929";

/// `multi_hash([1, 2])` under the default sponge
pub const ONE_TWO_HASH: &str =
    "19814528709687996974327303300007262407299502847885145507292406548098437687919";

/// `multi_hash([2, 1])` under the default sponge
pub const TWO_ONE_HASH: &str =
    "13352476003565674707394178783107121084532869769460544775310091277135215328214";

/// The second round constant derived from the default seed
pub const SECOND_CONSTANT: &str =
    "5024705281721889198577876690145313457398658950011302225525409148828000436681";

/// The penultimate round constant derived from the default seed
pub const PENULTIMATE_CONSTANT: &str =
    "2119542016932434047340813757208803962484943912710204325088879681995922344971";

pub fn setup_mimc_test() -> Result<MimcSponge> {
    global_setup();
    Ok(MimcSponge::new(
        DEFAULT_MIMC_SEED,
        DEFAULT_MIMC_ROUNDS,
        DEFAULT_MIMC_RIGHT,
    )?)
}

pub fn dec(s: &str) -> Result<U256> {
    Ok(U256::from_str_radix(s, 10)?)
}

pub fn random_inputs(n: usize) -> Vec<U256> {
    let mut rng = thread_rng();
    (0..n).map(|_| U256::from_limbs(rng.gen())).collect()
}
