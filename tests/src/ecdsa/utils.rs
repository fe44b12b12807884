use alloy_primitives::U256;
use k256::ecdsa::SigningKey;
use rand::thread_rng;
use zklogin_core::ecdsa::EcdsaSigner;

use crate::utils::global_setup;

pub const FUZZ_ROUNDS: usize = 4;

pub fn setup_ecdsa_test() -> EcdsaSigner {
    global_setup();
    random_signer()
}

pub fn random_signer() -> EcdsaSigner {
    EcdsaSigner::new(SigningKey::random(&mut thread_rng()))
}

/// Lays out a 65-byte `r || s || recovery` signature
pub fn raw_signature(r: U256, s: U256, recovery: u8) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(65);
    bytes.extend_from_slice(&r.to_be_bytes::<32>());
    bytes.extend_from_slice(&s.to_be_bytes::<32>());
    bytes.push(recovery);
    bytes
}
