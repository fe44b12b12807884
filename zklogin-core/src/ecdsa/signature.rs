//! Decomposition of 65-byte Ethereum signatures into circuit registers, and
//! recovery of the signing address

use alloy_primitives::{keccak256, Address, B256, U256};
use k256::{
    ecdsa::{RecoveryId, Signature as K256Signature, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use serde::Serialize;
use zklogin_common::{
    constants::{NUM_BYTES_ADDRESS, NUM_BYTES_SIGNATURE, NUM_BYTES_U256, SECP256K1_HALF_ORDER, V_OFFSET},
    registers::Registers,
};

use super::errors::EcdsaError;

/// A secp256k1 ECDSA signature with `r` & `s` split into registers and `v` in `{27, 28}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Signature {
    /// The `r` component
    r: Registers,
    /// The `s` component, at most `N / 2`
    s: Registers,
    /// The recovery identifier offset by 27
    v: u8,
}

impl Signature {
    /// Constructs a signature from its components, enforcing low-S and `v ∈ {27, 28}`
    pub fn new(r: U256, s: U256, v: u8) -> Result<Self, EcdsaError> {
        if s > SECP256K1_HALF_ORDER {
            return Err(EcdsaError::HighS);
        }
        if v != V_OFFSET && v != V_OFFSET + 1 {
            return Err(EcdsaError::BadV(v));
        }

        Ok(Signature {
            r: Registers::split(r),
            s: Registers::split(s),
            v,
        })
    }

    /// The `r` component as registers
    pub fn r(&self) -> Registers {
        self.r
    }

    /// The `s` component as registers
    pub fn s(&self) -> Registers {
        self.s
    }

    /// The `v` value, 27 or 28
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The raw recovery identifier, `v - 27`
    pub fn recovery_byte(&self) -> u8 {
        self.v - V_OFFSET
    }

    /// Whether the `R` point of the signature has an odd y-coordinate
    pub fn is_y_odd(&self) -> bool {
        self.recovery_byte() % 2 == 1
    }

    /// `r` as 64 lowercase hex characters
    pub fn r_hex(&self) -> String {
        hex::encode(self.r.to_u256().to_be_bytes::<NUM_BYTES_U256>())
    }

    /// Reassembles the 65-byte `r || s || (v - 27)` layout
    pub fn to_bytes(&self) -> [u8; NUM_BYTES_SIGNATURE] {
        let mut bytes = [0u8; NUM_BYTES_SIGNATURE];
        bytes[..NUM_BYTES_U256].copy_from_slice(&self.r.to_u256().to_be_bytes::<NUM_BYTES_U256>());
        bytes[NUM_BYTES_U256..2 * NUM_BYTES_U256]
            .copy_from_slice(&self.s.to_u256().to_be_bytes::<NUM_BYTES_U256>());
        bytes[NUM_BYTES_SIGNATURE - 1] = self.recovery_byte();
        bytes
    }

    /// Recovers the address that produced this signature over `hash`
    pub fn recover_address(&self, hash: &B256) -> Result<Address, EcdsaError> {
        let bytes = self.to_bytes();
        let signature = K256Signature::from_slice(&bytes[..2 * NUM_BYTES_U256])
            .map_err(|e| EcdsaError::PublicKeyRecovery(e.to_string()))?;
        let recovery_id = RecoveryId::from_byte(self.recovery_byte()).ok_or_else(|| {
            EcdsaError::PublicKeyRecovery(format!("bad recovery id {}", self.recovery_byte()))
        })?;

        let key = VerifyingKey::recover_from_prehash(hash.as_slice(), &signature, recovery_id)
            .map_err(|e| EcdsaError::PublicKeyRecovery(e.to_string()))?;
        Ok(pubkey_to_address(&key))
    }
}

/// Splits a 65-byte `r || s || recovery` signature into registers
pub fn split_signature(sig: &[u8]) -> Result<Signature, EcdsaError> {
    if sig.len() != NUM_BYTES_SIGNATURE {
        return Err(EcdsaError::BadSignatureLength(sig.len()));
    }

    let r = U256::from_be_slice(&sig[..NUM_BYTES_U256]);
    let s = U256::from_be_slice(&sig[NUM_BYTES_U256..2 * NUM_BYTES_U256]);
    let v_raw = sig[NUM_BYTES_SIGNATURE - 1];
    let v = v_raw.checked_add(V_OFFSET).ok_or(EcdsaError::BadV(v_raw))?;

    Signature::new(r, s, v)
}

/// Reassembles the 65-byte layout of a split signature
pub fn reconstruct_signature(sig: &Signature) -> [u8; NUM_BYTES_SIGNATURE] {
    sig.to_bytes()
}

/// Derives the Ethereum address of a public key: the last 20 bytes of the
/// Keccak-256 digest of its uncompressed encoding, sans the `0x04` tag
pub fn pubkey_to_address(key: &VerifyingKey) -> Address {
    let encoded = key.as_affine().to_encoded_point(false /* compress */);
    let digest = keccak256(&encoded.as_bytes()[1..]);
    Address::from_slice(&digest[digest.len() - NUM_BYTES_ADDRESS..])
}
