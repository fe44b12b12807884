//! A secp256k1 signer producing register-decomposed signatures & precomputes

use alloy_primitives::{Address, B256, U256};
use k256::ecdsa::{RecoveryId, SigningKey};
use tracing::info;
use zklogin_common::{
    constants::{NUM_BYTES_U256, SECP256K1_N},
    registers::Registers,
};

use super::{
    errors::EcdsaError,
    message::hash_personal_message,
    precompute::Precomputes,
    signature::{pubkey_to_address, split_signature, Signature},
};

/// Signs messages with a secp256k1 private key
#[derive(Clone, Debug)]
pub struct EcdsaSigner {
    /// The signing key
    key: SigningKey,
    /// The address of the signing key
    address: Address,
}

impl EcdsaSigner {
    /// Constructs a signer from a signing key
    pub fn new(key: SigningKey) -> Self {
        let address = pubkey_to_address(key.verifying_key());
        EcdsaSigner { key, address }
    }

    /// Loads a signer from a hex private key, with or without a `0x` prefix
    pub fn from_hex(hex_key: &str) -> Result<Self, EcdsaError> {
        let stripped = hex_key.strip_prefix("0x").unwrap_or(hex_key);
        let bytes = hex::decode(stripped).map_err(|_| EcdsaError::PrivateKeyOutOfRange)?;
        if bytes.len() != NUM_BYTES_U256 {
            return Err(EcdsaError::PrivateKeyOutOfRange);
        }

        let scalar = U256::from_be_slice(&bytes);
        if scalar == U256::ZERO || scalar >= SECP256K1_N {
            return Err(EcdsaError::PrivateKeyOutOfRange);
        }

        let key = SigningKey::from_slice(&bytes).map_err(|_| EcdsaError::PrivateKeyOutOfRange)?;
        Ok(Self::new(key))
    }

    /// Replaces the signing key
    pub fn set_key(&mut self, key: SigningKey) {
        *self = Self::new(key);
    }

    /// The address of the signer
    pub fn address(&self) -> Address {
        self.address
    }

    /// The private key as an integer
    pub fn private_key(&self) -> U256 {
        U256::from_be_slice(&self.key.to_bytes())
    }

    /// The private key split into registers
    pub fn private_key_registers(&self) -> Registers {
        Registers::split(self.private_key())
    }

    /// Signs a 32-byte hash, producing a low-S signature
    pub fn sign_prehash(&self, hash: &B256) -> Result<Signature, EcdsaError> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(hash.as_slice())
            .map_err(|e| EcdsaError::Signing(e.to_string()))?;

        // Negating `s` reflects `R`, flipping the parity of its y-coordinate
        let (sig, recid) = match sig.normalize_s() {
            Some(low) => (low, RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced())),
            None => (sig, recid),
        };

        let mut bytes = sig.to_bytes().to_vec();
        bytes.push(recid.to_byte());
        split_signature(&bytes)
    }

    /// Signs `msg` as a personal message, checks the signature recovers to this
    /// signer, and computes the circuit precomputes
    pub fn sign(&self, msg: &str) -> Result<Precomputes, EcdsaError> {
        let hash = hash_personal_message(msg);
        let signature = self.sign_prehash(&hash)?;

        let recovered = signature.recover_address(&hash)?;
        if recovered != self.address {
            return Err(EcdsaError::VerificationFailed {
                expected: self.address,
                recovered,
            });
        }

        let precomputes = Precomputes::new(&signature, &hash)?;
        info!(address = %self.address, v = signature.v(), "computed signature precomputes");
        Ok(precomputes)
    }
}
