//! The zk-witness construction core: the MiMC sponge over the BN254 scalar field,
//! the decomposition of secp256k1 ECDSA signatures into circuit registers,
//! and the witness input documents handed to the external prover

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod ecdsa;
pub mod mimc;
pub mod witness;
