//! The ECDSA witness builder: decomposes secp256k1 signatures into the registers
//! consumed by the `ZkEthereumAddress` circuit and precomputes its `T` & `U` inputs

pub mod errors;
pub mod message;
pub mod precompute;
pub mod signature;
pub mod signer;

pub use errors::EcdsaError;
pub use message::{generate_hashed_message, generate_message, hash_personal_message, Role};
pub use precompute::{PrecomputeTable, Precomputes};
pub use signature::{reconstruct_signature, split_signature, Signature};
pub use signer::EcdsaSigner;
