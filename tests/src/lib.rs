//! Helpers shared by the integration tests

pub mod ecdsa;
pub mod mimc;
pub mod utils;
pub mod witness;
