//! Scripts for hashing addresses, signing messages, and building witness inputs
//! for the zkLogin circuits.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod utils;
