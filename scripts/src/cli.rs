//! Definitions of CLI arguments and commands for the witness scripts

use std::{
    fmt::{self, Display},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use zklogin_common::constants::{DEFAULT_MIMC_ROUNDS, DEFAULT_MIMC_SEED};
use zklogin_core::mimc::MimcConfig;

use crate::{
    commands::{hash_address, multi_hash, sign, split_signature, witness},
    constants::{
        DEFAULT_NUM_OUTPUTS, DEFAULT_RIGHT, LOGGER_MODE_ENV_VAR, MIMC_RIGHT_ENV_VAR,
        MIMC_ROUNDS_ENV_VAR, MIMC_SEED_ENV_VAR,
    },
    errors::ScriptError,
    utils::parse_u256,
};

/// Witness construction scripts for the zkLogin circuits
#[derive(Parser)]
pub struct Cli {
    /// Seed from which the MiMC round constants are derived
    #[arg(long, env = MIMC_SEED_ENV_VAR, default_value = DEFAULT_MIMC_SEED)]
    pub seed: String,

    /// Number of MiMC Feistel rounds
    #[arg(long, env = MIMC_ROUNDS_ENV_VAR, default_value_t = DEFAULT_MIMC_ROUNDS)]
    pub rounds: usize,

    /// Right operand of the address hash, in decimal or `0x`-prefixed hex
    #[arg(long, env = MIMC_RIGHT_ENV_VAR, default_value = DEFAULT_RIGHT)]
    pub right: String,

    /// Logger mode
    #[arg(long, env = LOGGER_MODE_ENV_VAR, value_enum, default_value_t = LogMode::Development)]
    pub log_mode: LogMode,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Builds the MiMC sponge configuration from the global arguments
    pub fn mimc_config(&self) -> Result<MimcConfig, ScriptError> {
        Ok(MimcConfig {
            seed: self.seed.clone(),
            num_rounds: self.rounds,
            right: parse_u256(&self.right)?,
        })
    }
}

/// The verbosity & format of the logs
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogMode {
    /// Pretty-printed logs at `DEBUG`
    Development,
    /// Compact logs at `INFO`
    Production,
}

impl Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMode::Development => write!(f, "development"),
            LogMode::Production => write!(f, "production"),
        }
    }
}

/// The available commands
#[derive(Subcommand)]
pub enum Command {
    /// Hash Ethereum addresses into Merkle tree leaves
    HashAddress(HashAddressArgs),
    /// Hash a sequence of integers with the MiMC sponge
    MultiHash(MultiHashArgs),
    /// Decompose a 65-byte signature into registers
    SplitSignature(SplitSignatureArgs),
    /// Sign a personal message and write the circuit precomputes
    Sign(SignArgs),
    /// Print the witness input document for a private key & Merkle path
    Witness(WitnessArgs),
}

impl Command {
    /// Runs the command under the given sponge configuration
    pub fn run(self, config: &MimcConfig) -> Result<(), ScriptError> {
        match self {
            Command::HashAddress(args) => hash_address(args, config),
            Command::MultiHash(args) => multi_hash(args, config),
            Command::SplitSignature(args) => split_signature(args),
            Command::Sign(args) => sign(args),
            Command::Witness(args) => witness(args),
        }
    }
}

/// Hash Ethereum addresses into Merkle tree leaves
#[derive(Args)]
pub struct HashAddressArgs {
    /// Addresses in hex, with or without a `0x` prefix
    #[arg(required = true)]
    pub addresses: Vec<String>,
}

/// Hash a sequence of integers with the MiMC sponge
#[derive(Args)]
pub struct MultiHashArgs {
    /// Inputs, in decimal or `0x`-prefixed hex
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Sponge key, in decimal or `0x`-prefixed hex
    #[arg(short, long)]
    pub key: Option<String>,

    /// Number of outputs to squeeze
    #[arg(short, long, default_value = DEFAULT_NUM_OUTPUTS)]
    pub outputs: usize,
}

/// Decompose a 65-byte signature into registers
#[derive(Args)]
pub struct SplitSignatureArgs {
    /// The signature in hex, `r || s || recovery`
    pub signature: String,
}

/// Sign a personal message and write the circuit precomputes
#[derive(Args)]
pub struct SignArgs {
    /// Private key of the signer, in hex
    #[arg(short, long)]
    pub priv_key: String,

    /// The message to sign
    #[arg(short, long)]
    pub message: String,

    /// Path at which to write the precomputes document, printed to stdout if absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print the witness input document for a private key & Merkle path
#[derive(Args)]
pub struct WitnessArgs {
    /// Private key of the prover, in hex
    #[arg(short, long)]
    pub priv_key: String,

    /// Merkle path siblings, leaf level first
    #[arg(long, value_delimiter = ',')]
    pub path_elements: Vec<String>,

    /// Merkle path directions, leaf level first
    #[arg(long, value_delimiter = ',')]
    pub path_indices: Vec<String>,

    /// Emit the Ethereum address circuit document, holding only the private key
    #[arg(long, conflicts_with_all = ["path_elements", "path_indices"])]
    pub address_only: bool,
}
