//! Implementations of the various witness scripts

use itertools::Itertools;
use tracing::info;
use zklogin_common::field::u256_to_scalar;
use zklogin_core::{
    ecdsa::{split_signature as split, EcdsaSigner},
    mimc::{MimcConfig, MimcSponge},
    witness::{EthereumAddressInput, WitnessInput},
};

use crate::{
    cli::{HashAddressArgs, MultiHashArgs, SignArgs, SplitSignatureArgs, WitnessArgs},
    errors::ScriptError,
    utils::{parse_hex, parse_u256, parse_u256s, write_json},
};

/// Builds the sponge described by the configuration
fn build_sponge(config: &MimcConfig) -> Result<MimcSponge, ScriptError> {
    MimcSponge::from_config(config).map_err(|e| ScriptError::Config(e.to_string()))
}

/// Prints the leaf hash of each address
pub fn hash_address(args: HashAddressArgs, config: &MimcConfig) -> Result<(), ScriptError> {
    let sponge = build_sponge(config)?;
    for address in &args.addresses {
        let hashed = sponge
            .hash_address_str(address)
            .map_err(|e| ScriptError::Hashing(e.to_string()))?;
        println!("{address} {hashed}");
    }

    Ok(())
}

/// Prints the sponge outputs over the given inputs, one per line
pub fn multi_hash(args: MultiHashArgs, config: &MimcConfig) -> Result<(), ScriptError> {
    let sponge = build_sponge(config)?;
    let inputs = parse_u256s(&args.inputs)?;
    let key = args
        .key
        .as_deref()
        .map(parse_u256)
        .transpose()?
        .map(u256_to_scalar);

    let outputs = sponge
        .multi_hash(&inputs, key, args.outputs)
        .map_err(|e| ScriptError::Hashing(e.to_string()))?;
    println!("{}", outputs.iter().join("\n"));

    Ok(())
}

/// Prints the register decomposition of a signature
pub fn split_signature(args: SplitSignatureArgs) -> Result<(), ScriptError> {
    let bytes = parse_hex(&args.signature)?;
    let sig = split(&bytes).map_err(|e| ScriptError::Signing(e.to_string()))?;
    let doc = serde_json::to_string_pretty(&sig).map_err(|e| ScriptError::Serde(e.to_string()))?;
    println!("{doc}");

    Ok(())
}

/// Signs a message & emits its precomputes document
pub fn sign(args: SignArgs) -> Result<(), ScriptError> {
    let signer =
        EcdsaSigner::from_hex(&args.priv_key).map_err(|e| ScriptError::Signing(e.to_string()))?;
    let precomputes = signer
        .sign(&args.message)
        .map_err(|e| ScriptError::Signing(e.to_string()))?;
    let doc = serde_json::to_value(&precomputes).map_err(|e| ScriptError::Serde(e.to_string()))?;

    match args.output {
        Some(path) => {
            write_json(&path, &doc)?;
            info!(path = %path.display(), address = %signer.address(), "wrote precomputes");
        }
        None => println!("{doc}"),
    }

    Ok(())
}

/// Prints the witness input document
pub fn witness(args: WitnessArgs) -> Result<(), ScriptError> {
    let signer =
        EcdsaSigner::from_hex(&args.priv_key).map_err(|e| ScriptError::Signing(e.to_string()))?;
    let doc = if args.address_only {
        EthereumAddressInput::new(signer.private_key_registers()).to_json()
    } else {
        let elements = parse_u256s(&args.path_elements)?;
        let indices = parse_u256s(&args.path_indices)?;
        WitnessInput::new(signer.private_key_registers())
            .with_path(&elements, &indices)
            .and_then(|input| input.to_json())
    }
    .map_err(|e| ScriptError::Witness(e.to_string()))?;
    println!("{doc}");

    Ok(())
}
