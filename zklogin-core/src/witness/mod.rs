//! Witness input documents handed to the external prover, and conversion of its output.
//!
//! The Ethereum address circuit takes only the private key ([`EthereumAddressInput`]);
//! the Merkle tree circuit also takes the path ([`WitnessInput`]).

pub mod errors;
pub mod proof;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zklogin_common::{
    backends::ProvingBackend,
    constants::LEVELS,
    errors::ConversionError,
    registers::{parse_decimal, Registers},
    types::ZkProof,
};

use self::errors::WitnessError;

/// Name of the private key field of the witness document
const PRIVATE_KEY_FIELD: &str = "privateKey";
/// Name of the Merkle path siblings field of the witness document
const PATH_ELEMENTS_FIELD: &str = "pathElements";
/// Name of the Merkle path directions field of the witness document
const PATH_INDICES_FIELD: &str = "pathIndices";

/// The input to the zkLogin circuits: a private key in registers and a Merkle path.
///
/// Serializes as `{"privateKey": [4], "pathElements": [32], "pathIndices": [32]}`,
/// every element a decimal string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WitnessDocument", try_from = "WitnessDocument")]
pub struct WitnessInput {
    /// The signer's private key
    private_key: Registers,
    /// The siblings along the Merkle path, leaf first
    path_elements: [U256; LEVELS],
    /// The direction taken at each level of the Merkle path
    path_indices: [U256; LEVELS],
}

/// The wire form of a [`WitnessInput`]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WitnessDocument {
    /// The private key registers
    private_key: Vec<String>,
    /// The Merkle path siblings
    path_elements: Vec<String>,
    /// The Merkle path directions
    path_indices: Vec<String>,
}

impl From<WitnessInput> for WitnessDocument {
    fn from(input: WitnessInput) -> Self {
        let to_strings =
            |values: &[U256]| -> Vec<String> { values.iter().map(U256::to_string).collect() };
        WitnessDocument {
            private_key: input.private_key.to_decimal_strings().to_vec(),
            path_elements: to_strings(&input.path_elements),
            path_indices: to_strings(&input.path_indices),
        }
    }
}

impl TryFrom<WitnessDocument> for WitnessInput {
    type Error = ConversionError;

    fn try_from(doc: WitnessDocument) -> Result<Self, Self::Error> {
        Ok(WitnessInput {
            private_key: Registers::from_decimal_strings(PRIVATE_KEY_FIELD, &doc.private_key)?,
            path_elements: parse_path(PATH_ELEMENTS_FIELD, &doc.path_elements)?,
            path_indices: parse_path(PATH_INDICES_FIELD, &doc.path_indices)?,
        })
    }
}

/// Parses a Merkle path field of exactly `LEVELS` decimal strings
fn parse_path(field: &'static str, values: &[String]) -> Result<[U256; LEVELS], ConversionError> {
    if values.len() != LEVELS {
        return Err(ConversionError::BadWitnessField {
            field,
            index: values.len().min(LEVELS),
            value: format!("expected {LEVELS} entries, got {}", values.len()),
        });
    }

    let mut path = [U256::ZERO; LEVELS];
    for (index, (elem, raw)) in path.iter_mut().zip(values).enumerate() {
        *elem = parse_decimal(field, index, raw)?;
    }

    Ok(path)
}

/// The input to the Ethereum address circuit: a private key in registers.
///
/// Serializes as `{"privateKey": [4]}`, every element a decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "AddressDocument", try_from = "AddressDocument")]
pub struct EthereumAddressInput {
    /// The signer's private key
    private_key: Registers,
}

/// The wire form of an [`EthereumAddressInput`]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressDocument {
    /// The private key registers
    private_key: Vec<String>,
}

impl From<EthereumAddressInput> for AddressDocument {
    fn from(input: EthereumAddressInput) -> Self {
        AddressDocument {
            private_key: input.private_key.to_decimal_strings().to_vec(),
        }
    }
}

impl TryFrom<AddressDocument> for EthereumAddressInput {
    type Error = ConversionError;

    fn try_from(doc: AddressDocument) -> Result<Self, Self::Error> {
        Ok(EthereumAddressInput {
            private_key: Registers::from_decimal_strings(PRIVATE_KEY_FIELD, &doc.private_key)?,
        })
    }
}

impl EthereumAddressInput {
    /// Constructs the address circuit input for the given private key
    pub fn new(private_key: Registers) -> Self {
        EthereumAddressInput { private_key }
    }

    /// The private key registers
    pub fn private_key(&self) -> Registers {
        self.private_key
    }

    /// Serializes the witness document
    pub fn to_json(&self) -> Result<String, WitnessError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a witness document
    pub fn from_json(json: &str) -> Result<Self, WitnessError> {
        let doc: AddressDocument = serde_json::from_str(json)?;
        Ok(EthereumAddressInput::try_from(doc)?)
    }

    /// Hands the witness document to a proving backend
    pub fn prove_with<P: ProvingBackend>(&self, prover: &P) -> Result<ZkProof, WitnessError> {
        prove_document(&self.to_json()?, prover)
    }
}

impl WitnessInput {
    /// Constructs a witness input for the given private key with an all-zero path
    pub fn new(private_key: Registers) -> Self {
        WitnessInput {
            private_key,
            path_elements: [U256::ZERO; LEVELS],
            path_indices: [U256::ZERO; LEVELS],
        }
    }

    /// Sets the Merkle path, leaf level first; levels past the given entries are zero
    pub fn with_path(mut self, elements: &[U256], indices: &[U256]) -> Result<Self, WitnessError> {
        for (field, values) in [(PATH_ELEMENTS_FIELD, elements), (PATH_INDICES_FIELD, indices)] {
            if values.len() > LEVELS {
                return Err(ConversionError::BadWitnessField {
                    field,
                    index: LEVELS,
                    value: format!("at most {LEVELS} entries, got {}", values.len()),
                }
                .into());
            }
        }

        self.path_elements = [U256::ZERO; LEVELS];
        self.path_indices = [U256::ZERO; LEVELS];
        self.path_elements[..elements.len()].copy_from_slice(elements);
        self.path_indices[..indices.len()].copy_from_slice(indices);
        Ok(self)
    }

    /// The private key registers
    pub fn private_key(&self) -> Registers {
        self.private_key
    }

    /// The Merkle path siblings
    pub fn path_elements(&self) -> &[U256; LEVELS] {
        &self.path_elements
    }

    /// The Merkle path directions
    pub fn path_indices(&self) -> &[U256; LEVELS] {
        &self.path_indices
    }

    /// Serializes the witness document
    pub fn to_json(&self) -> Result<String, WitnessError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a witness document
    pub fn from_json(json: &str) -> Result<Self, WitnessError> {
        // Parse in two steps so field errors surface as typed conversion errors
        let doc: WitnessDocument = serde_json::from_str(json)?;
        Ok(WitnessInput::try_from(doc)?)
    }

    /// The address circuit input for the same private key
    pub fn address_input(&self) -> EthereumAddressInput {
        EthereumAddressInput::new(self.private_key)
    }

    /// Hands the witness document to a proving backend
    pub fn prove_with<P: ProvingBackend>(&self, prover: &P) -> Result<ZkProof, WitnessError> {
        prove_document(&self.to_json()?, prover)
    }
}

/// Hands a serialized witness document to a proving backend
fn prove_document<P: ProvingBackend>(input: &str, prover: &P) -> Result<ZkProof, WitnessError> {
    let proof = prover.prove(input.as_bytes())?;
    debug!(num_signals = proof.pub_signals.len(), "received proof from backend");
    Ok(proof)
}
