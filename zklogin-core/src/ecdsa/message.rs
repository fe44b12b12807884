//! Role message templates and Ethereum personal-message hashing

use std::collections::HashMap;

use alloy_primitives::{keccak256, B256};

use super::errors::EcdsaError;

/// Prefix of an Ethereum personal message, followed by the decimal message length
const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Opening delimiter of a template placeholder
const PLACEHOLDER_OPEN: &str = "{{.";
/// Closing delimiter of a template placeholder
const PLACEHOLDER_CLOSE: &str = "}}";

/// The roles that sign zkLogin messages, each with its own message template.
///
/// The templates must stay in sync with the verifying contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Role {
    /// The leader of an election
    ElectionLeader = 0,
    /// The leader committing rollup blocks
    RollupLeader = 1,
    /// A voter in an election
    Voter = 2,
}

impl Role {
    /// The message template for this role
    pub fn template(&self) -> &'static str {
        match self {
            Role::ElectionLeader => {
                "I am an Election Leader with hashed address {{.HashedAddress}} and nonce {{.Nonce}}"
            }
            Role::RollupLeader => {
                "I am a Rollup Leader with hashed address {{.HashedAddress}} and I commit block \
                 {{.BlockNumber}} with hash {{.BlockHash}} and nonce {{.Nonce}}"
            }
            Role::Voter => {
                "I am a Voter with hashed address {{.HashedAddress}} and I vote {{.VoteOption}} \
                 for election {{.ElectionID}} and nonce {{.Nonce}}"
            }
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = EcdsaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Role::ElectionLeader),
            1 => Ok(Role::RollupLeader),
            2 => Ok(Role::Voter),
            _ => Err(EcdsaError::InvalidRole(value)),
        }
    }
}

/// Renders the message template of `role`, substituting each `{{.Name}}`
/// placeholder with `params[Name]`
pub fn generate_message(role: Role, params: &HashMap<String, String>) -> Result<String, EcdsaError> {
    let mut rest = role.template();
    let mut message = String::with_capacity(rest.len());

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        message.push_str(&rest[..start]);
        let after = &rest[start + PLACEHOLDER_OPEN.len()..];
        let end = after
            .find(PLACEHOLDER_CLOSE)
            .ok_or_else(|| EcdsaError::MissingMessageParam(after.to_string()))?;

        let name = &after[..end];
        let value = params
            .get(name)
            .ok_or_else(|| EcdsaError::MissingMessageParam(name.to_string()))?;
        message.push_str(value);
        rest = &after[end + PLACEHOLDER_CLOSE.len()..];
    }

    message.push_str(rest);
    Ok(message)
}

/// Renders the message of `role` and hashes it as a personal message
pub fn generate_hashed_message(
    role: Role,
    params: &HashMap<String, String>,
) -> Result<B256, EcdsaError> {
    generate_message(role, params).map(|msg| hash_personal_message(&msg))
}

/// Hashes `msg` as an Ethereum personal message, as done by `personal_sign`
pub fn hash_personal_message(msg: &str) -> B256 {
    let prefixed = format!("{PERSONAL_MESSAGE_PREFIX}{}{msg}", msg.len());
    keccak256(prefixed.as_bytes())
}
