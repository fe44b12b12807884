//! Limb packing of 256-bit integers into the 64-bit registers consumed by the circuits.
//!
//! A [`Registers`] value holds four little-endian 64-bit limbs, so that
//! `x = r0 + r1·2^64 + r2·2^128 + r3·2^192`.

use std::fmt::{self, Display, Formatter};

use alloy_primitives::U256;
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{constants::NUM_REGISTERS, errors::ConversionError};

/// The field name attributed to errors when deserializing a bare register tuple
const REGISTERS_FIELD: &str = "registers";

/// A 256-bit unsigned integer split into four little-endian 64-bit registers.
///
/// Serializes as an array of four decimal strings, as expected by the witness calculator.
#[serde_as]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Registers(#[serde_as(as = "[DisplayFromStr; NUM_REGISTERS]")] [u64; NUM_REGISTERS]);

impl Registers {
    /// The all-zero register tuple
    pub const ZERO: Registers = Registers([0; NUM_REGISTERS]);

    /// Constructs registers directly from little-endian limbs
    pub const fn new(limbs: [u64; NUM_REGISTERS]) -> Self {
        Registers(limbs)
    }

    /// Splits a 256-bit integer into registers, the least-significant limb first
    pub fn split(value: U256) -> Self {
        Registers(*value.as_limbs())
    }

    /// Builds registers from arbitrary-width limbs, failing if any limb exceeds 64 bits
    pub fn try_from_wide(limbs: [U256; NUM_REGISTERS]) -> Result<Self, ConversionError> {
        let mut registers = [0u64; NUM_REGISTERS];
        for (index, (register, limb)) in registers.iter_mut().zip(limbs).enumerate() {
            *register = u64::try_from(limb)
                .map_err(|_| ConversionError::LimbOverflow { index, value: limb })?;
        }

        Ok(Registers(registers))
    }

    /// Reconstructs the 256-bit integer represented by the registers
    pub fn to_u256(&self) -> U256 {
        U256::from_limbs(self.0)
    }

    /// Returns the little-endian limbs
    pub fn limbs(&self) -> &[u64; NUM_REGISTERS] {
        &self.0
    }

    /// Returns the limbs as decimal strings, in order `r0, r1, r2, r3`
    pub fn to_decimal_strings(&self) -> [String; NUM_REGISTERS] {
        self.0.map(|limb| limb.to_string())
    }

    /// Parses registers from decimal strings, attributing failures to the given document field
    pub fn from_decimal_strings<S: AsRef<str>>(
        field: &'static str,
        values: &[S],
    ) -> Result<Self, ConversionError> {
        if values.len() != NUM_REGISTERS {
            return Err(ConversionError::BadWitnessField {
                field,
                index: values.len().min(NUM_REGISTERS),
                value: format!("expected {NUM_REGISTERS} registers, got {}", values.len()),
            });
        }

        let mut limbs = [U256::ZERO; NUM_REGISTERS];
        for (index, (limb, raw)) in limbs.iter_mut().zip(values).enumerate() {
            *limb = parse_decimal(field, index, raw.as_ref())?;
        }

        Self::try_from_wide(limbs)
    }
}

impl<'de> Deserialize<'de> for Registers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<String>::deserialize(deserializer)?;
        Registers::from_decimal_strings(REGISTERS_FIELD, &values).map_err(D::Error::custom)
    }
}

impl From<U256> for Registers {
    fn from(value: U256) -> Self {
        Registers::split(value)
    }
}

impl From<Registers> for U256 {
    fn from(registers: Registers) -> Self {
        registers.to_u256()
    }
}

impl Display for Registers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r0, r1, r2, r3] = self.0;
        write!(f, "[{r0}, {r1}, {r2}, {r3}]")
    }
}

/// Splits a 256-bit integer into four 64-bit registers
pub fn split_to_registers(value: U256) -> Registers {
    Registers::split(value)
}

/// Reconstructs a 256-bit integer from four registers of arbitrary width,
/// failing with [`ConversionError::LimbOverflow`] if any is `>= 2^64`
pub fn reconstruct(limbs: [U256; NUM_REGISTERS]) -> Result<U256, ConversionError> {
    Registers::try_from_wide(limbs).map(|registers| registers.to_u256())
}

/// Parses an unsigned decimal string, as found in witness documents
pub fn parse_decimal(field: &'static str, index: usize, raw: &str) -> Result<U256, ConversionError> {
    let bad_field = || ConversionError::BadWitnessField {
        field,
        index,
        value: raw.to_string(),
    };

    // `U256::from_str` also accepts radix prefixes, which the prover does not
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_field());
    }

    U256::from_str_radix(raw, 10).map_err(|_| bad_field())
}
