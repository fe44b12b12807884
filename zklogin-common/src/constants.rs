//! Constants that parameterize the MiMC sponge, the ECDSA witness, and the circuit inputs

use alloy_primitives::U256;

/// The number of bytes in a Keccak-256 digest
pub const HASH_OUTPUT_SIZE: usize = 32;

/// The number of bytes to represent field elements of the BN254 scalar field
pub const NUM_BYTES_FELT: usize = 32;

/// The number of bytes it takes to represent an unsigned 256-bit integer
pub const NUM_BYTES_U256: usize = 32;

/// The number of bytes it takes to represent an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of bytes it takes to represent a secp256k1 ECDSA signature
/// in the Ethereum layout.
///
/// Concretely, this is the concatenation of the `r` and `s` values of the signature,
/// and a 1-byte recovery identifier (whose value is either 0 or 1)
pub const NUM_BYTES_SIGNATURE: usize = 65;

/// The number of bytes in a SEC1-compressed secp256k1 point
pub const NUM_BYTES_COMPRESSED_POINT: usize = 33;

/// The number of hex characters in the `x` coordinate handed to point reconstruction
pub const NUM_HEX_CHARS_COORDINATE: usize = 64;

/// The offset added to a recovery identifier to obtain Ethereum's `v` value
pub const V_OFFSET: u8 = 27;

/// The number of 64-bit registers used to represent a 256-bit integer
pub const NUM_REGISTERS: usize = 4;

/// The window width, in bits, of the point precompute table
pub const STRIDE: usize = 8;

/// The number of strides in the point precompute table
pub const NUM_STRIDES: usize = 256 / STRIDE;

/// The number of window values per stride in the point precompute table
pub const WINDOW_SIZE: usize = 1 << STRIDE;

/// The number of coordinates stored per point (x, y)
pub const NUM_COORDINATES: usize = 2;

/// The height of the Merkle tree proven over by the `ZKMerkleTree` circuit
pub const LEVELS: usize = 32;

/// The number of public signals exposed by the zkLogin circuits
pub const NUM_PUBLIC_SIGNALS: usize = 2;

/// The default seed from which MiMC round constants are derived
pub const DEFAULT_MIMC_SEED: &str = "mimcsponge";

/// The default (and maximum) number of MiMC Feistel rounds
pub const DEFAULT_MIMC_ROUNDS: usize = 220;

/// The maximum number of MiMC Feistel rounds
pub const MAX_MIMC_ROUNDS: usize = 220;

/// The default right-hand operand of the address hash
pub const DEFAULT_MIMC_RIGHT: U256 = U256::ZERO;

/// The order of the secp256k1 group, `N`
pub const SECP256K1_N: U256 = U256::from_limbs([
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
]);

/// Half the order of the secp256k1 group, `N / 2`, used to enforce low-S signatures
pub const SECP256K1_HALF_ORDER: U256 = U256::from_limbs([
    0xdfe92f46681b20a0,
    0x5d576e7357a4501d,
    0xffffffffffffffff,
    0x7fffffffffffffff,
]);

/// The prime of the secp256k1 base field, `p`
pub const SECP256K1_P: U256 = U256::from_limbs([
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
]);

/// The order of the BN254 scalar field, `r`
pub const BN254_SCALAR_MODULUS: U256 = U256::from_limbs([
    0x43e1f593f0000001,
    0x2833e84879b97091,
    0xb85045b68181585d,
    0x30644e72e131a029,
]);
