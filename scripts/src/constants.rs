//! Constants used in the witness scripts

/// The name of the environment variable overriding the MiMC constants seed
pub const MIMC_SEED_ENV_VAR: &str = "MIMC_SEED";

/// The name of the environment variable overriding the number of MiMC rounds
pub const MIMC_ROUNDS_ENV_VAR: &str = "MIMC_ROUNDS";

/// The name of the environment variable overriding the right operand of the address hash
pub const MIMC_RIGHT_ENV_VAR: &str = "MIMC_RIGHT";

/// The name of the environment variable selecting the logger mode
pub const LOGGER_MODE_ENV_VAR: &str = "LOGGER_MODE";

/// The default right operand of the address hash, in decimal
pub const DEFAULT_RIGHT: &str = "0";

/// The default number of outputs squeezed by the `multi-hash` command
pub const DEFAULT_NUM_OUTPUTS: &str = "1";
