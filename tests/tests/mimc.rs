use alloy_primitives::{Address, U256};
use ark_std::UniformRand;
use eyre::Result;
use rand::thread_rng;
use tests::mimc::utils::{
    dec, random_inputs, setup_mimc_test, FUZZ_ROUNDS, ONE_TWO_HASH, PENULTIMATE_CONSTANT,
    SECOND_CONSTANT, TWO_ONE_HASH, ZERO_ADDRESS_HASH,
};
use zklogin_common::{
    field::{scalar_to_u256, u256_to_scalar},
    types::ScalarField,
};
use zklogin_core::mimc::{errors::MimcError, MimcSponge};

#[test]
fn test_zero_address_hash() -> Result<()> {
    let sponge = setup_mimc_test()?;

    let from_address = sponge.hash_address(&Address::ZERO);
    let from_pair = sponge.hash_left_right(U256::ZERO, U256::ZERO);
    assert_eq!(from_address, from_pair);
    assert_eq!(from_address, dec(ZERO_ADDRESS_HASH)?);

    Ok(())
}

#[test]
fn test_address_casing_ignored() -> Result<()> {
    let sponge = setup_mimc_test()?;

    let lower = sponge.hash_address_str("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")?;
    let checksum = sponge.hash_address_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")?;
    let unprefixed = sponge.hash_address_str("f39fd6e51aad88f6f4ce6ab8827279cfffb92266")?;
    assert_eq!(lower, checksum);
    assert_eq!(lower, unprefixed);

    Ok(())
}

#[test]
fn test_sponge_determinism() -> Result<()> {
    let sponge = setup_mimc_test()?;

    let inputs = [U256::from(1), U256::from(2)];
    let out = sponge.multi_hash(&inputs, None, 1)?;
    assert_eq!(out, vec![dec(ONE_TWO_HASH)?]);

    let swapped = sponge.multi_hash(&[U256::from(2), U256::from(1)], None, 1)?;
    assert_eq!(swapped, vec![dec(TWO_ONE_HASH)?]);
    assert_ne!(out, swapped);

    Ok(())
}

#[test]
fn test_constants_snapshot() -> Result<()> {
    let sponge = setup_mimc_test()?;
    let constants = sponge.constants();

    assert_eq!(scalar_to_u256(constants[2]), dec(SECOND_CONSTANT)?);
    assert_eq!(scalar_to_u256(constants[218]), dec(PENULTIMATE_CONSTANT)?);
    assert_eq!(scalar_to_u256(constants[219]), U256::ZERO);

    Ok(())
}

#[test]
fn test_constants_boundary() -> Result<()> {
    let mut rng = thread_rng();

    for rounds in [1, 2] {
        let sponge = MimcSponge::new("mimcsponge", rounds, U256::ZERO)?;
        assert!(sponge.constants().iter().all(|c| *c == ScalarField::from(0u8)));

        // A single absorbed input is one Feistel step over `(x, 0)`
        let x = ScalarField::rand(&mut rng);
        let (expected, _) = sponge.encrypt(x, ScalarField::from(0u8), ScalarField::from(0u8));
        let out = sponge.multi_hash(&[scalar_to_u256(x)], None, 1)?;
        assert_eq!(out, vec![scalar_to_u256(expected)]);
    }

    Ok(())
}

#[test]
fn test_feistel_inverse_fuzz() -> Result<()> {
    let sponge = setup_mimc_test()?;
    let mut rng = thread_rng();

    for _ in 0..FUZZ_ROUNDS {
        let (x_l, x_r, k) = (
            ScalarField::rand(&mut rng),
            ScalarField::rand(&mut rng),
            ScalarField::rand(&mut rng),
        );
        let (c_l, c_r) = sponge.encrypt(x_l, x_r, k);
        assert_eq!(sponge.decrypt(c_l, c_r, k), (x_l, x_r));
    }

    Ok(())
}

#[test]
fn test_multi_hash_fuzz() -> Result<()> {
    let sponge = setup_mimc_test()?;

    for _ in 0..FUZZ_ROUNDS {
        let inputs = random_inputs(2);
        let [left, right] = [inputs[0], inputs[1]];

        // Two-input hashing agrees with the general sponge
        let pair = sponge.hash_left_right(left, right);
        assert_eq!(sponge.multi_hash(&inputs, None, 1)?, vec![pair]);

        // Squeezed outputs extend the single output
        let squeezed = sponge.multi_hash(&inputs, None, 3)?;
        assert_eq!(squeezed[0], pair);
        assert_eq!(squeezed.len(), 3);

        // Outputs are canonical field elements
        let reduced = scalar_to_u256(u256_to_scalar(pair));
        assert_eq!(reduced, pair);
    }

    Ok(())
}

#[test]
fn test_configurable_right() -> Result<()> {
    let right = U256::from(0xdead_u64);
    let sponge = MimcSponge::new("mimcsponge", 220, right)?;
    let default = setup_mimc_test()?;

    let address = Address::with_last_byte(7);
    assert_eq!(
        sponge.hash_address(&address),
        default.hash_left_right(U256::from(7), right)
    );
    assert_ne!(sponge.hash_address(&address), default.hash_address(&address));

    Ok(())
}

#[test]
fn test_invalid_sponges() -> Result<()> {
    assert_eq!(
        MimcSponge::new("mimcsponge", 221, U256::ZERO).err(),
        Some(MimcError::InvalidRounds(221))
    );
    assert_eq!(
        MimcSponge::new("", 220, U256::ZERO).err(),
        Some(MimcError::EmptySeed)
    );

    Ok(())
}
