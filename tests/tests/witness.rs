use alloy_primitives::U256;
use eyre::Result;
use itertools::Itertools;
use tests::{
    ecdsa::utils::random_signer,
    mimc::utils::setup_mimc_test,
    witness::utils::{mock_proof_data, MockProver},
};
use zklogin_common::{constants::NUM_PUBLIC_SIGNALS, registers::Registers};
use zklogin_core::witness::{
    proof::{convert_proof, public_signal, public_signals},
    EthereumAddressInput, WitnessInput,
};

#[test]
fn test_witness_document() -> Result<()> {
    let private_key = Registers::split(U256::from(1));
    let doc = WitnessInput::new(private_key).to_json()?;

    let zeros = std::iter::repeat(r#""0""#).take(32).join(",");
    let expected = format!(
        r#"{{"privateKey":["1","0","0","0"],"pathElements":[{zeros}],"pathIndices":[{zeros}]}}"#
    );
    assert_eq!(doc, expected);

    Ok(())
}

#[test]
fn test_address_document() -> Result<()> {
    let private_key = Registers::split(U256::from(1));
    let doc = EthereumAddressInput::new(private_key).to_json()?;
    assert_eq!(doc, r#"{"privateKey":["1","0","0","0"]}"#);

    // The signer's key survives a round trip through the address document
    let signer = random_signer();
    let input = WitnessInput::new(signer.private_key_registers()).address_input();
    let parsed = EthereumAddressInput::from_json(&input.to_json()?)?;
    assert_eq!(parsed.private_key().to_u256(), signer.private_key());

    // The address document lacks the Merkle path fields
    assert!(WitnessInput::from_json(&input.to_json()?).is_err());

    Ok(())
}

#[test]
fn test_witness_from_signer() -> Result<()> {
    let signer = random_signer();
    let sponge = setup_mimc_test()?;

    // A single-level path whose sibling is the signer's own leaf
    let leaf = sponge.hash_address(&signer.address());
    let input = WitnessInput::new(signer.private_key_registers())
        .with_path(&[leaf], &[U256::from(1)])?;

    let parsed = WitnessInput::from_json(&input.to_json()?)?;
    assert_eq!(parsed.private_key().to_u256(), signer.private_key());
    assert_eq!(parsed.path_elements()[0], leaf);
    assert!(parsed.path_elements()[1..].iter().all(|e| *e == U256::ZERO));

    Ok(())
}

#[test]
fn test_prove_and_convert() -> Result<()> {
    let input = WitnessInput::new(Registers::new([9, 0, 0, 0]));
    let proof = input.prove_with(&MockProver)?;

    let converted = convert_proof(&proof.proof)?;
    assert_eq!(converted.pi_a, [U256::from(1), U256::from(2)]);
    assert_eq!(
        converted.pi_b,
        [[U256::from(4), U256::from(3)], [U256::from(6), U256::from(5)]]
    );
    assert_eq!(converted, convert_proof(&mock_proof_data())?);

    let signals = public_signals::<NUM_PUBLIC_SIGNALS>(&proof)?;
    assert_eq!(signals, [U256::from(9), U256::from(1)]);
    assert_eq!(public_signal(&proof, 0)?, U256::from(9));
    assert!(public_signal(&proof, NUM_PUBLIC_SIGNALS).is_err());

    Ok(())
}
