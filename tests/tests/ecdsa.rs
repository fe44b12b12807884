use alloy_primitives::U256;
use eyre::Result;
use k256::ProjectivePoint;
use tests::ecdsa::utils::{raw_signature, random_signer, setup_ecdsa_test, FUZZ_ROUNDS};
use zklogin_common::constants::{SECP256K1_HALF_ORDER, SECP256K1_N};
use zklogin_core::ecdsa::{
    errors::EcdsaError,
    generate_hashed_message, hash_personal_message,
    precompute::{compute_u, compute_w, point_from_x, point_registers, r_inverse, u256_to_scalar},
    reconstruct_signature, split_signature, Role,
};

#[test]
fn test_signature_round_trip() -> Result<()> {
    let mut bytes = vec![0x01; 32];
    bytes.extend_from_slice(&[0x02; 32]);
    bytes.push(0x00);

    let sig = split_signature(&bytes)?;
    assert_eq!(sig.v(), 27);
    assert_eq!(sig.r().limbs(), &[0x0101010101010101; 4]);
    assert_eq!(sig.s().limbs(), &[0x0202020202020202; 4]);
    assert_eq!(reconstruct_signature(&sig).to_vec(), bytes);

    Ok(())
}

#[test]
fn test_high_s_rejection() -> Result<()> {
    let high = SECP256K1_HALF_ORDER + U256::from(1);
    let bytes = raw_signature(U256::ZERO, high, 0);
    assert_eq!(split_signature(&bytes), Err(EcdsaError::HighS));

    Ok(())
}

#[test]
fn test_sign_fuzz() -> Result<()> {
    let signer = setup_ecdsa_test();

    for i in 0..FUZZ_ROUNDS {
        let msg = format!("zklogin message {i}");
        let precomputes = signer.sign(&msg)?;
        let sig = precomputes.signature;

        // The signature recovers to the signer
        let hash = hash_personal_message(&msg);
        assert_eq!(sig.recover_address(&hash)?, signer.address());
        assert!(sig.s().to_u256() <= SECP256K1_HALF_ORDER);

        // U is `w · G` for `w = -(r⁻¹ · m)`
        let r_inv = r_inverse(sig.r().to_u256())?;
        let w = compute_w(&r_inv, U256::from_be_bytes(hash.0));
        assert_eq!(precomputes.u, compute_u(&w));

        // Sampled table cells are multiples of R
        let r_point = ProjectivePoint::from(point_from_x(&sig.r_hex(), sig.is_y_odd())?);
        for (stride, window) in [(0, 2), (16, 128), (31, 255)] {
            let scalar = u256_to_scalar(U256::from(window) << (8 * stride));
            let expected = point_registers(&(r_point * scalar).to_affine());
            assert_eq!(precomputes.t.get(stride, window), Some(&expected));
        }
    }

    Ok(())
}

#[test]
fn test_signature_verification_roundtrip() -> Result<()> {
    setup_ecdsa_test();

    for _ in 0..FUZZ_ROUNDS {
        let signer = random_signer();
        let other = random_signer();
        let hash = hash_personal_message("verify me");

        let sig = signer.sign_prehash(&hash)?;
        let bytes = reconstruct_signature(&sig);
        assert_eq!(split_signature(&bytes)?, sig);

        let recovered = sig.recover_address(&hash)?;
        assert_eq!(recovered, signer.address());
        assert_ne!(recovered, other.address());
    }

    Ok(())
}

#[test]
fn test_role_message_signing() -> Result<()> {
    let signer = setup_ecdsa_test();
    let params = [("HashedAddress", "42"), ("Nonce", "1")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let hash = generate_hashed_message(Role::ElectionLeader, &params)?;
    assert_eq!(
        hash,
        hash_personal_message("I am an Election Leader with hashed address 42 and nonce 1")
    );

    let sig = signer.sign_prehash(&hash)?;
    assert_eq!(sig.recover_address(&hash)?, signer.address());

    Ok(())
}

#[test]
fn test_precompute_errors() -> Result<()> {
    assert_eq!(r_inverse(SECP256K1_N).err(), Some(EcdsaError::NoInverse));
    assert_eq!(point_from_x("00", false).err(), Some(EcdsaError::BadXLength(2)));
    assert_eq!(
        point_from_x(&format!("{:064x}", 7), true).err(),
        Some(EcdsaError::BadPoint)
    );

    Ok(())
}
