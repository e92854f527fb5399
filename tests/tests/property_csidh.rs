//! Property-based tests for CSIDH-512 encodings, validation and agreement

use isocrypt_api::{Error, KeyExchange};
use isocrypt_kem::{Csidh512, Csidh512PublicKey, Csidh512SecretKey};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn pack(exponents: &[i8]) -> Vec<u8> {
    let mut packed = vec![0u8; 37];
    for (i, &e) in exponents.iter().enumerate() {
        packed[i / 2] |= ((e as u8) & 0x0F) << ((i % 2) * 4);
    }
    packed
}

/// Nibble values that decode into [-5, 5]
fn nibble_in_range(n: u8) -> bool {
    n <= 5 || n >= 11
}

/// A secret with at most `max_active` non-zero exponents
fn sparse_secret(max_active: usize) -> impl Strategy<Value = Vec<i8>> {
    prop::collection::vec((0usize..74, -5i8..=5), 0..=max_active).prop_map(|entries| {
        let mut exponents = vec![0i8; 74];
        for (i, e) in entries {
            exponents[i] = e;
        }
        exponents
    })
}

proptest! {
    #[test]
    fn secret_key_roundtrip(exponents in prop::collection::vec(-5i8..=5, 74)) {
        let packed = pack(&exponents);
        let sk = Csidh512SecretKey::from_bytes(&packed).unwrap();
        for (i, &e) in exponents.iter().enumerate() {
            prop_assert_eq!(sk.exponent(i), e);
        }
        prop_assert_eq!(&*sk.to_bytes(), &packed);
    }

    #[test]
    fn secret_key_import_accepts_exactly_valid_nibbles(bytes in prop::collection::vec(any::<u8>(), 37)) {
        let valid = bytes
            .iter()
            .all(|&b| nibble_in_range(b & 0x0F) && nibble_in_range(b >> 4));
        let result = Csidh512SecretKey::from_bytes(&bytes);
        prop_assert_eq!(result.is_ok(), valid);
        if !valid {
            let rejected_as_parameter = matches!(result, Err(Error::InvalidParameter { .. }));
            prop_assert!(rejected_as_parameter);
        }
    }

    #[test]
    fn public_key_roundtrip(bytes in prop::collection::vec(any::<u8>(), 64)) {
        let pk = Csidh512PublicKey::from_bytes(&bytes).unwrap();
        prop_assert_eq!(pk.to_bytes(), bytes);
    }

    #[test]
    fn wrong_lengths_rejected(len in 0usize..200) {
        let buf = vec![0u8; len];
        if len != 64 {
            let public_rejected = matches!(
                Csidh512PublicKey::from_bytes(&buf),
                Err(Error::InvalidLength { expected: 64, .. })
            );
            prop_assert!(public_rejected);
        }
        if len != 37 {
            let secret_rejected = matches!(
                Csidh512SecretKey::from_bytes(&buf),
                Err(Error::InvalidLength { expected: 37, .. })
            );
            prop_assert!(secret_rejected);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn random_coefficients_are_rejected(bytes in prop::collection::vec(any::<u8>(), 64), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let pk = Csidh512PublicKey::from_bytes(&bytes).unwrap();
        prop_assert!(!Csidh512::validate_public_key(&pk, &mut rng).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    #[test]
    fn sparse_secrets_agree(a in sparse_secret(3), b in sparse_secret(3), seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let sk_a = Csidh512SecretKey::from_bytes(&pack(&a)).unwrap();
        let sk_b = Csidh512SecretKey::from_bytes(&pack(&b)).unwrap();

        let pk_a = Csidh512::generate_public_key(&sk_a, &mut rng).unwrap();
        let pk_b = Csidh512::generate_public_key(&sk_b, &mut rng).unwrap();
        prop_assert!(Csidh512::validate_public_key(&pk_a, &mut rng).unwrap());
        prop_assert!(Csidh512::validate_public_key(&pk_b, &mut rng).unwrap());

        let ss_a = Csidh512::derive_shared_secret(&pk_b, &sk_a, &mut rng).unwrap();
        let ss_b = Csidh512::derive_shared_secret(&pk_a, &sk_b, &mut rng).unwrap();
        prop_assert_eq!(ss_a.as_bytes(), ss_b.as_bytes());
    }
}
