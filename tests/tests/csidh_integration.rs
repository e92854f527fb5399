//! End-to-end tests for CSIDH-512 through the public API

use isocrypt_algorithms::csidh::Fp;
use isocrypt_api::{Error, KeyExchange, Serialize, SerializeSecret};
use isocrypt_kem::{Csidh512, Csidh512PublicKey, Csidh512SecretKey, Csidh512SharedSecret};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Exponents 0..=73 cycle through 1, -1, 2, -2, 3, -3, 4, -4, 5, -5, 0
fn cycling_secret_hex() -> String {
    let pattern: [i8; 11] = [1, -1, 2, -2, 3, -3, 4, -4, 5, -5, 0];
    let mut packed = [0u8; 37];
    for i in 0..74 {
        let e = pattern[i % pattern.len()];
        packed[i / 2] |= ((e as u8) & 0x0F) << ((i % 2) * 4);
    }
    hex::encode(packed)
}

#[test]
fn test_deterministic_end_to_end() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x0C51D);
    let (pk_a, sk_a) = Csidh512::keypair(&mut rng).unwrap();
    let (pk_b, sk_b) = Csidh512::keypair(&mut rng).unwrap();

    // both sides only ever see the peer's bytes
    let wire_a = pk_a.to_bytes();
    let wire_b = pk_b.to_bytes();
    let peer_b = Csidh512PublicKey::from_bytes(&wire_b).unwrap();
    let peer_a = Csidh512PublicKey::from_bytes(&wire_a).unwrap();

    let ss_a = Csidh512::derive_shared_secret(&peer_b, &sk_a, &mut rng).unwrap();
    let ss_b = Csidh512::derive_shared_secret(&peer_a, &sk_b, &mut rng).unwrap();
    assert_eq!(ss_a.as_bytes(), ss_b.as_bytes());

    // the same seed reproduces the same transcript
    let mut replay = ChaCha20Rng::seed_from_u64(0x0C51D);
    let (pk_a2, sk_a2) = Csidh512::keypair(&mut replay).unwrap();
    assert_eq!(pk_a2.to_bytes(), wire_a);
    assert_eq!(sk_a2, sk_a);
}

#[test]
fn test_independent_randomness_per_party() {
    let mut alice_rng = ChaCha20Rng::seed_from_u64(1);
    let mut bob_rng = ChaCha20Rng::seed_from_u64(2);

    let (pk_a, sk_a) = Csidh512::keypair(&mut alice_rng).unwrap();
    let (pk_b, sk_b) = Csidh512::keypair(&mut bob_rng).unwrap();

    let ss_a = Csidh512::derive_shared_secret(&pk_b, &sk_a, &mut alice_rng).unwrap();
    let ss_b = Csidh512::derive_shared_secret(&pk_a, &sk_b, &mut bob_rng).unwrap();
    assert_eq!(ss_a, ss_b);
}

#[test]
fn test_fixed_secret_key_import() {
    let encoded = cycling_secret_hex();
    let bytes = hex::decode(&encoded).unwrap();
    let sk = Csidh512SecretKey::from_bytes(&bytes).unwrap();

    assert_eq!(sk.exponent(0), 1);
    assert_eq!(sk.exponent(1), -1);
    assert_eq!(sk.exponent(8), 5);
    assert_eq!(sk.exponent(9), -5);
    assert_eq!(sk.exponent(10), 0);
    assert_eq!(sk.exponent(73), -4);
    assert_eq!(hex::encode(&*sk.to_bytes_zeroizing()), encoded);
    // byte 0 packs exponent 0 low and exponent 1 high
    assert_eq!(&encoded[..2], "f1");

    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let pk = Csidh512::generate_public_key(&sk, &mut rng).unwrap();
    assert!(Csidh512::validate_public_key(&pk, &mut rng).unwrap());

    // the public key does not depend on the randomness used to compute it
    let mut other = ChaCha20Rng::seed_from_u64(4);
    assert_eq!(Csidh512::generate_public_key(&sk, &mut other).unwrap(), pk);
}

#[test]
fn test_excluded_coefficients_rejected_from_bytes() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let sk = Csidh512::generate_secret_key(&mut rng).unwrap();

    for value in [Fp::TWO, Fp::MINUS_TWO] {
        let pk = Csidh512PublicKey::from_bytes(&value.to_le_bytes()).unwrap();
        assert!(!Csidh512::validate_public_key(&pk, &mut rng).unwrap());
        let err = Csidh512::derive_shared_secret(&pk, &sk, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }), "{:?}", err);
    }

    // top bit set: above p
    let mut high = [0u8; 64];
    high[63] = 0x80;
    let pk = Csidh512PublicKey::from_bytes(&high).unwrap();
    assert!(!Csidh512::validate_public_key(&pk, &mut rng).unwrap());
}

#[test]
fn test_trait_level_serialization() {
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let (pk, sk) = Csidh512::keypair(&mut rng).unwrap();

    let pk_bytes = Serialize::to_bytes(&pk);
    let pk2: Csidh512PublicKey = Serialize::from_bytes(&pk_bytes).unwrap();
    assert_eq!(pk, pk2);

    let sk_bytes = sk.to_bytes_zeroizing();
    let sk2: Csidh512SecretKey = SerializeSecret::from_bytes(&sk_bytes).unwrap();
    assert_eq!(sk, sk2);

    let ss = Csidh512::derive_shared_secret(&pk, &sk, &mut rng).unwrap();
    let ss_bytes = ss.to_bytes_zeroizing();
    let ss2: Csidh512SharedSecret = SerializeSecret::from_bytes(&ss_bytes).unwrap();
    assert_eq!(ss, ss2);
}

#[test]
fn test_error_display() {
    let err = Csidh512PublicKey::from_bytes(&[0u8; 10]).unwrap_err();
    let text = format!("{}", err);
    assert!(text.contains("expected 64"), "{}", text);
    assert!(text.contains("got 10"), "{}", text);
}
