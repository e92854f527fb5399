// Walks the CSIDH-512 isogeny graph with the raw primitives: two parties
// act on the base curve, validate each other's curves and meet on a
// common one.

use isocrypt_algorithms::csidh::{group_action, validate_coefficient, Fp, SecretExponents};
use isocrypt_algorithms::Error;
use rand::rngs::OsRng;

fn hex(fp: &Fp) -> String {
    fp.to_le_bytes().iter().map(|b| format!("{:02x}", b)).collect()
}

fn main() -> Result<(), Error> {
    let mut rng = OsRng;

    let alice = SecretExponents::random(&mut rng)?;
    let bob = SecretExponents::random(&mut rng)?;

    let alice_curve = group_action(&Fp::ZERO, &alice, &mut rng)?;
    let bob_curve = group_action(&Fp::ZERO, &bob, &mut rng)?;
    println!("alice: {}", hex(&alice_curve));
    println!("bob:   {}", hex(&bob_curve));

    assert!(validate_coefficient(&alice_curve, &mut rng)?);
    assert!(validate_coefficient(&bob_curve, &mut rng)?);

    let shared_a = group_action(&bob_curve, &alice, &mut rng)?;
    let shared_b = group_action(&alice_curve, &bob, &mut rng)?;
    assert_eq!(shared_a, shared_b);
    println!("shared: {}", hex(&shared_a));

    Ok(())
}
