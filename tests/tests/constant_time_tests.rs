//! Timing tests for the secret-facing CSIDH-512 field operations
//!
//! These compare running times across input classes and are sensitive to
//! machine load, so they only run on request:
//! `cargo test -p isocrypt-tests --release -- --ignored`

use isocrypt_algorithms::csidh::{Fp, FpSampler, U512};
use isocrypt_tests::suites::constant_time::{TestConfig, TimingAnalysis, TimingTester};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

fn random_fp(rng: &mut ChaCha20Rng) -> Fp {
    FpSampler::new().random_fp(rng).unwrap()
}

fn compare<A, B>(name: &str, config: &TestConfig, mut op_a: A, mut op_b: B) -> TimingAnalysis
where
    A: FnMut(),
    B: FnMut(),
{
    for _ in 0..config.num_warmup {
        op_a();
        op_b();
    }

    let tester = TimingTester::from_config(config);
    let t_a = tester.measure(&mut op_a);
    let t_b = tester.measure(&mut op_b);

    let analysis = tester
        .analyze_constant_time(&t_a, &t_b, config)
        .unwrap_or_else(|e| panic!("{}: analysis error: {}", name, e));
    println!("{}", analysis.report(name));
    analysis
}

#[test]
#[ignore = "timing-sensitive"]
fn test_fp_mul_constant_time() {
    let config = TestConfig::for_field_arithmetic();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let x = random_fp(&mut rng);
    let y = random_fp(&mut rng);
    let zero = Fp::ZERO;

    let analysis = compare(
        "Fp::mul",
        &config,
        || {
            black_box(black_box(&x).mul(black_box(&y)));
        },
        || {
            black_box(black_box(&x).mul(black_box(&zero)));
        },
    );
    assert!(analysis.is_constant_time, "{}", analysis.report("Fp::mul"));
}

#[test]
#[ignore = "timing-sensitive"]
fn test_fp_sub_constant_time() {
    let config = TestConfig::for_field_arithmetic();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let x = random_fp(&mut rng);
    let y = random_fp(&mut rng);
    // one ordering borrows, the other does not
    let (small, large) = if x.to_plain().is_less_vartime(&y.to_plain()) {
        (x, y)
    } else {
        (y, x)
    };

    let analysis = compare(
        "Fp::sub",
        &config,
        || {
            black_box(black_box(&small).sub(black_box(&large)));
        },
        || {
            black_box(black_box(&large).sub(black_box(&small)));
        },
    );
    assert!(analysis.is_constant_time, "{}", analysis.report("Fp::sub"));
}

#[test]
#[ignore = "timing-sensitive"]
fn test_conditional_swap_constant_time() {
    let config = TestConfig::for_conditional_swap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let mut a = random_fp(&mut rng);
    let mut b = random_fp(&mut rng);
    let mut c = a;
    let mut d = b;

    let analysis = compare(
        "Fp::conditional_swap",
        &config,
        || Fp::conditional_swap(black_box(&mut a), black_box(&mut b), black_box(0)),
        || Fp::conditional_swap(black_box(&mut c), black_box(&mut d), black_box(1)),
    );
    assert!(
        analysis.is_constant_time,
        "{}",
        analysis.report("Fp::conditional_swap")
    );
}

#[test]
#[ignore = "timing-sensitive"]
fn test_pow_constant_time_in_exponent() {
    let config = TestConfig::for_exponentiation();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let x = random_fp(&mut rng);
    let sparse = U512::ONE;
    let dense = U512::from_words([u64::MAX; 8]);

    let analysis = compare(
        "Fp::pow",
        &config,
        || {
            black_box(black_box(&x).pow(black_box(&sparse)));
        },
        || {
            black_box(black_box(&x).pow(black_box(&dense)));
        },
    );
    assert!(analysis.is_constant_time, "{}", analysis.report("Fp::pow"));
}
