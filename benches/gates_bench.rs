//! Encryption and gate-evaluation benchmarks for both schemes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gsw_circuits::{DiscreteGaussian, LweGsw, LweParams, RlweGsw, RlweParams, SecurityLevel};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn lwe_encrypt(c: &mut Criterion) {
    let params = LweParams::with_security(SecurityLevel::Low);
    let scheme = LweGsw::new(params, DiscreteGaussian::for_dimension(params.n));
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (pk, _) = scheme.keygen(&mut rng);

    c.bench_function("lwe_encrypt_low", |b| {
        b.iter(|| scheme.encrypt(black_box(&pk), black_box(true), &mut rng))
    });
}

fn lwe_nand(c: &mut Criterion) {
    let params = LweParams::with_security(SecurityLevel::Low);
    let scheme = LweGsw::new(params, DiscreteGaussian::for_dimension(params.n));
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (pk, _) = scheme.keygen(&mut rng);
    let ct1 = scheme.encrypt(&pk, true, &mut rng).unwrap();
    let ct2 = scheme.encrypt(&pk, false, &mut rng).unwrap();

    c.bench_function("lwe_nand_low", |b| {
        b.iter(|| {
            scheme
                .evaluate(&[&["nand"]], &[black_box(ct1.clone()), black_box(ct2.clone())])
                .unwrap()
        })
    });
}

fn rlwe_nand(c: &mut Criterion) {
    let params = RlweParams::with_security(SecurityLevel::Low);
    let scheme = RlweGsw::new(params, DiscreteGaussian::for_dimension(params.n));
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (pk, _) = scheme.keygen(&mut rng);
    let ct1 = scheme.encrypt(&pk, true, &mut rng).unwrap();
    let ct2 = scheme.encrypt(&pk, false, &mut rng).unwrap();

    c.bench_function("rlwe_nand_low", |b| {
        b.iter(|| {
            scheme
                .evaluate(&[&["nand"]], &[black_box(ct1.clone()), black_box(ct2.clone())])
                .unwrap()
        })
    });
}

criterion_group!(benches, lwe_encrypt, lwe_nand, rlwe_nand);
criterion_main!(benches);
