//! Demo: leveled GSW FHE over LWE and RLWE, driving gates through the
//! circuit evaluator.

use gsw_circuits::{DiscreteGaussian, FheScheme, LweGsw, LweParams, Result, RlweGsw, RlweParams};
use rand::thread_rng;

fn check(label: &str, got: bool, expected: bool) {
    println!(
        "{} = {} (expected {}) {}",
        label,
        got as u8,
        expected as u8,
        if got == expected { "✓" } else { "✗" }
    );
}

fn demo_scheme<S: FheScheme>(scheme: &S) -> Result<()> {
    let mut rng = thread_rng();
    let (pk, sk) = scheme.keygen(&mut rng);

    println!("\n--- Encrypt / decrypt ---");
    for bit in [false, true] {
        let ct = scheme.encrypt(&pk, bit, &mut rng)?;
        let dec = scheme.decrypt(&sk, &ct)?;
        check(&format!("Encrypt({}) -> Decrypt", bit as u8), dec, bit);
    }

    println!("\n--- Single gates ---");
    for (name, table) in [
        ("nand", [true, true, true, false]),
        ("and", [false, false, false, true]),
        ("or", [false, true, true, true]),
        ("xor", [false, true, true, false]),
    ] {
        for (idx, (a, b)) in [(false, false), (false, true), (true, false), (true, true)]
            .into_iter()
            .enumerate()
        {
            let ct_a = scheme.encrypt(&pk, a, &mut rng)?;
            let ct_b = scheme.encrypt(&pk, b, &mut rng)?;
            let out = scheme.evaluate(&[&[name]], &[ct_a, ct_b])?;
            let dec = scheme.decrypt(&sk, &out[0])?;
            check(
                &format!("{} {} {}", a as u8, name.to_uppercase(), b as u8),
                dec,
                table[idx],
            );
        }
    }

    println!("\n--- Two-depth circuit: [wire wire] ; [and] ---");
    for (a, b) in [(true, false), (true, true)] {
        let ct_a = scheme.encrypt(&pk, a, &mut rng)?;
        let ct_b = scheme.encrypt(&pk, b, &mut rng)?;
        let out = scheme.evaluate(&[&["wire", "wire"], &["and"]], &[ct_a, ct_b])?;
        let dec = scheme.decrypt(&sk, &out[0])?;
        check(&format!("{} AND {}", a as u8, b as u8), dec, a && b);
    }
    Ok(())
}

fn main() -> Result<()> {
    println!("Leveled GSW FHE - Demo");

    let lwe_params = LweParams::toy();
    println!(
        "\n=== LWE-GSW: q=2^{}, n={}, ciphertexts {}x{} ===",
        lwe_params.l, lwe_params.n, lwe_params.m, lwe_params.n
    );
    let lwe = LweGsw::new(lwe_params, DiscreteGaussian::for_dimension(lwe_params.n));
    demo_scheme(&lwe)?;

    let rlwe_params = RlweParams::toy();
    println!(
        "\n=== RLWE-GSW: q=2^{}, N={}, ciphertexts {}x2 over R_q ===",
        rlwe_params.l,
        rlwe_params.n,
        2 * rlwe_params.l
    );
    let rlwe = RlweGsw::new(rlwe_params, DiscreteGaussian::for_dimension(rlwe_params.n));
    demo_scheme(&rlwe)?;

    Ok(())
}
