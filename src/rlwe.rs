//! GSW over Ring-LWE: ciphertexts are 2l × 2 matrices over R_q = Z_q[X]/(X^N+1).

use rand::distributions::Distribution;
use rand::Rng;

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::gadget::{poly_mat_bit_decomp, rlwe_gadget_matrix};
use crate::gate::HomomorphicOps;
use crate::params::RlweParams;
use crate::ring::{pmat_add, pmat_dims, pmat_mul, pmat_sub, PolyMat, Ring};
use crate::scheme::FheScheme;

/// RLWE ciphertext: 2l × 2 matrix over R_q.
pub type RlweCiphertext = PolyMat;

/// Public key (b, a) as a 1 × 2 row, with b = −a·s + e in R_q.
#[derive(Clone, Debug)]
pub struct RlwePublicKey {
    pub mat: PolyMat,
}

/// Secret key (1, s)ᵀ as a 2 × 1 column over R_q.
#[derive(Clone, Debug)]
pub struct RlweSecretKey {
    pub col: PolyMat,
}

/// The RLWE-GSW scheme. Both quotient rings and the gadget are built once at
/// construction: R_q carries all ciphertext arithmetic, R_2 is the sampling
/// domain for encryption randomness.
#[derive(Clone, Debug)]
pub struct RlweGsw<X> {
    params: RlweParams,
    rq: Ring,
    r2: Ring,
    gadget: PolyMat,
    chi: X,
}

impl<X: Distribution<i64>> RlweGsw<X> {
    pub fn new(params: RlweParams, chi: X) -> Self {
        let rq = Ring::new(params.q, params.n);
        let r2 = Ring::new(2, params.n);
        let gadget = rlwe_gadget_matrix(&rq);
        Self {
            params,
            rq,
            r2,
            gadget,
            chi,
        }
    }

    pub fn params(&self) -> &RlweParams {
        &self.params
    }

    /// The ciphertext ring R_q.
    pub fn ring(&self) -> &Ring {
        &self.rq
    }

    /// The gadget matrix G, which doubles as the noiseless encryption of 1.
    pub fn gadget(&self) -> &PolyMat {
        &self.gadget
    }

    fn rows(&self) -> usize {
        2 * self.params.l
    }

    /// Sample a key pair: a uniform in R_q, s and e short polynomials,
    /// pk = (−a·s + e, a), sk = (1, s)ᵀ.
    pub fn keygen<R: Rng>(&self, rng: &mut R) -> (RlwePublicKey, RlweSecretKey) {
        let a = self.rq.uniform(rng);
        let s = self.rq.error(&self.chi, rng);
        let e = self.rq.error(&self.chi, rng);

        let b = self.rq.sub(&e, &self.rq.mul(&a, &s));

        let pk = vec![vec![b, a]];
        let sk = vec![vec![self.rq.one()], vec![s]];
        (RlwePublicKey { mat: pk }, RlweSecretKey { col: sk })
    }

    /// C = t·pk + f + β·G in R_q, with t a length-2l vector of binary
    /// polynomials (uniform over R_2, lifted) and f a 2l × 2 error matrix
    /// from χ. The outer product t·pk makes each row a fresh RLWE sample.
    pub fn encrypt<R: Rng>(&self, pk: &RlwePublicKey, bit: bool, rng: &mut R) -> Result<RlweCiphertext> {
        let got = pmat_dims(&pk.mat);
        if got != (1, 2) {
            return Err(Error::shape("public key", (1, 2), got));
        }

        let rows = self.rows();
        let mut ct = Vec::with_capacity(rows);
        for _ in 0..rows {
            let t = self.r2.uniform(rng);
            let row: Vec<_> = pk.mat[0]
                .iter()
                .map(|p| {
                    let noisy = self.rq.error(&self.chi, rng);
                    self.rq.add(&self.rq.mul(&t, p), &noisy)
                })
                .collect();
            ct.push(row);
        }
        if bit {
            ct = pmat_add(&self.rq, &ct, &self.gadget);
        }
        Ok(ct)
    }

    /// Compute v = C·sk, inspect the row paired with the gadget's highest
    /// power of two, and decode its constant coefficient:
    /// 1 iff q/4 ≤ c₀ ≤ 3q/4.
    pub fn decrypt(&self, sk: &RlweSecretKey, ct: &RlweCiphertext) -> Result<bool> {
        let got = pmat_dims(&sk.col);
        if got != (2, 1) {
            return Err(Error::shape("secret key", (2, 1), got));
        }
        let got = pmat_dims(ct);
        if got != (self.rows(), 2) {
            return Err(Error::shape("ciphertext", (self.rows(), 2), got));
        }

        let row = &ct[self.params.l - 1];
        let v = self.rq.add(
            &self.rq.mul(&row[0], &sk.col[0][0]),
            &self.rq.mul(&row[1], &sk.col[1][0]),
        );
        let c0 = v[0];
        let q = self.params.q;
        Ok(4 * c0 >= q && 4 * c0 <= 3 * q)
    }

    /// Homomorphic multiplication G⁻¹(C₂)·C₁ over R_q, where G⁻¹ is the
    /// columnwise polynomial bit decomposition.
    pub fn mul(&self, ct1: &RlweCiphertext, ct2: &RlweCiphertext) -> Result<RlweCiphertext> {
        for ct in [ct1, ct2] {
            let got = pmat_dims(ct);
            if got != (self.rows(), 2) {
                return Err(Error::shape("ciphertext", (self.rows(), 2), got));
            }
        }
        let decomposed = poly_mat_bit_decomp(&self.rq, ct2);
        Ok(pmat_mul(&self.rq, &decomposed, ct1))
    }

    /// Build a circuit from gate names and run it over the inputs.
    pub fn evaluate(&self, circuit: &[&[&str]], inputs: &[RlweCiphertext]) -> Result<Vec<RlweCiphertext>> {
        Circuit::parse(circuit)?.evaluate(self, inputs)
    }
}

impl<X: Distribution<i64>> HomomorphicOps for RlweGsw<X> {
    type Ct = RlweCiphertext;

    fn one(&self) -> RlweCiphertext {
        self.gadget.clone()
    }

    fn add(&self, a: &RlweCiphertext, b: &RlweCiphertext) -> Result<RlweCiphertext> {
        let (da, db) = (pmat_dims(a), pmat_dims(b));
        if da != db {
            return Err(Error::shape("ciphertext sum", da, db));
        }
        Ok(pmat_add(&self.rq, a, b))
    }

    fn sub(&self, a: &RlweCiphertext, b: &RlweCiphertext) -> Result<RlweCiphertext> {
        let (da, db) = (pmat_dims(a), pmat_dims(b));
        if da != db {
            return Err(Error::shape("ciphertext difference", da, db));
        }
        Ok(pmat_sub(&self.rq, a, b))
    }

    fn mul(&self, a: &RlweCiphertext, b: &RlweCiphertext) -> Result<RlweCiphertext> {
        RlweGsw::mul(self, a, b)
    }
}

impl<X: Distribution<i64>> FheScheme for RlweGsw<X> {
    type PublicKey = RlwePublicKey;
    type SecretKey = RlweSecretKey;
    type Ciphertext = RlweCiphertext;

    fn keygen<R: Rng>(&self, rng: &mut R) -> (RlwePublicKey, RlweSecretKey) {
        RlweGsw::keygen(self, rng)
    }

    fn encrypt<R: Rng>(&self, pk: &RlwePublicKey, bit: bool, rng: &mut R) -> Result<RlweCiphertext> {
        RlweGsw::encrypt(self, pk, bit, rng)
    }

    fn decrypt(&self, sk: &RlweSecretKey, ct: &RlweCiphertext) -> Result<bool> {
        RlweGsw::decrypt(self, sk, ct)
    }

    fn evaluate(&self, circuit: &[&[&str]], inputs: &[RlweCiphertext]) -> Result<Vec<RlweCiphertext>> {
        RlweGsw::evaluate(self, circuit, inputs)
    }
}
