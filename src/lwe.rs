//! GSW over standard LWE: ciphertexts are m × n integer matrices mod q.

use rand::distributions::Distribution;
use rand::Rng;

use crate::circuit::Circuit;
use crate::error::{Error, Result};
use crate::gadget::{bit_decomp, gadget_matrix};
use crate::gate::HomomorphicOps;
use crate::matrix::{
    dims, error_column, error_matrix, mat_add, mat_mul, mat_sub, uniform_matrix, Mat,
};
use crate::params::LweParams;
use crate::scheme::FheScheme;

/// LWE ciphertext: m × n matrix over Z_q.
pub type LweCiphertext = Mat;

/// Public key [b | A] of shape m × n, with b = −A·s + e mod q.
#[derive(Clone, Debug)]
pub struct LwePublicKey {
    pub mat: Mat,
}

/// Secret key (1, s₁, …, s_{n−1})ᵀ as an n × 1 column, reduced mod q.
#[derive(Clone, Debug)]
pub struct LweSecretKey {
    pub col: Mat,
}

/// The LWE-GSW scheme: parameters, gadget and error distribution, fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct LweGsw<X> {
    params: LweParams,
    gadget: Mat,
    chi: X,
}

impl<X: Distribution<i64>> LweGsw<X> {
    pub fn new(params: LweParams, chi: X) -> Self {
        let gadget = gadget_matrix(params.q, params.n);
        Self { params, gadget, chi }
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    /// The gadget matrix G, which doubles as the noiseless encryption of 1.
    pub fn gadget(&self) -> &Mat {
        &self.gadget
    }

    /// Sample a key pair: A uniform m × (n−1), s and e short,
    /// pk = [−A·s + e | A], sk = (1, s)ᵀ.
    pub fn keygen<R: Rng>(&self, rng: &mut R) -> (LwePublicKey, LweSecretKey) {
        let LweParams { q, n, m, .. } = self.params;

        let a = uniform_matrix(m, n - 1, q, rng);
        let s = error_column(n - 1, q, &self.chi, rng);
        let e = error_column(m, q, &self.chi, rng);

        let b = mat_sub(&e, &mat_mul(&a, &s, q), q);

        let mut pk = vec![vec![0u64; n]; m];
        for i in 0..m {
            pk[i][0] = b[i][0];
            pk[i][1..].copy_from_slice(&a[i]);
        }

        let mut sk = vec![vec![1u64]];
        sk.extend(s);

        (LwePublicKey { mat: pk }, LweSecretKey { col: sk })
    }

    /// C = T·pk + F + β·G mod q, with T (m × m) and F (m × n) drawn from χ.
    pub fn encrypt<R: Rng>(&self, pk: &LwePublicKey, bit: bool, rng: &mut R) -> Result<LweCiphertext> {
        let LweParams { q, n, m, .. } = self.params;
        let got = dims(&pk.mat);
        if got != (m, n) {
            return Err(Error::shape("public key", (m, n), got));
        }

        let t = error_matrix(m, m, q, &self.chi, rng);
        let f = error_matrix(m, n, q, &self.chi, rng);

        let mut ct = mat_add(&mat_mul(&t, &pk.mat, q), &f, q);
        if bit {
            ct = mat_add(&ct, &self.gadget, q);
        }
        Ok(ct)
    }

    /// Compute v = C·sk mod q and decode the coordinate paired with the
    /// highest gadget power of two: 1 iff q/4 < v[l−1] < 3q/4.
    pub fn decrypt(&self, sk: &LweSecretKey, ct: &LweCiphertext) -> Result<bool> {
        let LweParams { q, n, l, m } = self.params;
        let got = dims(&sk.col);
        if got != (n, 1) {
            return Err(Error::shape("secret key", (n, 1), got));
        }
        let got = dims(ct);
        if got != (m, n) {
            return Err(Error::shape("ciphertext", (m, n), got));
        }

        let v = mat_mul(ct, &sk.col, q);
        let coord = v[l - 1][0];
        Ok(4 * coord > q && 4 * coord < 3 * q)
    }

    /// Homomorphic multiplication G⁻¹(C₁)·C₂ mod q. The 0/1 decomposition is
    /// what keeps the product's noise additive in the operands' noise.
    pub fn mul(&self, ct1: &LweCiphertext, ct2: &LweCiphertext) -> Result<LweCiphertext> {
        let LweParams { q, n, m, .. } = self.params;
        for ct in [ct1, ct2] {
            let got = dims(ct);
            if got != (m, n) {
                return Err(Error::shape("ciphertext", (m, n), got));
            }
        }
        Ok(mat_mul(&bit_decomp(ct1, q), ct2, q))
    }

    /// Build a circuit from gate names and run it over the inputs.
    pub fn evaluate(&self, circuit: &[&[&str]], inputs: &[LweCiphertext]) -> Result<Vec<LweCiphertext>> {
        Circuit::parse(circuit)?.evaluate(self, inputs)
    }
}

impl<X: Distribution<i64>> HomomorphicOps for LweGsw<X> {
    type Ct = LweCiphertext;

    fn one(&self) -> LweCiphertext {
        self.gadget.clone()
    }

    fn add(&self, a: &LweCiphertext, b: &LweCiphertext) -> Result<LweCiphertext> {
        let (da, db) = (dims(a), dims(b));
        if da != db {
            return Err(Error::shape("ciphertext sum", da, db));
        }
        Ok(mat_add(a, b, self.params.q))
    }

    fn sub(&self, a: &LweCiphertext, b: &LweCiphertext) -> Result<LweCiphertext> {
        let (da, db) = (dims(a), dims(b));
        if da != db {
            return Err(Error::shape("ciphertext difference", da, db));
        }
        Ok(mat_sub(a, b, self.params.q))
    }

    fn mul(&self, a: &LweCiphertext, b: &LweCiphertext) -> Result<LweCiphertext> {
        LweGsw::mul(self, a, b)
    }
}

impl<X: Distribution<i64>> FheScheme for LweGsw<X> {
    type PublicKey = LwePublicKey;
    type SecretKey = LweSecretKey;
    type Ciphertext = LweCiphertext;

    fn keygen<R: Rng>(&self, rng: &mut R) -> (LwePublicKey, LweSecretKey) {
        LweGsw::keygen(self, rng)
    }

    fn encrypt<R: Rng>(&self, pk: &LwePublicKey, bit: bool, rng: &mut R) -> Result<LweCiphertext> {
        LweGsw::encrypt(self, pk, bit, rng)
    }

    fn decrypt(&self, sk: &LweSecretKey, ct: &LweCiphertext) -> Result<bool> {
        LweGsw::decrypt(self, sk, ct)
    }

    fn evaluate(&self, circuit: &[&[&str]], inputs: &[LweCiphertext]) -> Result<Vec<LweCiphertext>> {
        LweGsw::evaluate(self, circuit, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::DiscreteGaussian;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn toy_scheme() -> LweGsw<DiscreteGaussian> {
        let params = LweParams::new(4096, 5);
        LweGsw::new(params, DiscreteGaussian::for_dimension(5))
    }

    #[test]
    fn test_key_shapes() {
        let scheme = toy_scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let (pk, sk) = scheme.keygen(&mut rng);
        assert_eq!(dims(&pk.mat), (60, 5));
        assert_eq!(dims(&sk.col), (5, 1));
        assert_eq!(sk.col[0][0], 1);
    }

    #[test]
    fn test_encrypt_shape_closed_under_mul() {
        let scheme = toy_scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        let (pk, _) = scheme.keygen(&mut rng);
        let ct1 = scheme.encrypt(&pk, true, &mut rng).unwrap();
        let ct2 = scheme.encrypt(&pk, false, &mut rng).unwrap();
        assert_eq!(dims(&ct1), (60, 5));
        let prod = scheme.mul(&ct1, &ct2).unwrap();
        assert_eq!(dims(&prod), (60, 5));
    }

    #[test]
    fn test_bad_public_key_shape() {
        let scheme = toy_scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let pk = LwePublicKey { mat: vec![vec![0; 6]; 60] };
        let err = scheme.encrypt(&pk, true, &mut rng).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_bad_ciphertext_shape() {
        let scheme = toy_scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let (pk, sk) = scheme.keygen(&mut rng);
        let ct = scheme.encrypt(&pk, true, &mut rng).unwrap();
        let truncated: LweCiphertext = ct[..59].to_vec();
        assert!(scheme.decrypt(&sk, &truncated).is_err());
        assert!(scheme.mul(&ct, &truncated).is_err());
        assert!(scheme.mul(&truncated, &ct).is_err());
    }

    #[test]
    fn test_entries_reduced() {
        let scheme = toy_scheme();
        let mut rng = ChaCha20Rng::seed_from_u64(15);
        let (pk, sk) = scheme.keygen(&mut rng);
        let ct = scheme.encrypt(&pk, true, &mut rng).unwrap();
        let q = scheme.params().q;
        assert!(pk.mat.iter().flatten().all(|&x| x < q));
        assert!(sk.col.iter().flatten().all(|&x| x < q));
        assert!(ct.iter().flatten().all(|&x| x < q));
    }
}
