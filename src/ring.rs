//! The polynomial quotient ring R_q = Z_q[X]/(X^n + 1).
//!
//! Polynomials are coefficient vectors of length n (degree-ascending), every
//! coefficient reduced to [0, q). The ring object carries the modulus and
//! dimension; elements are plain data.

use rand::distributions::Distribution;
use rand::Rng;

use crate::modular::{mod_q, mod_q_wide};

/// Element of R_q: n coefficients, constant term first.
pub type Poly = Vec<u64>;

/// Row-major matrix over R_q.
pub type PolyMat = Vec<Vec<Poly>>;

/// Arithmetic for Z_q[X]/(X^n + 1). n must be a power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    q: u64,
    n: usize,
}

impl Ring {
    pub fn new(q: u64, n: usize) -> Self {
        debug_assert!(n.is_power_of_two());
        Self { q, n }
    }

    pub fn modulus(&self) -> u64 {
        self.q
    }

    pub fn dimension(&self) -> usize {
        self.n
    }

    /// The zero polynomial.
    pub fn zero(&self) -> Poly {
        vec![0; self.n]
    }

    /// The constant polynomial c.
    pub fn constant(&self, c: i64) -> Poly {
        let mut p = self.zero();
        p[0] = mod_q(c, self.q);
        p
    }

    /// The constant polynomial 1.
    pub fn one(&self) -> Poly {
        self.constant(1)
    }

    pub fn add(&self, a: &[u64], b: &[u64]) -> Poly {
        debug_assert_eq!(a.len(), self.n);
        debug_assert_eq!(b.len(), self.n);
        a.iter()
            .zip(b)
            .map(|(&x, &y)| mod_q(x as i64 + y as i64, self.q))
            .collect()
    }

    pub fn sub(&self, a: &[u64], b: &[u64]) -> Poly {
        debug_assert_eq!(a.len(), self.n);
        debug_assert_eq!(b.len(), self.n);
        a.iter()
            .zip(b)
            .map(|(&x, &y)| mod_q(x as i64 - y as i64, self.q))
            .collect()
    }

    pub fn neg(&self, a: &[u64]) -> Poly {
        a.iter().map(|&x| mod_q(-(x as i64), self.q)).collect()
    }

    /// Negacyclic product: X^n ≡ −1, so terms past degree n−1 wrap with a
    /// sign flip. Schoolbook; fine for the small dimensions used here.
    pub fn mul(&self, a: &[u64], b: &[u64]) -> Poly {
        debug_assert_eq!(a.len(), self.n);
        debug_assert_eq!(b.len(), self.n);
        let n = self.n;
        let mut acc = vec![0i128; n];
        for i in 0..n {
            if a[i] == 0 {
                continue;
            }
            for j in 0..n {
                let term = (a[i] as i128) * (b[j] as i128);
                let k = i + j;
                if k < n {
                    acc[k] += term;
                } else {
                    acc[k - n] -= term;
                }
            }
        }
        acc.into_iter().map(|v| mod_q_wide(v, self.q)).collect()
    }

    /// Polynomial with coefficients uniform in [0, q).
    pub fn uniform<R: Rng>(&self, rng: &mut R) -> Poly {
        (0..self.n).map(|_| rng.gen_range(0..self.q)).collect()
    }

    /// Polynomial with all n coefficients drawn from χ, reduced mod q.
    pub fn error<R: Rng, X: Distribution<i64>>(&self, chi: &X, rng: &mut R) -> Poly {
        (0..self.n).map(|_| mod_q(chi.sample(rng), self.q)).collect()
    }
}

/// (rows, cols) of a polynomial matrix; empty is (0, 0).
pub fn pmat_dims(m: &[Vec<Poly>]) -> (usize, usize) {
    if m.is_empty() {
        (0, 0)
    } else {
        (m.len(), m[0].len())
    }
}

/// Entrywise sum over R_q. Shapes must agree.
pub fn pmat_add(ring: &Ring, a: &[Vec<Poly>], b: &[Vec<Poly>]) -> PolyMat {
    debug_assert_eq!(pmat_dims(a), pmat_dims(b));
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| ring.add(x, y)).collect())
        .collect()
}

/// Entrywise difference over R_q. Shapes must agree.
pub fn pmat_sub(ring: &Ring, a: &[Vec<Poly>], b: &[Vec<Poly>]) -> PolyMat {
    debug_assert_eq!(pmat_dims(a), pmat_dims(b));
    a.iter()
        .zip(b)
        .map(|(ra, rb)| ra.iter().zip(rb).map(|(x, y)| ring.sub(x, y)).collect())
        .collect()
}

/// Matrix product over R_q. Inner dimensions must agree.
pub fn pmat_mul(ring: &Ring, a: &[Vec<Poly>], b: &[Vec<Poly>]) -> PolyMat {
    let (ar, ac) = pmat_dims(a);
    let (br, bc) = pmat_dims(b);
    debug_assert_eq!(ac, br);

    let mut out = vec![vec![ring.zero(); bc]; ar];
    for i in 0..ar {
        for j in 0..bc {
            let mut acc = ring.zero();
            for k in 0..ac {
                acc = ring.add(&acc, &ring.mul(&a[i][k], &b[k][j]));
            }
            out[i][j] = acc;
        }
    }
    out
}
