//! Dense matrices over Z_q.
//!
//! Matrices are row-major `Vec<Vec<u64>>` with every entry reduced to [0, q).
//! Error matrices drawn from a signed distribution χ are reduced on creation,
//! so all downstream arithmetic stays in [0, q).

use rand::distributions::Distribution;
use rand::Rng;

use crate::modular::{mod_q, mod_q_wide};

/// Row-major matrix over Z_q.
pub type Mat = Vec<Vec<u64>>;

/// (rows, cols) of a matrix; an empty matrix has shape (0, 0).
pub fn dims(m: &[Vec<u64>]) -> (usize, usize) {
    if m.is_empty() {
        (0, 0)
    } else {
        (m.len(), m[0].len())
    }
}

/// Matrix product a·b mod q. Inner dimensions must agree.
pub fn mat_mul(a: &[Vec<u64>], b: &[Vec<u64>], q: u64) -> Mat {
    let (ar, ac) = dims(a);
    let (br, bc) = dims(b);
    debug_assert_eq!(ac, br);

    let mut out = vec![vec![0u64; bc]; ar];
    for i in 0..ar {
        for j in 0..bc {
            let mut acc: i128 = 0;
            for k in 0..ac {
                acc += (a[i][k] as i128) * (b[k][j] as i128);
            }
            out[i][j] = mod_q_wide(acc, q);
        }
    }
    out
}

/// Entrywise sum a + b mod q. Shapes must agree.
pub fn mat_add(a: &[Vec<u64>], b: &[Vec<u64>], q: u64) -> Mat {
    debug_assert_eq!(dims(a), dims(b));
    a.iter()
        .zip(b)
        .map(|(ra, rb)| {
            ra.iter()
                .zip(rb)
                .map(|(&x, &y)| mod_q(x as i64 + y as i64, q))
                .collect()
        })
        .collect()
}

/// Entrywise difference a − b mod q. Shapes must agree.
pub fn mat_sub(a: &[Vec<u64>], b: &[Vec<u64>], q: u64) -> Mat {
    debug_assert_eq!(dims(a), dims(b));
    a.iter()
        .zip(b)
        .map(|(ra, rb)| {
            ra.iter()
                .zip(rb)
                .map(|(&x, &y)| mod_q(x as i64 - y as i64, q))
                .collect()
        })
        .collect()
}

/// Matrix with entries drawn uniformly from [0, q).
pub fn uniform_matrix<R: Rng>(rows: usize, cols: usize, q: u64, rng: &mut R) -> Mat {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..q)).collect())
        .collect()
}

/// Matrix with entries drawn from χ, reduced mod q.
pub fn error_matrix<R: Rng, X: Distribution<i64>>(
    rows: usize,
    cols: usize,
    q: u64,
    chi: &X,
    rng: &mut R,
) -> Mat {
    (0..rows)
        .map(|_| (0..cols).map(|_| mod_q(chi.sample(rng), q)).collect())
        .collect()
}

/// Column vector (rows × 1) with entries drawn from χ, reduced mod q.
pub fn error_column<R: Rng, X: Distribution<i64>>(
    rows: usize,
    q: u64,
    chi: &X,
    rng: &mut R,
) -> Mat {
    error_matrix(rows, 1, q, chi, rng)
}
