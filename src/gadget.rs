//! Gadget matrices and bit decomposition.
//!
//! The gadget G packs powers of two so that the 0/1 decomposition G⁻¹
//! satisfies G⁻¹(M)·G ≡ M (mod q). Multiplying through G⁻¹ is what keeps
//! GSW noise growth additive per level.

use crate::matrix::Mat;
use crate::params::ceil_log2;
use crate::ring::{Poly, PolyMat, Ring};

/// LWE gadget: G = I_n ⊗ g with g = (1, 2, …, 2^{l−1})ᵀ, shape (n·l) × n.
pub fn gadget_matrix(q: u64, n: usize) -> Mat {
    let l = ceil_log2(q);
    let mut g = vec![vec![0u64; n]; n * l];
    for j in 0..n {
        for k in 0..l {
            g[j * l + k][j] = 1u64 << k;
        }
    }
    g
}

/// G⁻¹ for integer matrices: each entry becomes its l little-endian bits,
/// laid out in column block j·l .. j·l + l − 1. Output is 0/1 of shape
/// r × (c·l).
pub fn bit_decomp(matrix: &[Vec<u64>], q: u64) -> Mat {
    let l = ceil_log2(q);
    matrix
        .iter()
        .map(|row| {
            let mut out = Vec::with_capacity(row.len() * l);
            for &v in row {
                for k in 0..l {
                    out.push((v >> k) & 1);
                }
            }
            out
        })
        .collect()
}

/// RLWE gadget over R_q, shape 2l × 2: entry (i, 0) = 2^i for i < l and
/// (i, 1) = 2^{i−l} for l ≤ i < 2l, zero elsewhere.
pub fn rlwe_gadget_matrix(ring: &Ring) -> PolyMat {
    let l = ceil_log2(ring.modulus());
    let mut g = vec![vec![ring.zero(); 2]; 2 * l];
    for i in 0..l {
        g[i][0] = ring.constant(1 << i);
        g[l + i][1] = ring.constant(1 << i);
    }
    g
}

/// Bit decomposition of a single polynomial: l polynomials where the k-th
/// keeps bit k of every coefficient.
pub fn poly_bit_decomp(ring: &Ring, poly: &[u64]) -> Vec<Poly> {
    let l = ceil_log2(ring.modulus());
    (0..l)
        .map(|k| poly.iter().map(|&c| (c >> k) & 1).collect())
        .collect()
}

/// G⁻¹ for polynomial matrices: each entry's decomposition is laid out
/// horizontally in column block j·l .. j·l + l − 1, giving shape r × (c·l).
pub fn poly_mat_bit_decomp(ring: &Ring, matrix: &[Vec<Poly>]) -> PolyMat {
    matrix
        .iter()
        .map(|row| {
            let mut out = Vec::new();
            for poly in row {
                out.extend(poly_bit_decomp(ring, poly));
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{mat_mul, uniform_matrix};
    use crate::ring::pmat_mul;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_gadget_matrix_kronecker() {
        let expected: Mat = vec![
            vec![1, 0, 0],
            vec![2, 0, 0],
            vec![4, 0, 0],
            vec![8, 0, 0],
            vec![0, 1, 0],
            vec![0, 2, 0],
            vec![0, 4, 0],
            vec![0, 8, 0],
            vec![0, 0, 1],
            vec![0, 0, 2],
            vec![0, 0, 4],
            vec![0, 0, 8],
        ];
        assert_eq!(gadget_matrix(16, 3), expected);
    }

    #[test]
    fn test_bit_decomp_2x2() {
        let m = vec![vec![1, 2], vec![3, 4]];
        let expected = vec![vec![1, 0, 0, 0, 1, 0], vec![1, 1, 0, 0, 0, 1]];
        assert_eq!(bit_decomp(&m, 8), expected);
    }

    #[test]
    fn test_bit_decomp_2x3_non_pow2_modulus() {
        let m = vec![vec![5, 7, 10], vec![2, 4, 8]];
        let expected = vec![
            vec![1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 1],
            vec![0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1],
        ];
        assert_eq!(bit_decomp(&m, 11), expected);
    }

    #[test]
    fn test_decomp_identity_small() {
        let m = vec![vec![23, 44, 32], vec![2, 14, 27], vec![3, 35, 23]];
        let q = 45;
        let recombined = mat_mul(&bit_decomp(&m, q), &gadget_matrix(q, 3), q);
        assert_eq!(recombined, m);
    }

    #[test]
    fn test_decomp_identity_random() {
        let q = 128;
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let m = uniform_matrix(40, 40, q, &mut rng);
        let recombined = mat_mul(&bit_decomp(&m, q), &gadget_matrix(q, 40), q);
        assert_eq!(recombined, m);
    }

    #[test]
    fn test_rlwe_gadget_shape() {
        let ring = Ring::new(1 << 12, 8);
        let g = rlwe_gadget_matrix(&ring);
        assert_eq!(g.len(), 24);
        assert!(g.iter().all(|row| row.len() == 2));
        assert_eq!(g[0][0], ring.one());
        assert_eq!(g[11][0], ring.constant(1 << 11));
        assert_eq!(g[11][1], ring.zero());
        assert_eq!(g[12][0], ring.zero());
        assert_eq!(g[12][1], ring.one());
        assert_eq!(g[23][1], ring.constant(1 << 11));
    }

    #[test]
    fn test_poly_bit_decomp_recombines() {
        let ring = Ring::new(1 << 6, 4);
        let p = vec![5, 63, 0, 40];
        let decomp = poly_bit_decomp(&ring, &p);
        assert_eq!(decomp.len(), 6);
        let mut acc = ring.zero();
        for (k, part) in decomp.iter().enumerate() {
            let scaled: Poly = part.iter().map(|&b| b << k).collect();
            acc = ring.add(&acc, &scaled);
        }
        assert_eq!(acc, p);
    }

    #[test]
    fn test_poly_mat_decomp_identity() {
        let ring = Ring::new(1 << 6, 4);
        let mut rng = ChaCha20Rng::seed_from_u64(10);
        let m: PolyMat = (0..12)
            .map(|_| (0..2).map(|_| ring.uniform(&mut rng)).collect())
            .collect();
        let g = rlwe_gadget_matrix(&ring);
        let recombined = pmat_mul(&ring, &poly_mat_bit_decomp(&ring, &m), &g);
        assert_eq!(recombined, m);
    }
}
