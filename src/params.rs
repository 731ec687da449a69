//! Scheme parameter definitions.
//!
//! Presets are chosen for correctness at one multiplicative level with
//! conservative security; in production, derive parameters from a lattice
//! estimator.

/// Security level in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityLevel {
    /// Toy parameters for testing (~32-bit security)
    Toy,
    /// Low security (~64-bit)
    Low,
    /// Medium security (~128-bit)
    Medium,
}

/// Number of bits needed to represent values in [0, q), i.e. ⌈log₂ q⌉.
///
/// Requires q ≥ 2.
#[inline]
pub fn ceil_log2(q: u64) -> usize {
    (64 - (q - 1).leading_zeros()) as usize
}

/// Parameters for the LWE-based scheme (integer matrices mod q).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LweParams {
    /// Modulus q
    pub q: u64,
    /// Lattice dimension n (number of ciphertext columns)
    pub n: usize,
    /// l = ⌈log₂ q⌉, the length of one gadget block
    pub l: usize,
    /// m = n·l, the number of ciphertext rows
    pub m: usize,
}

impl LweParams {
    /// Build parameters from (q, n) and derive l and m.
    pub fn new(q: u64, n: usize) -> Self {
        let l = ceil_log2(q);
        Self { q, n, l, m: n * l }
    }

    /// Preset parameters for the given security level.
    ///
    /// Moduli carry a wide margin so one multiplicative level never fails
    /// with the ⌊𝒩(0, √n)⌋ reference error.
    pub fn with_security(level: SecurityLevel) -> Self {
        match level {
            SecurityLevel::Toy => Self::new(1 << 16, 5),
            SecurityLevel::Low => Self::new(1 << 20, 12),
            SecurityLevel::Medium => Self::new(1 << 26, 32),
        }
    }

    /// Toy parameters for quick testing.
    pub fn toy() -> Self {
        Self::with_security(SecurityLevel::Toy)
    }
}

/// Parameters for the RLWE-based scheme (polynomial matrices over R_q).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RlweParams {
    /// Modulus q
    pub q: u64,
    /// Ring exponent ν; the ring dimension is N = 2^ν
    pub nu: u32,
    /// Ring dimension N = 2^ν
    pub n: usize,
    /// l = ⌈log₂ q⌉; ciphertexts are 2l × 2
    pub l: usize,
}

impl RlweParams {
    /// Build parameters from (q, ν) and derive N and l.
    pub fn new(q: u64, nu: u32) -> Self {
        Self {
            q,
            nu,
            n: 1 << nu,
            l: ceil_log2(q),
        }
    }

    /// Preset parameters for the given security level.
    ///
    /// Same margin policy as the LWE presets.
    pub fn with_security(level: SecurityLevel) -> Self {
        match level {
            SecurityLevel::Toy => Self::new(1 << 16, 3),
            SecurityLevel::Low => Self::new(1 << 20, 4),
            SecurityLevel::Medium => Self::new(1 << 26, 5),
        }
    }

    /// Toy parameters for quick testing.
    pub fn toy() -> Self {
        Self::with_security(SecurityLevel::Toy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(11), 4);
        assert_eq!(ceil_log2(45), 6);
        assert_eq!(ceil_log2(4096), 12);
    }

    #[test]
    fn test_lwe_derived() {
        let p = LweParams::new(4096, 5);
        assert_eq!(p.l, 12);
        assert_eq!(p.m, 60);
    }

    #[test]
    fn test_rlwe_derived() {
        let p = RlweParams::new(1 << 12, 3);
        assert_eq!(p.n, 8);
        assert_eq!(p.l, 12);
    }
}
