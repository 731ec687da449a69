//! Error distributions χ producing small signed integers.
//!
//! Both adaptors implement [`Distribution<i64>`] so any `Rng` can drive them;
//! the schemes reduce samples mod q on use.

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::StandardNormal;

/// Rounded-down Gaussian: samples ⌊𝒩(0, σ)⌋.
///
/// The reference LWE error distribution uses σ = √n for lattice dimension n.
#[derive(Clone, Copy, Debug)]
pub struct DiscreteGaussian {
    std_dev: f64,
}

impl DiscreteGaussian {
    pub fn new(std_dev: f64) -> Self {
        Self { std_dev }
    }

    /// The reference distribution for dimension n: ⌊𝒩(0, √n)⌋.
    pub fn for_dimension(n: usize) -> Self {
        Self::new((n as f64).sqrt())
    }
}

impl Distribution<i64> for DiscreteGaussian {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let z: f64 = rng.sample(StandardNormal);
        (z * self.std_dev).floor() as i64
    }
}

/// Uniform error over [-bound, bound].
#[derive(Clone, Copy, Debug)]
pub struct CenteredUniform {
    bound: i64,
}

impl CenteredUniform {
    pub fn new(bound: i64) -> Self {
        Self { bound }
    }
}

impl Distribution<i64> for CenteredUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        if self.bound <= 0 {
            return 0;
        }
        rng.gen_range(-self.bound..=self.bound)
    }
}
