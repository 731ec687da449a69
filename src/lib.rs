//! Leveled GSW (Gentry-Sahai-Waters) homomorphic encryption with a binary
//! circuit evaluator.
//!
//! Two schemes share one facade:
//! - [`LweGsw`]: standard LWE, ciphertexts are m × n integer matrices mod q
//! - [`RlweGsw`]: Ring-LWE, ciphertexts are 2l × 2 matrices over
//!   `Z_q[X]/(X^N + 1)`
//!
//! Both multiply ciphertexts through the gadget decomposition G⁻¹, so noise
//! grows additively per multiplicative level. The schemes are *leveled*: there
//! is no bootstrapping, and correctness holds only up to a circuit depth
//! admitted by the chosen parameters.
//!
//! Circuits are lists of depths, each a list of gate names from
//! `{nand, and, or, xor, not, wire}`; each depth consumes the previous depth's
//! outputs.
//!
//! # Example
//!
//! ```
//! use gsw_circuits::{DiscreteGaussian, LweGsw, LweParams};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let params = LweParams::new(1 << 16, 5);
//! let scheme = LweGsw::new(params, DiscreteGaussian::for_dimension(params.n));
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//!
//! let (pk, sk) = scheme.keygen(&mut rng);
//! let ct1 = scheme.encrypt(&pk, true, &mut rng).unwrap();
//! let ct2 = scheme.encrypt(&pk, false, &mut rng).unwrap();
//!
//! let out = scheme.evaluate(&[&["nand"]], &[ct1, ct2]).unwrap();
//! assert!(scheme.decrypt(&sk, &out[0]).unwrap());
//! ```

pub mod circuit;
pub mod error;
pub mod gadget;
pub mod gate;
pub mod lwe;
pub mod matrix;
pub mod modular;
pub mod params;
pub mod plain;
pub mod ring;
pub mod rlwe;
pub mod sampler;
pub mod scheme;

pub use circuit::Circuit;
pub use error::{Error, Result};
pub use gate::{Gate, HomomorphicOps};
pub use lwe::{LweCiphertext, LweGsw, LwePublicKey, LweSecretKey};
pub use params::{LweParams, RlweParams, SecurityLevel};
pub use plain::PlainAlgebra;
pub use rlwe::{RlweCiphertext, RlweGsw, RlwePublicKey, RlweSecretKey};
pub use sampler::{CenteredUniform, DiscreteGaussian};
pub use scheme::FheScheme;
