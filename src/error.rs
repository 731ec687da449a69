//! Error taxonomy shared by both schemes and the circuit evaluator.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported synchronously at the call site; nothing is retried.
///
/// A decryption corrupted by excessive noise is *not* an error: leveled
/// schemes carry no correctness check, so it surfaces as a wrong bit.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Dimensions differ from what the scheme's parameters require, a circuit
    /// depth is incompatible with its predecessor, or an input count does not
    /// match an arity.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        got: String,
    },

    /// Gate name outside `{nand, and, or, xor, not, wire}`.
    #[error("could not recognize gate `{0}`")]
    UnknownGate(String),

    /// `evaluate` called on a circuit with zero depths.
    #[error("cannot evaluate an empty circuit")]
    EmptyCircuit,
}

impl Error {
    pub(crate) fn shape(context: &'static str, expected: (usize, usize), got: (usize, usize)) -> Self {
        Error::ShapeMismatch {
            context,
            expected: format!("{}x{}", expected.0, expected.1),
            got: format!("{}x{}", got.0, got.1),
        }
    }

    pub(crate) fn count(context: &'static str, expected: usize, got: usize) -> Self {
        Error::ShapeMismatch {
            context,
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }
}
