//! Uniform facade over the two GSW schemes.

use rand::Rng;

use crate::error::Result;

/// The four operations every scheme exposes.
///
/// Implementors hold their parameters, gadget and error distribution; keys and
/// ciphertexts are plain values. `evaluate` builds a fresh circuit from gate
/// names (`nand`, `and`, `or`, `xor`, `not`, `wire`, case-insensitive) and
/// returns the final depth's outputs.
pub trait FheScheme {
    type PublicKey;
    type SecretKey;
    type Ciphertext: Clone;

    fn keygen<R: Rng>(&self, rng: &mut R) -> (Self::PublicKey, Self::SecretKey);

    fn encrypt<R: Rng>(
        &self,
        pk: &Self::PublicKey,
        bit: bool,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    fn decrypt(&self, sk: &Self::SecretKey, ct: &Self::Ciphertext) -> Result<bool>;

    fn evaluate(
        &self,
        circuit: &[&[&str]],
        inputs: &[Self::Ciphertext],
    ) -> Result<Vec<Self::Ciphertext>>;
}
