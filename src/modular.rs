//! Modular arithmetic utilities for Z_q.

/// Reduce value to range [0, q).
#[inline]
pub fn mod_q(val: i64, q: u64) -> u64 {
    let q = q as i64;
    let mut r = val % q;
    if r < 0 {
        r += q;
    }
    r as u64
}

/// Reduce a wide accumulator to range [0, q).
///
/// Matrix and polynomial products accumulate in i128 so that no intermediate
/// overflows for q up to 2^32.
#[inline]
pub fn mod_q_wide(val: i128, q: u64) -> u64 {
    val.rem_euclid(q as i128) as u64
}
