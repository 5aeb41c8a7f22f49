//! Safe-prime generation by bounded rejection sampling.
//!
//! A safe prime is a prime of the form `p = 2q + 1` where `q` is itself
//! prime. The search draws odd candidates `q` of `num_bits - 1` bits,
//! screens them with Solovay-Strassen, and on success tests `2q + 1` as
//! well. Both the Sophie Germain half and the full prime come from the
//! same confidence parameter.

use log::debug;
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

use crate::error::{Error, Result};
use crate::primality::is_probable_prime;

/// Searches for a safe prime with exactly `num_bits` bits.
///
/// Candidates `q` are drawn uniformly from `[2^(num_bits-2), 2^(num_bits-1))`;
/// even draws are discarded and every restart uses fresh randomness. Each
/// candidate draw counts against `max_attempts`, and an exhausted budget
/// surfaces as [`Error::GenerationTimeout`] instead of looping forever.
///
/// `num_bits` below 3 leaves no usable candidate interval and is rejected
/// with [`Error::InvalidRange`].
pub fn find_safe_prime<R: Rng>(
    num_bits: usize,
    confidence: u32,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BigUint> {
    if num_bits < 3 {
        return Err(Error::InvalidRange(format!(
            "safe-prime generation needs num_bits >= 3, got {}",
            num_bits
        )));
    }

    let low = BigUint::one() << (num_bits - 2);
    let high = BigUint::one() << (num_bits - 1);

    for attempt in 1..=max_attempts {
        let q = rng.gen_biguint_range(&low, &high);
        if q.is_even() {
            continue;
        }
        if !is_probable_prime(&q, confidence, rng)? {
            continue;
        }

        // q is prime; p = 2q + 1 is the safe prime if it is prime too
        let p = (&q << 1) + BigUint::one();
        if is_probable_prime(&p, confidence, rng)? {
            debug!(
                "found {}-bit safe prime after {} candidate draws",
                num_bits, attempt
            );
            return Ok(p);
        }
    }

    Err(Error::GenerationTimeout {
        target: "safe prime",
        attempts: max_attempts,
    })
}
