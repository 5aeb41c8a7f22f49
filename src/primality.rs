//! Solovay-Strassen probabilistic primality testing.
//!
//! Each round draws a random witness `a` and declares `num` composite if
//! `a` shares a factor with `num` or if the Jacobi symbol `(a / num)`
//! disagrees with the Euler criterion value `a^((num-1)/2) mod num`. A
//! composite number survives a round with probability at most 1/2, so
//! `confidence` independent rounds bound the false-positive probability by
//! `2^-confidence`.

use num_bigint_dig::{BigUint, RandBigInt, ToBigInt};
use num_traits::{One, Zero};
use rand::Rng;

use crate::arith::{gcd, modexp};
use crate::error::Result;
use crate::jacobi::jacobi;

/// Tests whether `num` is probably prime with `confidence` Solovay-Strassen
/// rounds, drawing witnesses from `rng`.
///
/// Returns `Ok(false)` as soon as any witness proves `num` composite, and
/// `Ok(true)` once all rounds pass.
///
/// `num` must be odd and at least 3 for the verdict to be meaningful;
/// callers are expected to pre-filter even candidates. An even `num`
/// trips the Jacobi-symbol precondition and panics rather than returning
/// a made-up verdict.
pub fn is_probable_prime<R: Rng>(
    num: &BigUint,
    confidence: u32,
    rng: &mut R,
) -> Result<bool> {
    let one = BigUint::one();
    // Euler criterion exponent (num - 1) / 2
    let half = (num - BigUint::one()) >> 1;
    let num_int = num.to_bigint().unwrap();

    for _ in 0..confidence {
        // witness in [1, num - 1]
        let a = rng.gen_biguint_range(&one, num);

        // any shared factor proves num composite outright
        if gcd(num, &a) > one {
            return Ok(false);
        }

        // jacobi(a, num) reduced into [0, num), against a^((num-1)/2) mod num
        let symbol = match jacobi(&a.to_bigint().unwrap(), &num_int) {
            1 => BigUint::one(),
            0 => BigUint::zero(),
            _ => num - BigUint::one(),
        };
        let euler = modexp(&a, &half, num)?;
        if symbol != euler {
            return Ok(false);
        }
    }

    Ok(true)
}
