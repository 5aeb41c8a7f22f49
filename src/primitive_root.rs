//! Primitive-root discovery for safe primes.
//!
//! For a safe prime `p = 2q + 1` the prime factors of `p - 1` are exactly
//! 2 and `q`, so `g` generates the full multiplicative group iff neither
//! `g^((p-1)/2)` nor `g^((p-1)/q)` is 1 mod p. This shortcut is not a
//! general primitive-root test; it relies on that factorization.

use log::debug;
use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

use crate::arith::modexp;
use crate::error::{Error, Result};

/// Searches for a primitive root of the multiplicative group mod `p`,
/// where `p` must be a safe prime.
///
/// For `p == 2` the answer is trivially 1. Otherwise candidates are drawn
/// uniformly from `[2, p - 1]` until one passes the two-factor criterion;
/// after `max_attempts` draws the search gives up with
/// [`Error::GenerationTimeout`]. Roughly half the group elements are
/// primitive roots of a safe-prime group, so the budget is generous.
pub fn find_primitive_root<R: Rng>(
    p: &BigUint,
    max_attempts: usize,
    rng: &mut R,
) -> Result<BigUint> {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    if *p == two {
        return Ok(one);
    }

    let p_minus_1 = p - BigUint::one();
    // p = 2q + 1, so (p-1)/2 = q and (p-1)/q = 2
    let q: BigUint = &p_minus_1 >> 1;

    for attempt in 1..=max_attempts {
        let g = rng.gen_biguint_range(&two, p);
        if modexp(&g, &q, p)? != one && modexp(&g, &two, p)? != one {
            debug!("found primitive root after {} draws", attempt);
            return Ok(g);
        }
    }

    Err(Error::GenerationTimeout {
        target: "primitive root",
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // multiplicative order of g mod p by brute force
    fn order(g: u64, p: u64) -> u64 {
        let mut acc = 1u64;
        for e in 1..p {
            acc = acc * g % p;
            if acc == 1 {
                return e;
            }
        }
        unreachable!("g has no order?")
    }

    #[test]
    fn test_two_is_its_own_trivial_case() {
        let mut rng = StdRng::seed_from_u64(23);
        let g = find_primitive_root(&BigUint::from(2u32), 10, &mut rng).unwrap();
        assert_eq!(g, BigUint::one());
    }

    #[test]
    fn test_root_generates_full_group() {
        // 23 = 2 * 11 + 1 and 7 = 2 * 3 + 1 are safe primes
        for p in [7u64, 23, 47, 59] {
            let mut rng = StdRng::seed_from_u64(p);
            let g = find_primitive_root(&BigUint::from(p), 10_000, &mut rng).unwrap();
            let g_small = g.to_u64().unwrap();
            assert_eq!(order(g_small, p), p - 1, "g = {} mod {}", g_small, p);
        }
    }

    #[test]
    fn test_exhausted_budget_times_out() {
        let mut rng = StdRng::seed_from_u64(29);
        assert_eq!(
            find_primitive_root(&BigUint::from(23u32), 0, &mut rng),
            Err(Error::GenerationTimeout {
                target: "primitive root",
                attempts: 0,
            })
        );
    }
}
