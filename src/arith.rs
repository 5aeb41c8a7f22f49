//! Arbitrary-precision modular arithmetic: the Euclidean algorithm and
//! modular exponentiation by repeated squaring.
//!
//! Everything else in the crate (primality testing, key generation, the
//! cipher transform itself) bottoms out in these two operations, so they
//! are written against `BigUint` throughout; the moduli in play are
//! hundreds of bits wide and native integers would overflow immediately.

use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Greatest common divisor of `a` and `b` by the iterative Euclidean
/// algorithm. Call sites in this crate pass the larger operand first,
/// though the loop corrects the order on its first iteration either way.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Computes `base^exp mod modulus` by square-and-multiply.
///
/// Returns [`Error::InvalidModulus`] for a zero modulus. A modulus of one
/// yields zero for any base and exponent; an exponent of zero yields one.
pub fn modexp(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::InvalidModulus);
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();
    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    Ok(result)
}
