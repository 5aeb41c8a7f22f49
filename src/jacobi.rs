//! Recursive computation of the Jacobi symbol, the oracle behind the
//! Solovay-Strassen primality test.
//!
//! The recursion applies the classical identities in order: the base cases
//! for 0, -1, 1 and 2, reduction of the numerator mod `n`, factoring out
//! twos, and finally quadratic reciprocity. It preserves multiplicativity,
//! `jacobi(a * b, n) == jacobi(a, n) * jacobi(b, n)` for odd `n`.

use num_bigint_dig::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Computes the Jacobi symbol `(a / n)`, returning -1, 0 or 1.
///
/// `n` must be positive and odd: the identity used for `a == 2` has no
/// defined value for even `n`, so rather than guess one this function
/// panics on the violated precondition. The one caller in this crate, the
/// primality tester, only ever supplies odd moduli.
///
/// # Panics
/// Panics if `n` is not a positive odd integer.
pub fn jacobi(a: &BigInt, n: &BigInt) -> i32 {
    assert!(
        n.is_positive() && n.is_odd(),
        "jacobi symbol is only defined for positive odd n, got n = {}",
        n
    );
    jacobi_recur(a, n)
}

fn jacobi_recur(a: &BigInt, n: &BigInt) -> i32 {
    let two = BigInt::from(2);
    if a.is_zero() {
        if n.is_one() {
            1
        } else {
            0
        }
    } else if *a == -BigInt::one() {
        // reachable only as an internal identity value
        if n.is_even() {
            1
        } else {
            -1
        }
    } else if a.is_one() {
        1
    } else if *a == two {
        let r = n % BigInt::from(8);
        if r == BigInt::one() || r == BigInt::from(7) {
            1
        } else {
            -1
        }
    } else if a >= n {
        // (a / n) == (a mod n / n)
        jacobi_recur(&(a % n), n)
    } else if a.is_even() {
        // factor out a two: (a / n) == (2 / n) * (a/2 / n)
        jacobi_recur(&two, n) * jacobi_recur(&(a / &two), n)
    } else {
        // quadratic reciprocity for odd a with 1 < a < n
        let three = BigInt::from(3);
        let four = BigInt::from(4);
        if a % &four == three && n % &four == three {
            -jacobi_recur(n, a)
        } else {
            jacobi_recur(n, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j(a: i64, n: i64) -> i32 {
        jacobi(&BigInt::from(a), &BigInt::from(n))
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(j(0, 1), 1);
        assert_eq!(j(0, 9), 0);
        assert_eq!(j(1, 15), 1);
        // (2 / n) by n mod 8
        assert_eq!(j(2, 7), 1);
        assert_eq!(j(2, 17), 1);
        assert_eq!(j(2, 3), -1);
        assert_eq!(j(2, 5), -1);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(j(1001, 9907), -1);
        assert_eq!(j(19, 45), 1);
        assert_eq!(j(8, 21), -1);
        assert_eq!(j(5, 21), 1);
        // shares a factor with the modulus
        assert_eq!(j(21, 7), 0);
    }

    #[test]
    fn test_matches_legendre_for_prime_modulus() {
        // for odd prime p, (a / p) is 1 exactly when a is a nonzero square mod p
        let p = 23i64;
        let residues: Vec<i64> = (1..p).map(|x| x * x % p).collect();
        for a in 1..p {
            let expected = if residues.contains(&a) { 1 } else { -1 };
            assert_eq!(j(a, p), expected, "jacobi({}, {})", a, p);
        }
    }

    #[test]
    fn test_multiplicative_in_numerator() {
        let n = BigInt::from(135i64);
        for (a, b) in [(2i64, 3), (5, 7), (11, 13), (4, 9), (17, 19), (8, 25)] {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            assert_eq!(
                jacobi(&(&a * &b), &n),
                jacobi(&a, &n) * jacobi(&b, &n),
                "multiplicativity failed for ({}, {})",
                a,
                b
            );
        }
    }

    #[test]
    #[should_panic(expected = "positive odd n")]
    fn test_even_modulus_is_rejected() {
        j(3, 10);
    }
}
