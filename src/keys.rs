//! ElGamal key generation.
//!
//! `generate_keys` stitches the number-theoretic pieces together: a safe
//! prime `p` from the bounded search, a primitive root `g0` of the full
//! group, and the working generator `g = g0^2 mod p`. Squaring projects
//! `g` into the order-q subgroup of quadratic residues, which sidesteps
//! the small order-2 subgroup of the full group.

use num_bigint_dig::{BigUint, RandBigInt};
use rand::Rng;

use crate::arith::modexp;
use crate::error::Result;
use crate::primitive_root::find_primitive_root;
use crate::safe_prime::find_safe_prime;

/// ElGamal public key: modulus `p`, subgroup generator `g`, and the public
/// value `y = g^x mod p`. Constructed once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub p: BigUint,
    pub g: BigUint,
    pub y: BigUint,
    /// Bit length of `p` requested at generation time.
    pub num_bits: usize,
}

/// ElGamal private key: the same `p` and `g` as the matching [`PublicKey`],
/// plus the secret exponent `x` with `2 <= x <= p - 2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub p: BigUint,
    pub g: BigUint,
    pub x: BigUint,
    pub num_bits: usize,
}

/// A matched public/private key pair.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// Tunables for key generation.
pub struct KeyGenConfig {
    /// Bit length of the prime modulus `p`.
    pub num_bits: usize,
    /// Solovay-Strassen rounds per primality check.
    pub confidence: u32,
    /// Candidate-draw budget for each of the two searches (safe prime and
    /// primitive root) before they report a generation timeout.
    pub max_attempts: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        KeyGenConfig {
            num_bits: 256,
            confidence: 32,
            max_attempts: 1_000_000,
        }
    }
}

/// Generates a matched ElGamal key pair, drawing all randomness from `rng`.
///
/// The modulus is a safe prime of `config.num_bits` bits, the generator is
/// the square of a primitive root (so `g^q mod p == 1` for `q = (p-1)/2`
/// and `g != 1`), and the secret exponent is uniform in `[2, p - 2]`.
pub fn generate_keys<R: Rng>(config: &KeyGenConfig, rng: &mut R) -> Result<KeyPair> {
    let two = BigUint::from(2u32);

    let p = find_safe_prime(config.num_bits, config.confidence, config.max_attempts, rng)?;
    let g0 = find_primitive_root(&p, config.max_attempts, rng)?;
    let g = modexp(&g0, &two, &p)?;

    // secret exponent in [2, p - 2]
    let x = rng.gen_biguint_range(&two, &(&p - BigUint::from(1u32)));
    let y = modexp(&g, &x, &p)?;

    Ok(KeyPair {
        public: PublicKey {
            p: p.clone(),
            g: g.clone(),
            y,
            num_bits: config.num_bits,
        },
        private: PrivateKey {
            p,
            g,
            x,
            num_bits: config.num_bits,
        },
    })
}
