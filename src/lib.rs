//! DISCLAIMER: This library is a toy implementation of the ElGamal
//! cryptosystem built from first principles in pure Rust. It is
//! *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations. It is not audited, not vetted, and very likely insecure in
//! practice; in particular nothing here is constant-time, so it leaks
//! through timing side channels by construction.
//!
//! If you need ElGamal or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.
//!
//! The crate covers the whole pipeline: modular arithmetic over
//! arbitrary-precision integers, the Jacobi symbol, Solovay-Strassen
//! primality testing, safe-prime generation, primitive-root discovery,
//! key-pair construction, and the byte-oriented encrypt/decrypt
//! transform. All randomness is drawn from a caller-supplied `rand::Rng`,
//! so deterministic runs just mean passing a seeded generator.

pub mod arith;
pub mod cipher;
pub mod error;
pub mod jacobi;
pub mod keys;
pub mod primality;
pub mod primitive_root;
pub mod safe_prime;

pub use arith::{gcd, modexp};
pub use cipher::{decrypt, encrypt};
pub use error::{Error, Result};
pub use jacobi::jacobi;
pub use keys::{generate_keys, KeyGenConfig, KeyPair, PrivateKey, PublicKey};
pub use primality::is_probable_prime;
pub use primitive_root::find_primitive_root;
pub use safe_prime::find_safe_prime;
