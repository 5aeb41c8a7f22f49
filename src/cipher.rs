//! The ElGamal cipher transform, applied byte by byte.
//!
//! Each plaintext byte `m` is encrypted independently under a fresh
//! ephemeral exponent `k` as the pair `(a, b) = (g^k mod p, m * y^k mod p)`.
//! The interchange format is plain text: the pairs' decimal values
//! separated by single spaces, two integers per byte, in input order.
//! Decryption inverts each pair with `m = b * (a^x)^(p-2) mod p`, the
//! modular inverse coming from Fermat's little theorem since `p` is prime.

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::{One, ToPrimitive};
use rand::Rng;

use crate::arith::modexp;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};

/// Encrypts `plaintext` under `key`, one cipher pair per UTF-8 byte.
///
/// An empty plaintext yields an empty cipher text. The ephemeral exponent
/// for each byte is drawn uniformly from `[2, p - 2]`, so the same message
/// encrypts differently on every call.
///
/// # Warnings
/// Byte values must be smaller than `p` to survive the round trip; any key
/// from [`crate::generate_keys`] with `num_bits >= 9` satisfies this.
pub fn encrypt<R: Rng>(key: &PublicKey, plaintext: &str, rng: &mut R) -> Result<String> {
    if plaintext.is_empty() {
        return Ok(String::new());
    }

    let two = BigUint::from(2u32);
    if key.p <= BigUint::from(3u32) {
        return Err(Error::InvalidRange(format!(
            "ephemeral exponent range [2, p - 2] is empty for p = {}",
            key.p
        )));
    }
    let upper = &key.p - BigUint::one();

    let mut tokens = Vec::with_capacity(plaintext.len() * 2);
    for &m in plaintext.as_bytes() {
        // fresh ephemeral exponent k in [2, p - 2] for every byte
        let k = rng.gen_biguint_range(&two, &upper);
        let a = modexp(&key.g, &k, &key.p)?;
        let b = (BigUint::from(m) * modexp(&key.y, &k, &key.p)?) % &key.p;
        tokens.push(a.to_string());
        tokens.push(b.to_string());
    }

    Ok(tokens.join(" "))
}

/// Decrypts a cipher text produced by [`encrypt`] with the matching
/// private key.
///
/// Fails with [`Error::MalformedCipherText`] on an odd token count,
/// [`Error::ParseError`] on a token that is not a non-negative integer,
/// and [`Error::DecodeError`] when the recovered bytes are not valid
/// UTF-8. An empty cipher text decrypts to the empty string.
pub fn decrypt(key: &PrivateKey, cipher_text: &str) -> Result<String> {
    let tokens: Vec<&str> = cipher_text.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::MalformedCipherText(tokens.len()));
    }
    if tokens.is_empty() {
        return Ok(String::new());
    }
    if key.p < BigUint::from(2u32) {
        return Err(Error::InvalidModulus);
    }

    // Fermat inverse exponent p - 2
    let inv_exp = &key.p - BigUint::from(2u32);

    let mut bytes = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks(2) {
        let a = parse_token(pair[0])?;
        let b = parse_token(pair[1])?;

        let s = modexp(&a, &key.x, &key.p)?;
        let m = (b * modexp(&s, &inv_exp, &key.p)?) % &key.p;
        let byte = m.to_u8().ok_or_else(|| {
            Error::DecodeError(format!("recovered value {} does not fit in a byte", m))
        })?;
        bytes.push(byte);
    }

    String::from_utf8(bytes).map_err(|e| Error::DecodeError(e.to_string()))
}

fn parse_token(token: &str) -> Result<BigUint> {
    token
        .parse::<BigUint>()
        .map_err(|_| Error::ParseError(token.to_string()))
}
