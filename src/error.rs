use thiserror::Error;

/// Result type for all fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by key generation and the cipher transform.
///
/// Every variant is a recoverable condition for the caller; nothing is
/// retried or swallowed inside the crate except the bounded candidate
/// searches, which surface [`Error::GenerationTimeout`] once their attempt
/// budget runs out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A cipher text did not contain an even number of integer tokens.
    #[error("malformed cipher text: expected an even number of tokens, got {0}")]
    MalformedCipherText(usize),

    /// A cipher-text token could not be parsed as a non-negative integer.
    #[error("cipher token {0:?} is not a non-negative integer")]
    ParseError(String),

    /// The recovered plaintext bytes were not valid UTF-8, or a recovered
    /// value did not fit in a single byte.
    #[error("plaintext decode failed: {0}")]
    DecodeError(String),

    /// A zero modulus was passed to modular exponentiation.
    #[error("modulus must be a positive integer")]
    InvalidModulus,

    /// A random sampling interval was empty, e.g. `num_bits` too small to
    /// form a usable candidate range.
    #[error("empty sampling range: {0}")]
    InvalidRange(String),

    /// A bounded rejection-sampling search exhausted its attempt budget.
    #[error("{target} search gave up after {attempts} attempts")]
    GenerationTimeout {
        target: &'static str,
        attempts: usize,
    },
}
