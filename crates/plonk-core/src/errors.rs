//! Error types for the PLONK verifier

use thiserror::Error;

/// Top-level verification error
///
/// The boolean entry points fold every variant into `false`; the detailed
/// entry point surfaces the first failing check.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Proof error: {0}")]
    Proof(#[from] ProofError),

    #[error("Commitment {name} is not on the curve")]
    CurveMembership { name: &'static str },

    #[error("Evaluation {name} is not a canonical field element")]
    FieldRange { name: &'static str },

    #[error("Expected {expected} public inputs, got {actual}")]
    PublicInputLength { expected: usize, actual: usize },

    #[error("Challenge xi collides with domain element {index}")]
    ChallengeDivisionByZero { index: usize },

    #[error("Domain exponent {power} exceeds ceiling {max}")]
    DomainTooLarge { power: u32, max: u32 },
}

/// Verification key parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid VK size: expected {expected}, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("Domain exponent {power} exceeds ceiling {max}")]
    PowerTooLarge { power: u64, max: u32 },

    #[error("Public input count overflow (should fit in u32)")]
    PublicInputCountOverflow,

    #[error("{n_public} public inputs do not fit a domain of size {domain_size}")]
    TooManyPublicInputs { n_public: u32, domain_size: u64 },

    #[error("Domain generator is not a canonical field element")]
    InvalidOmega,

    #[error("Commitment {name} is not on the curve")]
    PointNotOnCurve { name: &'static str },
}

/// Proof and public signal parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProofError {
    #[error("Invalid proof size: expected {expected}, got {actual}")]
    InvalidSize { expected: usize, actual: usize },

    #[error("Public signals must be 32-byte words, got {len} bytes")]
    InvalidPublicSignals { len: usize },
}
