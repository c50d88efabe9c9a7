//! PLONK verifier core for BN254
//!
//! Structural validation of proofs, the Keccak256 Fiat-Shamir transcript,
//! the challenge schedule, and Lagrange basis evaluation at xi. The crate
//! does no I/O and holds no global state; every entry point is a pure
//! function of its inputs.
//!
//! ```ignore
//! use plonk_verifier_core::{verify_bytes};
//!
//! let accepted = verify_bytes(&vk_bytes, &proof_bytes, &public_signal_bytes);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod challenges;
pub mod constants;
pub mod debug;
pub mod errors;
pub mod field;
pub mod key;
pub mod lagrange;
pub mod proof;
pub mod transcript;
pub mod types;
pub mod validate;
pub mod verifier;

pub use challenges::{compute_challenges, ChallengeBundle};
pub use constants::MAX_POWER;
pub use errors::{KeyError, ProofError, VerifyError};
pub use key::VerificationKey;
pub use lagrange::{evaluate_lagrange, evaluate_vanishing, LagrangeEvaluations, Vanishing};
pub use proof::{public_signals_from_bytes, public_signals_to_bytes, Proof};
pub use transcript::{Transcript, TranscriptElement};
pub use types::{Fq, FieldElement, G1};
pub use validate::{check_public_inputs_length, is_in_field, is_on_curve};
pub use verifier::{
    verify, verify_bytes, verify_detailed, verify_with_config, VerificationOutput, VerifierConfig,
};
