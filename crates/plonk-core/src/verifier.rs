//! PLONK verification entry points
//!
//! The verification flow:
//! 1. Structural checks: proof commitments on the curve, evaluations in
//!    range, public-input count equal to the key's
//! 2. Fiat-Shamir challenges (beta, gamma, alpha, xi, v1..v4, u)
//! 3. Vanishing polynomial and Lagrange basis at xi
//!
//! The final opening/pairing check is not performed here. A `true` result
//! means every step above succeeded; the challenges and Lagrange values are
//! returned by [`verify_detailed`] for a caller that completes the protocol.

use crate::challenges::{compute_challenges, ChallengeBundle};
use crate::constants::MAX_POWER;
use crate::errors::VerifyError;
use crate::key::VerificationKey;
use crate::lagrange::{evaluate_lagrange, LagrangeEvaluations};
use crate::proof::{public_signals_from_bytes, Proof};
use crate::types::Fq;
use crate::validate::validate_proof;

/// Verifier tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Ceiling on the key's domain exponent; never above [`MAX_POWER`]
    pub max_power: u32,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            max_power: MAX_POWER,
        }
    }
}

impl VerifierConfig {
    /// Lower the domain ceiling. Values above [`MAX_POWER`] are clamped.
    pub fn with_max_power(mut self, max_power: u32) -> Self {
        self.max_power = max_power.min(MAX_POWER);
        self
    }
}

/// Everything derived from an accepted proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutput {
    pub challenges: ChallengeBundle,
    pub lagrange: LagrangeEvaluations,
}

/// Verify a parsed proof. Any failure is `false`.
pub fn verify(vk: &VerificationKey, proof: &Proof, public_signals: &[Fq]) -> bool {
    verify_with_config(vk, proof, public_signals, &VerifierConfig::default())
}

/// [`verify`] with an explicit configuration
pub fn verify_with_config(
    vk: &VerificationKey,
    proof: &Proof,
    public_signals: &[Fq],
    config: &VerifierConfig,
) -> bool {
    match verify_detailed(vk, proof, public_signals, config) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("proof rejected: {}", e);
            false
        }
    }
}

/// Verify and return the derived challenges, or the first failing check
pub fn verify_detailed(
    vk: &VerificationKey,
    proof: &Proof,
    public_signals: &[Fq],
    config: &VerifierConfig,
) -> Result<VerificationOutput, VerifyError> {
    validate_proof(vk, proof, public_signals)?;

    let challenges = compute_challenges(vk, proof, public_signals, config.max_power)?;

    let lagrange = evaluate_lagrange(
        &challenges.xi,
        &vk.omega,
        &challenges.vanishing(),
        vk.n_public,
    )?;

    Ok(VerificationOutput {
        challenges,
        lagrange,
    })
}

/// Parse the fixed binary encodings and verify. Parse errors are `false`.
pub fn verify_bytes(vk_bytes: &[u8], proof_bytes: &[u8], public_signals: &[u8]) -> bool {
    let parsed = VerificationKey::from_bytes(vk_bytes)
        .map_err(VerifyError::from)
        .and_then(|vk| {
            let proof = Proof::from_bytes(proof_bytes)?;
            let signals = public_signals_from_bytes(public_signals)?;
            Ok((vk, proof, signals))
        });

    match parsed {
        Ok((vk, proof, signals)) => verify(&vk, &proof, &signals),
        Err(e) => {
            log::debug!("failed to parse verification inputs: {}", e);
            false
        }
    }
}
