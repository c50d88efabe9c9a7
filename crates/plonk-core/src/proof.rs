//! Proof parsing for BN254 PLONK
//!
//! ## Binary Proof Format (768 bytes, big-endian)
//!
//! 1. Commitments: A, B, C, Z, T1, T2, T3, Wxi, Wxiw (9 × 64 bytes, x || y)
//! 2. Evaluations: eval_a, eval_b, eval_c, eval_s1, eval_s2, eval_zw (6 × 32 bytes)
//!
//! Parsing only checks the length. Curve membership and field range are the
//! verifier's job, so a malformed proof still parses and is rejected later.

use crate::constants::{
    FQ_SIZE, G1_SIZE, NUM_PROOF_COMMITMENTS, NUM_PROOF_EVALUATIONS, PROOF_SIZE,
};
use crate::errors::ProofError;
use crate::types::{Fq, G1};

extern crate alloc;
use alloc::vec::Vec;

/// Names of the proof commitments, in wire order
pub const PROOF_COMMITMENT_NAMES: [&str; NUM_PROOF_COMMITMENTS] =
    ["A", "B", "C", "Z", "T1", "T2", "T3", "Wxi", "Wxiw"];

/// Names of the proof evaluations, in wire order
pub const PROOF_EVALUATION_NAMES: [&str; NUM_PROOF_EVALUATIONS] =
    ["eval_a", "eval_b", "eval_c", "eval_s1", "eval_s2", "eval_zw"];

/// Parsed PLONK proof. Lives for a single verification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// Wire commitments
    pub a: G1,
    pub b: G1,
    pub c: G1,
    /// Permutation grand product commitment
    pub z: G1,
    /// Quotient polynomial commitments (split in three)
    pub t1: G1,
    pub t2: G1,
    pub t3: G1,
    /// Opening proofs at xi and xi * omega
    pub wxi: G1,
    pub wxiw: G1,
    /// Evaluations at xi (eval_zw at xi * omega)
    pub eval_a: Fq,
    pub eval_b: Fq,
    pub eval_c: Fq,
    pub eval_s1: Fq,
    pub eval_s2: Fq,
    pub eval_zw: Fq,
}

impl Proof {
    /// Parse proof from the binary format
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProofError> {
        if bytes.len() != PROOF_SIZE {
            return Err(ProofError::InvalidSize {
                expected: PROOF_SIZE,
                actual: bytes.len(),
            });
        }

        let mut commitments = [[0u8; G1_SIZE]; NUM_PROOF_COMMITMENTS];
        for (i, commitment) in commitments.iter_mut().enumerate() {
            commitment.copy_from_slice(&bytes[i * G1_SIZE..(i + 1) * G1_SIZE]);
        }

        let evals_offset = NUM_PROOF_COMMITMENTS * G1_SIZE;
        let mut evaluations = [[0u8; FQ_SIZE]; NUM_PROOF_EVALUATIONS];
        for (i, eval) in evaluations.iter_mut().enumerate() {
            let offset = evals_offset + i * FQ_SIZE;
            eval.copy_from_slice(&bytes[offset..offset + FQ_SIZE]);
        }

        let [a, b, c, z, t1, t2, t3, wxi, wxiw] = commitments;
        let [eval_a, eval_b, eval_c, eval_s1, eval_s2, eval_zw] = evaluations;

        Ok(Proof {
            a,
            b,
            c,
            z,
            t1,
            t2,
            t3,
            wxi,
            wxiw,
            eval_a,
            eval_b,
            eval_c,
            eval_s1,
            eval_s2,
            eval_zw,
        })
    }

    /// Serialize to the binary format accepted by [`Proof::from_bytes`]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PROOF_SIZE);
        for (_, commitment) in self.commitments() {
            out.extend_from_slice(commitment);
        }
        for (_, eval) in self.evaluations() {
            out.extend_from_slice(eval);
        }
        out
    }

    /// Commitments with their names, in wire order
    pub fn commitments(&self) -> [(&'static str, &G1); NUM_PROOF_COMMITMENTS] {
        [
            (PROOF_COMMITMENT_NAMES[0], &self.a),
            (PROOF_COMMITMENT_NAMES[1], &self.b),
            (PROOF_COMMITMENT_NAMES[2], &self.c),
            (PROOF_COMMITMENT_NAMES[3], &self.z),
            (PROOF_COMMITMENT_NAMES[4], &self.t1),
            (PROOF_COMMITMENT_NAMES[5], &self.t2),
            (PROOF_COMMITMENT_NAMES[6], &self.t3),
            (PROOF_COMMITMENT_NAMES[7], &self.wxi),
            (PROOF_COMMITMENT_NAMES[8], &self.wxiw),
        ]
    }

    /// Evaluations with their names, in wire order
    pub fn evaluations(&self) -> [(&'static str, &Fq); NUM_PROOF_EVALUATIONS] {
        [
            (PROOF_EVALUATION_NAMES[0], &self.eval_a),
            (PROOF_EVALUATION_NAMES[1], &self.eval_b),
            (PROOF_EVALUATION_NAMES[2], &self.eval_c),
            (PROOF_EVALUATION_NAMES[3], &self.eval_s1),
            (PROOF_EVALUATION_NAMES[4], &self.eval_s2),
            (PROOF_EVALUATION_NAMES[5], &self.eval_zw),
        ]
    }
}

/// Split concatenated 32-byte big-endian words into public signals.
/// Values are kept as-is; the transcript reduces them mod q.
pub fn public_signals_from_bytes(bytes: &[u8]) -> Result<Vec<Fq>, ProofError> {
    if bytes.len() % FQ_SIZE != 0 {
        return Err(ProofError::InvalidPublicSignals { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(FQ_SIZE)
        .map(|chunk| {
            let mut signal = [0u8; FQ_SIZE];
            signal.copy_from_slice(chunk);
            signal
        })
        .collect())
}

/// Concatenate public signals into 32-byte big-endian words
pub fn public_signals_to_bytes(signals: &[Fq]) -> Vec<u8> {
    signals.iter().flat_map(|s| s.iter().copied()).collect()
}
