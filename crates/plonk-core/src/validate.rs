//! Structural checks on proofs and keys
//!
//! Every check here is a pure predicate over already-parsed byte arrays and
//! never panics, whatever the input.

use crate::errors::VerifyError;
use crate::field::{fq_add, fq_is_canonical, fq_mul, fq_square};
use crate::key::VerificationKey;
use crate::proof::Proof;
use crate::types::{g1_x, g1_y, Fq, CURVE_B, G1};

/// Check `y^2 == x^3 + 3` over Fq.
///
/// Both coordinates must be canonical (`< q`). The identity encoding `(0, 0)`
/// fails the equation and is therefore reported as off-curve.
pub fn is_on_curve(point: &G1) -> bool {
    let x = g1_x(point);
    let y = g1_y(point);
    if !fq_is_canonical(&x) || !fq_is_canonical(&y) {
        return false;
    }

    let lhs = fq_square(&y);
    let rhs = fq_add(&fq_mul(&fq_square(&x), &x), &CURVE_B);
    lhs == rhs
}

/// True iff `0 <= v < q`
pub fn is_in_field(v: &Fq) -> bool {
    fq_is_canonical(v)
}

/// Public-input count agreement between the key and the caller
pub fn check_public_inputs_length(declared: usize, actual: usize) -> bool {
    declared == actual
}

/// Run every structural check and report the first failure.
///
/// Order: proof commitments (A..Wxiw), proof evaluations (eval_a..eval_zw),
/// then the public-input count.
pub fn validate_proof(
    vk: &VerificationKey,
    proof: &Proof,
    public_signals: &[Fq],
) -> Result<(), VerifyError> {
    for (name, point) in proof.commitments() {
        if !is_on_curve(point) {
            return Err(VerifyError::CurveMembership { name });
        }
    }

    for (name, eval) in proof.evaluations() {
        if !is_in_field(eval) {
            return Err(VerifyError::FieldRange { name });
        }
    }

    let expected = vk.n_public as usize;
    if !check_public_inputs_length(expected, public_signals.len()) {
        return Err(VerifyError::PublicInputLength {
            expected,
            actual: public_signals.len(),
        });
    }

    Ok(())
}
