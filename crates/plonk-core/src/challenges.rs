//! Fiat-Shamir challenge schedule
//!
//! Six rounds, each on a fresh [`Transcript`]. Earlier challenges are carried
//! into later rounds by appending them as scalars:
//!
//! | Round | Elements | Challenge |
//! |---|---|---|
//! | 1 | Qm..S3, public signals, A, B, C | beta |
//! | 2 | beta | gamma |
//! | 3 | beta, gamma, Z | alpha |
//! | 4 | alpha, T1, T2, T3 | xi |
//! | 5 | xi, eval_a, eval_b, eval_c, eval_s1, eval_s2, eval_zw | v1 |
//! | 6 | Wxi, Wxiw | u |

use crate::constants::NUM_V_POWERS;
use crate::debug::fq_to_hex;
use crate::errors::VerifyError;
use crate::field::{fq_mul, fq_reduce};
use crate::key::VerificationKey;
use crate::lagrange::{evaluate_vanishing, Vanishing};
use crate::proof::Proof;
use crate::transcript::Transcript;
use crate::types::{Fq, FQ_ONE, FQ_ZERO};

/// All verifier challenges for one proof, plus xi^n and Z_H(xi)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeBundle {
    pub beta: Fq,
    pub gamma: Fq,
    pub alpha: Fq,
    pub xi: Fq,
    pub xin: Fq,
    pub zh: Fq,
    /// n = 2^power, doubled in lock-step with the squaring of xi
    pub domain_size: Fq,
    /// v[0] is unused and zero; v[i] = v1^i for i = 1..=4
    pub v: [Fq; NUM_V_POWERS],
    pub u: Fq,
}

impl ChallengeBundle {
    /// xi^n, Z_H(xi) and n as computed alongside the challenges
    pub fn vanishing(&self) -> Vanishing {
        Vanishing {
            xin: self.xin,
            zh: self.zh,
            domain_size: self.domain_size,
        }
    }
}

/// Round 1: beta. Public signals are reduced mod q before hashing, so a
/// signal and the same value plus q yield the same challenge.
pub fn compute_beta(vk: &VerificationKey, proof: &Proof, public_signals: &[Fq]) -> Fq {
    let mut transcript = Transcript::new();
    for (_, commitment) in vk.commitments() {
        transcript.add_pol_commitment(commitment);
    }
    for signal in public_signals {
        transcript.add_scalar(&fq_reduce(signal));
    }
    transcript.add_pol_commitment(&proof.a);
    transcript.add_pol_commitment(&proof.b);
    transcript.add_pol_commitment(&proof.c);
    transcript.get_challenge()
}

/// Round 2: gamma
pub fn compute_gamma(beta: &Fq) -> Fq {
    let mut transcript = Transcript::new();
    transcript.add_scalar(beta);
    transcript.get_challenge()
}

/// Round 3: alpha
pub fn compute_alpha(beta: &Fq, gamma: &Fq, proof: &Proof) -> Fq {
    let mut transcript = Transcript::new();
    transcript.add_scalar(beta);
    transcript.add_scalar(gamma);
    transcript.add_pol_commitment(&proof.z);
    transcript.get_challenge()
}

/// Round 4: xi
pub fn compute_xi(alpha: &Fq, proof: &Proof) -> Fq {
    let mut transcript = Transcript::new();
    transcript.add_scalar(alpha);
    transcript.add_pol_commitment(&proof.t1);
    transcript.add_pol_commitment(&proof.t2);
    transcript.add_pol_commitment(&proof.t3);
    transcript.get_challenge()
}

/// Round 5: v1
pub fn compute_v1(xi: &Fq, proof: &Proof) -> Fq {
    let mut transcript = Transcript::new();
    transcript.add_scalar(xi);
    for (_, eval) in proof.evaluations() {
        transcript.add_scalar(eval);
    }
    transcript.get_challenge()
}

/// Round 6: u
pub fn compute_u(proof: &Proof) -> Fq {
    let mut transcript = Transcript::new();
    transcript.add_pol_commitment(&proof.wxi);
    transcript.add_pol_commitment(&proof.wxiw);
    transcript.get_challenge()
}

/// Expand v1 into [0, v1, v1^2, v1^3, v1^4]
pub fn v_powers(v1: &Fq) -> [Fq; NUM_V_POWERS] {
    let mut v = [FQ_ZERO; NUM_V_POWERS];
    let mut power = FQ_ONE;
    for slot in v.iter_mut().skip(1) {
        power = fq_mul(&power, v1);
        *slot = power;
    }
    v
}

/// Run every round and evaluate the vanishing polynomial at xi.
///
/// Fails only when the key's domain exponent exceeds `max_power`.
pub fn compute_challenges(
    vk: &VerificationKey,
    proof: &Proof,
    public_signals: &[Fq],
    max_power: u32,
) -> Result<ChallengeBundle, VerifyError> {
    let beta = compute_beta(vk, proof, public_signals);
    let gamma = compute_gamma(&beta);
    let alpha = compute_alpha(&beta, &gamma, proof);
    let xi = compute_xi(&alpha, proof);
    let v1 = compute_v1(&xi, proof);
    let u = compute_u(proof);

    let vanishing = evaluate_vanishing(&xi, vk.power, max_power)?;

    log::trace!("beta = {}", fq_to_hex(&beta));
    log::trace!("gamma = {}", fq_to_hex(&gamma));
    log::trace!("alpha = {}", fq_to_hex(&alpha));
    log::trace!("xi = {}", fq_to_hex(&xi));
    log::trace!("v1 = {}", fq_to_hex(&v1));
    log::trace!("u = {}", fq_to_hex(&u));

    Ok(ChallengeBundle {
        beta,
        gamma,
        alpha,
        xi,
        xin: vanishing.xin,
        zh: vanishing.zh,
        domain_size: vanishing.domain_size,
        v: v_powers(&v1),
        u,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_POWER;
    use crate::field::{fq_from_u64, fq_square, fq_sub};
    use crate::types::G1_GENERATOR;

    fn generator_vk(power: u32, n_public: u32) -> VerificationKey {
        VerificationKey {
            n_public,
            power,
            omega: fq_sub(&FQ_ZERO, &FQ_ONE),
            qm: G1_GENERATOR,
            ql: G1_GENERATOR,
            qr: G1_GENERATOR,
            qo: G1_GENERATOR,
            qc: G1_GENERATOR,
            s1: G1_GENERATOR,
            s2: G1_GENERATOR,
            s3: G1_GENERATOR,
        }
    }

    fn generator_proof() -> Proof {
        Proof {
            a: G1_GENERATOR,
            b: G1_GENERATOR,
            c: G1_GENERATOR,
            z: G1_GENERATOR,
            t1: G1_GENERATOR,
            t2: G1_GENERATOR,
            t3: G1_GENERATOR,
            wxi: G1_GENERATOR,
            wxiw: G1_GENERATOR,
            eval_a: FQ_ONE,
            eval_b: FQ_ONE,
            eval_c: FQ_ONE,
            eval_s1: FQ_ONE,
            eval_s2: FQ_ONE,
            eval_zw: FQ_ONE,
        }
    }

    #[test]
    fn test_v_powers_geometric() {
        let v1 = fq_from_u64(3);
        let v = v_powers(&v1);
        assert_eq!(v[0], FQ_ZERO);
        assert_eq!(v[1], v1);
        assert_eq!(v[2], fq_from_u64(9));
        assert_eq!(v[3], fq_from_u64(27));
        assert_eq!(v[4], fq_from_u64(81));
    }

    #[test]
    fn test_bundle_v_progression() {
        let bundle =
            compute_challenges(&generator_vk(1, 1), &generator_proof(), &[FQ_ONE], MAX_POWER)
                .unwrap();
        assert_eq!(bundle.v[2], fq_mul(&bundle.v[1], &bundle.v[1]));
        assert_eq!(bundle.v[3], fq_mul(&bundle.v[1], &bundle.v[2]));
        assert_eq!(bundle.v[4], fq_mul(&bundle.v[1], &bundle.v[3]));
        assert_eq!(bundle.xin, fq_square(&bundle.xi));
        assert_eq!(bundle.zh, fq_sub(&bundle.xin, &FQ_ONE));
    }

    #[test]
    fn test_gamma_chains_from_beta() {
        let vk = generator_vk(1, 1);
        let proof = generator_proof();
        let bundle = compute_challenges(&vk, &proof, &[FQ_ONE], MAX_POWER).unwrap();
        assert_eq!(bundle.beta, compute_beta(&vk, &proof, &[FQ_ONE]));
        assert_eq!(bundle.gamma, compute_gamma(&bundle.beta));
        assert_eq!(bundle.alpha, compute_alpha(&bundle.beta, &bundle.gamma, &proof));
    }

    #[test]
    fn test_public_signals_reduced_before_hashing() {
        use crate::types::FQ_MODULUS;
        let vk = generator_vk(1, 1);
        let proof = generator_proof();
        // q + 1 is the same public input as 1
        let q_plus_one = {
            let mut v = FQ_MODULUS;
            v[31] += 1;
            v
        };
        assert_eq!(
            compute_beta(&vk, &proof, &[q_plus_one]),
            compute_beta(&vk, &proof, &[FQ_ONE])
        );
    }

    #[test]
    fn test_bundle_vanishing_domain_size() {
        let bundle =
            compute_challenges(&generator_vk(3, 1), &generator_proof(), &[FQ_ONE], MAX_POWER)
                .unwrap();
        let vanishing = bundle.vanishing();
        assert_eq!(vanishing.domain_size, fq_from_u64(8));
        assert_eq!(vanishing.xin, bundle.xin);
        assert_eq!(vanishing.zh, bundle.zh);
    }

    #[test]
    fn test_public_signals_feed_beta() {
        let vk = generator_vk(1, 1);
        let proof = generator_proof();
        let beta_one = compute_beta(&vk, &proof, &[FQ_ONE]);
        let beta_two = compute_beta(&vk, &proof, &[fq_from_u64(2)]);
        assert_ne!(beta_one, beta_two);
    }

    #[test]
    fn test_u_independent_of_earlier_rounds() {
        let proof = generator_proof();
        let mut other = generator_proof();
        other.eval_a = fq_from_u64(9);
        assert_eq!(compute_u(&proof), compute_u(&other));
        assert_ne!(compute_v1(&FQ_ONE, &proof), compute_v1(&FQ_ONE, &other));
    }

    #[test]
    fn test_domain_ceiling_enforced() {
        let vk = generator_vk(10, 1);
        assert_eq!(
            compute_challenges(&vk, &generator_proof(), &[FQ_ONE], 8),
            Err(VerifyError::DomainTooLarge { power: 10, max: 8 })
        );
    }
}
