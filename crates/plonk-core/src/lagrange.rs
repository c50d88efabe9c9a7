//! Vanishing polynomial and Lagrange basis evaluations at xi
//!
//! For a domain of size n = 2^power generated by omega:
//! - xin = xi^n, by squaring xi `power` times
//! - zh = xin - 1
//! - L_j(xi) = omega^(j-1) * zh / (n * (xi - omega^(j-1))) for j = 1..=max(1, n_public)

use crate::constants::MAX_POWER;
use crate::errors::VerifyError;
use crate::field::{fq_div, fq_double, fq_mul, fq_square, fq_sub};
use crate::types::{Fq, FQ_ONE, FQ_ZERO};

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// xi^n and Z_H(xi) for a fixed domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vanishing {
    /// xi^n
    pub xin: Fq,
    /// xi^n - 1
    pub zh: Fq,
    /// n as a field element
    pub domain_size: Fq,
}

/// Compute xi^n, Z_H(xi) and n for n = 2^power.
///
/// `power` is bounded by `max_power`, which itself never exceeds [`MAX_POWER`].
pub fn evaluate_vanishing(xi: &Fq, power: u32, max_power: u32) -> Result<Vanishing, VerifyError> {
    let max = max_power.min(MAX_POWER);
    if power > max {
        return Err(VerifyError::DomainTooLarge { power, max });
    }

    let mut xin = *xi;
    let mut domain_size = FQ_ONE;
    for _ in 0..power {
        xin = fq_square(&xin);
        domain_size = fq_double(&domain_size);
    }

    Ok(Vanishing {
        xin,
        zh: fq_sub(&xin, &FQ_ONE),
        domain_size,
    })
}

/// Lagrange basis values L_1..L_m at xi. Index 0 is an unused zero slot so
/// that `get(j)` matches the 1-based basis numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagrangeEvaluations {
    values: Vec<Fq>,
}

impl LagrangeEvaluations {
    /// L_j for 1 <= j <= count
    pub fn get(&self, j: usize) -> Option<&Fq> {
        if j == 0 {
            return None;
        }
        self.values.get(j)
    }

    /// Number of computed basis values (excludes the placeholder)
    pub fn count(&self) -> usize {
        self.values.len() - 1
    }

    /// Computed values L_1..L_count
    pub fn iter(&self) -> impl Iterator<Item = &Fq> {
        self.values.iter().skip(1)
    }
}

/// Evaluate L_1..L_max(1, n_public) at xi.
///
/// A zero denominator (xi equal to a domain element) is reported as
/// [`VerifyError::ChallengeDivisionByZero`] carrying the basis index.
pub fn evaluate_lagrange(
    xi: &Fq,
    omega: &Fq,
    vanishing: &Vanishing,
    n_public: u32,
) -> Result<LagrangeEvaluations, VerifyError> {
    let count = n_public.max(1) as usize;
    let mut values = vec![FQ_ZERO; count + 1];

    let mut w = FQ_ONE;
    for (j, value) in values.iter_mut().enumerate().skip(1) {
        let numerator = fq_mul(&w, &vanishing.zh);
        let denominator = fq_mul(&vanishing.domain_size, &fq_sub(xi, &w));
        *value = fq_div(&numerator, &denominator)
            .ok_or(VerifyError::ChallengeDivisionByZero { index: j })?;
        w = fq_mul(&w, omega);
    }

    Ok(LagrangeEvaluations { values })
}
