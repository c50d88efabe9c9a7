//! Verification key parsing for BN254 PLONK
//!
//! ## VK Format (560 bytes, big-endian)
//! - [0..8]: n_public as 64-bit big-endian
//! - [8..16]: power (log2 of the domain size) as 64-bit big-endian
//! - [16..48]: omega, the domain generator, as a 32-byte field element
//! - [48..560]: 8 G1 commitments (64 bytes each) in transcript order:
//!   Qm, Ql, Qr, Qo, Qc, S1, S2, S3

use crate::constants::{G1_SIZE, MAX_POWER, NUM_VK_COMMITMENTS, VK_HEADER_SIZE, VK_SIZE};
use crate::errors::KeyError;
use crate::field::fq_is_canonical;
use crate::types::{Fq, G1};
use crate::validate::is_on_curve;

extern crate alloc;
use alloc::vec::Vec;

/// Names of the key commitments, in transcript order
pub const VK_COMMITMENT_NAMES: [&str; NUM_VK_COMMITMENTS] =
    ["Qm", "Ql", "Qr", "Qo", "Qc", "S1", "S2", "S3"];

/// Parsed verification key. Immutable once loaded; shared read-only by every
/// verification against the same circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationKey {
    /// Number of public inputs
    pub n_public: u32,
    /// Log2 of the evaluation domain size
    pub power: u32,
    /// Generator of the evaluation domain, supplied with the key
    pub omega: Fq,
    /// Selector commitments
    pub qm: G1,
    pub ql: G1,
    pub qr: G1,
    pub qo: G1,
    pub qc: G1,
    /// Permutation commitments
    pub s1: G1,
    pub s2: G1,
    pub s3: G1,
}

impl VerificationKey {
    /// Parse VK from its binary format and validate it
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != VK_SIZE {
            return Err(KeyError::InvalidSize {
                expected: VK_SIZE,
                actual: bytes.len(),
            });
        }

        let n_public = read_u64(&bytes[0..8]);
        let power = read_u64(&bytes[8..16]);

        if power > MAX_POWER as u64 {
            return Err(KeyError::PowerTooLarge {
                power,
                max: MAX_POWER,
            });
        }
        let n_public = u32::try_from(n_public).map_err(|_| KeyError::PublicInputCountOverflow)?;

        let mut omega = [0u8; 32];
        omega.copy_from_slice(&bytes[16..48]);

        let mut commitments = [[0u8; G1_SIZE]; NUM_VK_COMMITMENTS];
        for (i, commitment) in commitments.iter_mut().enumerate() {
            let offset = VK_HEADER_SIZE + i * G1_SIZE;
            commitment.copy_from_slice(&bytes[offset..offset + G1_SIZE]);
        }
        let [qm, ql, qr, qo, qc, s1, s2, s3] = commitments;

        let vk = VerificationKey {
            n_public,
            power: power as u32,
            omega,
            qm,
            ql,
            qr,
            qo,
            qc,
            s1,
            s2,
            s3,
        };
        vk.validate()?;
        Ok(vk)
    }

    /// Serialize to the binary format accepted by [`VerificationKey::from_bytes`]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(VK_SIZE);
        out.extend_from_slice(&(self.n_public as u64).to_be_bytes());
        out.extend_from_slice(&(self.power as u64).to_be_bytes());
        out.extend_from_slice(&self.omega);
        for (_, commitment) in self.commitments() {
            out.extend_from_slice(commitment);
        }
        out
    }

    /// Check the key's own consistency: domain bound, public input count,
    /// omega range, and curve membership of every commitment.
    pub fn validate(&self) -> Result<(), KeyError> {
        if self.power > MAX_POWER {
            return Err(KeyError::PowerTooLarge {
                power: self.power as u64,
                max: MAX_POWER,
            });
        }

        if self.n_public as u64 > self.domain_size() {
            return Err(KeyError::TooManyPublicInputs {
                n_public: self.n_public,
                domain_size: self.domain_size(),
            });
        }

        if !fq_is_canonical(&self.omega) {
            return Err(KeyError::InvalidOmega);
        }

        for (name, commitment) in self.commitments() {
            if !is_on_curve(commitment) {
                return Err(KeyError::PointNotOnCurve { name });
            }
        }

        Ok(())
    }

    /// Commitments with their names, in transcript order
    pub fn commitments(&self) -> [(&'static str, &G1); NUM_VK_COMMITMENTS] {
        [
            (VK_COMMITMENT_NAMES[0], &self.qm),
            (VK_COMMITMENT_NAMES[1], &self.ql),
            (VK_COMMITMENT_NAMES[2], &self.qr),
            (VK_COMMITMENT_NAMES[3], &self.qo),
            (VK_COMMITMENT_NAMES[4], &self.qc),
            (VK_COMMITMENT_NAMES[5], &self.s1),
            (VK_COMMITMENT_NAMES[6], &self.s2),
            (VK_COMMITMENT_NAMES[7], &self.s3),
        ]
    }

    /// Get domain size (2^power). Saturates for out-of-range powers.
    pub fn domain_size(&self) -> u64 {
        1u64.checked_shl(self.power).unwrap_or(u64::MAX)
    }
}

/// Read a u64 from 8 big-endian bytes
fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}
