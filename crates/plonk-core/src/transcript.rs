//! Fiat-Shamir transcript using Keccak256
//!
//! Matches the EVM reference verifier's hashing convention: every element is
//! written as fixed-width big-endian words (a point as x || y, 64 bytes; a
//! scalar as 32 bytes), the concatenation is hashed with Keccak256 without any
//! framing, and the digest is reduced mod q.
//!
//! A transcript produces exactly one challenge. Each round starts from a
//! fresh transcript and carries earlier challenges forward by re-appending
//! them as scalars.

use crate::field::fq_reduce;
use crate::types::{Fq, G1};
use sha3::{Digest, Keccak256};

extern crate alloc;
use alloc::vec::Vec;

/// One entry in the transcript log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptElement {
    PointCommitment(G1),
    ScalarValue(Fq),
}

impl TranscriptElement {
    /// Fixed-width big-endian encoding fed to the hash
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            TranscriptElement::PointCommitment(point) => &point[..],
            TranscriptElement::ScalarValue(scalar) => &scalar[..],
        }
    }
}

/// Append-only log of transcript elements for a single challenge round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    elements: Vec<TranscriptElement>,
}

impl Transcript {
    /// Create a new empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a G1 commitment (64 bytes, x || y)
    pub fn add_pol_commitment(&mut self, point: &G1) {
        self.elements.push(TranscriptElement::PointCommitment(*point));
    }

    /// Append a scalar (32 bytes big-endian)
    pub fn add_scalar(&mut self, scalar: &Fq) {
        self.elements.push(TranscriptElement::ScalarValue(*scalar));
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The exact byte string that gets hashed
    pub fn to_bytes(&self) -> Vec<u8> {
        self.elements
            .iter()
            .flat_map(|element| element.as_bytes().iter().copied())
            .collect()
    }

    /// Hash every element in append order and reduce the digest mod q
    pub fn get_challenge(&self) -> Fq {
        let mut hash_bytes = [0u8; 32];
        hash_bytes.copy_from_slice(&Keccak256::digest(self.to_bytes()));
        fq_reduce(&hash_bytes)
    }
}
