//! Constants for the BN254 PLONK verifier

/// Maximum supported log2 of the evaluation domain size.
/// Bounds the squaring/doubling loops of the vanishing-polynomial evaluation.
pub const MAX_POWER: u32 = 28;

/// Size of a serialized field element in bytes
pub const FQ_SIZE: usize = 32;

/// Size of a serialized G1 point in bytes (x || y)
pub const G1_SIZE: usize = 64;

/// Selector and permutation commitments in the verification key
/// (Qm, Ql, Qr, Qo, Qc, S1, S2, S3)
pub const NUM_VK_COMMITMENTS: usize = 8;

/// Commitments in a proof (A, B, C, Z, T1, T2, T3, Wxi, Wxiw)
pub const NUM_PROOF_COMMITMENTS: usize = 9;

/// Scalar evaluations in a proof (eval_a, eval_b, eval_c, eval_s1, eval_s2, eval_zw)
pub const NUM_PROOF_EVALUATIONS: usize = 6;

/// Verification key header: n_public (8) || power (8) || omega (32)
pub const VK_HEADER_SIZE: usize = 8 + 8 + FQ_SIZE;

/// Serialized verification key size
pub const VK_SIZE: usize = VK_HEADER_SIZE + NUM_VK_COMMITMENTS * G1_SIZE; // 560 bytes

/// Serialized proof size
pub const PROOF_SIZE: usize = NUM_PROOF_COMMITMENTS * G1_SIZE + NUM_PROOF_EVALUATIONS * FQ_SIZE; // 768 bytes

/// Number of entries in the v power sequence (index 0 unused)
pub const NUM_V_POWERS: usize = 5;
