//! Core types for PLONK verification over BN254
//!
//! Uses raw byte arrays in the same big-endian layout that is fed to the
//! transcript hash, so no conversion sits between parsing and hashing.

use hex_literal::hex;

/// A 32-byte base field element (Fq for BN254).
/// Stored in big-endian format.
pub type Fq = [u8; 32];

/// Alias for Fq (field element)
pub type FieldElement = Fq;

/// A 64-byte G1 point (affine, big-endian x || y).
pub type G1 = [u8; 64];

/// Field element representing zero
pub const FQ_ZERO: Fq = [0u8; 32];

/// Field element representing one
pub const FQ_ONE: Fq = {
    let mut s = [0u8; 32];
    s[31] = 1;
    s
};

/// G1 identity point (point at infinity)
/// Encoded as (0, 0), which never satisfies the curve equation.
pub const G1_IDENTITY: G1 = [0u8; 64];

/// BN254 G1 generator point
/// x = 1, y = 2
pub const G1_GENERATOR: G1 = {
    let mut g = [0u8; 64];
    g[31] = 1; // x = 1
    g[63] = 2; // y = 2
    g
};

/// BN254 base field modulus (q)
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const FQ_MODULUS: Fq = hex!("30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47");

/// Curve coefficient b in y^2 = x^3 + b
pub const CURVE_B: Fq = {
    let mut b = [0u8; 32];
    b[31] = 3;
    b
};

/// Build a G1 point from its affine coordinates
pub fn g1_from_coords(x: &Fq, y: &Fq) -> G1 {
    let mut point = [0u8; 64];
    point[..32].copy_from_slice(x);
    point[32..].copy_from_slice(y);
    point
}

/// x coordinate of a G1 point
pub fn g1_x(point: &G1) -> Fq {
    let mut x = [0u8; 32];
    x.copy_from_slice(&point[..32]);
    x
}

/// y coordinate of a G1 point
pub fn g1_y(point: &G1) -> Fq {
    let mut y = [0u8; 32];
    y.copy_from_slice(&point[32..]);
    y
}
