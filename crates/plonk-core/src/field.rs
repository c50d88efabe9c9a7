//! Base field arithmetic for BN254
//!
//! Implements Fq (base field) operations using 4 x 64-bit limbs.
//! All operations are performed modulo the base field order q. Inputs that
//! are not canonical (>= q) are reduced first, so every operation is total.

use crate::types::{Fq, FQ_ZERO};

/// BN254 base field modulus q
/// q = 21888242871839275222246405745257275088696311157297823662689037894645226208583
pub const Q: [u64; 4] = [
    0x3c208c16d87cfd47,
    0x97816a916871ca8d,
    0xb85045b68181585d,
    0x30644e72e131a029,
];

/// Convert 32-byte big-endian Fq to 4 x u64 limbs (little-endian limbs)
#[inline]
pub fn fq_to_limbs(fq: &Fq) -> [u64; 4] {
    [
        u64::from_be_bytes([
            fq[24], fq[25], fq[26], fq[27], fq[28], fq[29], fq[30], fq[31],
        ]),
        u64::from_be_bytes([
            fq[16], fq[17], fq[18], fq[19], fq[20], fq[21], fq[22], fq[23],
        ]),
        u64::from_be_bytes([fq[8], fq[9], fq[10], fq[11], fq[12], fq[13], fq[14], fq[15]]),
        u64::from_be_bytes([fq[0], fq[1], fq[2], fq[3], fq[4], fq[5], fq[6], fq[7]]),
    ]
}

/// Convert 4 x u64 limbs (little-endian) to 32-byte big-endian Fq
#[inline]
pub fn limbs_to_fq(limbs: &[u64; 4]) -> Fq {
    let mut fq = [0u8; 32];
    fq[24..32].copy_from_slice(&limbs[0].to_be_bytes());
    fq[16..24].copy_from_slice(&limbs[1].to_be_bytes());
    fq[8..16].copy_from_slice(&limbs[2].to_be_bytes());
    fq[0..8].copy_from_slice(&limbs[3].to_be_bytes());
    fq
}

/// Reduce a 256-bit value mod q
/// The input can be any 256-bit value (a raw Keccak digest is at most ~5.3 * q)
#[inline]
pub fn fq_reduce(a: &Fq) -> Fq {
    limbs_to_fq(&reduce_limbs(&fq_to_limbs(a)))
}

/// Order compare against the modulus: true iff `a < q`
pub fn fq_is_canonical(a: &Fq) -> bool {
    !gte(&fq_to_limbs(a), &Q)
}

/// Add two field elements: a + b mod q
pub fn fq_add(a: &Fq, b: &Fq) -> Fq {
    let a_limbs = reduce_limbs(&fq_to_limbs(a));
    let b_limbs = reduce_limbs(&fq_to_limbs(b));
    limbs_to_fq(&add_mod(&a_limbs, &b_limbs))
}

/// Subtract two field elements: a - b mod q
pub fn fq_sub(a: &Fq, b: &Fq) -> Fq {
    let a_limbs = reduce_limbs(&fq_to_limbs(a));
    let b_limbs = reduce_limbs(&fq_to_limbs(b));
    limbs_to_fq(&sub_mod(&a_limbs, &b_limbs))
}

/// Negate a field element: -a mod q
pub fn fq_neg(a: &Fq) -> Fq {
    let a_limbs = reduce_limbs(&fq_to_limbs(a));
    if is_zero_4(&a_limbs) {
        return FQ_ZERO;
    }
    limbs_to_fq(&sub_no_borrow(&Q, &a_limbs))
}

/// Double a field element: 2a mod q
pub fn fq_double(a: &Fq) -> Fq {
    fq_add(a, a)
}

/// Multiply two field elements: a * b mod q
pub fn fq_mul(a: &Fq, b: &Fq) -> Fq {
    let a_limbs = fq_to_limbs(a);
    let b_limbs = fq_to_limbs(b);
    limbs_to_fq(&mul_mod_wide(&a_limbs, &b_limbs))
}

/// Square a field element: a^2 mod q
pub fn fq_square(a: &Fq) -> Fq {
    fq_mul(a, a)
}

/// Compute multiplicative inverse: a^{-1} mod q
/// Returns None if a is zero (mod q)
pub fn fq_inv(a: &Fq) -> Option<Fq> {
    let a_limbs = reduce_limbs(&fq_to_limbs(a));
    if is_zero_4(&a_limbs) {
        return None;
    }
    // Fermat's little theorem: a^{-1} = a^{q-2} mod q
    Some(limbs_to_fq(&pow_mod(&a_limbs, &Q_MINUS_2)))
}

/// Divide two field elements: a / b mod q
/// Returns None if b is zero
pub fn fq_div(a: &Fq, b: &Fq) -> Option<Fq> {
    let b_inv = fq_inv(b)?;
    Some(fq_mul(a, &b_inv))
}

/// Convert u64 to Fq
pub fn fq_from_u64(val: u64) -> Fq {
    let mut fq = FQ_ZERO;
    fq[24..32].copy_from_slice(&val.to_be_bytes());
    fq
}

/// Parse a hex string (optional 0x prefix, at most 64 digits) into a raw
/// 256-bit value. The result is not reduced.
pub fn fq_from_hex(hex: &str) -> Option<Fq> {
    let digits = hex.strip_prefix("0x").unwrap_or(hex);
    if digits.is_empty() || digits.len() > 64 {
        return None;
    }

    let mut fq = FQ_ZERO;
    // Walk from the least significant digit so short strings are left-padded
    for (i, c) in digits.bytes().rev().enumerate() {
        let nibble = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => return None,
        };
        let byte = 31 - i / 2;
        if i % 2 == 0 {
            fq[byte] |= nibble;
        } else {
            fq[byte] |= nibble << 4;
        }
    }
    Some(fq)
}

/// Parse a decimal string into a raw 256-bit value.
///
/// Returns None for empty input, non-digit characters, or values that do not
/// fit in 256 bits. The result is NOT reduced mod q, so callers can still
/// range-check it with [`fq_is_canonical`].
pub fn fq_from_decimal(s: &str) -> Option<Fq> {
    if s.is_empty() {
        return None;
    }

    let mut limbs = [0u64; 4];
    for c in s.bytes() {
        if !c.is_ascii_digit() {
            return None;
        }
        let mut carry = (c - b'0') as u128;
        for limb in limbs.iter_mut() {
            let v = (*limb as u128) * 10 + carry;
            *limb = v as u64;
            carry = v >> 64;
        }
        if carry != 0 {
            return None;
        }
    }
    Some(limbs_to_fq(&limbs))
}

// --- Internal functions for limb arithmetic ---

/// q - 2 (for computing inverse via Fermat's little theorem)
const Q_MINUS_2: [u64; 4] = [
    0x3c208c16d87cfd45, // limb 0 (least significant)
    0x97816a916871ca8d, // limb 1
    0xb85045b68181585d, // limb 2
    0x30644e72e131a029, // limb 3 (most significant)
];

/// 2^256 mod q
const TWO_256_MOD_Q: [u64; 4] = [
    0xd35d438dc58f0d9d, // limb 0 (least significant)
    0x0a78eb28f5c70b3d, // limb 1
    0x666ea36f7879462c, // limb 2
    0x0e0a77c19a07df2f, // limb 3 (most significant)
];

/// Subtract q until the value is canonical
fn reduce_limbs(a: &[u64; 4]) -> [u64; 4] {
    let mut result = *a;
    while gte(&result, &Q) {
        result = sub_no_borrow(&result, &Q);
    }
    result
}

/// Add two canonical 256-bit numbers, returning a + b mod q
fn add_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (sum, overflow) = add_with_carry(a, b);
    if overflow || gte(&sum, &Q) {
        sub_no_borrow(&sum, &Q)
    } else {
        sum
    }
}

/// Subtract two canonical 256-bit numbers, returning a - b mod q
fn sub_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    if gte(a, b) {
        sub_no_borrow(a, b)
    } else {
        // a < b, so compute q - (b - a)
        let diff = sub_no_borrow(b, a);
        sub_no_borrow(&Q, &diff)
    }
}

/// Multiply two 256-bit numbers mod q using widening multiplication
fn mul_mod_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    reduce_512(&mul_wide_4x4(a, b))
}

/// Reduce a 512-bit number mod q
fn reduce_512(wide: &[u64; 8]) -> [u64; 4] {
    let mut low = [wide[0], wide[1], wide[2], wide[3]];
    let mut high = [wide[4], wide[5], wide[6], wide[7]];

    // low + high * 2^256 == low + high * (2^256 mod q), folded until high is gone
    while !is_zero_4(&high) {
        let product = mul_wide_4x4(&high, &TWO_256_MOD_Q);

        let (sum, overflow) =
            add_with_carry(&low, &[product[0], product[1], product[2], product[3]]);
        low = sum;

        high = [product[4], product[5], product[6], product[7]];
        if overflow {
            let (new_high, _) = add_with_carry(&high, &[1, 0, 0, 0]);
            high = new_high;
        }
    }

    reduce_limbs(&low)
}

fn is_zero_4(a: &[u64; 4]) -> bool {
    a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0
}

/// Multiply two 256-bit numbers to get 512-bit result (no reduction)
fn mul_wide_4x4(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut result = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mul_with_carry(a[j], b[i], result[i + j], carry);
            result[i + j] = lo;
            carry = hi;
        }
        result[i + 4] = carry;
    }

    result
}

/// Compute a^exp mod q using square-and-multiply
fn pow_mod(base: &[u64; 4], exp: &[u64; 4]) -> [u64; 4] {
    let mut result = [1u64, 0, 0, 0];
    let mut base_pow = *base;

    for limb in exp {
        let mut e = *limb;
        for _ in 0..64 {
            if e & 1 == 1 {
                result = mul_mod_wide(&result, &base_pow);
            }
            base_pow = mul_mod_wide(&base_pow, &base_pow);
            e >>= 1;
        }
    }

    result
}

/// Add two 256-bit numbers with carry
fn add_with_carry(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], bool) {
    let mut result = [0u64; 4];
    let mut carry = 0u64;

    for i in 0..4 {
        let (sum1, c1) = a[i].overflowing_add(b[i]);
        let (sum2, c2) = sum1.overflowing_add(carry);
        result[i] = sum2;
        carry = (c1 as u64) + (c2 as u64);
    }

    (result, carry > 0)
}

/// Subtract b from a (assumes a >= b, or wraps mod 2^256)
fn sub_no_borrow(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut result = [0u64; 4];
    let mut borrow = 0u64;

    for i in 0..4 {
        let (diff1, b1) = a[i].overflowing_sub(b[i]);
        let (diff2, b2) = diff1.overflowing_sub(borrow);
        result[i] = diff2;
        borrow = (b1 as u64) + (b2 as u64);
    }

    result
}

/// Check if a >= b
fn gte(a: &[u64; 4], b: &[u64; 4]) -> bool {
    for i in (0..4).rev() {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    true // equal
}

/// Multiply two u64 with carry: (a * b + c + carry) = (lo, hi)
fn mul_with_carry(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let product = (a as u128) * (b as u128) + (c as u128) + (carry as u128);
    (product as u64, (product >> 64) as u64)
}
