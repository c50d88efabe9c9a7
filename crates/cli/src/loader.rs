//! Artifact loading: snarkjs JSON or the fixed binary encodings
//!
//! The format is picked by file extension. `.json` files are read as snarkjs
//! output (points as `[x, y, z]` decimal strings, scalars as decimal strings
//! or `0x`-prefixed hex); anything else is handed to the core's binary parsers.

use anyhow::{bail, Context, Result};
use plonk_verifier_core::field::{fq_from_decimal, fq_from_hex};
use plonk_verifier_core::types::{g1_from_coords, G1_IDENTITY};
use plonk_verifier_core::{public_signals_from_bytes, Fq, Proof, VerificationKey, G1};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// snarkjs `verification_key.json` (fields the verifier does not use are ignored)
#[derive(Debug, Deserialize)]
struct VkJson {
    #[serde(rename = "nPublic")]
    n_public: u64,
    power: u64,
    w: String,
    #[serde(rename = "Qm")]
    qm: Vec<String>,
    #[serde(rename = "Ql")]
    ql: Vec<String>,
    #[serde(rename = "Qr")]
    qr: Vec<String>,
    #[serde(rename = "Qo")]
    qo: Vec<String>,
    #[serde(rename = "Qc")]
    qc: Vec<String>,
    #[serde(rename = "S1")]
    s1: Vec<String>,
    #[serde(rename = "S2")]
    s2: Vec<String>,
    #[serde(rename = "S3")]
    s3: Vec<String>,
}

/// snarkjs `proof.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ProofJson {
    a: Vec<String>,
    b: Vec<String>,
    c: Vec<String>,
    z: Vec<String>,
    #[serde(rename = "T1")]
    t1: Vec<String>,
    #[serde(rename = "T2")]
    t2: Vec<String>,
    #[serde(rename = "T3")]
    t3: Vec<String>,
    wxi: Vec<String>,
    wxiw: Vec<String>,
    #[serde(rename = "eval_a")]
    eval_a: String,
    #[serde(rename = "eval_b")]
    eval_b: String,
    #[serde(rename = "eval_c")]
    eval_c: String,
    #[serde(rename = "eval_s1")]
    eval_s1: String,
    #[serde(rename = "eval_s2")]
    eval_s2: String,
    #[serde(rename = "eval_zw")]
    eval_zw: String,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn read_file(path: &Path, what: &str) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {} file: {:?}", what, path))
}

/// Load a verification key from JSON or binary
pub fn load_vk(path: &Path) -> Result<VerificationKey> {
    let bytes = read_file(path, "verification key")?;
    let vk = if is_json(path) {
        let text = String::from_utf8(bytes).context("Verification key is not UTF-8")?;
        parse_vk_json(&text)?
    } else {
        VerificationKey::from_bytes(&bytes)?
    };
    log::debug!(
        "Loaded verification key: power={}, nPublic={}",
        vk.power,
        vk.n_public
    );
    Ok(vk)
}

/// Load a proof from JSON or binary
pub fn load_proof(path: &Path) -> Result<Proof> {
    let bytes = read_file(path, "proof")?;
    if is_json(path) {
        let text = String::from_utf8(bytes).context("Proof is not UTF-8")?;
        parse_proof_json(&text)
    } else {
        Ok(Proof::from_bytes(&bytes)?)
    }
}

/// Load public signals from a JSON array of decimal strings or packed 32-byte words
pub fn load_public_signals(path: &Path) -> Result<Vec<Fq>> {
    let bytes = read_file(path, "public signals")?;
    if is_json(path) {
        let text = String::from_utf8(bytes).context("Public signals are not UTF-8")?;
        parse_public_signals_json(&text)
    } else {
        Ok(public_signals_from_bytes(&bytes)?)
    }
}

/// Parse and validate a snarkjs verification key
pub fn parse_vk_json(text: &str) -> Result<VerificationKey> {
    let json: VkJson = serde_json::from_str(text).context("Invalid verification key JSON")?;

    let n_public = u32::try_from(json.n_public)
        .with_context(|| format!("nPublic {} does not fit in 32 bits", json.n_public))?;
    let power = u32::try_from(json.power)
        .with_context(|| format!("power {} does not fit in 32 bits", json.power))?;

    let vk = VerificationKey {
        n_public,
        power,
        omega: parse_scalar(&json.w, "w")?,
        qm: parse_point(&json.qm, "Qm")?,
        ql: parse_point(&json.ql, "Ql")?,
        qr: parse_point(&json.qr, "Qr")?,
        qo: parse_point(&json.qo, "Qo")?,
        qc: parse_point(&json.qc, "Qc")?,
        s1: parse_point(&json.s1, "S1")?,
        s2: parse_point(&json.s2, "S2")?,
        s3: parse_point(&json.s3, "S3")?,
    };
    vk.validate()?;
    Ok(vk)
}

/// Parse a snarkjs proof. Range and curve checks are left to the verifier.
pub fn parse_proof_json(text: &str) -> Result<Proof> {
    let json: ProofJson = serde_json::from_str(text).context("Invalid proof JSON")?;

    Ok(Proof {
        a: parse_point(&json.a, "A")?,
        b: parse_point(&json.b, "B")?,
        c: parse_point(&json.c, "C")?,
        z: parse_point(&json.z, "Z")?,
        t1: parse_point(&json.t1, "T1")?,
        t2: parse_point(&json.t2, "T2")?,
        t3: parse_point(&json.t3, "T3")?,
        wxi: parse_point(&json.wxi, "Wxi")?,
        wxiw: parse_point(&json.wxiw, "Wxiw")?,
        eval_a: parse_scalar(&json.eval_a, "eval_a")?,
        eval_b: parse_scalar(&json.eval_b, "eval_b")?,
        eval_c: parse_scalar(&json.eval_c, "eval_c")?,
        eval_s1: parse_scalar(&json.eval_s1, "eval_s1")?,
        eval_s2: parse_scalar(&json.eval_s2, "eval_s2")?,
        eval_zw: parse_scalar(&json.eval_zw, "eval_zw")?,
    })
}

/// Parse a snarkjs `public.json` array
pub fn parse_public_signals_json(text: &str) -> Result<Vec<Fq>> {
    let values: Vec<String> =
        serde_json::from_str(text).context("Public signals must be a JSON array of strings")?;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| parse_scalar(v, &format!("public signal {}", i)))
        .collect()
}

/// Decimal or `0x` hex string to a raw 256-bit big-endian word (no reduction)
fn parse_scalar(value: &str, name: &str) -> Result<Fq> {
    let value = value.trim();
    let parsed = if value.starts_with("0x") {
        fq_from_hex(value)
    } else {
        fq_from_decimal(value)
    };
    match parsed {
        Some(fq) => Ok(fq),
        None => bail!("{}: {:?} is not a 256-bit integer", name, value),
    }
}

/// `[x, y]` or `[x, y, z]` with z = 1 (affine) or z = 0 (identity)
fn parse_point(coords: &[String], name: &str) -> Result<G1> {
    let (x, y) = match coords {
        [x, y] => (x, y),
        [x, y, z] => match z.trim() {
            "1" => (x, y),
            "0" => return Ok(G1_IDENTITY),
            other => bail!("{}: projective z = {} is not normalized", name, other),
        },
        _ => bail!("{}: expected 2 or 3 coordinates, got {}", name, coords.len()),
    };
    Ok(g1_from_coords(&parse_scalar(x, name)?, &parse_scalar(y, name)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use plonk_verifier_core::field::{fq_from_u64, fq_neg};
    use plonk_verifier_core::types::{FQ_ONE, G1_GENERATOR};
    use plonk_verifier_core::{public_signals_to_bytes, verify};
    use std::path::PathBuf;

    /// Write `contents` to a per-process file under the system temp directory
    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let file_name = format!("plonk-verify-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(file_name);
        fs::write(&path, contents).unwrap();
        path
    }

    const Q_MINUS_ONE: &str =
        "21888242871839275222246405745257275088696311157297823662689037894645226208582";

    fn generator_json() -> &'static str {
        r#"["1", "2", "1"]"#
    }

    fn vk_json(power: u64, w: &str) -> String {
        let g = generator_json();
        format!(
            r#"{{
                "protocol": "plonk",
                "curve": "bn128",
                "nPublic": 1,
                "power": {power},
                "k1": "2",
                "k2": "3",
                "Qm": {g}, "Ql": {g}, "Qr": {g}, "Qo": {g}, "Qc": {g},
                "S1": {g}, "S2": {g}, "S3": {g},
                "X_2": [["1", "2"], ["3", "4"], ["1", "0"]],
                "w": "{w}"
            }}"#
        )
    }

    fn proof_json(a: &str) -> String {
        let g = generator_json();
        format!(
            r#"{{
                "A": {a}, "B": {g}, "C": {g}, "Z": {g},
                "T1": {g}, "T2": {g}, "T3": {g}, "Wxi": {g}, "Wxiw": {g},
                "eval_a": "1", "eval_b": "1", "eval_c": "1",
                "eval_s1": "1", "eval_s2": "1", "eval_zw": "1",
                "protocol": "plonk",
                "curve": "bn128"
            }}"#
        )
    }

    #[test]
    fn test_parse_vk_json() {
        let vk = parse_vk_json(&vk_json(1, Q_MINUS_ONE)).unwrap();
        assert_eq!(vk.n_public, 1);
        assert_eq!(vk.power, 1);
        assert_eq!(vk.omega, fq_neg(&FQ_ONE));
        assert_eq!(vk.qm, G1_GENERATOR);
        assert_eq!(vk.s3, G1_GENERATOR);
    }

    #[test]
    fn test_parse_vk_json_rejects_large_power() {
        let err = parse_vk_json(&vk_json(40, "5")).unwrap_err();
        assert!(format!("{:#}", err).contains("exceeds"), "{:#}", err);
    }

    #[test]
    fn test_parse_proof_json_and_verify() {
        let vk = parse_vk_json(&vk_json(1, Q_MINUS_ONE)).unwrap();
        let proof = parse_proof_json(&proof_json(generator_json())).unwrap();
        let signals = parse_public_signals_json(r#"["1"]"#).unwrap();
        assert_eq!(proof.eval_zw, FQ_ONE);
        assert!(verify(&vk, &proof, &signals));
    }

    #[test]
    fn test_identity_point_parses_and_is_rejected() {
        let vk = parse_vk_json(&vk_json(1, Q_MINUS_ONE)).unwrap();
        let proof = parse_proof_json(&proof_json(r#"["0", "1", "0"]"#)).unwrap();
        assert_eq!(proof.a, G1_IDENTITY);
        assert!(!verify(&vk, &proof, &[FQ_ONE]));
    }

    #[test]
    fn test_unnormalized_point_rejected() {
        assert!(parse_proof_json(&proof_json(r#"["1", "2", "5"]"#)).is_err());
        assert!(parse_proof_json(&proof_json(r#"["1"]"#)).is_err());
    }

    #[test]
    fn test_public_signals_json() {
        let signals = parse_public_signals_json(r#"["7", "8", "9"]"#).unwrap();
        assert_eq!(signals, vec![fq_from_u64(7), fq_from_u64(8), fq_from_u64(9)]);
        assert!(parse_public_signals_json("[]").unwrap().is_empty());
        assert!(parse_public_signals_json(r#"["12a"]"#).is_err());
        assert!(parse_public_signals_json(r#"[7]"#).is_err());
    }

    #[test]
    fn test_scalars_kept_unreduced() {
        // q itself parses; the verifier's range check rejects it later
        let q = "21888242871839275222246405745257275088696311157297823662689037894645226208583";
        let fq = parse_scalar(q, "q").unwrap();
        assert_eq!(fq, plonk_verifier_core::types::FQ_MODULUS);
    }

    #[test]
    fn test_hex_scalars() {
        assert_eq!(parse_scalar("0x2a", "w").unwrap(), fq_from_u64(42));
        assert_eq!(parse_scalar(" 0x01 ", "w").unwrap(), FQ_ONE);
        assert!(parse_scalar("0x", "w").is_err());
        assert!(parse_scalar("0xzz", "w").is_err());
        let signals = parse_public_signals_json(r#"["0x7", "8"]"#).unwrap();
        assert_eq!(signals, vec![fq_from_u64(7), fq_from_u64(8)]);
    }

    #[test]
    fn test_load_binary_files() {
        let vk = parse_vk_json(&vk_json(1, Q_MINUS_ONE)).unwrap();
        let proof = parse_proof_json(&proof_json(generator_json())).unwrap();
        let signals = vec![FQ_ONE];

        let vk_path = temp_file("vk.bin", &vk.to_bytes());
        let proof_path = temp_file("proof.bin", &proof.to_bytes());
        let public_path = temp_file("public.bin", &public_signals_to_bytes(&signals));

        let loaded_vk = load_vk(&vk_path).unwrap();
        let loaded_proof = load_proof(&proof_path).unwrap();
        let loaded_signals = load_public_signals(&public_path).unwrap();

        for path in [&vk_path, &proof_path, &public_path] {
            fs::remove_file(path).unwrap();
        }

        assert_eq!(loaded_vk, vk);
        assert_eq!(loaded_proof, proof);
        assert_eq!(loaded_signals, signals);
        assert!(verify(&loaded_vk, &loaded_proof, &loaded_signals));
    }

    #[test]
    fn test_load_binary_rejects_wrong_size() {
        let path = temp_file("short-proof.bin", &[0u8; 100]);
        let result = load_proof(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_files() {
        let vk_path = temp_file("vk.json", vk_json(1, Q_MINUS_ONE).as_bytes());
        let proof_path = temp_file("proof.json", proof_json(generator_json()).as_bytes());
        let public_path = temp_file("public.json", br#"["1"]"#);

        let vk = load_vk(&vk_path).unwrap();
        let proof = load_proof(&proof_path).unwrap();
        let signals = load_public_signals(&public_path).unwrap();

        for path in [&vk_path, &proof_path, &public_path] {
            fs::remove_file(path).unwrap();
        }

        assert_eq!(vk.omega, fq_neg(&FQ_ONE));
        assert_eq!(signals, vec![FQ_ONE]);
        assert!(verify(&vk, &proof, &signals));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("plonk-verify-does-not-exist.bin");
        let err = load_vk(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read"), "{:#}", err);
    }

    #[test]
    fn test_extension_detection() {
        assert!(is_json(Path::new("proof.json")));
        assert!(is_json(Path::new("dir/KEY.JSON")));
        assert!(!is_json(Path::new("proof.bin")));
        assert!(!is_json(Path::new("proof")));
    }
}
