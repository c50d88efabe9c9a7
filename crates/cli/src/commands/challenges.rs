//! Challenges command - dump the Fiat-Shamir values for a proof

use crate::config::Config;
use crate::loader::{load_proof, load_public_signals, load_vk};
use crate::CommonArgs;
use anyhow::{Context, Result};
use clap::Args;
use console::style;
use plonk_verifier_core::debug::fq_to_hex;
use plonk_verifier_core::{verify_detailed, VerifierConfig};
use std::path::PathBuf;

#[derive(Args)]
pub struct ChallengesArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Path to the verification key (.json for snarkjs, otherwise binary)
    #[arg(long)]
    vk: PathBuf,

    /// Path to the proof file
    #[arg(long)]
    proof: PathBuf,

    /// Path to the public signals file
    #[arg(long)]
    public: PathBuf,
}

pub fn run(config: &Config, args: ChallengesArgs) -> Result<()> {
    let vk = load_vk(&args.vk)?;
    let proof = load_proof(&args.proof)?;
    let signals = load_public_signals(&args.public)?;

    let verifier_config = VerifierConfig::default().with_max_power(config.max_power);
    let output = verify_detailed(&vk, &proof, &signals, &verifier_config)
        .context("Challenges are only derived for structurally valid proofs")?;
    let ch = &output.challenges;

    let values = [
        ("beta", fq_to_hex(&ch.beta)),
        ("gamma", fq_to_hex(&ch.gamma)),
        ("alpha", fq_to_hex(&ch.alpha)),
        ("xi", fq_to_hex(&ch.xi)),
        ("xin", fq_to_hex(&ch.xin)),
        ("zh", fq_to_hex(&ch.zh)),
        ("v1", fq_to_hex(&ch.v[1])),
        ("v2", fq_to_hex(&ch.v[2])),
        ("v3", fq_to_hex(&ch.v[3])),
        ("v4", fq_to_hex(&ch.v[4])),
        ("u", fq_to_hex(&ch.u)),
    ];
    let lagrange: Vec<String> = output.lagrange.iter().map(fq_to_hex).collect();

    if config.json_output {
        let mut json = serde_json::Map::new();
        for (name, value) in &values {
            json.insert(name.to_string(), serde_json::Value::String(value.clone()));
        }
        json.insert("lagrange".to_string(), serde_json::json!(lagrange));
        println!("{}", serde_json::Value::Object(json));
        return Ok(());
    }

    if config.chatty() {
        println!("{} Derived challenges", style("→").cyan().bold());
        println!();
    }
    for (name, value) in &values {
        println!("  {:<6} {}", name, value);
    }
    for (j, value) in lagrange.iter().enumerate() {
        println!("  {:<6} {}", format!("L{}", j + 1), value);
    }

    Ok(())
}
