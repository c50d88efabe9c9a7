//! Verify command - check a proof against a verification key

use crate::config::Config;
use crate::loader::{load_proof, load_public_signals, load_vk};
use crate::CommonArgs;
use anyhow::Result;
use clap::Args;
use console::style;
use plonk_verifier_core::{verify_detailed, VerifierConfig};
use std::path::PathBuf;

#[derive(Args)]
pub struct VerifyArgs {
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

/// Returns whether the proof was accepted
pub fn run(config: &Config, args: VerifyArgs) -> Result<bool> {
    let vk = load_vk(&args.vk)?;
    let proof = load_proof(&args.proof)?;
    let signals = load_public_signals(&args.public)?;

    if config.chatty() {
        println!("{} Verifying proof...", style("→").cyan().bold());
        println!("  Domain: 2^{}", vk.power);
        println!("  Public inputs: {} (key expects {})", signals.len(), vk.n_public);
        println!();
    }

    let verifier_config = VerifierConfig::default().with_max_power(config.max_power);
    let result = verify_detailed(&vk, &proof, &signals, &verifier_config);

    match &result {
        Ok(_) => log::debug!("Proof accepted"),
        Err(e) => log::debug!("Proof rejected: {:?}", e),
    }

    if config.json_output {
        let json = match &result {
            Ok(_) => serde_json::json!({ "valid": true }),
            Err(e) => serde_json::json!({ "valid": false, "error": e.to_string() }),
        };
        println!("{}", json);
    } else if !config.quiet {
        match &result {
            Ok(_) => println!("{} Proof accepted", style("✓").green().bold()),
            Err(e) => println!("{} Proof rejected: {}", style("✗").red().bold(), e),
        }
        println!(
            "  {} The final pairing check is not part of this decision",
            style("→").dim()
        );
    }

    Ok(result.is_ok())
}
