// Build script to embed the verifying key selected by GROTH16_VK
//
// Usage:
//   GROTH16_VK=path/to/verifying_key.bin cargo build-sbf
//   cargo build-sbf                      # development key for a*b=c
//
// The file is an arkworks `VerifyingKey<Bn254>` written with
// `serialize_uncompressed` (or compressed). It is rendered into
// OUT_DIR/verifying_key.rs and included by src/lib.rs.

use anyhow::{Context, Result};
use groth16_solana_vk_codegen::{convert, fixture, render};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-env-changed=GROTH16_VK");

    let vk = match env::var_os("GROTH16_VK") {
        Some(path) => {
            let path = PathBuf::from(path);
            println!("cargo:rerun-if-changed={}", path.display());
            let bytes = fs::read(&path)
                .with_context(|| format!("Failed to read GROTH16_VK={}", path.display()))?;
            let vk = convert::load_vk(&bytes)
                .with_context(|| format!("Invalid verifying key in {}", path.display()))?;
            println!(
                "cargo:warning=Using verifying key {} ({} public inputs)",
                path.display(),
                vk.gamma_abc_g1.len().saturating_sub(1)
            );
            vk
        }
        None => {
            println!(
                "cargo:warning=GROTH16_VK not set, embedding the development key (a*b=c). Do not deploy."
            );
            let (_, vk) = fixture::dev_setup().context("Development setup failed")?;
            vk
        }
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);
    let dst_path = out_dir.join("verifying_key.rs");
    fs::write(&dst_path, render::render_rust(&vk))
        .with_context(|| format!("Failed to write {}", dst_path.display()))?;

    Ok(())
}
