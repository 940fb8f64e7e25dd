//! vk-codegen CLI - turn arkworks Groth16 artifacts into alt_bn128 wire data
//!
//! Reads a verifying key written with arkworks `serialize_uncompressed` and
//! emits Rust source, a JSON summary or the raw wire layout. `calldata`
//! packs an arkworks proof and input files for the verifier. The `dev-*`
//! commands expose the deterministic development circuit.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use groth16_solana_vk_codegen::{convert, fixture, render};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Convert arkworks Groth16 keys and proofs for the Solana verifier
#[derive(Parser)]
#[command(name = "vk-codegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input key and output location
#[derive(Args, Clone)]
struct KeyArgs {
    /// arkworks verifying key file
    #[arg(long, env = "GROTH16_VK")]
    vk: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rust source for `include!`
    Rust,
    /// JSON summary
    Json,
    /// Raw wire bytes (hex on stdout)
    Wire,
    /// arkworks uncompressed serialization
    Ark,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit Rust constants for a verifying key
    Rust(KeyArgs),

    /// Emit a JSON summary of a verifying key
    Json(KeyArgs),

    /// Emit a verifying key in the wire layout
    Wire(KeyArgs),

    /// Build verifier calldata from an arkworks proof and public inputs
    Calldata {
        /// arkworks proof file (compressed or uncompressed)
        #[arg(long)]
        proof: PathBuf,

        /// arkworks scalar file, once per public input in order
        #[arg(long = "input")]
        inputs: Vec<PathBuf>,

        /// Output file for raw calldata (hex on stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Emit the development key for the a*b=c circuit
    DevKey {
        #[arg(long, value_enum, default_value = "rust")]
        format: Format,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Prove a*b=c with the development key and emit verifier calldata
    DevCalldata {
        #[arg(long, default_value_t = 3)]
        a: u64,

        #[arg(long, default_value_t = 4)]
        b: u64,

        /// Output file for raw calldata (hex on stdout if omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rust(args) => run_key(args, Format::Rust),
        Commands::Json(args) => run_key(args, Format::Json),
        Commands::Wire(args) => run_key(args, Format::Wire),
        Commands::Calldata { proof, inputs, out } => run_calldata(proof, inputs, out),
        Commands::DevKey { format, out } => run_dev_key(format, out),
        Commands::DevCalldata { a, b, out } => run_dev_calldata(a, b, out),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_key(args: KeyArgs, format: Format) -> Result<()> {
    let bytes = fs::read(&args.vk)
        .with_context(|| format!("Failed to read verifying key {}", args.vk.display()))?;
    let vk = convert::load_vk(&bytes)
        .with_context(|| format!("Failed to parse verifying key {}", args.vk.display()))?;
    log::info!(
        "Loaded verifying key with {} public inputs",
        vk.gamma_abc_g1.len().saturating_sub(1)
    );
    emit_key(&vk, format, args.out)
}

fn run_calldata(proof: PathBuf, inputs: Vec<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let proof_bytes =
        fs::read(&proof).with_context(|| format!("Failed to read proof {}", proof.display()))?;
    let input_bytes = inputs
        .iter()
        .map(|path| {
            fs::read(path).with_context(|| format!("Failed to read input {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let data = convert::load_calldata(&proof_bytes, &input_bytes)
        .with_context(|| format!("Failed to build calldata from {}", proof.display()))?;
    log::info!(
        "Built calldata with {} public inputs ({} bytes)",
        inputs.len(),
        data.len()
    );
    write_binary(&data, out)
}

fn run_dev_key(format: Format, out: Option<PathBuf>) -> Result<()> {
    log::warn!("The development key has a public seed. Do not deploy it.");
    let (_, vk) = fixture::dev_setup().context("Development setup failed")?;
    emit_key(&vk, format, out)
}

fn run_dev_calldata(a: u64, b: u64, out: Option<PathBuf>) -> Result<()> {
    let (pk, _) = fixture::dev_setup().context("Development setup failed")?;
    let (proof, c) = fixture::prove(&pk, a, b).context("Proving failed")?;
    let data = convert::calldata(&proof, &[c]);
    log::info!("Proved {} * {} ({} bytes of calldata)", a, b, data.len());
    write_binary(&data, out)
}

fn emit_key(
    vk: &ark_groth16::VerifyingKey<ark_bn254::Bn254>,
    format: Format,
    out: Option<PathBuf>,
) -> Result<()> {
    match format {
        Format::Rust => write_text(&render::render_rust(vk), out),
        Format::Json => write_text(&render::render_json(vk)?, out),
        Format::Wire => write_binary(&convert::vk_to_bytes(vk), out),
        Format::Ark => {
            use ark_serialize::CanonicalSerialize;
            let mut buf = Vec::new();
            vk.serialize_uncompressed(&mut buf)
                .context("Failed to serialize verifying key")?;
            write_binary(&buf, out)
        }
    }
}

fn write_text(text: &str, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            std::io::stdout().write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn write_binary(bytes: &[u8], out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {} bytes to {}", bytes.len(), path.display());
            Ok(())
        }
        None => write_text(&format!("{}\n", hex::encode(bytes)), None),
    }
}
