//! Render a verifying key as Rust source or a JSON summary

use crate::convert::{g1_to_bytes, g2_to_bytes};
use ark_bn254::{Bn254, G1Affine, G2Affine};
use ark_groth16::VerifyingKey;
use serde::{Deserialize, Serialize};

/// Rust source declaring `NR_PUBLIC_INPUTS`, `GAMMA_ABC_LEN` and
/// `VERIFYING_KEY`, meant to be `include!`d by a verifier program.
pub fn render_rust(vk: &VerifyingKey<Bn254>) -> String {
    let ic_len = vk.gamma_abc_g1.len();
    let mut src = String::new();

    src.push_str("// @generated by vk-codegen from an arkworks Groth16 verifying key. Do not edit.\n\n");
    src.push_str("/// Public inputs accepted by the embedded key\n");
    src.push_str(&format!(
        "pub const NR_PUBLIC_INPUTS: usize = {};\n\n",
        ic_len.saturating_sub(1)
    ));
    src.push_str("/// Input commitments in the embedded key\n");
    src.push_str(&format!("pub const GAMMA_ABC_LEN: usize = {};\n\n", ic_len));
    src.push_str(
        "pub const VERIFYING_KEY: ::groth16_solana_core::VerifyingKey<GAMMA_ABC_LEN> =\n    ::groth16_solana_core::VerifyingKey::new(\n",
    );
    push_point(&mut src, "alpha_g1", &g1_to_bytes(&vk.alpha_g1), 8);
    push_point(&mut src, "beta_g2", &g2_to_bytes(&vk.beta_g2), 8);
    push_point(&mut src, "gamma_g2", &g2_to_bytes(&vk.gamma_g2), 8);
    push_point(&mut src, "delta_g2", &g2_to_bytes(&vk.delta_g2), 8);
    src.push_str("        // gamma_abc_g1\n        [\n");
    for point in &vk.gamma_abc_g1 {
        push_point(&mut src, "", &g1_to_bytes(point), 12);
    }
    src.push_str("        ],\n    );\n");
    src
}

fn push_point(src: &mut String, label: &str, bytes: &[u8], indent: usize) {
    let pad = " ".repeat(indent);
    if !label.is_empty() {
        src.push_str(&format!("{}// {}\n", pad, label));
    }
    src.push_str(&format!(
        "{}::hex_literal::hex!(\"{}\"),\n",
        pad,
        hex::encode(bytes)
    ));
}

/// G1 point as `0x`-prefixed big-endian coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G1Json {
    pub x: String,
    pub y: String,
}

/// G2 point; each coordinate is `[imaginary, real]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2Json {
    pub x: [String; 2],
    pub y: [String; 2],
}

/// Human-readable summary of a verifying key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySummary {
    pub curve: String,
    pub nr_public_inputs: usize,
    pub alpha_g1: G1Json,
    pub beta_g2: G2Json,
    pub gamma_g2: G2Json,
    pub delta_g2: G2Json,
    pub gamma_abc_g1: Vec<G1Json>,
    /// Full key in the wire layout, hex encoded
    pub wire: String,
}

fn word(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn g1_json(p: &G1Affine) -> G1Json {
    let b = g1_to_bytes(p);
    G1Json {
        x: word(&b[..32]),
        y: word(&b[32..]),
    }
}

fn g2_json(p: &G2Affine) -> G2Json {
    let b = g2_to_bytes(p);
    G2Json {
        x: [word(&b[0..32]), word(&b[32..64])],
        y: [word(&b[64..96]), word(&b[96..128])],
    }
}

impl KeySummary {
    pub fn from_vk(vk: &VerifyingKey<Bn254>) -> Self {
        KeySummary {
            curve: "bn254".to_string(),
            nr_public_inputs: vk.gamma_abc_g1.len().saturating_sub(1),
            alpha_g1: g1_json(&vk.alpha_g1),
            beta_g2: g2_json(&vk.beta_g2),
            gamma_g2: g2_json(&vk.gamma_g2),
            delta_g2: g2_json(&vk.delta_g2),
            gamma_abc_g1: vk.gamma_abc_g1.iter().map(g1_json).collect(),
            wire: hex::encode(crate::convert::vk_to_bytes(vk)),
        }
    }
}

/// Pretty-printed JSON summary
pub fn render_json(vk: &VerifyingKey<Bn254>) -> crate::Result<String> {
    let mut out = serde_json::to_string_pretty(&KeySummary::from_vk(vk))?;
    out.push('\n');
    Ok(out)
}
