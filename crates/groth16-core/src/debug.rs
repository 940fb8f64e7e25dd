//! Debug tracing for verification values
//!
//! Enable with `--features debug` for off-chain test output, or
//! `--features debug-solana` to log through `msg!` inside a program.

use crate::types::{Scalar, G1};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Write `bytes` as lowercase hex into `out`, returning the written prefix.
/// `out` must hold at least `2 * bytes.len()` bytes.
pub fn hex_into<'a>(bytes: &[u8], out: &'a mut [u8]) -> &'a str {
    let len = (bytes.len() * 2).min(out.len()) / 2;
    for (i, byte) in bytes[..len].iter().enumerate() {
        out[2 * i] = HEX[(byte >> 4) as usize];
        out[2 * i + 1] = HEX[(byte & 0x0f) as usize];
    }
    // Only ASCII hex digits were written
    core::str::from_utf8(&out[..2 * len]).unwrap_or("")
}

/// Hex form of a scalar, stack only
pub fn scalar_hex(s: &Scalar) -> [u8; 64] {
    let mut out = [0u8; 64];
    hex_into(s, &mut out);
    out
}

/// Hex form of a G1 point's two coordinates, stack only
pub fn g1_hex(p: &G1) -> ([u8; 64], [u8; 64]) {
    let mut x = [0u8; 64];
    let mut y = [0u8; 64];
    hex_into(&p[..32], &mut x);
    hex_into(&p[32..], &mut y);
    (x, y)
}

/// Debug print for a scalar
#[cfg(all(feature = "debug", not(feature = "debug-solana")))]
#[macro_export]
macro_rules! dbg_fr {
    ($name:expr, $fr:expr) => {
        #[cfg(test)]
        {
            extern crate std;
            let hex = $crate::debug::scalar_hex($fr);
            std::println!("{} = 0x{}", $name, core::str::from_utf8(&hex).unwrap_or(""));
        }
    };
}

#[cfg(feature = "debug-solana")]
#[macro_export]
macro_rules! dbg_fr {
    ($name:expr, $fr:expr) => {{
        let hex = $crate::debug::scalar_hex($fr);
        solana_program::msg!("{} = 0x{}", $name, core::str::from_utf8(&hex).unwrap_or(""));
    }};
}

#[cfg(not(any(feature = "debug", feature = "debug-solana")))]
#[macro_export]
macro_rules! dbg_fr {
    ($name:expr, $fr:expr) => {};
}

/// Debug trace macro
#[cfg(all(feature = "debug", not(feature = "debug-solana")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(test)]
        {
            extern crate std;
            std::println!($($arg)*);
        }
    };
}

#[cfg(feature = "debug-solana")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        solana_program::msg!($($arg)*)
    };
}

#[cfg(not(any(feature = "debug", feature = "debug-solana")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug print for a G1 point
#[cfg(all(feature = "debug", not(feature = "debug-solana")))]
#[macro_export]
macro_rules! dbg_g1 {
    ($name:expr, $g1:expr) => {
        #[cfg(test)]
        {
            extern crate std;
            let (x, y) = $crate::debug::g1_hex($g1);
            std::println!(
                "{} = (0x{}, 0x{})",
                $name,
                core::str::from_utf8(&x).unwrap_or(""),
                core::str::from_utf8(&y).unwrap_or("")
            );
        }
    };
}

#[cfg(feature = "debug-solana")]
#[macro_export]
macro_rules! dbg_g1 {
    ($name:expr, $g1:expr) => {{
        let (x, y) = $crate::debug::g1_hex($g1);
        solana_program::msg!(
            "{} = (0x{}, 0x{})",
            $name,
            core::str::from_utf8(&x).unwrap_or(""),
            core::str::from_utf8(&y).unwrap_or("")
        );
    }};
}

#[cfg(not(any(feature = "debug", feature = "debug-solana")))]
#[macro_export]
macro_rules! dbg_g1 {
    ($name:expr, $g1:expr) => {};
}
