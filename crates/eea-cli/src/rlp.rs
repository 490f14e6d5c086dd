//! # RLP Subcommand
//!
//! Encode JSON values to RLP hex and decode RLP hex back to JSON.
//!
//! Encoder input is JSON: strings (hex when `0x`-prefixed, text otherwise),
//! non-negative integers, booleans, and arrays of those. Decoder output
//! renders byte strings as `0x` hex and lists as arrays.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde::Deserialize;
use serde_json::Value;

use eea_core::{decode_hex_with_depth, encode, RlpInput};

use crate::config::{CliConfig, Limits};

/// Arguments for the `eea rlp` subcommand.
#[derive(Args, Debug)]
pub struct RlpArgs {
    #[command(subcommand)]
    pub command: RlpCommand,
}

/// RLP subcommands.
#[derive(Subcommand, Debug)]
pub enum RlpCommand {
    /// Encode a JSON value as 0x-prefixed RLP hex.
    Encode {
        /// JSON value to encode.
        #[arg(value_name = "JSON", required_unless_present = "file")]
        value: Option<String>,
        /// Read the JSON value from a file (`-` for stdin).
        #[arg(long, short, conflicts_with = "value")]
        file: Option<PathBuf>,
    },

    /// Decode RLP hex and print it as JSON.
    Decode {
        /// RLP hex, with or without the 0x prefix.
        #[arg(value_name = "HEX", required_unless_present = "file")]
        value: Option<String>,
        /// Read the hex from a file (`-` for stdin).
        #[arg(long, short, conflicts_with = "value")]
        file: Option<PathBuf>,
    },
}

/// Execute the rlp subcommand.
pub fn run_rlp(args: &RlpArgs, config: &CliConfig) -> Result<u8> {
    let limits = &config.limits;
    let output = match &args.command {
        RlpCommand::Encode { value, file } => {
            let text = crate::read_input(value.as_deref(), file.as_deref(), limits)?;
            encode_json(&text, limits)?
        }
        RlpCommand::Decode { value, file } => {
            let text = crate::read_input(value.as_deref(), file.as_deref(), limits)?;
            decode_to_json(&text, limits)?
        }
    };
    println!("{output}");
    Ok(0)
}

/// Encode JSON text as RLP hex.
///
/// Nesting is checked on the raw text before parsing, so the parser never
/// recurses deeper than `limits.max_depth`.
pub fn encode_json(text: &str, limits: &Limits) -> Result<String> {
    let depth = json_nesting(text);
    if depth > limits.max_depth {
        bail!(
            "input nests {depth} levels deep, exceeding the configured limit of {}",
            limits.max_depth
        );
    }
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).context("input is not valid JSON")?;
    de.end().context("input is not valid JSON")?;

    let input = RlpInput::from_json(&value)?;
    let hex = encode(&input)?;
    tracing::debug!(encoded_len = (hex.len() - 2) / 2, "encoded value");
    Ok(hex)
}

/// Decode RLP hex into pretty-printed JSON.
pub fn decode_to_json(text: &str, limits: &Limits) -> Result<String> {
    let value = decode_hex_with_depth(text, limits.max_depth)?;
    tracing::debug!(depth = value.depth(), "decoded value");
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Bracket nesting depth of JSON text. Brackets inside strings are
/// ignored; scalars have depth 0.
fn json_nesting(text: &str) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
