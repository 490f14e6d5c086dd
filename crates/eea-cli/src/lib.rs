//! # eea-cli — Command-Line Interface for the EEA Toolkit
//!
//! Provides the `eea` binary.
//!
//! ## Subcommands
//!
//! - `eea rlp encode` — Encode a JSON value (string, integer, boolean, or
//!   nested array of those) as `0x`-prefixed RLP hex.
//! - `eea rlp decode` — Decode RLP hex and print it as JSON.
//! - `eea group derive` — Resolve or derive a privacy group id.
//!
//! ```bash
//! eea rlp encode '["hello", "world"]'
//! eea rlp decode 0xcc8568656c6c6f85776f726c64
//! eea group derive --private-from <KEY> --private-for <KEY> --private-for <KEY>
//! eea group derive --options options.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `eea-core` and `eea-privacy`; no encoding or
//!   derivation logic lives here.
//! - Results go to stdout, logs go to stderr.

pub mod config;
pub mod group;
pub mod rlp;

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Limits;

/// Resolve a subcommand's input from an inline argument or a file.
///
/// A file path of `-` reads standard input. Input larger than
/// `limits.max_input_bytes` is rejected.
pub fn read_input(inline: Option<&str>, file: Option<&Path>, limits: &Limits) -> Result<String> {
    let text = match (inline, file) {
        (Some(s), None) => s.to_string(),
        (None, Some(path)) => read_limited(path, limits.max_input_bytes)?,
        (Some(_), Some(_)) => bail!("pass either an inline value or --file, not both"),
        (None, None) => bail!("no input given: pass an inline value or --file"),
    };
    if text.len() > limits.max_input_bytes {
        bail!(
            "input is {} bytes, exceeding the configured limit of {} bytes",
            text.len(),
            limits.max_input_bytes
        );
    }
    Ok(text)
}

fn read_limited(path: &Path, max_bytes: usize) -> Result<String> {
    // Read one byte past the limit so oversize input is detected.
    let cap = max_bytes.saturating_add(1) as u64;
    let mut text = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .take(cap)
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
    } else {
        std::fs::File::open(path)
            .with_context(|| format!("failed to open input file: {}", path.display()))?
            .take(cap)
            .read_to_string(&mut text)
            .with_context(|| format!("failed to read input file: {}", path.display()))?;
    }
    Ok(text)
}
