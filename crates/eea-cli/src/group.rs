//! # Group Subcommand
//!
//! Resolves the privacy group id for a private transaction, either from a
//! JSON options document or from individual flags.
//!
//! ```bash
//! eea group derive --private-from <KEY> --private-for <KEY>,<KEY>
//! eea group derive --privacy-group-id <ID>
//! eea group derive --options options.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use eea_core::PrivacyGroupId;
use eea_privacy::{resolve_privacy_group_id, PrivacyGroupOptions, PrivateFor};

use crate::config::CliConfig;

/// Arguments for the `eea group` subcommand.
#[derive(Args, Debug)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

/// Privacy group subcommands.
#[derive(Subcommand, Debug)]
pub enum GroupCommand {
    /// Resolve or derive a privacy group id and print it.
    Derive(DeriveArgs),
}

/// Inputs for `eea group derive`.
#[derive(Args, Debug, Default)]
pub struct DeriveArgs {
    /// JSON options document with `privacyGroupId`, or `privateFrom` and
    /// `privateFor` (`-` for stdin).
    #[arg(
        long,
        conflicts_with_all = ["private_from", "private_for", "privacy_group_id"]
    )]
    pub options: Option<PathBuf>,

    /// Sender public key, base64 encoded.
    #[arg(long)]
    pub private_from: Option<String>,

    /// Recipient public key, base64 encoded. Repeat or comma-separate for
    /// several recipients.
    #[arg(long, value_delimiter = ',')]
    pub private_for: Vec<String>,

    /// Explicit privacy group id. Returned as-is once validated.
    #[arg(long)]
    pub privacy_group_id: Option<String>,
}

/// Execute the group subcommand.
pub fn run_group(args: &GroupArgs, config: &CliConfig) -> Result<u8> {
    match &args.command {
        GroupCommand::Derive(derive) => {
            let id = resolve_from_args(derive, config)?;
            println!("{id}");
            Ok(0)
        }
    }
}

/// Build options from `args` and resolve them to a group id.
pub fn resolve_from_args(args: &DeriveArgs, config: &CliConfig) -> Result<PrivacyGroupId> {
    let options = options_from_args(args, config)?;
    let id = resolve_privacy_group_id(&options)?;
    tracing::info!(privacy_group_id = %id, "resolved privacy group id");
    Ok(id)
}

fn options_from_args(args: &DeriveArgs, config: &CliConfig) -> Result<PrivacyGroupOptions> {
    if let Some(path) = &args.options {
        let text = crate::read_input(None, Some(path), &config.limits)?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("options file is not valid JSON: {}", path.display()))?;
        return Ok(PrivacyGroupOptions::from_json(&value)?);
    }

    let private_for = if args.private_for.is_empty() {
        None
    } else {
        Some(PrivateFor::Participants(args.private_for.clone()))
    };
    Ok(PrivacyGroupOptions {
        private_from: args.private_from.clone(),
        private_for,
        privacy_group_id: args.privacy_group_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const KEY_A: &str = "A1aVtMxLCUHmBVHXoZzzBgPbW/wj5axDpW9X8l91SGo=";
    const KEY_B: &str = "Ko2bVqD+nNlNYL5EE7y3IdOnviftjiizpjRt+HTuFBs=";
    const KEY_C: &str = "k2zXEin4Ip/qBGlRkJejnGWdP9cjkK+DAvKNW31L2C8=";

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: GroupCommand,
    }

    fn parse(args: &[&str]) -> Result<DeriveArgs, clap::Error> {
        let cli = TestCli::try_parse_from(std::iter::once("group").chain(args.iter().copied()))?;
        match cli.command {
            GroupCommand::Derive(derive) => Ok(derive),
        }
    }

    #[test]
    fn test_derive_from_flags() {
        let args = DeriveArgs {
            private_from: Some(KEY_A.to_string()),
            private_for: vec![KEY_B.to_string()],
            ..DeriveArgs::default()
        };
        let id = resolve_from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(id.as_str(), "DyAOiF/ynpc+JXa2YAGB0bCitSlOMNm+ShmB/7M6C4w=");
    }

    #[test]
    fn test_comma_separated_recipients() {
        let args = parse(&[
            "derive",
            "--private-from",
            KEY_A,
            "--private-for",
            &format!("{KEY_C},{KEY_B}"),
        ])
        .unwrap();
        assert_eq!(args.private_for, vec![KEY_C.to_string(), KEY_B.to_string()]);
        let id = resolve_from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(id.as_str(), "95yIn/OYTZ1xN7SiBX1MdBJv9Bqk6Oq7fy+7XSaInyY=");
    }

    #[test]
    fn test_repeated_recipient_flags() {
        let args = parse(&[
            "derive",
            "--private-from",
            KEY_A,
            "--private-for",
            KEY_B,
            "--private-for",
            KEY_C,
        ])
        .unwrap();
        assert_eq!(args.private_for.len(), 2);
    }

    #[test]
    fn test_options_conflicts_with_flags() {
        assert!(parse(&["derive", "--options", "o.json", "--private-from", KEY_A]).is_err());
    }

    #[test]
    fn test_explicit_group_id() {
        let args = DeriveArgs {
            privacy_group_id: Some(KEY_C.to_string()),
            ..DeriveArgs::default()
        };
        let id = resolve_from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(id.as_str(), KEY_C);
    }

    #[test]
    fn test_missing_recipients_rejected() {
        let args = DeriveArgs {
            private_from: Some(KEY_A.to_string()),
            ..DeriveArgs::default()
        };
        let err = resolve_from_args(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("privacyGroupOptions"), "{err}");
    }

    #[test]
    fn test_invalid_key_names_field() {
        let args = DeriveArgs {
            private_from: Some("AAAA".to_string()),
            private_for: vec![KEY_B.to_string()],
            ..DeriveArgs::default()
        };
        let err = resolve_from_args(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("privateFrom"), "{err}");
    }

    #[test]
    fn test_derive_from_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(
            &path,
            serde_json::json!({"privateFrom": KEY_A, "privateFor": [KEY_B, KEY_C]}).to_string(),
        )
        .unwrap();
        let args = DeriveArgs {
            options: Some(path),
            ..DeriveArgs::default()
        };
        let id = resolve_from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(id.as_str(), "95yIn/OYTZ1xN7SiBX1MdBJv9Bqk6Oq7fy+7XSaInyY=");
    }

    #[test]
    fn test_options_file_with_group_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(
            &path,
            serde_json::json!({"privateFrom": KEY_A, "privateFor": KEY_C}).to_string(),
        )
        .unwrap();
        let args = DeriveArgs {
            options: Some(path),
            ..DeriveArgs::default()
        };
        let id = resolve_from_args(&args, &CliConfig::default()).unwrap();
        assert_eq!(id.as_str(), KEY_C);
    }

    #[test]
    fn test_options_file_not_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, "privateFrom: x").unwrap();
        let args = DeriveArgs {
            options: Some(path),
            ..DeriveArgs::default()
        };
        let err = resolve_from_args(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not valid JSON"), "{err}");
    }
}
