//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::input::ClampPolicy;

/// Out-of-range intensity handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Clamp intensity percentages into 0-100
    #[default]
    Clamp,
    /// Reject intensity percentages outside 0-100
    Reject,
}

impl From<PolicyArg> for ClampPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clamp => ClampPolicy::Clamp,
            PolicyArg::Reject => ClampPolicy::Reject,
        }
    }
}

/// One `--set CONTROL=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetArg {
    pub control: String,
    pub value: String,
}

/// Light and emission rig controller for isometric scene files.
#[derive(Parser, Debug)]
#[command(name = "lumenrig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Rig definition TOML file (built-in coffee-house rig if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Apply a control update before output, as CONTROL=VALUE.
    /// VALUE is either #RRGGBB or an intensity percentage (0-100).
    /// Repeatable; applied in order.
    #[arg(short, long = "set", value_name = "CONTROL=VALUE", value_parser = parse_set)]
    pub set: Vec<SetArg>,

    /// Print the scene tree instead of the rig state
    #[arg(long)]
    pub tree: bool,

    /// Output file for the YAML rig state (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Out-of-range intensity handling
    #[arg(long, value_enum, default_value_t = PolicyArg::Clamp)]
    pub policy: PolicyArg,

    /// Override the rig name
    #[arg(long)]
    pub rig_name: Option<String>,

    /// Save the effective rig configuration to a TOML file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Launch interactive TUI for driving the rig
    #[arg(short, long)]
    pub interactive: bool,

    /// Log file path (default: lumenrig.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Overrides layered on top of the rig file via Figment.
///
/// Only fields explicitly set on the CLI are serialized (via
/// `skip_serializing_if`), so unset flags never shadow file settings.
#[derive(Debug, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rig: Option<RigOverride>,
}

#[derive(Debug, Serialize)]
pub struct RigOverride {
    pub name: String,
}

impl Cli {
    /// Convert flat CLI args to a nested override config for Figment merging.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            rig: self
                .rig_name
                .clone()
                .map(|name| RigOverride { name }),
        }
    }
}

fn parse_set(s: &str) -> Result<SetArg, String> {
    let (control, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CONTROL=VALUE, got '{s}'"))?;
    if control.is_empty() {
        return Err(format!("empty control name in '{s}'"));
    }
    Ok(SetArg {
        control: control.to_string(),
        value: value.to_string(),
    })
}
