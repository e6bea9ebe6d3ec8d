use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// matprops - effective properties of composite and honeycomb materials
#[derive(Parser, Debug)]
#[command(name = "matprops")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Engine base URL (overrides config and MATPROPS_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Remote timeout in seconds (overrides config and MATPROPS_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Directory holding config.json
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Directory for matprops.log
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log everything, down to wire-level traces
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    /// Whether output, including failures, should be JSON.
    pub fn wants_json(&self) -> bool {
        matches!(self.command, Command::Compute { json: true, .. })
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one computation
    Compute {
        /// Operation name, e.g. thermal_conductivity_for_unidirectional_composite
        operation: String,

        /// Model selector (1: rule of mixtures, 2: Vanin-type model)
        #[arg(short, long)]
        model: u8,

        /// Parameters as name=value, e.g. fiberContent=0.2
        #[arg(value_parser = parse_parameter)]
        parameters: Vec<(String, f64)>,

        /// Print `[values, {"secs", "nanos"}]` instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List operations with their parameters and wire layouts
    List,
}

/// Parse `name=value` into a named parameter.
pub fn parse_parameter(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in '{raw}'"));
    }

    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid number for '{name}': {e}"))?;

    Ok((name.to_string(), value))
}
