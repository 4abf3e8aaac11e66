use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{InspectError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "a11y-inspect.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "a11y-inspect",
    version,
    about = "Accessibility rule checks and issue deduplication over UI tree snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: a11y-inspect.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the rule library on a snapshot and report its issues
    Scan {
        /// Element tree snapshot (JSON)
        #[arg(long)]
        snapshot: String,

        /// Output format (default from config, else console)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Scan several snapshots and merge their issues into one store
    Merge {
        /// Snapshot files, merged in the order given
        #[arg(long = "snapshot", required = true)]
        snapshots: Vec<String>,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// List the enabled rules
    Rules,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `a11y-inspect.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Rule ids to skip, matched case-insensitively
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,

    pub output: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Parse a config file, surfacing I/O and YAML errors.
pub fn read_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| InspectError::Yaml {
        context: path.display().to_string(),
        source,
    })
}

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
///
/// A missing default file is silent; an explicitly requested file that
/// cannot be used, or a malformed one, is logged.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = Path::new(path.unwrap_or(DEFAULT_CONFIG_FILE));
    if path.is_none() && !config_path.exists() {
        return AppConfig::default();
    }
    match read_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring config: {}", e);
            AppConfig::default()
        }
    }
}
