//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use protogate::{ArtifactSpec, ValidatorSpec};

/// Protogate: protocol coverage, manifests, scorecards, and artifact gates
#[derive(Parser, Debug)]
#[command(name = "protogate", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the script inventory of every protocol as JSON
    Inventory,

    /// Write the manifest for one protocol document
    Manifest(ManifestArgs),

    /// Aggregate coverage into a scorecard
    Scorecard {
        /// Output path (defaults to paths.scorecard_path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a quality gate over an artifact
    Gate {
        /// Gate to run
        #[command(subcommand)]
        gate: GateCommand,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `manifest`.
#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Protocol document, e.g. protocols/04-proposal.md
    pub document: PathBuf,

    /// Artifact to record, relative to paths.artifact_root
    #[arg(long = "artifact", value_name = "PATH=DESC")]
    pub artifacts: Vec<ArtifactSpec>,

    /// Validator to record
    #[arg(long = "validator", value_name = "NAME=CMD")]
    pub validators: Vec<ValidatorSpec>,

    /// Execute the validators instead of recording them as pending
    #[arg(long)]
    pub run_validators: bool,

    /// Free-form notes stored in the manifest
    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output path (defaults to <manifest_dir>/protocol-<id>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Gates available on the command line.
#[derive(Subcommand, Debug, Clone)]
pub enum GateCommand {
    /// Required fields of a job post analysis
    JobpostAnalysis {
        /// Analysis JSON
        #[arg(short, long)]
        input: PathBuf,
        /// Minimum score (defaults to thresholds.jobpost_analysis)
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },

    /// Tone map confidence and strategy
    ToneMap {
        /// Tone map JSON
        #[arg(short, long)]
        input: PathBuf,
        /// Minimum confidence (defaults to thresholds.tone_map)
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },

    /// Client approval signal in free text
    Approval {
        /// Text or markdown file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Required markdown sections
    Sections {
        /// Markdown file
        #[arg(short, long)]
        input: PathBuf,
        /// Required section heading (repeatable)
        #[arg(short, long = "section", required = true)]
        sections: Vec<String>,
        /// Minimum share of sections present (defaults to thresholds.sections)
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },

    /// Numeric value at a dotted key
    Metric {
        /// JSON file
        #[arg(short, long)]
        input: PathBuf,
        /// Dotted key, e.g. summary.average_coverage
        #[arg(short, long)]
        key: String,
        /// Minimum value (defaults to thresholds.metric)
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Create a default configuration file
    Init {
        /// Destination (defaults to the platform config dir)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Get a configuration value by dotted key
    Get {
        /// Dotted key, e.g. thresholds.on_track
        key: String,
    },
}

fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be within [0, 1], got {value}"))
    }
}
