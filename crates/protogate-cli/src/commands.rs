//! Command handlers.
//!
//! Each handler computes its result and returns it; [`run`] prints the JSON
//! to stdout and maps the outcome to a process exit code.

use std::time::Duration;

use anyhow::{Context, Result};
use protogate::{
    ArtifactRecord, Manifest, ProtocolInventory, ScoreThresholds, Scorecard, ValidatorRunner,
    ValidatorSpec, build_all, build_inventory, build_scorecard, write_manifest, write_scorecard,
};
use protogate_core::GateConfig;
use protogate_gates::{
    ApprovalGate, Gate, GateResult, JobpostAnalysisGate, MetricGate, SectionsGate, ToneMapGate,
    run_gate,
};
use serde::Serialize;

use crate::cli::{Cli, Command, GateCommand, ManifestArgs};
use crate::config_handlers::handle_config_command;

/// Exit code for a successful command or a passing gate.
pub const EXIT_OK: u8 = 0;
/// Exit code for a failing gate or a failed validator.
pub const EXIT_FAIL: u8 = 1;
/// Exit code for fatal errors.
pub const EXIT_ERROR: u8 = 2;

/// Dispatch a parsed command line and return the exit code.
pub async fn run(cli: Cli) -> Result<u8> {
    let config_path = cli.config.as_deref();
    let load = || GateConfig::load(config_path).context("Failed to load configuration");

    match cli.command {
        Command::Config { action } => {
            handle_config_command(config_path, action)?;
            Ok(EXIT_OK)
        }
        Command::Inventory => {
            print_json(&cmd_inventory(&load()?)?)?;
            Ok(EXIT_OK)
        }
        Command::Manifest(args) => {
            let config = load()?;
            let ran = args.run_validators;
            let manifest = cmd_manifest(&config, args).await?;
            print_json(&manifest)?;
            Ok(if ran && manifest.has_failures() {
                EXIT_FAIL
            } else {
                EXIT_OK
            })
        }
        Command::Scorecard { output } => {
            let config = load()?;
            let path = output.unwrap_or_else(|| config.paths.scorecard_path.clone());
            let scorecard = cmd_scorecard(&config)?;
            write_scorecard(&path, &scorecard)?;
            print_json(&scorecard)?;
            Ok(EXIT_OK)
        }
        Command::Gate { gate } => {
            let result = cmd_gate(&load()?, gate);
            print_json(&result)?;
            Ok(result.exit_code())
        }
    }
}

/// Inventories of every protocol document, in file order.
pub fn cmd_inventory(config: &GateConfig) -> Result<Vec<ProtocolInventory>> {
    build_all(config).with_context(|| {
        format!(
            "Failed to build inventory from {}",
            config.paths.protocol_dir.display()
        )
    })
}

/// Build and write the manifest for one protocol document.
///
/// Validators are recorded as pending unless `--run-validators` is given,
/// in which case they run one after another from the artifact root.
pub async fn cmd_manifest(config: &GateConfig, args: ManifestArgs) -> Result<Manifest> {
    let inventory = build_inventory(&args.document, &config.paths.scripts_dir)?;

    let artifacts: Vec<ArtifactRecord> = args
        .artifacts
        .iter()
        .map(|a| ArtifactRecord::resolve(&config.paths.artifact_root, &a.path, &a.description))
        .collect();

    let validators = if args.run_validators {
        ValidatorRunner::new(Duration::from_secs(config.runner.timeout_secs))
            .with_working_dir(&config.paths.artifact_root)
            .run_all(&args.validators)
            .await
    } else {
        args.validators.iter().map(ValidatorSpec::pending).collect()
    };

    let path = args
        .output
        .unwrap_or_else(|| config.manifest_path(&inventory.protocol_id));
    let manifest = write_manifest(&path, &inventory, artifacts, validators, &args.notes)?;
    log::info!(
        "Manifest for protocol {} written to {}",
        manifest.protocol_id,
        path.display()
    );
    Ok(manifest)
}

/// Scorecard over every protocol, bucketed with the configured thresholds.
pub fn cmd_scorecard(config: &GateConfig) -> Result<Scorecard> {
    let inventories = cmd_inventory(config)?;
    Ok(build_scorecard(
        &inventories,
        &ScoreThresholds::from(&config.thresholds),
    ))
}

/// Run one gate. Thresholds not given on the command line come from config.
pub fn cmd_gate(config: &GateConfig, command: GateCommand) -> GateResult {
    let gate = build_gate(config, command);
    run_gate(gate.as_ref())
}

fn build_gate(config: &GateConfig, command: GateCommand) -> Box<dyn Gate> {
    let t = &config.thresholds;
    match command {
        GateCommand::JobpostAnalysis { input, threshold } => Box::new(JobpostAnalysisGate::new(
            input,
            threshold.unwrap_or(t.jobpost_analysis),
        )),
        GateCommand::ToneMap { input, threshold } => {
            Box::new(ToneMapGate::new(input, threshold.unwrap_or(t.tone_map)))
        }
        GateCommand::Approval { input } => Box::new(ApprovalGate::new(input)),
        GateCommand::Sections {
            input,
            sections,
            threshold,
        } => Box::new(SectionsGate::new(
            input,
            sections,
            threshold.unwrap_or(t.sections),
        )),
        GateCommand::Metric {
            input,
            key,
            threshold,
        } => Box::new(MetricGate::new(input, key, threshold.unwrap_or(t.metric))),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
