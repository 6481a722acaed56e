//! Inventory → manifest flow.

use std::time::Duration;

use protogate::{
    ArtifactRecord, ArtifactStatus, Manifest, ValidatorRunner, ValidatorSpec, ValidatorStatus,
    build_inventory, write_manifest,
};

use crate::common::Fixture;

#[test]
fn test_manifest_from_protocol_document() {
    let fx = Fixture::new();
    fx.script("a.py");
    let doc = fx.protocol(
        "05-discovery-call.md",
        "# Discovery Call\n\n1. Prep with {SCRIPT: a.py}\n2. Summarize with {SCRIPT: b.py}\n",
    );
    fx.artifact("jobpost-analysis.json", "{}");

    let inventory = build_inventory(&doc, &fx.config.paths.scripts_dir).unwrap();
    let artifacts = vec![
        ArtifactRecord::resolve(
            &fx.config.paths.artifact_root,
            "jobpost-analysis.json",
            "Job post analysis",
        ),
        ArtifactRecord::resolve(&fx.config.paths.artifact_root, "call-notes.md", "Call notes"),
    ];
    let path = fx.config.manifest_path(&inventory.protocol_id);

    let manifest = write_manifest(&path, &inventory, artifacts, vec![], "first pass").unwrap();

    let on_disk: Manifest =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, manifest);
    assert_eq!(on_disk.protocol_id, "05");
    assert_eq!(on_disk.protocol_title, "Discovery Call");
    assert_eq!(on_disk.automation_coverage.coverage, 0.5);
    assert_eq!(on_disk.automation_coverage.missing_scripts, vec!["b.py"]);
    assert_eq!(on_disk.artifacts[0].status, ArtifactStatus::Present);
    assert_eq!(on_disk.artifacts[1].status, ArtifactStatus::Missing);
    assert!(path.ends_with("protocol-05.json"));
}

#[test]
fn test_manifest_rerun_differs_only_in_timestamp() {
    let fx = Fixture::new();
    fx.script("tools/render.py");
    let doc = fx.protocol(
        "04-proposal.md",
        "# Proposal\n\n{SCRIPT: tools/render.py}\n{SCRIPT: tools/price.py}\n",
    );
    let inventory = build_inventory(&doc, &fx.config.paths.scripts_dir).unwrap();
    let path = fx.config.manifest_path(&inventory.protocol_id);

    let write = || {
        let artifacts = vec![ArtifactRecord::resolve(
            &fx.config.paths.artifact_root,
            "proposal.md",
            "Proposal draft",
        )];
        let validators = vec![ValidatorSpec {
            name: "sections".to_string(),
            command: "protogate gate sections --input proposal.md".to_string(),
        }
        .pending()];
        write_manifest(&path, &inventory, artifacts, validators, "stable").unwrap();
        std::fs::read_to_string(&path).unwrap()
    };

    let first = write();
    let second = write();

    let strip = |text: &str| -> String {
        text.lines()
            .filter(|l| !l.trim_start().starts_with("\"generated_at\""))
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn test_manifest_overwrites_previous_file() {
    let fx = Fixture::new();
    let doc = fx.protocol("01-intake.md", "# Intake\n");
    let inventory = build_inventory(&doc, &fx.config.paths.scripts_dir).unwrap();
    let path = fx.config.manifest_path("01");

    write_manifest(&path, &inventory, vec![], vec![], "old notes").unwrap();
    write_manifest(&path, &inventory, vec![], vec![], "new notes").unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("new notes"));
    assert!(!content.contains("old notes"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_manifest_with_executed_validators() {
    let fx = Fixture::new();
    let doc = fx.protocol("07-code-review.md", "# Code Review\n\n{SCRIPT: lint.sh}\n");
    fx.script("lint.sh");
    let inventory = build_inventory(&doc, &fx.config.paths.scripts_dir).unwrap();

    let specs: Vec<ValidatorSpec> = [
        "lint=echo lint clean",
        "coverage=echo '{\"status\":\"fail\",\"notes\":\"Coverage 0.82 < 0.9\"}'; exit 1",
        "slow=sleep 5",
    ]
    .iter()
    .map(|s| s.parse().unwrap())
    .collect();

    let runner = ValidatorRunner::new(Duration::from_millis(300)).with_working_dir(fx.root());
    let validators = runner.run_all(&specs).await;

    let manifest = write_manifest(
        &fx.config.manifest_path("07"),
        &inventory,
        vec![],
        validators,
        "",
    )
    .unwrap();

    assert!(manifest.has_failures());
    assert_eq!(manifest.validators[0].status, ValidatorStatus::Pass);
    assert_eq!(manifest.validators[1].notes, "Coverage 0.82 < 0.9");
    assert_eq!(manifest.validators[2].notes, "TIMEOUT");
    assert_eq!(manifest.automation_coverage.coverage, 1.0);
}
