//! Discovery → inventory → scorecard flow.

use protogate::{
    CoverageStatus, ScoreThresholds, Scorecard, build_all, build_scorecard, write_scorecard,
};

use crate::common::Fixture;

#[test]
fn test_scorecard_for_empty_protocol_dir() {
    let fx = Fixture::new();

    let inventories = build_all(&fx.config).unwrap();
    let card = build_scorecard(&inventories, &ScoreThresholds::from(&fx.config.thresholds));

    assert_eq!(card.summary.protocols, 0);
    assert_eq!(card.summary.average_coverage, 1.0);
}

#[test]
fn test_scorecard_for_missing_protocol_dir() {
    let mut fx = Fixture::new();
    fx.config.paths.protocol_dir = fx.root().join("does-not-exist");

    let inventories = build_all(&fx.config).unwrap();
    let card = build_scorecard(&inventories, &ScoreThresholds::default());
    assert_eq!(card.summary.protocols, 0);
    assert_eq!(card.summary.average_coverage, 1.0);
}

#[test]
fn test_scorecard_across_protocols() {
    let fx = Fixture::new();
    for script in ["intake.py", "score.py", "render.py", "price.py", "lint.sh"] {
        fx.script(script);
    }
    fx.protocol(
        "01-intake.md",
        "# Intake\n{SCRIPT: intake.py}\n{SCRIPT: score.py}\n",
    );
    fx.protocol(
        "02-proposal.md",
        "# Proposal\n{SCRIPT: render.py}\n{SCRIPT: price.py}\n{SCRIPT: send.py}\n",
    );
    fx.protocol(
        "03-code-review.md",
        "# Code Review\n{SCRIPT: lint.sh}\n{SCRIPT: sast.sh}\n{SCRIPT: deps.sh}\n",
    );
    fx.protocol("04-retro.md", "# Retrospective\n\nManual.\n");
    fx.protocol("notes.md", "# Not a protocol\n{SCRIPT: ghost.py}\n");

    let inventories = build_all(&fx.config).unwrap();
    let card = build_scorecard(&inventories, &ScoreThresholds::from(&fx.config.thresholds));

    let ids: Vec<&str> = card.protocols.iter().map(|p| p.protocol.as_str()).collect();
    assert_eq!(ids, vec!["01", "02", "03", "04"]);

    let statuses: Vec<CoverageStatus> = card.protocols.iter().map(|p| p.status).collect();
    assert_eq!(
        statuses,
        vec![
            CoverageStatus::OnTrack,
            CoverageStatus::AtRisk,
            CoverageStatus::Critical,
            CoverageStatus::OnTrack,
        ]
    );
    assert_eq!(card.summary.on_track, 2);
    assert_eq!(card.summary.at_risk, 1);
    assert_eq!(card.summary.critical, 1);

    let expected_mean = (1.0 + 2.0 / 3.0 + 1.0 / 3.0 + 1.0) / 4.0;
    assert!((card.summary.average_coverage - expected_mean).abs() < 1e-9);
    assert_eq!(card.protocols[2].missing_scripts, vec!["sast.sh", "deps.sh"]);

    write_scorecard(&fx.config.paths.scorecard_path, &card).unwrap();
    let back: Scorecard = serde_json::from_str(
        &std::fs::read_to_string(&fx.config.paths.scorecard_path).unwrap(),
    )
    .unwrap();
    assert_eq!(back.summary, card.summary);
}

#[test]
fn test_removing_a_script_never_improves_bucket() {
    let fx = Fixture::new();
    for script in ["a.py", "b.py", "c.py", "d.py"] {
        fx.script(script);
    }
    fx.protocol(
        "01-x.md",
        "# X\n{SCRIPT: a.py}{SCRIPT: b.py}{SCRIPT: c.py}{SCRIPT: d.py}\n",
    );
    let thresholds = ScoreThresholds::default();

    let status = || {
        let inventories = build_all(&fx.config).unwrap();
        build_scorecard(&inventories, &thresholds).protocols[0].status
    };

    let mut previous = status();
    for script in ["d.py", "c.py", "b.py", "a.py"] {
        std::fs::remove_file(fx.config.paths.scripts_dir.join(script)).unwrap();
        let current = status();
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, CoverageStatus::Critical);
}
