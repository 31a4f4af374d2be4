use engine::config::EngineConfig;
use engine::{ErrorCode, MatchConfig, MatchRegistry, Phase, PublicState};
use engine_test_support::tables::{bots, humans, mixed};

use crate::common::drive_humans_to_scoring;

fn scores(view: &PublicState) -> Vec<i32> {
    view.seats.iter().map(|s| s.score).collect()
}

#[test]
fn all_bot_match_plays_itself() {
    let registry = MatchRegistry::default();
    registry
        .create_match(MatchConfig::new("bots", "X"), bots("b"))
        .unwrap();

    // Creation deals and lets the bots play the whole first round
    let view = registry.public_state("bots", 0).unwrap();
    assert_eq!(view.phase, Phase::Scoring);
    assert_eq!(view.tricks_played, 13);

    for round in 2..=4 {
        registry.advance_round("bots").unwrap();
        let view = registry.public_state("bots", 0).unwrap();
        assert_eq!(view.round_no, round);
        assert_eq!(view.phase, Phase::Scoring);
    }
    registry.finish_match("bots").unwrap();

    let view = registry.public_state("bots", 0).unwrap();
    assert_eq!(view.phase, Phase::Finished);
    let s = scores(&view);
    assert_eq!(s[0], s[2]);
    assert_eq!(s[1], s[3]);
}

#[test]
fn same_seed_same_match() {
    let play = |seed: &str| {
        let registry = MatchRegistry::default();
        registry
            .create_match(MatchConfig::new("det", seed), bots("b"))
            .unwrap();
        for _ in 0..3 {
            registry.advance_round("det").unwrap();
        }
        let log = registry
            .get_match("det")
            .unwrap()
            .lock()
            .state()
            .intent_log()
            .to_vec();
        (log, registry.public_state("det", 2).unwrap())
    };

    let (log_a, view_a) = play("seed-42");
    let (log_b, view_b) = play("seed-42");
    assert_eq!(log_a, log_b);
    assert_eq!(view_a, view_b);

    let (log_c, _) = play("seed-43");
    assert_ne!(log_a, log_c);
}

#[test]
fn bots_hand_the_turn_back_to_the_human() {
    let registry = MatchRegistry::default();
    registry
        .create_match(MatchConfig::new("mixed", "X"), mixed("m", &[0]))
        .unwrap();

    let view = registry.public_state("mixed", 0).unwrap();
    assert!(view.active_seat == 0 || !view.phase.awaits_intent());

    for _ in 0..3 {
        drive_humans_to_scoring(&registry, "mixed", "m");
        assert_eq!(
            registry.public_state("mixed", 0).unwrap().phase,
            Phase::Scoring
        );
        registry.advance_round("mixed").unwrap();
    }
    assert_eq!(registry.public_state("mixed", 0).unwrap().round_no, 4);
}

#[test]
fn random_policy_also_completes_rounds() {
    let registry = MatchRegistry::new(EngineConfig {
        bot_policy: "RandomPlayer".into(),
        ..EngineConfig::default()
    });
    registry
        .create_match(MatchConfig::new("rnd", "X"), bots("r"))
        .unwrap();
    assert_eq!(
        registry.public_state("rnd", 0).unwrap().phase,
        Phase::Scoring
    );
}

#[test]
fn unknown_policy_is_a_config_error_only_with_bots() {
    let registry = MatchRegistry::new(EngineConfig {
        bot_policy: "Nobody".into(),
        ..EngineConfig::default()
    });
    let err = registry
        .create_match(MatchConfig::new("bad", "X"), bots("b"))
        .err()
        .unwrap();
    assert_eq!(err.code(), ErrorCode::ConfigError);
    assert!(registry.is_empty());

    registry
        .create_match(MatchConfig::new("ok", "X"), humans("p"))
        .unwrap();
    assert_eq!(registry.len(), 1);
}
