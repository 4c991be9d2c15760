//! End-of-day transition and the day/round counter cycle.

use bikeshare_core::{
    config::GameConfig,
    engine::GameEngine,
    error::GameError,
    rng::FixedNoise,
    types::Rating,
};

fn engine_without_jitter(config: GameConfig) -> GameEngine {
    GameEngine::with_noise(config, Box::new(FixedNoise(1.0))).unwrap()
}

#[test]
fn first_day_from_defaults_is_fully_accounted() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut engine = engine_without_jitter(GameConfig::default());

    let outcome = engine.end_day().unwrap();

    // ~1200 rentals at $2 against $2500 maintenance: a small loss.
    assert!((1195..=1205).contains(&outcome.rentals));
    assert_eq!(outcome.daily_income, f64::from(outcome.rentals) * 2.0);
    assert_eq!(outcome.daily_profit, outcome.daily_income - 2500.0);
    // 5% of 1000 bikes break.
    assert_eq!(outcome.bikes_lost, 50);
    // Heavy utilization (rentals > 80% of remaining fleet) pleases users.
    assert_eq!(outcome.satisfaction_after, 60.0);
    // One slightly losing day: cumulative income < 0.
    assert_eq!(outcome.rating, Rating::Poor);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.current_bikes, 950);
    assert_eq!(snapshot.total_income, outcome.daily_profit);
    assert_eq!(snapshot.day, 2);
    assert_eq!(snapshot.round, 1);

    let report = engine.daily_report().unwrap();
    assert_eq!(report.round, 1);
    assert_eq!(report.day, 1);
    assert_eq!(report.bikes_remaining, 950);
    assert_eq!(report.rentals, outcome.rentals);
}

#[test]
fn satisfaction_is_capped_at_one_hundred() {
    let mut engine = engine_without_jitter(GameConfig {
        satisfaction: 95.0,
        ..GameConfig::default()
    });
    let outcome = engine.end_day().unwrap();
    assert_eq!(outcome.satisfaction_after, 100.0);
}

#[test]
fn satisfaction_is_floored_at_zero() {
    // Policy 0 kills demand entirely; a dead day costs 15 satisfaction.
    let mut engine = engine_without_jitter(GameConfig {
        policy_effect: 0.0,
        satisfaction: 10.0,
        ..GameConfig::default()
    });
    let outcome = engine.end_day().unwrap();
    assert_eq!(outcome.rentals, 0);
    assert_eq!(outcome.satisfaction_after, 0.0);
}

#[test]
fn invariants_hold_across_full_seeded_sessions() {
    for seed in [1u64, 7, 42, 0xB1CE] {
        let mut engine = GameEngine::new(GameConfig::default(), seed).unwrap();
        while !engine.is_game_over() {
            let outcome = engine.end_day().unwrap();
            assert!(
                (0.0..=100.0).contains(&outcome.satisfaction_after),
                "seed {seed}: satisfaction {} out of bounds",
                outcome.satisfaction_after
            );
            let snapshot = engine.snapshot();
            assert!((1..=3).contains(&snapshot.day));
            assert!((1..=4).contains(&snapshot.round));
        }
    }
}

#[test]
fn counters_cycle_three_days_per_round() {
    let mut engine = engine_without_jitter(GameConfig::default());

    for _ in 0..3 {
        engine.end_day().unwrap();
    }
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.round, 2);
    assert_eq!(snapshot.day, 1);

    for _ in 0..6 {
        engine.end_day().unwrap();
    }
    assert!(engine.is_game_over());
    assert_eq!(engine.snapshot().round, 4);
}

#[test]
fn tenth_day_is_rejected() {
    let mut engine = engine_without_jitter(GameConfig::default());
    for _ in 0..9 {
        engine.end_day().unwrap();
    }
    assert_eq!(engine.end_day(), Err(GameError::SessionOver));
}

#[test]
fn round_history_accumulates_then_flushes_at_the_boundary() {
    let mut engine = engine_without_jitter(GameConfig::default());

    engine.end_day().unwrap();
    engine.end_day().unwrap();
    assert_eq!(engine.round_history().len(), 2);
    assert!(engine.last_round_history().is_empty());

    engine.end_day().unwrap();
    // Boundary: the finished series moves aside for the charting
    // collaborator and the live series starts empty.
    assert!(engine.round_history().is_empty());
    let finished = engine.last_round_history();
    assert_eq!(finished.len(), 3);
    assert_eq!(
        finished.iter().map(|p| p.day).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}
