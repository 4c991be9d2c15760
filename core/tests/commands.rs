//! Configuration command validation — rejected commands leave the
//! state exactly as it was.

use bikeshare_core::{
    command::{CommandOutcome, GameCommand},
    config::GameConfig,
    engine::GameEngine,
    error::{GameError, ValidationError},
    rng::FixedNoise,
    types::{TimeSlot, Weather},
};

fn engine() -> GameEngine {
    GameEngine::with_noise(GameConfig::default(), Box::new(FixedNoise(1.0))).unwrap()
}

#[test]
fn add_bikes_grows_the_fleet() {
    let mut engine = engine();
    engine.add_bikes(500).unwrap();
    assert_eq!(engine.snapshot().current_bikes, 1500);
    // Zero is a valid, if pointless, delivery.
    engine.add_bikes(0).unwrap();
    assert_eq!(engine.snapshot().current_bikes, 1500);
}

#[test]
fn negative_bike_count_is_rejected_without_side_effects() {
    let mut engine = engine();
    let err = engine.add_bikes(-1).unwrap_err();
    assert_eq!(
        err,
        GameError::Validation(ValidationError::NegativeBikeCount(-1))
    );
    assert_eq!(engine.snapshot().current_bikes, 1000);
}

#[test]
fn non_integer_bike_count_fails_at_the_parser() {
    let err = GameCommand::from_line("add_bikes 1.5").unwrap_err();
    assert_eq!(err, ValidationError::NonIntegerBikeCount("1.5".into()));
}

#[test]
fn command_lines_parse_into_typed_commands() {
    assert_eq!(
        GameCommand::from_line("add_bikes 500").unwrap(),
        GameCommand::AddBikes { count: 500 }
    );
    assert_eq!(
        GameCommand::from_line("set_weather sunny").unwrap(),
        GameCommand::SetWeather {
            weather: "sunny".into()
        }
    );
    assert_eq!(
        GameCommand::from_line("end_day").unwrap(),
        GameCommand::EndDay
    );
    assert_eq!(
        GameCommand::from_line("ride").unwrap_err(),
        ValidationError::UnknownCommand("ride".into())
    );
}

#[test]
fn commands_round_trip_through_json() {
    let cmd: GameCommand = serde_json::from_str(r#"{"cmd":"add_bikes","count":10}"#).unwrap();
    assert_eq!(cmd, GameCommand::AddBikes { count: 10 });
    let json = serde_json::to_string(&GameCommand::SpawnCompetitor).unwrap();
    assert_eq!(json, r#"{"cmd":"spawn_competitor"}"#);
}

#[test]
fn policy_outside_the_range_is_rejected() {
    let mut engine = engine();
    assert!(matches!(
        engine.set_policy(5.0),
        Err(GameError::Validation(ValidationError::PolicyOutOfRange(_)))
    ));
    assert!(engine.set_policy(f64::NAN).is_err());
    assert!(engine.set_policy(-0.1).is_err());
    assert_eq!(engine.snapshot().policy_effect, 2.0);

    engine.set_policy(4.0).unwrap();
    assert_eq!(engine.snapshot().policy_effect, 4.0);
}

#[test]
fn neutral_policy_is_a_demand_no_op() {
    let mut baseline = engine();
    let mut explicit = engine();
    explicit.set_policy(2.0).unwrap();

    let a = baseline.end_day().unwrap();
    let b = explicit.end_day().unwrap();
    assert_eq!(a.rentals, b.rentals);
}

#[test]
fn weather_labels_parse_case_insensitively() {
    let mut engine = engine();
    engine.set_weather("SUNNY").unwrap();
    assert_eq!(engine.snapshot().weather, Weather::Sunny);

    let err = engine.set_weather("snowy").unwrap_err();
    assert_eq!(
        err,
        GameError::Validation(ValidationError::UnknownWeather("snowy".into()))
    );
    // Unchanged by the failed command.
    assert_eq!(engine.snapshot().weather, Weather::Sunny);
}

#[test]
fn time_slot_labels_parse_case_insensitively() {
    let mut engine = engine();
    engine.set_time_slot("Morning_Rush").unwrap();
    assert_eq!(engine.snapshot().time_slot, TimeSlot::MorningRush);

    let err = engine.set_time_slot("noon").unwrap_err();
    assert_eq!(
        err,
        GameError::Validation(ValidationError::UnknownTimeSlot("noon".into()))
    );
    assert_eq!(engine.snapshot().time_slot, TimeSlot::MorningRush);
}

#[test]
fn spawning_a_competitor_twice_is_a_no_op_not_an_error() {
    let mut engine = engine();
    assert_eq!(engine.spawn_competitor().unwrap(), CommandOutcome::Applied);
    assert!(engine.snapshot().competitor_present);

    assert_eq!(engine.spawn_competitor().unwrap(), CommandOutcome::NoOp);
    // Still present — the transition is one-way.
    assert!(engine.snapshot().competitor_present);
}

#[test]
fn every_command_is_rejected_after_game_over() {
    let mut engine = engine();
    for _ in 0..9 {
        engine.end_day().unwrap();
    }
    assert!(engine.is_game_over());

    assert_eq!(engine.add_bikes(10), Err(GameError::SessionOver));
    assert_eq!(engine.set_policy(1.0), Err(GameError::SessionOver));
    assert_eq!(engine.set_weather("sunny"), Err(GameError::SessionOver));
    assert_eq!(engine.set_time_slot("night"), Err(GameError::SessionOver));
    assert_eq!(engine.spawn_competitor(), Err(GameError::SessionOver));
    assert_eq!(
        engine.apply(&GameCommand::EndDay),
        Err(GameError::SessionOver)
    );
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = GameConfig {
        city_population: 0,
        ..GameConfig::default()
    };
    assert!(GameEngine::new(config, 1).is_err());

    let config = GameConfig {
        damage_rate: 1.5,
        ..GameConfig::default()
    };
    assert!(GameEngine::new(config, 1).is_err());
}
