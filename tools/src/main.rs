//! bikeshare-runner: headless driver for the bike-sharing game engine.
//!
//! Reads one command per line from stdin and answers each with a JSON
//! line, so any front end (or a human in a terminal) can play:
//!
//!   add_bikes 500
//!   set_policy 2.5
//!   set_weather sunny
//!   set_time_slot morning_rush
//!   spawn_competitor
//!   end_day
//!   state | report | history | quit
//!
//! Usage:
//!   bikeshare-runner --seed 12345 [--config game.json]

use anyhow::{Context, Result};
use bikeshare_core::{
    command::{CommandOutcome, GameCommand},
    config::GameConfig,
    engine::GameEngine,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => {
            let raw = std::fs::read_to_string(&w[1])
                .with_context(|| format!("reading config file {}", w[1]))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing config file {}", w[1]))?
        }
        None => GameConfig::default(),
    };

    let mut engine = GameEngine::new(config, seed)?;

    println!("bikeshare-runner — seed {seed}");
    println!("{}", serde_json::to_string(&engine.snapshot())?);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();
    let mut handle = stdin.lock();

    loop {
        buffer.clear();
        if handle.read_line(&mut buffer)? == 0 {
            break; // EOF
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" => break,
            "state" => writeln!(stdout, "{}", serde_json::to_string(&engine.snapshot())?)?,
            "report" => match engine.daily_report() {
                Some(report) => writeln!(stdout, "{}", serde_json::to_string(report)?)?,
                None => writeln!(stdout, r#"{{"error":"no day has been played yet"}}"#)?,
            },
            "history" => {
                let series = if engine.round_history().is_empty() {
                    engine.last_round_history()
                } else {
                    engine.round_history()
                };
                writeln!(stdout, "{}", serde_json::to_string(series)?)?;
            }
            _ => {
                let reply = GameCommand::from_line(line)
                    .map_err(Into::into)
                    .and_then(|cmd| engine.apply(&cmd));
                match reply {
                    Ok(outcome) => {
                        writeln!(stdout, "{}", serde_json::to_string(&outcome)?)?;
                        if let CommandOutcome::DayCompleted { report } = outcome {
                            writeln!(stdout, "rating: {}", report.rating.text())?;
                        }
                    }
                    Err(e) => {
                        log::warn!("rejected '{line}': {e}");
                        writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                    }
                }
            }
        }
        stdout.flush()?;

        if engine.is_game_over() {
            print_summary(&engine);
            break;
        }
    }

    Ok(())
}

fn print_summary(engine: &GameEngine) {
    let snapshot = engine.snapshot();
    println!("=== SESSION SUMMARY ===");
    println!("  total income:   {:.0}", snapshot.total_income);
    println!("  fleet:          {}", snapshot.current_bikes);
    println!("  satisfaction:   {:.0}", snapshot.user_satisfaction);
    if let Some(report) = engine.daily_report() {
        println!("  final rating:   {} ({})", report.rating, report.rating.text());
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
