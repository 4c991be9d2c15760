//! The player-facing command surface.
//!
//! Any front end (desktop, terminal, web) drives the engine through
//! these commands. Variants are serde-tagged so a JSON transport works
//! unchanged; `from_line` covers whitespace-word transports like the
//! bundled runner.

use crate::day::DayOutcome;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum GameCommand {
    AddBikes { count: i64 },
    SetPolicy { strength: f64 },
    SetWeather { weather: String },
    SetTimeSlot { slot: String },
    SpawnCompetitor,
    EndDay,
}

impl GameCommand {
    /// Parse a whitespace-separated command line, e.g. `add_bikes 500`
    /// or `set_weather sunny`. Argument values are validated by the
    /// engine; this layer only rejects malformed shapes, including
    /// non-integer bike counts.
    pub fn from_line(line: &str) -> Result<Self, ValidationError> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or("");
        let arg = words.next().unwrap_or("");

        match head {
            "add_bikes" => {
                let count: i64 = arg
                    .parse()
                    .map_err(|_| ValidationError::NonIntegerBikeCount(arg.to_string()))?;
                Ok(Self::AddBikes { count })
            }
            "set_policy" => {
                let strength: f64 = arg
                    .parse()
                    .map_err(|_| ValidationError::PolicyOutOfRange(f64::NAN))?;
                Ok(Self::SetPolicy { strength })
            }
            "set_weather" => Ok(Self::SetWeather {
                weather: arg.to_string(),
            }),
            "set_time_slot" => Ok(Self::SetTimeSlot {
                slot: arg.to_string(),
            }),
            "spawn_competitor" => Ok(Self::SpawnCompetitor),
            "end_day" => Ok(Self::EndDay),
            other => Err(ValidationError::UnknownCommand(other.to_string())),
        }
    }
}

/// What applying a command did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// State was mutated as requested.
    Applied,
    /// Valid command, nothing to do (competitor already present).
    NoOp,
    /// An `end_day` transition completed.
    DayCompleted { report: DayOutcome },
}
