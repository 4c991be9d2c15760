//! Shared enums used across the entire simulation.
//!
//! Labels are stable snake_case strings — the runner, snapshots and
//! command parsing all round-trip through them. Parsing is
//! case-insensitive; serialization always emits the canonical label.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day counter within a round (1..=3).
pub type Day = u8;

/// Round counter within a session (1..=3; 4 means the session is over).
pub type Round = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
}

impl Weather {
    /// Multiplier applied to the daily rental rate.
    pub fn demand_factor(self) -> f64 {
        match self {
            Self::Sunny  => 1.3,
            Self::Cloudy => 1.0,
            Self::Rainy  => 0.6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny  => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy  => "rainy",
        }
    }
}

impl FromStr for Weather {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunny"  => Ok(Self::Sunny),
            "cloudy" => Ok(Self::Cloudy),
            "rainy"  => Ok(Self::Rainy),
            _        => Err(ValidationError::UnknownWeather(s.to_string())),
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    MorningRush,
    Daytime,
    EveningRush,
    Night,
}

impl TimeSlot {
    /// Multiplier applied to the daily rental rate.
    pub fn demand_factor(self) -> f64 {
        match self {
            Self::MorningRush => 1.5,
            Self::Daytime     => 1.0,
            Self::EveningRush => 1.5,
            Self::Night       => 0.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MorningRush => "morning_rush",
            Self::Daytime     => "daytime",
            Self::EveningRush => "evening_rush",
            Self::Night       => "night",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning_rush" => Ok(Self::MorningRush),
            "daytime"      => Ok(Self::Daytime),
            "evening_rush" => Ok(Self::EveningRush),
            "night"        => Ok(Self::Night),
            _              => Err(ValidationError::UnknownTimeSlot(s.to_string())),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative performance classification. Ordered most favorable first —
/// classification in `rating.rs` takes the first matching tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Pass,
    Poor,
}

impl Rating {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good      => "good",
            Self::Pass      => "pass",
            Self::Poor      => "poor",
        }
    }

    /// Human-readable evaluation line for the daily report. The engine
    /// serves this as data; any further prose is a presentation concern.
    pub fn text(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent — an outstanding day of operations.",
            Self::Good      => "Good — solid profit and satisfaction today.",
            Self::Pass      => "Pass — broke even with acceptable satisfaction.",
            Self::Poor      => "Poor — profit and satisfaction both need work.",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
