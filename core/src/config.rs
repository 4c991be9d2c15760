//! Session starting parameters.
//!
//! Defaults reproduce the classic setup: a city of 120 000 people, a
//! fleet of 1000 bikes, $2500/day maintenance, $2 per rental, 5% daily
//! damage, neutral policy, satisfaction 50, a cloudy daytime.

use crate::error::{GameResult, ValidationError};
use crate::state::{POLICY_MAX, POLICY_MIN};
use crate::types::{TimeSlot, Weather};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub city_population:  u32,
    pub initial_bikes:    u32,
    pub maintenance_cost: f64,
    pub rent_price:       f64,
    pub damage_rate:      f64,
    pub policy_effect:    f64,
    pub satisfaction:     f64,
    pub weather:          Weather,
    pub time_slot:        TimeSlot,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            city_population:  120_000,
            initial_bikes:    1000,
            maintenance_cost: 2500.0,
            rent_price:       2.0,
            damage_rate:      0.05,
            policy_effect:    2.0,
            satisfaction:     50.0,
            weather:          Weather::Cloudy,
            time_slot:        TimeSlot::Daytime,
        }
    }
}

impl GameConfig {
    /// Reject configurations the demand model cannot evaluate safely.
    /// `city_population > 0` guards the fleet-share division.
    pub fn validate(&self) -> GameResult<()> {
        if self.city_population == 0 {
            return Err(ValidationError::InvalidConfig(
                "city_population must be positive".into(),
            )
            .into());
        }
        if !self.maintenance_cost.is_finite() || self.maintenance_cost < 0.0 {
            return Err(ValidationError::InvalidConfig(
                "maintenance_cost must be non-negative".into(),
            )
            .into());
        }
        if !self.rent_price.is_finite() || self.rent_price < 0.0 {
            return Err(
                ValidationError::InvalidConfig("rent_price must be non-negative".into()).into(),
            );
        }
        if !(0.0..=1.0).contains(&self.damage_rate) {
            return Err(ValidationError::InvalidConfig(
                "damage_rate must be within [0, 1]".into(),
            )
            .into());
        }
        if !(POLICY_MIN..=POLICY_MAX).contains(&self.policy_effect) {
            return Err(ValidationError::InvalidConfig(
                "policy_effect must be within [0, 4]".into(),
            )
            .into());
        }
        if !(0.0..=100.0).contains(&self.satisfaction) {
            return Err(ValidationError::InvalidConfig(
                "satisfaction must be within [0, 100]".into(),
            )
            .into());
        }
        Ok(())
    }
}
