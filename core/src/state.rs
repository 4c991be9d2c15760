//! The mutable session state.
//!
//! RULE: exactly one `GameState` exists per session, owned by the
//! `GameEngine`. Everything outside the engine sees it through the
//! read-only `StateSnapshot`. Fields are plain data — all rules live
//! in `demand`, `day`, `rating` and `round`.

use crate::config::GameConfig;
use crate::types::{Day, Rating, Round, TimeSlot, Weather};

/// Policy strength range. 2.0 is neutral: below suppresses rentals,
/// above encourages them.
pub const POLICY_MIN: f64 = 0.0;
pub const POLICY_MAX: f64 = 4.0;

/// Satisfaction below this level starts to depress demand.
pub const SATISFACTION_THRESHOLD: f64 = 40.0;

/// Rental-rate multiplier once a competitor has entered the market.
pub const COMPETITOR_FACTOR: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct GameState {
    pub city_population:    u32,
    pub current_bikes:      u32,
    /// Mutable by the round carryover only.
    pub maintenance_cost:   f64,
    pub rent_price:         f64,
    /// Mutable by the round carryover only.
    pub damage_rate:        f64,
    pub policy_effect:      f64,
    pub user_satisfaction:  f64,
    pub weather:            Weather,
    pub time_slot:          TimeSlot,
    /// One-way transition: false -> true, never back.
    pub competitor_present: bool,
    pub total_income:       f64,
    pub day:                Day,
    pub round:              Round,
    /// Final-day rating of the previously completed round. Assigned at
    /// the round boundary, read by the next boundary's carryover.
    pub last_round_rating:  Option<Rating>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            city_population:    config.city_population,
            current_bikes:      config.initial_bikes,
            maintenance_cost:   config.maintenance_cost,
            rent_price:         config.rent_price,
            damage_rate:        config.damage_rate,
            policy_effect:      config.policy_effect,
            user_satisfaction:  config.satisfaction,
            weather:            config.weather,
            time_slot:          config.time_slot,
            competitor_present: false,
            total_income:       0.0,
            day:                1,
            round:              1,
            last_round_rating:  None,
        }
    }
}
