//! Read-only views served to the presentation collaborator.

use crate::state::GameState;
use crate::types::{Day, Rating, Round, TimeSlot, Weather};
use serde::{Deserialize, Serialize};

/// A copy of every `GameState` field, for display. Never hands out a
/// reference into the live state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub city_population:    u32,
    pub current_bikes:      u32,
    pub maintenance_cost:   f64,
    pub rent_price:         f64,
    pub damage_rate:        f64,
    pub policy_effect:      f64,
    pub user_satisfaction:  f64,
    pub weather:            Weather,
    pub time_slot:          TimeSlot,
    pub competitor_present: bool,
    pub total_income:       f64,
    pub day:                Day,
    pub round:              Round,
    pub last_round_rating:  Option<Rating>,
}

impl From<&GameState> for StateSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            city_population:    state.city_population,
            current_bikes:      state.current_bikes,
            maintenance_cost:   state.maintenance_cost,
            rent_price:         state.rent_price,
            damage_rate:        state.damage_rate,
            policy_effect:      state.policy_effect,
            user_satisfaction:  state.user_satisfaction,
            weather:            state.weather,
            time_slot:          state.time_slot,
            competitor_present: state.competitor_present,
            total_income:       state.total_income,
            day:                state.day,
            round:              state.round,
            last_round_rating:  state.last_round_rating,
        }
    }
}

/// The most recent day's outcome, tagged with the round/day it belongs
/// to (captured before the counters advanced).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub round:           Round,
    pub day:             Day,
    pub rentals:         u32,
    pub daily_income:    f64,
    pub daily_profit:    f64,
    pub bikes_lost:      u32,
    pub bikes_remaining: u32,
    pub satisfaction:    f64,
    pub rating:          Rating,
}

/// One day's point in the round history series, consumed for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub day:          Day,
    pub profit:       f64,
    pub satisfaction: f64,
}
