//! The end-of-day state transition.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Demand model draws the day's rentals.
//!   2. Income and profit computed; profit folded into total income.
//!   3. Fleet attrition: floor(bikes * damage_rate) bikes lost.
//!   4. Satisfaction adjusted against the post-loss fleet.
//!   5. Rating classified from cumulative income + current satisfaction.
//!
//! All inputs to a step are read before that step mutates anything.
//! Day/round advancement and history bookkeeping belong to the engine.

use crate::demand;
use crate::rating;
use crate::rng::DemandNoise;
use crate::state::GameState;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// Everything that happened in one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOutcome {
    pub rentals:            u32,
    pub daily_income:       f64,
    pub daily_profit:       f64,
    pub bikes_lost:         u32,
    pub satisfaction_after: f64,
    pub rating:             Rating,
}

/// Apply one day to the state and report what happened.
pub fn process_day(state: &mut GameState, noise: &mut dyn DemandNoise) -> DayOutcome {
    let rentals = demand::daily_rentals(state, noise);

    let daily_income = f64::from(rentals) * state.rent_price;
    let daily_profit = daily_income - state.maintenance_cost;
    state.total_income += daily_profit;

    let bikes_lost = (f64::from(state.current_bikes) * state.damage_rate).floor() as u32;
    state.current_bikes = state.current_bikes.saturating_sub(bikes_lost);

    // Demand pressure moves satisfaction: a day that rented out most of
    // the remaining fleet delights users, a dead day sours them.
    let fleet = f64::from(state.current_bikes);
    if f64::from(rentals) > 0.8 * fleet {
        state.user_satisfaction = (state.user_satisfaction + 10.0).min(100.0);
    } else if f64::from(rentals) < 0.2 * fleet {
        state.user_satisfaction = (state.user_satisfaction - 15.0).max(0.0);
    }

    let rating = rating::classify(state.total_income, state.user_satisfaction);

    DayOutcome {
        rentals,
        daily_income,
        daily_profit,
        bikes_lost,
        satisfaction_after: state.user_satisfaction,
        rating,
    }
}
