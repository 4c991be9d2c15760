//! The demand model — a pure function from state to a day's rentals.
//!
//! rental_rate = base * weather * time_slot * satisfaction * competitor
//! where base = min(fleet_share * 0.6, 0.6) * policy_effect.
//! The final count gets one uniform jitter draw from the noise source.

use crate::rng::DemandNoise;
use crate::state::{GameState, COMPETITOR_FACTOR, SATISFACTION_THRESHOLD};

/// Cap on the fleet-driven share of the population that rents per day,
/// before the policy multiplier.
const BASE_RATE_CAP: f64 = 0.6;

/// Compute the day's rental count. Total over all valid states: every
/// factor is non-negative, so the result is always a non-negative integer.
pub fn daily_rentals(state: &GameState, noise: &mut dyn DemandNoise) -> u32 {
    let fleet_share = f64::from(state.current_bikes) / f64::from(state.city_population);
    let base_rate = (fleet_share * BASE_RATE_CAP).min(BASE_RATE_CAP) * state.policy_effect;

    let weather_factor = state.weather.demand_factor();
    let time_factor = state.time_slot.demand_factor();
    let satisfaction_factor = satisfaction_factor(state.user_satisfaction);
    let competitor_factor = if state.competitor_present {
        COMPETITOR_FACTOR
    } else {
        1.0
    };

    let rental_rate =
        base_rate * weather_factor * time_factor * satisfaction_factor * competitor_factor;
    let jitter = noise.demand_factor();

    log::debug!(
        "demand: base={base_rate:.4} weather={weather_factor} time={time_factor} \
         satisfaction={satisfaction_factor:.2} competitor={competitor_factor} jitter={jitter:.3}"
    );

    (f64::from(state.city_population) * rental_rate * jitter).floor() as u32
}

/// 1.0 at or above the satisfaction threshold, falling linearly below it.
fn satisfaction_factor(satisfaction: f64) -> f64 {
    1.0 - (SATISFACTION_THRESHOLD - satisfaction).max(0.0) / 100.0
}
