//! Round-boundary carryover.
//!
//! Runs once per boundary, after the round's final day is finalized and
//! before the next round's first day: record the final-day rating, then
//! adjust difficulty from it. An excellent round earns cheaper
//! maintenance; a poor round raises the damage rate, capped at 10%.

use crate::state::GameState;
use crate::types::{Day, Rating, Round};

pub const DAYS_PER_ROUND: Day = 3;
pub const MAX_ROUNDS: Round = 3;

const MAINTENANCE_RELIEF: f64 = 0.9;
const DAMAGE_PENALTY: f64 = 0.02;
const DAMAGE_RATE_CAP: f64 = 0.1;

/// Apply the carryover for a just-completed round whose final day was
/// rated `final_rating`, preparing the state for the next round.
pub fn begin_round(state: &mut GameState, final_rating: Rating) {
    state.last_round_rating = Some(final_rating);

    match final_rating {
        Rating::Excellent => {
            state.maintenance_cost = (state.maintenance_cost * MAINTENANCE_RELIEF).floor();
            log::info!(
                "round={} carryover: excellent finish, maintenance cost lowered to {:.0}",
                state.round,
                state.maintenance_cost
            );
        }
        Rating::Poor => {
            state.damage_rate = (state.damage_rate + DAMAGE_PENALTY).min(DAMAGE_RATE_CAP);
            log::info!(
                "round={} carryover: poor finish, damage rate raised to {:.2}",
                state.round,
                state.damage_rate
            );
        }
        Rating::Good | Rating::Pass => {
            log::debug!("round={} carryover: no adjustment", state.round);
        }
    }
}
