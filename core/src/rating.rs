//! Performance classification.
//!
//! Thresholds compare the cumulative total income, not the single day's
//! profit — sustained performance is what earns the higher tiers.
//! First match wins, most favorable tier checked first.

use crate::types::Rating;

pub fn classify(total_income: f64, satisfaction: f64) -> Rating {
    if total_income > 5000.0 && satisfaction > 80.0 {
        Rating::Excellent
    } else if total_income > 2000.0 && satisfaction > 60.0 {
        Rating::Good
    } else if total_income > 0.0 && satisfaction > 40.0 {
        Rating::Pass
    } else {
        Rating::Poor
    }
}
