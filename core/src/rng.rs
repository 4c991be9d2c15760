//! Deterministic randomness for the demand model.
//!
//! RULE: nothing in the simulation may call a platform RNG. The only
//! random draw in the whole game is the daily demand jitter, and it
//! flows through this trait so tests can pin it to a fixed value.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The daily demand jitter source. One draw per simulated day.
pub trait DemandNoise {
    /// A multiplier in [0.8, 1.2) applied to the day's rental count.
    fn demand_factor(&mut self) -> f64;
}

/// Production noise: a PCG stream seeded once per session.
pub struct SeededNoise {
    inner: Pcg64Mcg,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl DemandNoise for SeededNoise {
    fn demand_factor(&mut self) -> f64 {
        0.8 + 0.4 * self.next_f64()
    }
}

/// Test stub: always returns the same factor. `FixedNoise(1.0)` removes
/// the jitter entirely so outcomes are exactly computable.
pub struct FixedNoise(pub f64);

impl DemandNoise for FixedNoise {
    fn demand_factor(&mut self) -> f64 {
        self.0
    }
}
