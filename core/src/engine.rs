//! The game engine — owns the session state and the command API.
//!
//! RULES:
//!   - Configuration commands validate first; a rejected command never
//!     partially applies.
//!   - `end_day` is the only state-machine transition. It is synchronous
//!     and takes `&mut self`, so a second call cannot overlap the first.
//!   - Once `round > MAX_ROUNDS` the session is terminal and every
//!     command returns `GameError::SessionOver`.
//!   - Collaborators read state only through `snapshot()` and the other
//!     query methods; none of them can mutate the session.

use crate::command::{CommandOutcome, GameCommand};
use crate::config::GameConfig;
use crate::day::{self, DayOutcome};
use crate::error::{GameError, GameResult, ValidationError};
use crate::rng::{DemandNoise, SeededNoise};
use crate::round::{self, DAYS_PER_ROUND, MAX_ROUNDS};
use crate::snapshot::{DailyReport, HistoryPoint, StateSnapshot};
use crate::state::{GameState, POLICY_MAX, POLICY_MIN};

pub struct GameEngine {
    state:              GameState,
    noise:              Box<dyn DemandNoise>,
    /// (profit, satisfaction) per day of the round in progress.
    round_history:      Vec<HistoryPoint>,
    /// The previous round's full series, stashed at the boundary for
    /// the charting collaborator.
    last_round_history: Vec<HistoryPoint>,
    last_report:        Option<DailyReport>,
}

impl GameEngine {
    /// Build an engine with the production noise source.
    pub fn new(config: GameConfig, seed: u64) -> GameResult<Self> {
        Self::with_noise(config, Box::new(SeededNoise::new(seed)))
    }

    /// Build an engine with a caller-supplied noise source. Tests use
    /// this with `FixedNoise` to remove the demand jitter.
    pub fn with_noise(config: GameConfig, noise: Box<dyn DemandNoise>) -> GameResult<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(&config),
            noise,
            round_history: Vec::new(),
            last_round_history: Vec::new(),
            last_report: None,
        })
    }

    // ── Configuration commands ─────────────────────────────────

    /// Add `count` bikes to the fleet.
    pub fn add_bikes(&mut self, count: i64) -> GameResult<()> {
        self.ensure_active()?;
        if count < 0 {
            log::warn!("rejected add_bikes: {count}");
            return Err(ValidationError::NegativeBikeCount(count).into());
        }
        let delivered = u32::try_from(count).unwrap_or(u32::MAX);
        self.state.current_bikes = self.state.current_bikes.saturating_add(delivered);
        log::info!(
            "round={} day={} fleet grown by {count} to {}",
            self.state.round,
            self.state.day,
            self.state.current_bikes
        );
        Ok(())
    }

    /// Set the cycling-incentive policy strength, [0, 4], 2 neutral.
    pub fn set_policy(&mut self, strength: f64) -> GameResult<()> {
        self.ensure_active()?;
        if !strength.is_finite() || !(POLICY_MIN..=POLICY_MAX).contains(&strength) {
            log::warn!("rejected set_policy: {strength}");
            return Err(ValidationError::PolicyOutOfRange(strength).into());
        }
        self.state.policy_effect = strength;
        Ok(())
    }

    /// Set the day's weather from its label (case-insensitive).
    pub fn set_weather(&mut self, label: &str) -> GameResult<()> {
        self.ensure_active()?;
        self.state.weather = label.parse()?;
        Ok(())
    }

    /// Set the day's time slot from its label (case-insensitive).
    pub fn set_time_slot(&mut self, label: &str) -> GameResult<()> {
        self.ensure_active()?;
        self.state.time_slot = label.parse()?;
        Ok(())
    }

    /// Let a competitor enter the market. Idempotent: once present the
    /// competitor stays for the session and repeat calls are no-ops.
    pub fn spawn_competitor(&mut self) -> GameResult<CommandOutcome> {
        self.ensure_active()?;
        if self.state.competitor_present {
            log::debug!("spawn_competitor: already present, no-op");
            return Ok(CommandOutcome::NoOp);
        }
        self.state.competitor_present = true;
        log::info!(
            "round={} day={} competitor entered the market",
            self.state.round,
            self.state.day
        );
        Ok(CommandOutcome::Applied)
    }

    // ── The day transition ─────────────────────────────────────

    /// Advance one day: run the demand model, settle income, attrition
    /// and satisfaction, rate the day, then move the day/round counters
    /// (applying the round carryover at boundaries).
    pub fn end_day(&mut self) -> GameResult<DayOutcome> {
        self.ensure_active()?;

        let round = self.state.round;
        let day = self.state.day;

        let outcome = day::process_day(&mut self.state, self.noise.as_mut());

        self.round_history.push(HistoryPoint {
            day,
            profit: outcome.daily_profit,
            satisfaction: outcome.satisfaction_after,
        });
        self.last_report = Some(DailyReport {
            round,
            day,
            rentals: outcome.rentals,
            daily_income: outcome.daily_income,
            daily_profit: outcome.daily_profit,
            bikes_lost: outcome.bikes_lost,
            bikes_remaining: self.state.current_bikes,
            satisfaction: outcome.satisfaction_after,
            rating: outcome.rating,
        });

        log::info!(
            "round={round} day={day} rentals={} profit={:.0} satisfaction={:.0} rating={}",
            outcome.rentals,
            outcome.daily_profit,
            outcome.satisfaction_after,
            outcome.rating
        );

        self.state.day += 1;
        if self.state.day > DAYS_PER_ROUND {
            self.state.day = 1;
            self.last_round_history = std::mem::take(&mut self.round_history);
            self.state.round += 1;
            if self.is_game_over() {
                log::info!("round={round} complete, session over");
            } else {
                round::begin_round(&mut self.state, outcome.rating);
            }
        }

        Ok(outcome)
    }

    /// Dispatch a transport-level command to the typed API.
    pub fn apply(&mut self, command: &GameCommand) -> GameResult<CommandOutcome> {
        match command {
            GameCommand::AddBikes { count } => {
                self.add_bikes(*count).map(|()| CommandOutcome::Applied)
            }
            GameCommand::SetPolicy { strength } => {
                self.set_policy(*strength).map(|()| CommandOutcome::Applied)
            }
            GameCommand::SetWeather { weather } => {
                self.set_weather(weather).map(|()| CommandOutcome::Applied)
            }
            GameCommand::SetTimeSlot { slot } => {
                self.set_time_slot(slot).map(|()| CommandOutcome::Applied)
            }
            GameCommand::SpawnCompetitor => self.spawn_competitor(),
            GameCommand::EndDay => self
                .end_day()
                .map(|report| CommandOutcome::DayCompleted { report }),
        }
    }

    // ── Queries ────────────────────────────────────────────────

    /// Read-only copy of every state field, for display.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::from(&self.state)
    }

    /// The most recent day's report, if any day has been played.
    pub fn daily_report(&self) -> Option<&DailyReport> {
        self.last_report.as_ref()
    }

    /// The in-progress round's (profit, satisfaction) series.
    pub fn round_history(&self) -> &[HistoryPoint] {
        &self.round_history
    }

    /// The previously completed round's full series, kept until the
    /// next round boundary so it can be charted after the rollover.
    pub fn last_round_history(&self) -> &[HistoryPoint] {
        &self.last_round_history
    }

    /// True once all rounds have been played. Terminal: no further
    /// commands are accepted.
    pub fn is_game_over(&self) -> bool {
        self.state.round > MAX_ROUNDS
    }

    fn ensure_active(&self) -> GameResult<()> {
        if self.is_game_over() {
            log::warn!("command rejected: session is over");
            return Err(GameError::SessionOver);
        }
        Ok(())
    }
}
