//! bikeshare-core — the simulation engine for the bike-sharing
//! operations game.
//!
//! RULES:
//!   - One `GameState` per session, owned exclusively by the `GameEngine`.
//!     Collaborators see it only through read-only snapshots.
//!   - All randomness flows through the injectable `DemandNoise` source.
//!   - Configuration commands validate first and mutate second; a rejected
//!     command never leaves partial state behind.
//!   - The engine produces structured data only. Rendering, charting and
//!     report presentation live outside this crate.

pub mod command;
pub mod config;
pub mod day;
pub mod demand;
pub mod engine;
pub mod error;
pub mod rating;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod state;
pub mod types;
