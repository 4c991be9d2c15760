use thiserror::Error;

/// A rejected command argument. Always recoverable: the command is
/// dropped, state is untouched, and the message is surfaced verbatim
/// to the caller for display.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("bike count must be non-negative, got {0}")]
    NegativeBikeCount(i64),

    #[error("bike count must be a whole number, got '{0}'")]
    NonIntegerBikeCount(String),

    #[error("policy strength must be a number between 0 and 4, got {0}")]
    PolicyOutOfRange(f64),

    #[error("unknown weather '{0}' (expected sunny, cloudy or rainy)")]
    UnknownWeather(String),

    #[error("unknown time slot '{0}' (expected morning_rush, daytime, evening_rush or night)")]
    UnknownTimeSlot(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Command issued after the final round completed. The session is
    /// terminal; nothing is accepted anymore.
    #[error("session is over: all rounds are complete")]
    SessionOver,
}

pub type GameResult<T> = Result<T, GameError>;
