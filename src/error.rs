// src/error.rs

use thiserror::Error;

/// Errors that can occur while loading inventory or running a rebalance.
#[derive(Debug, Error)]
pub enum RebalanceError {
    /// The weather lookup failed, so no forecast can be made.
    #[error("Weather unavailable for city: {city}")]
    WeatherUnavailable { city: String },

    /// Stock or capacity input was negative, missing or otherwise malformed.
    #[error("Invalid inventory state: {0}")]
    InvalidInventoryState(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RebalanceError>;
