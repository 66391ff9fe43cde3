//! Error types for booking-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid time label: {0}")]
    InvalidTimeLabel(String),

    #[error("Invalid date label: {0}")]
    InvalidDateLabel(String),
}

pub type Result<T> = std::result::Result<T, BookingError>;
