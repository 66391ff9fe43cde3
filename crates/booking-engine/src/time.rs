//! Wall-clock time-of-day values at minute resolution.
//!
//! All instants in the booking domain are naive local wall-clock values — the
//! calendar day is a [`chrono::NaiveDate`] and the time component is a
//! [`TimeOfDay`], a validated count of minutes since midnight. There is no
//! timezone anywhere in this crate: the embedding booking form and the
//! renderer agree on local time, and the engine only compares and orders.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute resolution, guaranteed to be in `0..1440`
/// minutes from midnight.
///
/// Ordering is minute ordering, so comparing two values compares the
/// wall-clock times directly. Serializes as its canonical `"HH:MM"` label.
///
/// # Examples
///
/// ```
/// use booking_engine::TimeOfDay;
///
/// let t: TimeOfDay = "14:30".parse().unwrap();
/// assert_eq!(t.minutes(), 14 * 60 + 30);
/// assert_eq!(t.to_string(), "14:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the first label of the day.
    pub const MIDNIGHT: Self = Self(0);

    /// Create from minutes since midnight. `None` if out of range.
    pub const fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    /// Create from an hour and minute. `None` if either is out of range.
    pub const fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    /// Parse an `"HH:MM"` label (24-hour clock).
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidTimeLabel`] if the string is not a
    /// valid `HH:MM` time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| BookingError::InvalidTimeLabel(s.to_string()))?;
        Self::from_hm(t.hour() as u16, t.minute() as u16)
            .ok_or_else(|| BookingError::InvalidTimeLabel(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
