//! Range endpoints supplied by the booking form.
//!
//! Two kinds of constraint exist: absolute cutoffs (a calendar day, optionally
//! sharpened to a time of day) and the recurring daily window (a pure
//! time-of-day pair with no date component). [`BookingWindow`] bundles the
//! four optional constraints the form hands to each picker instance.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::time::TimeOfDay;

/// An absolute lower or upper cutoff for selectable instants.
///
/// With `time` unset the cutoff binds at day granularity only: every slot on
/// the cutoff day itself stays in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsoluteBound {
    /// The cutoff day.
    pub day: NaiveDate,
    /// Time-of-day refinement on the cutoff day itself.
    pub time: Option<TimeOfDay>,
}

impl AbsoluteBound {
    /// A day-granularity cutoff.
    pub const fn from_day(day: NaiveDate) -> Self {
        Self { day, time: None }
    }

    /// A cutoff at a specific time on a specific day.
    pub const fn at(day: NaiveDate, time: TimeOfDay) -> Self {
        Self {
            day,
            time: Some(time),
        }
    }
}

impl fmt::Display for AbsoluteBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            Some(time) => write!(f, "{}T{}", self.day.format("%Y-%m-%d"), time),
            None => write!(f, "{}", self.day.format("%Y-%m-%d")),
        }
    }
}

impl FromStr for AbsoluteBound {
    type Err = BookingError;

    /// Parse a `"YYYY-MM-DD"` or `"YYYY-MM-DDTHH:MM"` label.
    ///
    /// Form inputs arrive as strings; both shapes appear depending on whether
    /// the form sharpened the cutoff to a time.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidDateLabel`] if the string is neither
    /// shape.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((day_part, time_part)) = s.split_once('T') {
            let day = NaiveDate::parse_from_str(day_part, "%Y-%m-%d")
                .map_err(|_| BookingError::InvalidDateLabel(s.to_string()))?;
            let time = time_part
                .parse::<TimeOfDay>()
                .map_err(|_| BookingError::InvalidDateLabel(s.to_string()))?;
            Ok(Self::at(day, time))
        } else {
            let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| BookingError::InvalidDateLabel(s.to_string()))?;
            Ok(Self::from_day(day))
        }
    }
}

/// The four optional constraints a picker instance resolves against.
///
/// `min_date`/`max_date` are absolute cutoffs; `min_time`/`max_time` are the
/// recurring daily window, applied to every day regardless of date. All four
/// default to unset, which constrains nothing.
///
/// A window where a minimum lies after the corresponding maximum is accepted
/// as-is; resolution degrades to an all-unavailable grid rather than
/// reporting an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// Earliest selectable instant.
    pub min_date: Option<AbsoluteBound>,
    /// Latest selectable instant.
    pub max_date: Option<AbsoluteBound>,
    /// Earliest selectable time on any day.
    pub min_time: Option<TimeOfDay>,
    /// Latest selectable time on any day.
    pub max_time: Option<TimeOfDay>,
}

// ── Tests ───────────────────────────────────────────────────────────────────
