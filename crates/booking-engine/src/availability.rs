//! Availability resolution over the slot grid.
//!
//! Given a candidate calendar day and a [`BookingWindow`], classify every
//! grid slot as available or unavailable. All functions here are pure: no
//! hidden state, no clock access, identical inputs give identical outputs.
//!
//! # Design Principle
//!
//! Rejection is monotonic. Each slot is checked against the constraints in a
//! fixed order and the first rejection is final — later constraints can add
//! rejections but never lift one. A misconfigured window (a minimum after a
//! maximum) therefore degrades to an all-unavailable grid instead of an
//! error; the caller sees an empty day, not a crash.
//!
//! # Functions
//!
//! - [`resolve_availability`] — Classify all 48 grid slots for a candidate day
//! - [`is_slot_available`] — The single-slot predicate the resolver maps
//! - [`is_day_selectable`] — Day-granularity eligibility for calendar cells

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::bound::BookingWindow;
use crate::grid::slot_grid;
use crate::time::TimeOfDay;

/// One entry of the slot grid, tagged with availability for a candidate day.
///
/// Derived, never stored: recomputed whenever the candidate day or any
/// constraint changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// The grid label.
    pub time: TimeOfDay,
    /// Whether this slot survives every constraint of the window.
    pub available: bool,
}

/// Whether a single time slot is selectable on a candidate day.
///
/// # Arguments
///
/// * `candidate_day` — The day under consideration, or `None` while no day
///   has been chosen yet
/// * `slot` — The time-of-day to test
/// * `window` — The constraints in force for this picker instance
///
/// # Returns
///
/// `true` if the slot survives every applicable constraint. With no candidate
/// day the answer is always `true`: the picker shows the full grid as a
/// preview until a day is chosen.
///
/// Constraint order: recurring lower bound, recurring upper bound, absolute
/// lower bound, absolute upper bound. A day strictly outside an absolute
/// bound rejects every slot here independently of [`is_day_selectable`] — no
/// slot leaks through even if the caller forgot to filter the day.
pub fn is_slot_available(
    candidate_day: Option<NaiveDate>,
    slot: TimeOfDay,
    window: &BookingWindow,
) -> bool {
    let Some(day) = candidate_day else {
        return true;
    };

    if let Some(open) = window.min_time {
        if slot < open {
            return false;
        }
    }
    if let Some(close) = window.max_time {
        if slot > close {
            return false;
        }
    }

    if let Some(earliest) = window.min_date {
        match day.cmp(&earliest.day) {
            Ordering::Less => return false,
            Ordering::Equal => {
                if let Some(cutoff) = earliest.time {
                    if slot < cutoff {
                        return false;
                    }
                }
            }
            Ordering::Greater => {}
        }
    }
    if let Some(latest) = window.max_date {
        match day.cmp(&latest.day) {
            Ordering::Greater => return false,
            Ordering::Equal => {
                if let Some(cutoff) = latest.time {
                    if slot > cutoff {
                        return false;
                    }
                }
            }
            Ordering::Less => {}
        }
    }

    true
}

/// Classify every grid slot for a candidate day.
///
/// # Arguments
///
/// * `candidate_day` — The day under consideration, or `None` while no day
///   has been chosen yet
/// * `window` — The constraints in force for this picker instance
///
/// # Returns
///
/// Exactly 48 [`Slot`]s in canonical grid order. Availability is a pure
/// function of the two inputs.
pub fn resolve_availability(
    candidate_day: Option<NaiveDate>,
    window: &BookingWindow,
) -> Vec<Slot> {
    slot_grid()
        .into_iter()
        .map(|time| Slot {
            time,
            available: is_slot_available(candidate_day, time, window),
        })
        .collect()
}

/// Whether a calendar day is selectable at all.
///
/// Rejects days strictly before `min_date`'s day or strictly after
/// `max_date`'s day; the time components and the recurring daily window play
/// no part at day granularity. Used to disable calendar cells, and agrees
/// with [`resolve_availability`]: every day rejected here resolves to an
/// all-unavailable grid.
pub fn is_day_selectable(day: NaiveDate, window: &BookingWindow) -> bool {
    if let Some(earliest) = window.min_date {
        if day < earliest.day {
            return false;
        }
    }
    if let Some(latest) = window.max_date {
        if day > latest.day {
            return false;
        }
    }
    true
}

// ── Tests ───────────────────────────────────────────────────────────────────
