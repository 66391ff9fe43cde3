//! Mutable state of one picker instance.
//!
//! A [`Selection`] moves through three states: empty, day chosen, complete
//! (day and time). The fields are private so the invariant *time set ⇒ day
//! set* cannot be broken from outside: choosing a day always clears the time
//! (a previously valid time may not be valid for the new day, so the user
//! re-selects), and a time can only be set through [`Selection::select_time`],
//! which validates it against the instance's constraints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::availability::is_slot_available;
use crate::bound::BookingWindow;
use crate::grid::is_grid_slot;
use crate::time::TimeOfDay;

/// The day/time state of a single picker (pickup or drop-off).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    date: Option<NaiveDate>,
    time: Option<TimeOfDay>,
}

impl Selection {
    /// An empty selection: no day, no time.
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected day, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The selected time, if any. Implies a day is selected.
    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Whether nothing has been selected yet.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }

    /// Whether both day and time are selected.
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }

    /// The complete (day, time) pair, or `None` while the selection is
    /// partial.
    pub fn instant(&self) -> Option<(NaiveDate, TimeOfDay)> {
        Some((self.date?, self.time?))
    }

    /// Select a day, clearing any previously selected time.
    ///
    /// Unconditional: day-level eligibility is the calendar UI's concern
    /// (ineligible cells are disabled), and the resolver independently
    /// rejects every slot of an out-of-range day.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.date = Some(day);
        self.time = None;
    }

    /// Select a time slot, validating it against `window`.
    ///
    /// # Returns
    ///
    /// `true` if the time was accepted. Returns `false` — with no state
    /// change — when no day is selected yet, when the time is not on the
    /// 30-minute grid, or when the slot is unavailable under `window`. A
    /// refusal is a normal interaction outcome, not an error: the UI should
    /// already have disabled the slot.
    pub fn select_time(&mut self, time: TimeOfDay, window: &BookingWindow) -> bool {
        if self.date.is_none() {
            return false;
        }
        if !is_grid_slot(time) {
            return false;
        }
        if !is_slot_available(self.date, time, window) {
            return false;
        }
        self.time = Some(time);
        true
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
