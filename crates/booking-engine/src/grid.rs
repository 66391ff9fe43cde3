//! The fixed 30-minute slot grid every day shares.
//!
//! The grid is the iteration domain for availability resolution: 48 labels
//! from 00:00 through 23:30. Days never vary their grid; only availability
//! varies.

use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// Width of one slot in minutes.
pub const SLOT_INTERVAL_MINUTES: u16 = 30;

/// Number of slots in a day.
pub const SLOTS_PER_DAY: usize = (MINUTES_PER_DAY / SLOT_INTERVAL_MINUTES) as usize;

/// The canonical slot grid: 48 ascending labels, 00:00 through 23:30.
///
/// Pure and deterministic; every call returns the same sequence.
pub fn slot_grid() -> Vec<TimeOfDay> {
    (0..SLOTS_PER_DAY as u16)
        .filter_map(|i| TimeOfDay::from_minutes(i * SLOT_INTERVAL_MINUTES))
        .collect()
}

/// Whether a time lies on the slot grid.
///
/// Times off the grid can never correspond to a selectable slot.
pub fn is_grid_slot(time: TimeOfDay) -> bool {
    time.minutes() % SLOT_INTERVAL_MINUTES == 0
}

// ── Tests ───────────────────────────────────────────────────────────────────
