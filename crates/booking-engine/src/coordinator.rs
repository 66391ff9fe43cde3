//! Coordination of the dependent pickup/drop-off pair.
//!
//! The drop-off picker must never select an instant before the pickup's. The
//! source of that constraint is a one-directional data dependency: the
//! coordinator owns both selections and derives the drop-off's effective
//! window from the pickup's current value on demand — the drop-off never
//! reaches into the pickup's state, and nothing is cached or eagerly
//! recomputed.
//!
//! Moving the pickup later does **not** clear an already-made drop-off
//! selection, even one the new bound invalidates; the next resolve simply
//! marks that slot unavailable. [`RangeCoordinator::dropoff_invalidated`]
//! reports the stale state so the embedding UI can apply its own policy.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::availability::{resolve_availability, Slot};
use crate::bound::{AbsoluteBound, BookingWindow};
use crate::selection::Selection;
use crate::time::TimeOfDay;

/// The lower cutoff a downstream picker inherits from an upstream selection.
///
/// `None` while the upstream has no day; a day-granularity bound while the
/// upstream has a day but no time; a full cutoff once the upstream is
/// complete.
pub fn derive_downstream_bound(upstream: &Selection) -> Option<AbsoluteBound> {
    upstream.date().map(|day| AbsoluteBound {
        day,
        time: upstream.time(),
    })
}

/// Owner of the (pickup, drop-off) dependent pair.
///
/// Holds the form-level [`BookingWindow`] both pickers start from. The pickup
/// resolves against that window verbatim; the drop-off resolves against the
/// same window with its `min_date` replaced by the bound derived from the
/// pickup, once the pickup has a day. The pickup is itself constrained to the
/// form window, so the derived bound only ever tightens it.
#[derive(Debug, Clone, Default)]
pub struct RangeCoordinator {
    window: BookingWindow,
    pickup: Selection,
    dropoff: Selection,
}

impl RangeCoordinator {
    /// Create a coordinator over the form's constraint window.
    pub fn new(window: BookingWindow) -> Self {
        Self {
            window,
            pickup: Selection::new(),
            dropoff: Selection::new(),
        }
    }

    /// The pickup selection.
    pub fn pickup(&self) -> &Selection {
        &self.pickup
    }

    /// The drop-off selection.
    pub fn dropoff(&self) -> &Selection {
        &self.dropoff
    }

    /// The window the pickup picker resolves against: the form window.
    pub fn pickup_window(&self) -> BookingWindow {
        self.window.clone()
    }

    /// The window the drop-off picker resolves against: the form window with
    /// `min_date` tightened to the pickup's current selection.
    pub fn dropoff_window(&self) -> BookingWindow {
        let mut window = self.window.clone();
        if let Some(bound) = derive_downstream_bound(&self.pickup) {
            window.min_date = Some(bound);
        }
        window
    }

    /// Availability of every grid slot on the pickup's selected day.
    pub fn pickup_slots(&self) -> Vec<Slot> {
        resolve_availability(self.pickup.date(), &self.pickup_window())
    }

    /// Availability of every grid slot on the drop-off's selected day.
    pub fn dropoff_slots(&self) -> Vec<Slot> {
        resolve_availability(self.dropoff.date(), &self.dropoff_window())
    }

    /// Select the pickup day, clearing the pickup time.
    pub fn select_pickup_day(&mut self, day: NaiveDate) {
        self.pickup.select_day(day);
    }

    /// Select the pickup time. `false` if the slot is not selectable.
    pub fn select_pickup_time(&mut self, time: TimeOfDay) -> bool {
        let window = self.pickup_window();
        self.pickup.select_time(time, &window)
    }

    /// Select the drop-off day, clearing the drop-off time.
    pub fn select_dropoff_day(&mut self, day: NaiveDate) {
        self.dropoff.select_day(day);
    }

    /// Select the drop-off time. `false` if the slot is not selectable under
    /// the drop-off's derived window.
    pub fn select_dropoff_time(&mut self, time: TimeOfDay) -> bool {
        let window = self.dropoff_window();
        self.dropoff.select_time(time, &window)
    }

    /// Whether the stored drop-off selection now precedes the bound derived
    /// from the pickup.
    ///
    /// This happens when the pickup moves later after the drop-off was made.
    /// The coordinator keeps the stale value (the next resolve shows that
    /// slot as unavailable); the embedding UI decides whether to surface or
    /// discard it.
    pub fn dropoff_invalidated(&self) -> bool {
        let Some(bound) = derive_downstream_bound(&self.pickup) else {
            return false;
        };
        let Some(day) = self.dropoff.date() else {
            return false;
        };
        match day.cmp(&bound.day) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match (self.dropoff.time(), bound.time) {
                (Some(chosen), Some(cutoff)) => chosen < cutoff,
                _ => false,
            },
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(label: &str) -> TimeOfDay {
        label.parse().unwrap()
    }

    fn availability_of(slots: &[Slot], label: &str) -> bool {
        let target = time(label);
        slots
            .iter()
            .find(|s| s.time == target)
            .map(|s| s.available)
            .unwrap_or_else(|| panic!("{label} is not a grid slot"))
    }

    #[test]
    fn test_derived_bound_tracks_upstream_state() {
        let mut pickup = Selection::new();
        assert_eq!(derive_downstream_bound(&pickup), None);

        pickup.select_day(date(2026, 1, 10));
        assert_eq!(
            derive_downstream_bound(&pickup),
            Some(AbsoluteBound::from_day(date(2026, 1, 10)))
        );

        assert!(pickup.select_time(time("14:00"), &BookingWindow::default()));
        assert_eq!(
            derive_downstream_bound(&pickup),
            Some(AbsoluteBound::at(date(2026, 1, 10), time("14:00")))
        );
    }

    #[test]
    fn test_dropoff_ordering_on_shared_day() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("14:00")));

        coordinator.select_dropoff_day(date(2026, 1, 10));
        let slots = coordinator.dropoff_slots();
        assert!(!availability_of(&slots, "13:30"));
        assert!(availability_of(&slots, "14:00"));
        assert!(availability_of(&slots, "14:30"));
    }

    #[test]
    fn test_dropoff_day_after_pickup_is_unrestricted() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("14:00")));

        coordinator.select_dropoff_day(date(2026, 1, 11));
        assert!(coordinator.dropoff_slots().iter().all(|s| s.available));
    }

    #[test]
    fn test_dropoff_cannot_select_before_pickup() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("14:00")));

        coordinator.select_dropoff_day(date(2026, 1, 10));
        assert!(!coordinator.select_dropoff_time(time("13:30")));
        assert!(coordinator.select_dropoff_time(time("14:00")));
    }

    #[test]
    fn test_form_window_flows_through_to_dropoff() {
        let mut coordinator = RangeCoordinator::new(BookingWindow {
            min_time: Some(time("09:00")),
            max_time: Some(time("18:00")),
            ..Default::default()
        });
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("10:00")));

        coordinator.select_dropoff_day(date(2026, 1, 12));
        let slots = coordinator.dropoff_slots();
        assert!(!availability_of(&slots, "08:00"));
        assert!(availability_of(&slots, "10:00"));
        assert!(!availability_of(&slots, "18:30"));
    }

    #[test]
    fn test_dropoff_keeps_form_min_date_until_pickup_has_a_day() {
        let form_min = AbsoluteBound::at(date(2026, 1, 5), time("10:00"));
        let coordinator = RangeCoordinator::new(BookingWindow {
            min_date: Some(form_min),
            ..Default::default()
        });
        assert_eq!(coordinator.dropoff_window().min_date, Some(form_min));
    }

    #[test]
    fn test_day_only_pickup_bounds_dropoff_at_day_granularity() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));

        // Pickup has no time yet: the drop-off's bound is the whole day.
        coordinator.select_dropoff_day(date(2026, 1, 10));
        assert!(coordinator.dropoff_slots().iter().all(|s| s.available));

        coordinator.select_dropoff_day(date(2026, 1, 9));
        assert!(coordinator.dropoff_slots().iter().all(|s| !s.available));
    }

    #[test]
    fn test_later_pickup_preserves_stale_dropoff() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("10:00")));

        coordinator.select_dropoff_day(date(2026, 1, 10));
        assert!(coordinator.select_dropoff_time(time("12:00")));
        assert!(!coordinator.dropoff_invalidated());

        // Pickup moves past the drop-off. The stored selection stays, the
        // resolver marks its slot unavailable, and the stale state is
        // reported.
        assert!(coordinator.select_pickup_time(time("15:00")));
        assert_eq!(coordinator.dropoff().time(), Some(time("12:00")));
        assert!(!availability_of(&coordinator.dropoff_slots(), "12:00"));
        assert!(coordinator.dropoff_invalidated());
    }

    #[test]
    fn test_pickup_day_change_invalidates_earlier_dropoff_day() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        coordinator.select_dropoff_day(date(2026, 1, 12));
        assert!(coordinator.select_dropoff_time(time("09:00")));

        coordinator.select_pickup_day(date(2026, 1, 15));
        assert!(coordinator.dropoff_invalidated());
        assert!(coordinator.dropoff_slots().iter().all(|s| !s.available));
    }

    #[test]
    fn test_incomplete_dropoff_on_bound_day_is_not_stale() {
        let mut coordinator = RangeCoordinator::default();
        coordinator.select_pickup_day(date(2026, 1, 10));
        assert!(coordinator.select_pickup_time(time("14:00")));

        // Same day, no time chosen yet: later slots are still open.
        coordinator.select_dropoff_day(date(2026, 1, 10));
        assert!(!coordinator.dropoff_invalidated());
    }
}
