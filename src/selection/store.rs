//! Selection store
//!
//! Tracks which seats are selected, in the order they were chosen, and
//! notifies listeners after every change. An optional limit caps how many
//! seats can be selected at once.
//!
//! The store does not know the chart. Callers decide whether a seat may be
//! toggled at all (only available seats of an enabled chart should reach
//! [`SelectionStore::toggle`]).

use super::reducer::{SelectionAction, reduce};
use crate::chart::{Seat, SeatKind, SeatStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Record of a selected seat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSeat {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: SeatKind,
    pub price: f64,
    /// Status at the time of selection
    pub status: SeatStatus,
}

impl From<&Seat> for SelectedSeat {
    fn from(seat: &Seat) -> Self {
        Self {
            label: seat.label.clone(),
            kind: seat.kind,
            price: seat.price,
            status: seat.status,
        }
    }
}

/// Listener for selection changes, called with the full ordered selection
pub type SelectionChangeFn = Box<dyn FnMut(&[SelectedSeat])>;

/// Listener for rejected selections, called with the configured limit
pub type MaxSeatsReachedFn = Box<dyn FnMut(usize)>;

/// Store configuration
#[derive(Default)]
pub struct SelectionOptions {
    on_selection_change: Option<SelectionChangeFn>,
    max_selectable_seats: Option<usize>,
    on_max_seats_reached: Option<MaxSeatsReachedFn>,
}

impl SelectionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_selection_change(mut self, f: impl FnMut(&[SelectedSeat]) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(f));
        self
    }

    /// Cap the selection size; `None` means unlimited
    #[must_use]
    pub fn max_selectable_seats(mut self, max: Option<usize>) -> Self {
        self.max_selectable_seats = max;
        self
    }

    #[must_use]
    pub fn on_max_seats_reached(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_max_seats_reached = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for SelectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionOptions")
            .field("on_selection_change", &self.on_selection_change.is_some())
            .field("max_selectable_seats", &self.max_selectable_seats)
            .field("on_max_seats_reached", &self.on_max_seats_reached.is_some())
            .finish()
    }
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Selection was full; nothing changed
    LimitReached,
}

/// Owns the selection for one chart session
#[derive(Debug, Default)]
pub struct SelectionStore {
    selection: Vec<SelectedSeat>,
    labels: HashSet<String>,
    options: SelectionOptions,
}

impl SelectionStore {
    #[must_use]
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            selection: Vec::new(),
            labels: HashSet::new(),
            options,
        }
    }

    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Selected seats in selection order
    #[must_use]
    pub fn selection(&self) -> &[SelectedSeat] {
        &self.selection
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    #[must_use]
    pub const fn max_selectable_seats(&self) -> Option<usize> {
        self.options.max_selectable_seats
    }

    /// Sum of the prices of the selected seats
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.selection.iter().map(|seat| seat.price).sum()
    }

    /// Change the limit; applies from the next toggle, current selection is kept
    pub fn set_max_selectable_seats(&mut self, max: Option<usize>) {
        self.options.max_selectable_seats = max;
    }

    pub fn set_on_selection_change(&mut self, f: impl FnMut(&[SelectedSeat]) + 'static) {
        self.options.on_selection_change = Some(Box::new(f));
    }

    pub fn set_on_max_seats_reached(&mut self, f: impl FnMut(usize) + 'static) {
        self.options.on_max_seats_reached = Some(Box::new(f));
    }

    /// Select the seat if it is not selected, deselect it otherwise
    ///
    /// Listeners run after the selection has been updated.
    pub fn toggle(&mut self, seat: &Seat) -> ToggleOutcome {
        if self.is_selected(&seat.label) {
            self.dispatch(SelectionAction::Deselect(seat.label.clone()));
            return ToggleOutcome::Deselected;
        }

        if let Some(max) = self.options.max_selectable_seats
            && self.selection.len() >= max
        {
            if let Some(on_max) = self.options.on_max_seats_reached.as_mut() {
                on_max(max);
            }
            return ToggleOutcome::LimitReached;
        }

        self.dispatch(SelectionAction::Select(SelectedSeat::from(seat)));
        ToggleOutcome::Selected
    }

    fn dispatch(&mut self, action: SelectionAction) {
        self.selection = reduce(&self.selection, &action);
        match action {
            SelectionAction::Select(seat) => {
                self.labels.insert(seat.label);
            }
            SelectionAction::Deselect(label) => {
                self.labels.remove(&label);
            }
        }

        if let Some(on_change) = self.options.on_selection_change.as_mut() {
            on_change(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seat(label: &str) -> Seat {
        Seat::new(SeatKind::Seat, label, 100.0, SeatStatus::Available)
    }

    fn labels_of(seats: &[SelectedSeat]) -> Vec<String> {
        seats.iter().map(|s| s.label.clone()).collect()
    }

    /// Store that records every notification
    fn recording_store(
        max: Option<usize>,
    ) -> (SelectionStore, Rc<RefCell<Vec<Vec<String>>>>, Rc<RefCell<Vec<usize>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let rejections = Rc::new(RefCell::new(Vec::new()));
        let changes_sink = Rc::clone(&changes);
        let rejections_sink = Rc::clone(&rejections);

        let store = SelectionStore::new(
            SelectionOptions::new()
                .on_selection_change(move |seats| changes_sink.borrow_mut().push(labels_of(seats)))
                .max_selectable_seats(max)
                .on_max_seats_reached(move |max| rejections_sink.borrow_mut().push(max)),
        );
        (store, changes, rejections)
    }

    #[test]
    fn test_select_and_query() {
        let (mut store, changes, _) = recording_store(None);

        assert_eq!(store.toggle(&seat("1")), ToggleOutcome::Selected);
        assert!(store.is_selected("1"));
        assert!(!store.is_selected("2"));
        assert_eq!(*changes.borrow(), vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_toggle_pair_restores_state() {
        let (mut store, changes, _) = recording_store(None);
        store.toggle(&seat("A"));

        store.toggle(&seat("B"));
        assert_eq!(store.toggle(&seat("B")), ToggleOutcome::Deselected);

        assert_eq!(labels_of(store.selection()), vec!["A"]);
        assert!(!store.is_selected("B"));
        assert_eq!(changes.borrow().last().unwrap(), &vec!["A".to_string()]);
    }

    #[test]
    fn test_deselect_keeps_insertion_order() {
        let (mut store, changes, _) = recording_store(None);
        for label in ["3", "1", "2"] {
            store.toggle(&seat(label));
        }
        store.toggle(&seat("1"));

        assert_eq!(labels_of(store.selection()), vec!["3", "2"]);
        assert_eq!(changes.borrow().len(), 4);
    }

    #[test]
    fn test_max_limit_rejects_extra_seat() {
        let (mut store, changes, rejections) = recording_store(Some(2));

        store.toggle(&seat("A"));
        store.toggle(&seat("B"));
        assert_eq!(store.toggle(&seat("C")), ToggleOutcome::LimitReached);

        assert_eq!(labels_of(store.selection()), vec!["A", "B"]);
        assert_eq!(*rejections.borrow(), vec![2]);
        assert_eq!(changes.borrow().len(), 2);
        assert!(!store.is_selected("C"));
    }

    #[test]
    fn test_deselect_allowed_at_limit() {
        let (mut store, _, rejections) = recording_store(Some(1));
        store.toggle(&seat("A"));

        assert_eq!(store.toggle(&seat("A")), ToggleOutcome::Deselected);
        assert_eq!(store.toggle(&seat("B")), ToggleOutcome::Selected);
        assert!(rejections.borrow().is_empty());
    }

    #[test]
    fn test_zero_limit_rejects_everything() {
        let (mut store, _, rejections) = recording_store(Some(0));
        assert_eq!(store.toggle(&seat("A")), ToggleOutcome::LimitReached);
        assert!(store.is_empty());
        assert_eq!(*rejections.borrow(), vec![0]);
    }

    #[test]
    fn test_store_without_listeners() {
        let mut store = SelectionStore::default();
        store.toggle(&seat("1"));
        store.toggle(&seat("2"));
        assert_eq!(store.len(), 2);
        assert!((store.total_price() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_limit_change_applies_to_next_toggle() {
        let (mut store, _, rejections) = recording_store(None);
        store.toggle(&seat("A"));
        store.toggle(&seat("B"));

        store.set_max_selectable_seats(Some(2));
        assert_eq!(store.toggle(&seat("C")), ToggleOutcome::LimitReached);
        assert_eq!(*rejections.borrow(), vec![2]);
        assert_eq!(store.max_selectable_seats(), Some(2));
    }

    #[test]
    fn test_replaced_listener_receives_later_changes() {
        let (mut store, first, _) = recording_store(None);
        let second = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&second);
        store.set_on_selection_change(move |_| *sink.borrow_mut() += 1);

        store.toggle(&seat("A"));
        assert!(first.borrow().is_empty());
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn test_record_keeps_status_at_selection_time() {
        let mut store = SelectionStore::default();
        let blocked = Seat::new(SeatKind::Berth, "U1", 250.0, SeatStatus::Blocked);
        store.toggle(&blocked);

        let record = &store.selection()[0];
        assert_eq!(record.kind, SeatKind::Berth);
        assert_eq!(record.status, SeatStatus::Blocked);
    }

    #[test]
    fn test_labels_never_duplicate() {
        let (mut store, changes, _) = recording_store(None);
        for label in ["1", "2", "1", "1", "2", "3"] {
            store.toggle(&seat(label));
        }
        for change in changes.borrow().iter() {
            let unique: HashSet<&String> = change.iter().collect();
            assert_eq!(unique.len(), change.len());
        }
        assert_eq!(labels_of(store.selection()), vec!["1", "3"]);
    }
}
