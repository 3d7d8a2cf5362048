//! Pure selection reducer
//!
//! Every mutation of a selection goes through [`reduce`], which never
//! touches its input and returns the next selection.

use super::store::SelectedSeat;

/// A selection mutation
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    /// Append a seat at the end
    Select(SelectedSeat),
    /// Remove the seat with this label, keeping the order of the rest
    Deselect(String),
}

/// Apply an action to a selection
#[must_use]
pub fn reduce(state: &[SelectedSeat], action: &SelectionAction) -> Vec<SelectedSeat> {
    match action {
        SelectionAction::Select(seat) => {
            let mut next = Vec::with_capacity(state.len() + 1);
            next.extend_from_slice(state);
            next.push(seat.clone());
            next
        }
        SelectionAction::Deselect(label) => state
            .iter()
            .filter(|seat| &seat.label != label)
            .cloned()
            .collect(),
    }
}
