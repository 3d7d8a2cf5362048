//! Seat selection state
//!
//! [`SelectionStore`] owns the ordered selection for one chart session and
//! applies every change through the pure [`reducer`].

pub mod reducer;
pub mod store;

pub use reducer::{SelectionAction, reduce};
pub use store::{
    MaxSeatsReachedFn, SelectedSeat, SelectionChangeFn, SelectionOptions, SelectionStore,
    ToggleOutcome,
};
