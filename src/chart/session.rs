//! Chart session
//!
//! Ties a parsed chart to one selection store and to keyboard navigation,
//! enforcing the rule that only interactive seats can be toggled.

use super::definition::ChartDefinition;
use super::error::ChartError;
use super::layers::{ParsedLayer, SeatMaps, parse_layers};
use super::layout::{CellPlacement, GridGeometry};
use super::legend::{LegendItem, describe_seat};
use super::types::{Seat, SeatTypes};
use crate::navigation::{Direction, GeometryProvider, Rect, compute_next_focus};
use crate::selection::{SelectedSeat, SelectionOptions, SelectionStore, ToggleOutcome};
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ChartError>;

/// A parsed chart and its selection
#[derive(Debug)]
pub struct ChartSession {
    layers: Vec<ParsedLayer>,
    next_index: usize,
    geometry: GridGeometry,
    store: SelectionStore,
    legends: Vec<LegendItem>,
    disabled: bool,
}

impl ChartSession {
    #[must_use]
    pub fn new(
        seat_maps: &SeatMaps,
        seat_types: &SeatTypes,
        booked: &HashSet<String>,
        blocked: &HashSet<String>,
        options: SelectionOptions,
    ) -> Self {
        let (layers, next_index) = parse_layers(seat_maps, seat_types, booked, blocked);
        let geometry = GridGeometry::compute(&layers);
        Self {
            layers,
            next_index,
            geometry,
            store: SelectionStore::new(options),
            legends: Vec::new(),
            disabled: false,
        }
    }

    /// Build a session from a definition file's contents
    ///
    /// A limit in the definition replaces the one in `options`.
    ///
    /// # Errors
    ///
    /// Returns `ChartError` if the definition has no rows or an invalid seat type key.
    pub fn from_definition(definition: &ChartDefinition, options: SelectionOptions) -> Result<Self> {
        let mut session = Self::new(
            &definition.seat_maps()?,
            &definition.seat_types()?,
            &definition.booked_labels(),
            &definition.blocked_labels(),
            options,
        );
        if definition.max_selectable_seats.is_some() {
            session.store.set_max_selectable_seats(definition.max_selectable_seats);
        }
        session.disabled = definition.disabled;
        session.legends.clone_from(&definition.legends);
        Ok(session)
    }

    #[must_use]
    pub fn layers(&self) -> &[ParsedLayer] {
        &self.layers
    }

    #[must_use]
    pub fn is_multi_layer(&self) -> bool {
        self.layers.len() > 1
    }

    /// Counter value after the last layer
    #[must_use]
    pub const fn next_index(&self) -> usize {
        self.next_index
    }

    #[must_use]
    pub fn legends(&self) -> &[LegendItem] {
        &self.legends
    }

    #[must_use]
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub const fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SelectionStore {
        &mut self.store
    }

    #[must_use]
    pub fn selection(&self) -> &[SelectedSeat] {
        self.store.selection()
    }

    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.store.is_selected(label)
    }

    /// All seats in reading order
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.layers
            .iter()
            .flat_map(|layer| layer.seat_map.iter().flatten())
            .filter_map(|cell| cell.as_seat())
    }

    /// First seat with this label
    #[must_use]
    pub fn find_seat(&self, label: &str) -> Option<&Seat> {
        self.seats().find(|seat| seat.label == label)
    }

    /// Toggle a seat by label, refusing seats that are not interactive
    ///
    /// Returns `Ok(None)` when the seat exists but is booked, blocked, or the
    /// chart is disabled.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::UnknownLabel` if no seat has this label.
    pub fn activate(&mut self, label: &str) -> Result<Option<ToggleOutcome>> {
        let seat = self
            .find_seat(label)
            .cloned()
            .ok_or_else(|| ChartError::UnknownLabel(label.to_string()))?;

        if !seat.is_interactive(self.disabled) {
            return Ok(None);
        }
        Ok(Some(self.store.toggle(&seat)))
    }

    /// Screen-reader description of a seat
    #[must_use]
    pub fn describe(&self, label: &str) -> Option<String> {
        self.find_seat(label)
            .map(|seat| describe_seat(seat, self.is_selected(label)))
    }

    /// Interactive seats with their placement, in reading order
    fn interactive(&self) -> impl Iterator<Item = (&Seat, &CellPlacement)> {
        self.geometry.placements().iter().filter_map(|placement| {
            let seat = self.layers[placement.layer].seat_map[placement.row][placement.col].as_seat()?;
            seat.is_interactive(self.disabled).then_some((seat, placement))
        })
    }

    /// Labels that can receive keyboard focus, in reading order
    #[must_use]
    pub fn interactive_labels(&self) -> Vec<&str> {
        self.interactive().map(|(seat, _)| seat.label.as_str()).collect()
    }

    /// Label to focus after an arrow-key move from `label`
    ///
    /// `None` means focus stays put, including when `label` is not interactive.
    #[must_use]
    pub fn move_focus(&self, label: &str, direction: Direction) -> Option<&str> {
        let cells: Vec<(&Seat, &CellPlacement)> = self.interactive().collect();
        let current = cells.iter().position(|(seat, _)| seat.label == label)?;
        let rects: Vec<Rect> = cells.iter().map(|(_, placement)| placement.rect).collect();

        compute_next_focus(&rects, current, direction).map(|next| cells[next].0.label.as_str())
    }
}

impl GeometryProvider for ChartSession {
    fn interactive_rects(&self) -> Vec<Rect> {
        self.interactive().map(|(_, placement)| placement.rect).collect()
    }
}
