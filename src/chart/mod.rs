//! Seat charts: notation parsing, layers, definitions and sessions
//!
//! The notation parser is pure. [`ChartSession`] layers selection and
//! keyboard navigation over a parsed chart.

pub mod definition;
pub mod error;
pub mod layers;
pub mod layout;
pub mod legend;
pub mod parser;
pub mod session;
pub mod types;

pub use definition::{ChartDefinition, LayerDefinition};
pub use error::ChartError;
pub use layers::{ParsedLayer, SeatMaps, parse_layers};
pub use layout::{CellPlacement, GridGeometry};
pub use legend::{DisplayStatus, LegendItem, LegendSample, LegendStatus, describe_layout, describe_seat};
pub use parser::{NotationParser, NotationToken, ParseOutcome, parse_seat_map, tokenize};
pub use session::ChartSession;
pub use types::{
    Cell, CellKind, LayoutCell, LayoutKind, ParsedSeatMap, Seat, SeatKind, SeatStatus,
    SeatTypeConfig, SeatTypes,
};
