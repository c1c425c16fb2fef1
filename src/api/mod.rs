//! Host-facing types and output formatting

pub mod formatting;
pub mod types;

pub use formatting::{format_coordinate, format_distance, CsvFormatter, JsonFormatter, TextFormatter};
pub use types::{ObjectPlacement, PlacementSink, RecordingSink};
