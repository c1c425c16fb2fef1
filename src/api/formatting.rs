//! Display formatting for distances, coordinates and placement updates.
//!
//! The distance and coordinate formatters feed the host's on-screen info
//! panels; the placement formatters serve structured logging.

use crate::api::types::ObjectPlacement;

/// Render a distance for display: integer meters below 1 km, kilometers to
/// one decimal at or above.
///
/// `format_distance(742.0)` is `"742m"`, `format_distance(1234.0)` is
/// `"1.2km"`.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// Render a coordinate pair in signed-hemisphere form, e.g.
/// `"23.978699°S, 46.316639°W"`. South and west show the absolute value
/// with the hemisphere letter.
pub fn format_coordinate(latitude: f64, longitude: f64, precision: usize) -> String {
    let lat = if latitude >= 0.0 {
        format!("{:.*}°N", precision, latitude)
    } else {
        format!("{:.*}°S", precision, latitude.abs())
    };
    let lon = if longitude >= 0.0 {
        format!("{:.*}°E", precision, longitude)
    } else {
        format!("{:.*}°W", precision, longitude.abs())
    };
    format!("{}, {}", lat, lon)
}

/// One-line human-readable summaries of placement updates
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, placement: &ObjectPlacement) -> String {
        let visibility = if placement.visible { "visible" } else { "hidden" };
        format!(
            "{} [{:?}] {} at {:.0}° | offset ({:.1}, {:.1}, {:.1}) | scale {:.2} | {}",
            placement.object_id,
            placement.kind,
            format_distance(placement.distance_m),
            placement.bearing_deg,
            placement.offset.x,
            placement.offset.y,
            placement.offset.z,
            placement.scale,
            visibility,
        )
    }
}

/// JSON serialization of placement updates
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Pretty-print the output
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format(&self, placement: &ObjectPlacement) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(placement)
        } else {
            serde_json::to_string(placement)
        }
    }
}

/// CSV rows for placement logging
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn header(&self) -> String {
        "object_id,kind,x_m,y_m,z_m,distance_m,bearing_deg,scale,visible".to_string()
    }

    pub fn format(&self, placement: &ObjectPlacement) -> String {
        format!(
            "{},{:?},{:.2},{:.2},{:.2},{:.1},{:.1},{:.3},{}",
            placement.object_id,
            placement.kind,
            placement.offset.x,
            placement.offset.y,
            placement.offset.z,
            placement.distance_m,
            placement.bearing_deg,
            placement.scale,
            placement.visible,
        )
    }
}
