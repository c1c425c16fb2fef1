//! Manual coordinate override parsing.
//!
//! Hosts expose a text field as a GPS fallback; this parser turns its
//! content into a validated coordinate. Rejected input changes nothing on
//! the caller's side: an error comes back and the previous reference stays
//! in effect.

use crate::core::types::GeoCoordinate;
use crate::validation::error::{GeoError, GeoResult};

/// Parse a manual override of the form `"lat, lon"` or `"lat lon [alt]"`.
///
/// Accepts commas or whitespace between fields and an optional third
/// altitude value. Every field must be a finite float and the resulting
/// coordinate must pass range validation.
pub fn parse_override(input: &str) -> GeoResult<GeoCoordinate> {
    let fields: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    if fields.len() < 2 || fields.len() > 3 {
        return Err(GeoError::ParseError {
            input: input.to_string(),
            reason: format!("expected 2 or 3 values, found {}", fields.len()),
        });
    }

    let latitude = parse_field(input, fields[0], "latitude")?;
    let longitude = parse_field(input, fields[1], "longitude")?;
    let altitude = match fields.get(2) {
        Some(raw) => parse_field(input, raw, "altitude")?,
        None => 0.0,
    };

    GeoCoordinate::with_altitude(latitude, longitude, altitude)
}

fn parse_field(input: &str, raw: &str, name: &str) -> GeoResult<f64> {
    let value: f64 = raw.parse().map_err(|_| GeoError::ParseError {
        input: input.to_string(),
        reason: format!("{} '{}' is not a number", name, raw),
    })?;
    if !value.is_finite() {
        return Err(GeoError::ParseError {
            input: input.to_string(),
            reason: format!("{} '{}' is not finite", name, raw),
        });
    }
    Ok(value)
}
