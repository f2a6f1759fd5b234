// src/filters/location.rs
//! Location filter: keep calls touching a rectangular search area.

use std::collections::HashSet;

use tracing::debug;

use crate::error::FilterParseError;
use crate::models::{Call, Customer};

use super::CallFilter;

/// Map bounding box: longitude range of the covered service area
const MAP_MIN_LONG: f64 = -79.697878;
const MAP_MAX_LONG: f64 = -79.196382;
/// Map bounding box: latitude range of the covered service area
const MAP_MIN_LAT: f64 = 43.576959;
const MAP_MAX_LAT: f64 = 43.799568;

/// Keeps calls whose source or destination lies in a search rectangle
///
/// The argument is four comma-space separated floats: lower longitude,
/// lower latitude, upper longitude, upper latitude. Every coordinate
/// must lie within the map bounding box and the rectangle must be
/// non-degenerate. Boundary hits count as matches.
pub struct LocationFilter;

#[derive(Debug, PartialEq)]
struct SearchArea {
    lower_long: f64,
    lower_lat: f64,
    upper_long: f64,
    upper_lat: f64,
}

impl SearchArea {
    fn contains(&self, (long, lat): (f64, f64)) -> bool {
        self.lower_long <= long
            && long <= self.upper_long
            && self.lower_lat <= lat
            && lat <= self.upper_lat
    }
}

fn parse(filter_string: &str) -> Result<SearchArea, FilterParseError> {
    let malformed = || FilterParseError::MalformedCoordinates(filter_string.to_string());

    let parts: Vec<&str> = filter_string.split(", ").collect();
    if parts.len() != 4 {
        return Err(malformed());
    }

    let mut coords = [0f64; 4];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part.trim().parse::<f64>().map_err(|_| malformed())?;
    }
    let [lower_long, lower_lat, upper_long, upper_lat] = coords;

    for long in [lower_long, upper_long] {
        if !(MAP_MIN_LONG..=MAP_MAX_LONG).contains(&long) {
            return Err(FilterParseError::OutOfBounds(long));
        }
    }
    for lat in [lower_lat, upper_lat] {
        if !(MAP_MIN_LAT..=MAP_MAX_LAT).contains(&lat) {
            return Err(FilterParseError::OutOfBounds(lat));
        }
    }
    if upper_long <= lower_long || upper_lat <= lower_lat {
        return Err(FilterParseError::DegenerateRectangle);
    }

    Ok(SearchArea {
        lower_long,
        lower_lat,
        upper_long,
        upper_lat,
    })
}

impl CallFilter for LocationFilter {
    fn apply(&self, _customers: &[Customer], calls: &[Call], filter_string: &str) -> Vec<Call> {
        let area = match parse(filter_string) {
            Ok(area) => area,
            Err(e) => {
                debug!(error = %e, "location filter input rejected, passing data through");
                return calls.to_vec();
            }
        };

        let mut seen = HashSet::new();
        calls
            .iter()
            .filter(|call| {
                (area.contains(call.src_loc) || area.contains(call.dst_loc))
                    && seen.insert(call.id)
            })
            .cloned()
            .collect()
    }

    fn description(&self) -> &'static str {
        "Filter calls made or received in a given rectangular area. \
         Format: \"lowerLong, lowerLat, upperLong, upperLat\" \
         (e.g., -79.6, 43.6, -79.3, 43.7)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn call_at(src_loc: (f64, f64), dst_loc: (f64, f64)) -> Call {
        Call::new("a", "b", Utc::now(), 30, src_loc, dst_loc)
    }

    const OUTSIDE: (f64, f64) = (-79.65, 43.78);

    #[test]
    fn test_parse_valid_rectangle() {
        let area = parse("-79.6, 43.6, -79.3, 43.7").unwrap();
        assert_eq!(area.lower_long, -79.6);
        assert_eq!(area.upper_lat, 43.7);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        // wrong arity
        assert!(parse("-79.6, 43.6, -79.3").is_err());
        // not a float
        assert!(parse("-79.6, north, -79.3, 43.7").is_err());
        // outside the map
        assert!(parse("-81.0, 43.6, -79.3, 43.7").is_err());
        assert!(parse("-79.6, 43.0, -79.3, 43.7").is_err());
        // degenerate
        assert_eq!(
            parse("-79.6, 43.6, -79.6, 43.7"),
            Err(FilterParseError::DegenerateRectangle)
        );
        assert_eq!(
            parse("-79.6, 43.7, -79.3, 43.6"),
            Err(FilterParseError::DegenerateRectangle)
        );
    }

    #[test]
    fn test_matches_source_or_destination() {
        let inside = (-79.45, 43.65);
        let calls = vec![
            call_at(inside, OUTSIDE),
            call_at(OUTSIDE, inside),
            call_at(OUTSIDE, OUTSIDE),
        ];
        let result = LocationFilter.apply(&[], &calls, "-79.6, 43.6, -79.3, 43.7");
        assert_eq!(result, vec![calls[0].clone(), calls[1].clone()]);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let corner = (-79.6, 43.6);
        let calls = vec![call_at(corner, OUTSIDE)];
        let result = LocationFilter.apply(&[], &calls, "-79.6, 43.6, -79.3, 43.7");
        assert_eq!(result, calls);
    }

    #[test]
    fn test_degenerate_rectangle_is_a_noop() {
        let calls = vec![call_at(OUTSIDE, OUTSIDE)];
        let result = LocationFilter.apply(&[], &calls, "-79.6, 43.6, -79.6, 43.6");
        assert_eq!(result, calls);
    }
}
