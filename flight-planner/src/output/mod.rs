//! JSON rendering of search results.

mod dto;

pub use dto::{FlightResult, ItineraryResult, RoundTripResult};

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::domain::{Itinerary, RoundTrip};

/// Render itineraries as a pretty-printed JSON array.
pub fn itineraries_to_json(itineraries: &[Itinerary]) -> serde_json::Result<String> {
    let results: Vec<ItineraryResult> = itineraries
        .iter()
        .map(ItineraryResult::from_itinerary)
        .collect();
    to_json(&results)
}

/// Render round trips as a pretty-printed JSON array.
pub fn round_trips_to_json(trips: &[RoundTrip]) -> serde_json::Result<String> {
    let results: Vec<RoundTripResult> = trips.iter().map(RoundTripResult::from_round_trip).collect();
    to_json(&results)
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Write rendered JSON to `path`, or to stdout when no path is given.
pub fn write_json(json: &str, path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, json)?;
            debug!(path = %path.display(), bytes = json.len(), "Wrote results");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }
    Ok(())
}
