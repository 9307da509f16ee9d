//! Ranking for search results.
//!
//! Itineraries are ordered cheapest first. Sorting is stable, so itineraries
//! with the same price keep the order in which the search found them.

use std::cmp::Ordering;

use crate::domain::{Itinerary, RoundTrip};

fn by_price(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Rank itineraries by total price, cheapest first.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by(|a, b| by_price(a.total_price(), b.total_price()));
    itineraries
}

/// Rank round trips by combined price, cheapest first.
pub fn rank_round_trips(mut trips: Vec<RoundTrip>) -> Vec<RoundTrip> {
    trips.sort_by(|a, b| by_price(a.total_price(), b.total_price()));
    trips
}
