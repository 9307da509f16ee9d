//! Serializable views of search results.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::domain::{Flight, Itinerary, RoundTrip};

/// A flight in an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightResult {
    pub flight_no: String,
    pub origin: String,
    pub destination: String,

    /// ISO-8601 local departure time
    pub departure: String,

    /// ISO-8601 local arrival time
    pub arrival: String,

    pub base_price: f64,
    pub bag_price: f64,
    pub bags_allowed: u32,
}

/// A priced itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryResult {
    pub flights: Vec<FlightResult>,
    pub origin: String,
    pub destination: String,

    /// Smallest bag allowance over all flights
    pub bags_allowed: u32,

    /// Number of bags the itinerary is priced for
    pub bags_count: u32,

    pub total_price: f64,

    /// Time from first departure to last arrival, e.g. "1 day, 2:30:00"
    pub travel_time: String,
}

/// An outbound itinerary with its return.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTripResult {
    pub outbound: ItineraryResult,
    pub inbound: ItineraryResult,
    pub total_price: f64,

    /// Combined travel time of both directions
    pub travel_time: String,
}

// Conversion implementations

impl FlightResult {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        Self {
            flight_no: flight.flight_no().to_string(),
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
            departure: format_timestamp(&flight.departure()),
            arrival: format_timestamp(&flight.arrival()),
            base_price: flight.base_price(),
            bag_price: flight.bag_price(),
            bags_allowed: flight.bags_allowed(),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            flights: itinerary
                .flights()
                .iter()
                .map(FlightResult::from_flight)
                .collect(),
            origin: itinerary.origin().to_string(),
            destination: itinerary.destination().to_string(),
            bags_allowed: itinerary.bags_allowed(),
            bags_count: itinerary.bags_count(),
            total_price: itinerary.total_price(),
            travel_time: format_duration(&itinerary.travel_time()),
        }
    }
}

impl RoundTripResult {
    /// Create from a domain RoundTrip.
    pub fn from_round_trip(trip: &RoundTrip) -> Self {
        Self {
            outbound: ItineraryResult::from_itinerary(trip.outbound()),
            inbound: ItineraryResult::from_itinerary(trip.inbound()),
            total_price: trip.total_price(),
            travel_time: format_duration(&trip.travel_time()),
        }
    }
}

/// Format a timestamp as "YYYY-MM-DDTHH:MM:SS".
fn format_timestamp(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Format a duration as "H:MM:SS", prefixed by whole days when there are any.
fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{days} day, {clock}"),
        _ => format!("{days} days, {clock}"),
    }
}
