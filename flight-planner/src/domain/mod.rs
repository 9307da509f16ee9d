//! Domain types for the flight itinerary planner.
//!
//! This module contains the core domain model types. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod airport;
mod connection;
mod error;
mod flight;
mod flight_no;
mod itinerary;

pub use airport::{AirportCode, InvalidAirportCode};
pub use connection::{
    ConnectionWindow, MAX_CONNECTION_MINS, MIN_CONNECTION_MINS, is_valid_connection,
};
pub use error::DomainError;
pub use flight::Flight;
pub use flight_no::{FlightNo, InvalidFlightNo};
pub use itinerary::{Itinerary, RoundTrip};
