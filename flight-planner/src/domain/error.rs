//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from catalog parsing errors and search errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Invalid flight construction (e.g., arrival before departure)
    #[error("invalid flight: {0}")]
    InvalidFlight(&'static str),

    /// Consecutive flights don't share an airport
    #[error("flight into {0} does not connect to flight out of {1}")]
    FlightsNotConnected(AirportCode, AirportCode),

    /// Consecutive flights share an airport but the layover is out of bounds
    #[error("layover at {0} is outside the connection window")]
    LayoverOutOfWindow(AirportCode),

    /// Itinerary has no flights
    #[error("itinerary must have at least one flight")]
    EmptyItinerary,
}
