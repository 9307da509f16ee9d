//! Flight records.
//!
//! A `Flight` is one leg from the catalog: a single scheduled departure
//! between two airports with its fare and baggage terms.

use chrono::NaiveDateTime;

use super::{AirportCode, DomainError, FlightNo};

/// A single flight from the catalog.
///
/// Flights are immutable once constructed. Use [`Flight::new`] to build
/// one; it rejects schedules where the aircraft lands before it departs and
/// prices that are negative or not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    flight_no: FlightNo,
    origin: AirportCode,
    destination: AirportCode,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
}

impl Flight {
    /// Constructs a flight, validating schedule and prices.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - origin and destination are the same airport
    /// - arrival is not strictly after departure
    /// - either price is negative, NaN or infinite
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, Flight, FlightNo};
    /// use chrono::NaiveDateTime;
    ///
    /// let dep = NaiveDateTime::parse_from_str("2021-09-01 10:00", "%Y-%m-%d %H:%M").unwrap();
    /// let arr = NaiveDateTime::parse_from_str("2021-09-01 12:00", "%Y-%m-%d %H:%M").unwrap();
    ///
    /// let flight = Flight::new(
    ///     FlightNo::new("ZH151".into()).unwrap(),
    ///     AirportCode::parse("WIW").unwrap(),
    ///     AirportCode::parse("RFZ").unwrap(),
    ///     dep,
    ///     arr,
    ///     30.0,
    ///     10.0,
    ///     2,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(flight.price_with_bags(1), 40.0);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_no: FlightNo,
        origin: AirportCode,
        destination: AirportCode,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        base_price: f64,
        bag_price: f64,
        bags_allowed: u32,
    ) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::InvalidFlight(
                "origin and destination must differ",
            ));
        }
        if arrival <= departure {
            return Err(DomainError::InvalidFlight(
                "arrival must be after departure",
            ));
        }
        if !is_valid_price(base_price) {
            return Err(DomainError::InvalidFlight(
                "base price must be a non-negative number",
            ));
        }
        if !is_valid_price(bag_price) {
            return Err(DomainError::InvalidFlight(
                "bag price must be a non-negative number",
            ));
        }

        Ok(Self {
            flight_no,
            origin,
            destination,
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }

    pub fn flight_no(&self) -> &FlightNo {
        &self.flight_no
    }

    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    /// Price per checked bag.
    pub fn bag_price(&self) -> f64 {
        self.bag_price
    }

    /// Maximum number of checked bags this flight accepts.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns true if this flight accepts `bag_count` checked bags.
    pub fn accepts_bags(&self, bag_count: u32) -> bool {
        self.bags_allowed >= bag_count
    }

    /// Fare for this leg when travelling with `bag_count` bags.
    pub fn price_with_bags(&self, bag_count: u32) -> f64 {
        self.base_price + self.bag_price * f64::from(bag_count)
    }
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}
