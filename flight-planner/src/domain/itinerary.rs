//! Itinerary types.
//!
//! An `Itinerary` is a complete, priced chain of one or more flights from
//! origin to destination. A `RoundTrip` pairs an outbound itinerary with an
//! inbound one.

use chrono::{Duration, NaiveDateTime};

use super::{AirportCode, ConnectionWindow, DomainError, Flight};

/// A priced chain of connecting flights.
///
/// Every field besides the flights and the requested bag count is derived
/// at construction and never changes afterwards.
///
/// # Invariants
///
/// - At least one flight
/// - Consecutive flights connect within the connection window
/// - `total_price` is the sum over legs of `base_price + bag_price * bags_count`
/// - `travel_time` runs from the first departure to the last arrival
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    flights: Vec<Flight>,
    bags_allowed: u32,
    bags_count: u32,
    total_price: f64,
    travel_time: Duration,
}

impl Itinerary {
    /// Builds an itinerary under the default connection window.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `flights` is empty
    /// - consecutive flights don't share an airport
    /// - a layover falls outside the window
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_planner::domain::{AirportCode, Flight, FlightNo, Itinerary};
    /// use chrono::NaiveDateTime;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
    /// let flight = Flight::new(
    ///     FlightNo::new("X11".into()).unwrap(),
    ///     AirportCode::parse("AAA").unwrap(),
    ///     AirportCode::parse("BBB").unwrap(),
    ///     at("2022-01-01 10:00"),
    ///     at("2022-01-01 12:00"),
    ///     30.0,
    ///     10.0,
    ///     2,
    /// )
    /// .unwrap();
    ///
    /// let itinerary = Itinerary::new(vec![flight], 1).unwrap();
    /// assert_eq!(itinerary.total_price(), 40.0);
    /// assert_eq!(itinerary.travel_time(), chrono::Duration::hours(2));
    /// ```
    pub fn new(flights: Vec<Flight>, bags_count: u32) -> Result<Self, DomainError> {
        Self::with_window(flights, bags_count, &ConnectionWindow::default())
    }

    /// Builds an itinerary, checking connections against `window`.
    pub fn with_window(
        flights: Vec<Flight>,
        bags_count: u32,
        window: &ConnectionWindow,
    ) -> Result<Self, DomainError> {
        if flights.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for pair in flights.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.destination() != next.origin() {
                return Err(DomainError::FlightsNotConnected(
                    prev.destination(),
                    next.origin(),
                ));
            }
            if !window.allows(prev, next) {
                return Err(DomainError::LayoverOutOfWindow(next.origin()));
            }
        }

        Ok(Self::from_connected(flights, bags_count))
    }

    /// Derives every field from a sequence already known to be connected.
    ///
    /// `flights` must be non-empty, and each consecutive pair must have been
    /// checked against the connection window in use.
    pub(crate) fn from_connected(flights: Vec<Flight>, bags_count: u32) -> Self {
        let bags_allowed = flights
            .iter()
            .map(Flight::bags_allowed)
            .min()
            .unwrap_or(0);
        let total_price = flights.iter().map(|f| f.price_with_bags(bags_count)).sum();
        let travel_time = match (flights.first(), flights.last()) {
            (Some(first), Some(last)) => last.arrival().signed_duration_since(first.departure()),
            _ => Duration::zero(),
        };

        Self {
            flights,
            bags_allowed,
            bags_count,
            total_price,
            travel_time,
        }
    }

    /// Returns a new itinerary extended by `flight`.
    ///
    /// Pricing follows the same per-leg formula as [`Itinerary::new`], so
    /// appending legs one at a time agrees with building in one shot.
    pub fn with_flight(
        &self,
        flight: Flight,
        window: &ConnectionWindow,
    ) -> Result<Self, DomainError> {
        let last = self.last_flight();
        if last.destination() != flight.origin() {
            return Err(DomainError::FlightsNotConnected(
                last.destination(),
                flight.origin(),
            ));
        }
        if !window.allows(last, &flight) {
            return Err(DomainError::LayoverOutOfWindow(flight.origin()));
        }

        let travel_time = self.travel_time + flight.arrival().signed_duration_since(last.arrival());
        let mut flights = self.flights.clone();
        let total_price = self.total_price + flight.price_with_bags(self.bags_count);
        let bags_allowed = self.bags_allowed.min(flight.bags_allowed());
        flights.push(flight);

        Ok(Self {
            flights,
            bags_allowed,
            bags_count: self.bags_count,
            total_price,
            travel_time,
        })
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    fn first_flight(&self) -> &Flight {
        &self.flights[0]
    }

    fn last_flight(&self) -> &Flight {
        &self.flights[self.flights.len() - 1]
    }

    /// Airport the first flight leaves from.
    pub fn origin(&self) -> AirportCode {
        self.first_flight().origin()
    }

    /// Airport the last flight lands at.
    pub fn destination(&self) -> AirportCode {
        self.last_flight().destination()
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.first_flight().departure()
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.last_flight().arrival()
    }

    /// Smallest bag allowance over all legs.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Number of bags the itinerary was priced for.
    pub fn bags_count(&self) -> u32 {
        self.bags_count
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn travel_time(&self) -> Duration {
        self.travel_time
    }
}

/// An outbound itinerary followed by a return itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    outbound: Itinerary,
    inbound: Itinerary,
}

impl RoundTrip {
    /// Pairs two itineraries into a round trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the inbound itinerary doesn't start where the outbound
    /// one ends, doesn't end where it starts, or departs before the outbound
    /// arrival.
    pub fn new(outbound: Itinerary, inbound: Itinerary) -> Result<Self, DomainError> {
        if outbound.destination() != inbound.origin() {
            return Err(DomainError::FlightsNotConnected(
                outbound.destination(),
                inbound.origin(),
            ));
        }
        if inbound.destination() != outbound.origin() {
            return Err(DomainError::FlightsNotConnected(
                inbound.destination(),
                outbound.origin(),
            ));
        }
        if inbound.departure() <= outbound.arrival() {
            return Err(DomainError::InvalidFlight(
                "return must depart after outbound arrival",
            ));
        }
        Ok(Self { outbound, inbound })
    }

    pub fn outbound(&self) -> &Itinerary {
        &self.outbound
    }

    pub fn inbound(&self) -> &Itinerary {
        &self.inbound
    }

    pub fn total_price(&self) -> f64 {
        self.outbound.total_price() + self.inbound.total_price()
    }

    /// Time spent travelling in both directions, excluding the stay.
    pub fn travel_time(&self) -> Duration {
        self.outbound.travel_time() + self.inbound.travel_time()
    }
}
