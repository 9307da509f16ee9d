//! Connection rules between consecutive flights.

use chrono::Duration;

use super::Flight;

/// Shortest layover accepted by default (minutes, exclusive).
pub const MIN_CONNECTION_MINS: i64 = 60;

/// Longest layover accepted by default (minutes, exclusive).
pub const MAX_CONNECTION_MINS: i64 = 360;

/// The permitted gap between one flight's arrival and the next one's
/// departure.
///
/// Both bounds are exclusive: a layover of exactly `min` or exactly `max`
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionWindow {
    min: Duration,
    max: Duration,
}

impl ConnectionWindow {
    /// Create a window from its exclusive bounds.
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Returns true if `second` can be taken after landing on `first`.
    ///
    /// `second` must leave from the airport `first` lands at, and the layover
    /// must fall strictly inside the window. A zero or negative layover never
    /// qualifies as long as `min` is positive.
    pub fn allows(&self, first: &Flight, second: &Flight) -> bool {
        if first.destination() != second.origin() {
            return false;
        }
        let layover = second.departure().signed_duration_since(first.arrival());
        self.min < layover && layover < self.max
    }
}

impl Default for ConnectionWindow {
    fn default() -> Self {
        Self::new(
            Duration::minutes(MIN_CONNECTION_MINS),
            Duration::minutes(MAX_CONNECTION_MINS),
        )
    }
}

/// Returns true if `second` is a legal connection from `first` under the
/// default window of more than 1 hour and less than 6 hours.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{is_valid_connection, AirportCode, Flight, FlightNo};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let leg = |no: &str, from: &str, to: &str, dep: &str, arr: &str| {
///     Flight::new(
///         FlightNo::new(no.into()).unwrap(),
///         AirportCode::parse(from).unwrap(),
///         AirportCode::parse(to).unwrap(),
///         at(dep),
///         at(arr),
///         30.0,
///         10.0,
///         2,
///     )
///     .unwrap()
/// };
///
/// let first = leg("X11", "AAA", "BBB", "2022-01-01 10:00", "2022-01-01 12:00");
/// let second = leg("Y22", "BBB", "CCC", "2022-01-01 14:00", "2022-01-01 16:00");
/// assert!(is_valid_connection(&first, &second));
/// assert!(!is_valid_connection(&second, &first));
/// ```
pub fn is_valid_connection(first: &Flight, second: &Flight) -> bool {
    ConnectionWindow::default().allows(first, second)
}
