//! Flight numbers.

use std::fmt;

/// Error returned when parsing an invalid flight number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight number: {reason}")]
pub struct InvalidFlightNo {
    reason: &'static str,
}

/// Identifies a scheduled flight, such as `ZH151`.
///
/// The carrier prefix is not split out: the planner only ever prints a
/// flight number back. Several catalog rows may share one number when a
/// flight operates on several days. A number must be non-empty with no
/// whitespace, so it survives a round trip through the catalog file.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::FlightNo;
///
/// let no = FlightNo::new("ZH151".to_string()).unwrap();
/// assert_eq!(no.as_str(), "ZH151");
///
/// assert!(FlightNo::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightNo(String);

impl FlightNo {
    /// Wraps `s` after checking it is a usable token.
    pub fn new(s: String) -> Result<Self, InvalidFlightNo> {
        if s.is_empty() {
            return Err(InvalidFlightNo {
                reason: "empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidFlightNo {
                reason: "contains whitespace",
            });
        }
        Ok(FlightNo(s))
    }

    /// Returns the flight number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FlightNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightNo({})", self.0)
    }
}

impl fmt::Display for FlightNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        assert!(FlightNo::new("ZH151".to_string()).is_ok());
        assert!(FlightNo::new("X11".to_string()).is_ok());
        assert!(FlightNo::new("1".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(FlightNo::new(String::new()).is_err());
    }

    #[test]
    fn reject_whitespace() {
        assert!(FlightNo::new("ZH 151".to_string()).is_err());
        assert!(FlightNo::new("ZH151\n".to_string()).is_err());
        assert_eq!(
            FlightNo::new("ZH 151".to_string()).unwrap_err().to_string(),
            "invalid flight number: contains whitespace"
        );
    }

    #[test]
    fn display_and_debug() {
        let no = FlightNo::new("Y22".to_string()).unwrap();
        assert_eq!(format!("{}", no), "Y22");
        assert_eq!(format!("{:?}", no), "FlightNo(Y22)");
    }
}
