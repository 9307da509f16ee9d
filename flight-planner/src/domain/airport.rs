//! IATA airport codes, as found in the `origin` and `destination` columns
//! of a flight catalog.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirportCode {
    reason: &'static str,
}

/// Where a flight leaves from or lands.
///
/// The search keys its visited set on these, one per leg, so the code lives
/// inline in three bytes and copies freely. Parsing is strict: catalogs and
/// the command line both go through [`AirportCode::parse`], and `wiw` or
/// ` WIW` name no airport.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let origin: AirportCode = "WIW".parse().unwrap();
/// let destination = AirportCode::parse("ECV").unwrap();
/// assert_ne!(origin, destination);
/// assert_eq!(destination.to_string(), "ECV");
///
/// assert!(AirportCode::parse("wiw").is_err());
/// assert!(AirportCode::parse("EC").is_err());
/// assert!(AirportCode::parse("ECVX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    /// Accepts exactly three letters `A` to `Z`.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirportCode {
                reason: "expected three letters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(InvalidAirportCode {
                reason: "only A-Z allowed",
            });
        }

        Ok(AirportCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.as_str())
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(AirportCode::parse("WIW").is_ok());
        assert!(AirportCode::parse("RFZ").is_ok());
        assert!(AirportCode::parse("AAA").is_ok());
        assert!(AirportCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(AirportCode::parse("wiw").is_err());
        assert!(AirportCode::parse("Wiw").is_err());
        assert!(AirportCode::parse("WIw").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(AirportCode::parse("").is_err());
        assert!(AirportCode::parse("W").is_err());
        assert!(AirportCode::parse("WI").is_err());
        assert!(AirportCode::parse("WIWW").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(AirportCode::parse("W1W").is_err());
        assert!(AirportCode::parse("W-W").is_err());
        assert!(AirportCode::parse("W W").is_err());
        assert!(AirportCode::parse("WÖ").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let code: AirportCode = "ECV".parse().unwrap();
        assert_eq!(code, AirportCode::parse("ECV").unwrap());
        assert!("ecv".parse::<AirportCode>().is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = AirportCode::parse("DHE").unwrap();
        assert_eq!(format!("{}", code), "DHE");
        assert_eq!(format!("{:?}", code), "AirportCode(DHE)");
    }

    #[test]
    fn error_message() {
        let err = AirportCode::parse("ab").unwrap_err();
        assert_eq!(err.to_string(), "invalid airport code: expected three letters");

        let err = AirportCode::parse("ab1").unwrap_err();
        assert_eq!(err.to_string(), "invalid airport code: only A-Z allowed");
    }
}
