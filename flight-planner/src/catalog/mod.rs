//! Flight catalog loading.
//!
//! A catalog is a comma-separated file with a header row. The header names
//! the columns, which may appear in any order; unknown columns are ignored.
//! Fields may be quoted.
//!
//! ```text
//! flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
//! ZH151,WIW,RFZ,2021-09-01T07:25:00,2021-09-01T08:20:00,84.0,9,2
//! ```
//!
//! Timestamps are ISO-8601 date-times. One carrying a UTC offset (or `Z`)
//! is converted to UTC; one without is taken as written.

mod error;

pub use error::CatalogError;

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{AirportCode, Flight, FlightNo};

/// Columns every catalog must provide.
const COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

/// Accepted local timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// The same layouts followed by a UTC offset.
const OFFSET_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// One catalog row, matched to the header by column name.
#[derive(Debug, Deserialize)]
struct Row<'r> {
    flight_no: &'r str,
    origin: &'r str,
    destination: &'r str,
    departure: &'r str,
    arrival: &'r str,
    base_price: &'r str,
    bag_price: &'r str,
    bags_allowed: &'r str,
}

/// Load a catalog from a file.
pub fn load_catalog(path: &Path) -> Result<Vec<Flight>, CatalogError> {
    let file = File::open(path)?;
    let flights = parse_catalog(BufReader::new(file))?;
    info!(path = %path.display(), flights = flights.len(), "Loaded flight catalog");
    Ok(flights)
}

/// Parse a catalog from any buffered reader.
///
/// Blank lines are skipped. Parsing stops at the first malformed row.
///
/// # Examples
///
/// ```
/// use flight_planner::catalog::parse_catalog;
///
/// let csv = "\
/// flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed
/// ZH151,WIW,RFZ,2021-09-01T07:25:00,2021-09-01T08:20:00,84.0,9,2
/// ";
///
/// let flights = parse_catalog(csv.as_bytes()).unwrap();
/// assert_eq!(flights.len(), 1);
/// assert_eq!(flights[0].flight_no().as_str(), "ZH151");
/// ```
pub fn parse_catalog<R: BufRead>(mut reader: R) -> Result<Vec<Flight>, CatalogError> {
    if reader.fill_buf()?.starts_with(BOM) {
        reader.consume(BOM.len());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(read_error)?.clone();
    check_header(&headers)?;

    let mut flights = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(read_error)? {
        let line = record.position().map_or(0, |pos| pos.line() as usize);
        let row: Row<'_> = record.deserialize(Some(&headers)).map_err(read_error)?;
        flights.push(parse_row(&row, line)?);
    }

    debug!(flights = flights.len(), "Parsed catalog rows");
    Ok(flights)
}

fn check_header(headers: &csv::StringRecord) -> Result<(), CatalogError> {
    if headers.iter().all(str::is_empty) {
        return Err(CatalogError::MissingHeader);
    }

    for (i, name) in headers.iter().enumerate() {
        if headers.iter().take(i).any(|earlier| earlier == name) {
            return Err(CatalogError::DuplicateColumn(name.to_string()));
        }
    }

    for column in COLUMNS {
        if !headers.iter().any(|name| name == column) {
            return Err(CatalogError::MissingColumn(column));
        }
    }
    Ok(())
}

fn read_error(err: csv::Error) -> CatalogError {
    if let csv::ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return CatalogError::ColumnCount {
            line: pos.as_ref().map_or(0, |pos| pos.line() as usize),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    CatalogError::Csv(err)
}

fn parse_row(row: &Row<'_>, line: usize) -> Result<Flight, CatalogError> {
    let invalid = |field: &'static str, message: String| CatalogError::InvalidField {
        line,
        field,
        message,
    };

    let flight_no = FlightNo::new(row.flight_no.to_string())
        .map_err(|e| invalid("flight_no", e.to_string()))?;
    let origin = AirportCode::parse(row.origin).map_err(|e| invalid("origin", e.to_string()))?;
    let destination = AirportCode::parse(row.destination)
        .map_err(|e| invalid("destination", e.to_string()))?;
    let departure = parse_timestamp(row.departure).ok_or_else(|| {
        invalid(
            "departure",
            format!("`{}` is not an ISO-8601 timestamp", row.departure),
        )
    })?;
    let arrival = parse_timestamp(row.arrival).ok_or_else(|| {
        invalid(
            "arrival",
            format!("`{}` is not an ISO-8601 timestamp", row.arrival),
        )
    })?;
    let base_price: f64 = row
        .base_price
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid("base_price", e.to_string()))?;
    let bag_price: f64 = row
        .bag_price
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid("bag_price", e.to_string()))?;
    let bags_allowed: u32 = row
        .bags_allowed
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid("bags_allowed", e.to_string()))?;

    Flight::new(
        flight_no,
        origin,
        destination,
        departure,
        arrival,
        base_price,
        bag_price,
        bags_allowed,
    )
    .map_err(|source| CatalogError::InvalidFlight { line, source })
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Some(local) = TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
    {
        return Some(local);
    }

    let with_offset = match s.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{rest}+00:00")),
        None => Cow::Borrowed(s),
    };
    OFFSET_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&with_offset, format).ok())
        .map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "flight_no,origin,destination,departure,arrival,base_price,bag_price,bags_allowed";

    fn parse(body: &str) -> Result<Vec<Flight>, CatalogError> {
        parse_catalog(format!("{HEADER}\n{body}").as_bytes())
    }

    #[test]
    fn parse_rows() {
        let flights = parse(
            "ZH151,WIW,RFZ,2021-09-01T07:25:00,2021-09-01T08:20:00,84.0,9,2\n\
             WM478,RFZ,WIW,2021-09-01T12:05:00,2021-09-01T13:00:00,110.5,12,1\n",
        )
        .unwrap();

        assert_eq!(flights.len(), 2);
        let first = &flights[0];
        assert_eq!(first.flight_no().as_str(), "ZH151");
        assert_eq!(first.origin().as_str(), "WIW");
        assert_eq!(first.destination().as_str(), "RFZ");
        assert_eq!(
            first.departure(),
            NaiveDateTime::parse_from_str("2021-09-01 07:25", "%Y-%m-%d %H:%M").unwrap()
        );
        assert_eq!(first.base_price(), 84.0);
        assert_eq!(first.bag_price(), 9.0);
        assert_eq!(first.bags_allowed(), 2);
        assert_eq!(flights[1].base_price(), 110.5);
    }

    #[test]
    fn columns_in_any_order_and_extras_ignored() {
        let csv = "bags_allowed,note,bag_price,base_price,arrival,departure,destination,origin,flight_no\n\
                   1,hello,5,50,2021-09-01T10:00,2021-09-01T08:00,BBB,AAA,Q1\n";
        let flights = parse_catalog(csv.as_bytes()).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_no().as_str(), "Q1");
        assert_eq!(flights[0].origin().as_str(), "AAA");
        assert_eq!(flights[0].bags_allowed(), 1);
        assert_eq!(flights[0].base_price(), 50.0);
    }

    #[test]
    fn quoted_fields() {
        let flights = parse(
            "\"ZH151\",\"WIW\",RFZ,\"2021-09-01T07:25:00\",2021-09-01T08:20:00,\"84.0\",9,2\n",
        )
        .unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].flight_no().as_str(), "ZH151");
        assert_eq!(flights[0].origin().as_str(), "WIW");
        assert_eq!(flights[0].base_price(), 84.0);
    }

    #[test]
    fn quoted_extra_column_with_comma() {
        let csv = format!(
            "{HEADER},note\n\
             ZH151,WIW,RFZ,2021-09-01T07:25:00,2021-09-01T08:20:00,84.0,9,2,\"late, maybe\"\n"
        );
        let flights = parse_catalog(csv.as_bytes()).unwrap();

        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].destination().as_str(), "RFZ");
    }

    #[test]
    fn timestamp_layouts() {
        assert!(parse_timestamp("2021-09-01T07:25:00").is_some());
        assert!(parse_timestamp("2021-09-01T07:25").is_some());
        assert!(parse_timestamp("2021-09-01 07:25:00").is_some());
        assert!(parse_timestamp("2021-09-01T07:25:00.5").is_some());
        assert!(parse_timestamp("2021-09-01").is_none());
        assert!(parse_timestamp("07:25").is_none());
    }

    #[test]
    fn timestamps_with_offset_become_utc() {
        let utc = parse_timestamp("2021-09-01T07:25:00").unwrap();

        assert_eq!(parse_timestamp("2021-09-01T07:25:00Z"), Some(utc));
        assert_eq!(parse_timestamp("2021-09-01T07:25:00+00:00"), Some(utc));
        assert_eq!(parse_timestamp("2021-09-01T09:25:00+02:00"), Some(utc));
        assert_eq!(parse_timestamp("2021-09-01 02:25-05:00"), Some(utc));
    }

    #[test]
    fn blank_lines_and_bom_skipped() {
        let csv = format!(
            "\u{feff}{HEADER}\n\nX1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1,1\n\n"
        );
        assert_eq!(parse_catalog(csv.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn header_only() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            parse_catalog("".as_bytes()),
            Err(CatalogError::MissingHeader)
        ));
    }

    #[test]
    fn missing_column() {
        let csv = "flight_no,origin,destination,departure,arrival,base_price,bags_allowed\n";
        assert!(matches!(
            parse_catalog(csv.as_bytes()),
            Err(CatalogError::MissingColumn("bag_price"))
        ));
    }

    #[test]
    fn duplicate_column() {
        let csv = format!("{HEADER},origin\n");
        assert!(matches!(
            parse_catalog(csv.as_bytes()),
            Err(CatalogError::DuplicateColumn(name)) if name == "origin"
        ));
    }

    #[test]
    fn blank_header() {
        assert!(matches!(
            parse_catalog("   \n".as_bytes()),
            Err(CatalogError::MissingHeader)
        ));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut bytes = format!("{HEADER}\n").into_bytes();
        bytes.extend_from_slice(b"X1,\xFF\xFE,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1,1\n");

        assert!(matches!(
            parse_catalog(bytes.as_slice()),
            Err(CatalogError::Csv(_))
        ));
    }

    #[test]
    fn wrong_field_count() {
        let err = parse("X1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::ColumnCount {
                line: 2,
                expected: 8,
                found: 7
            }
        ));
    }

    #[test]
    fn invalid_fields_report_line() {
        let err = parse(
            "X1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1,1\n\
             X2,aaa,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1,1\n",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField {
                line: 3,
                field: "origin",
                ..
            }
        ));

        let err = parse("X1,AAA,BBB,yesterday,2021-09-01T08:00,1,1,1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: invalid departure: `yesterday` is not an ISO-8601 timestamp"
        );

        let err = parse("X1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,cheap,1,1\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField {
                field: "base_price",
                ..
            }
        ));

        let err = parse("X1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,1,1,-1\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidField {
                field: "bags_allowed",
                ..
            }
        ));
    }

    #[test]
    fn invalid_flight_reported() {
        let err = parse("X1,AAA,BBB,2021-09-01T09:00,2021-09-01T08:00,1,1,1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: invalid flight: arrival must be after departure"
        );

        let err = parse("X1,AAA,BBB,2021-09-01T07:00,2021-09-01T08:00,-5,1,1\n").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFlight { line: 2, .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(
            file,
            "ZH151,WIW,RFZ,2021-09-01T07:25:00,2021-09-01T08:20:00,84.0,9,2"
        )
        .unwrap();
        file.flush().unwrap();

        let flights = load_catalog(file.path()).unwrap();
        assert_eq!(flights.len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
