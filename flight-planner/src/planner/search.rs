//! Depth-first itinerary search.
//!
//! Enumerates every chain of connecting flights from an origin to a
//! destination. Paths are grown on an explicit stack rather than by
//! recursion, and a path never lands at an airport it has already taken
//! off from, which bounds its length by the number of airports.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::domain::{AirportCode, ConnectionWindow, Flight, Itinerary, RoundTrip};

use super::config::SearchConfig;
use super::rank::{rank_itineraries, rank_round_trips};

/// Request for itinerary search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Airport the traveller leaves from.
    pub origin: AirportCode,

    /// Airport the traveller wants to reach.
    pub destination: AirportCode,

    /// Number of checked bags. Every leg must accept at least this many.
    pub bag_count: u32,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(origin: AirportCode, destination: AirportCode, bag_count: u32) -> Self {
        Self {
            origin,
            destination,
            bag_count,
        }
    }

    /// The same trip in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin, self.bag_count)
    }
}

/// Result of itinerary search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Found itineraries, cheapest first.
    pub itineraries: Vec<Itinerary>,

    /// Number of partial paths popped from the search stack.
    pub paths_explored: usize,
}

impl SearchResult {
    /// Create an empty result.
    pub fn empty() -> Self {
        Self {
            itineraries: Vec::new(),
            paths_explored: 0,
        }
    }
}

/// Result of a round-trip search.
#[derive(Debug, Clone)]
pub struct RoundTripSearchResult {
    /// Found round trips, cheapest first.
    pub trips: Vec<RoundTrip>,

    /// Partial paths explored across both directions.
    pub paths_explored: usize,
}

/// A path under construction.
///
/// Legs are stored as indices into the catalog so that extending a path
/// never clones flight records.
#[derive(Debug, Clone)]
struct PartialPath {
    legs: Vec<usize>,

    /// Airports some leg of this path has taken off from.
    visited: HashSet<AirportCode>,
}

impl PartialPath {
    fn start(index: usize, flight: &Flight) -> Self {
        Self {
            legs: vec![index],
            visited: HashSet::from([flight.origin()]),
        }
    }

    fn extend(&self, index: usize, flight: &Flight) -> Self {
        let mut legs = Vec::with_capacity(self.legs.len() + 1);
        legs.extend_from_slice(&self.legs);
        legs.push(index);

        let mut visited = self.visited.clone();
        visited.insert(flight.origin());

        Self { legs, visited }
    }

    fn last(&self) -> usize {
        self.legs[self.legs.len() - 1]
    }
}

/// Paths found from a single starting flight.
#[derive(Debug, Default)]
struct Exploration {
    paths: Vec<Vec<usize>>,
    explored: usize,
}

impl Exploration {
    fn merge(mut self, other: Exploration) -> Self {
        self.paths.extend(other.paths);
        self.explored += other.explored;
        self
    }
}

/// Itinerary planner over an in-memory flight catalog.
pub struct Planner<'a> {
    catalog: &'a [Flight],
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a [Flight], config: &'a SearchConfig) -> Self {
        Self { catalog, config }
    }

    /// Search for itineraries and rank them cheapest first.
    ///
    /// Finding nothing is not an error: the result is simply empty. That
    /// includes a request whose origin is its destination, since no path
    /// may land where one of its legs took off.
    pub fn search(&self, request: &SearchRequest) -> SearchResult {
        if request.origin == request.destination {
            debug!(airport = %request.origin, "Origin is the destination, nothing to search");
            return SearchResult::empty();
        }

        let window = self.config.connection_window();
        let found = self.explore(request, &window);

        let itineraries: Vec<Itinerary> = found
            .paths
            .iter()
            .map(|legs| self.to_itinerary(legs, request.bag_count))
            .collect();

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            bags = request.bag_count,
            itineraries = itineraries.len(),
            paths_explored = found.explored,
            "Search complete"
        );

        SearchResult {
            itineraries: rank_itineraries(itineraries),
            paths_explored: found.explored,
        }
    }

    /// Search for outbound and return itineraries and pair them up.
    ///
    /// A return itinerary is paired with an outbound one only if it departs
    /// after the outbound itinerary arrives.
    pub fn search_round_trip(&self, request: &SearchRequest) -> RoundTripSearchResult {
        let outbound = self.search(request);
        let inbound = self.search(&request.reversed());

        let mut trips = Vec::new();
        for out in &outbound.itineraries {
            for back in &inbound.itineraries {
                if let Ok(trip) = RoundTrip::new(out.clone(), back.clone()) {
                    trips.push(trip);
                }
            }
        }

        debug!(
            outbound = outbound.itineraries.len(),
            inbound = inbound.itineraries.len(),
            trips = trips.len(),
            "Round trip search complete"
        );

        RoundTripSearchResult {
            trips: rank_round_trips(trips),
            paths_explored: outbound.paths_explored + inbound.paths_explored,
        }
    }

    /// Every flight sequence from origin to destination, in discovery order.
    ///
    /// Unlike [`Planner::search`] nothing is priced or ranked.
    pub fn flight_sequences(&self, request: &SearchRequest) -> Vec<Vec<Flight>> {
        let window = self.config.connection_window();
        self.explore(request, &window)
            .paths
            .iter()
            .map(|legs| self.flights(legs))
            .collect()
    }

    /// Explore from every eligible starting flight.
    ///
    /// Starting flights share nothing, so in parallel mode each one runs on
    /// its own worker. Results are concatenated in catalog order either way.
    fn explore(&self, request: &SearchRequest, window: &ConnectionWindow) -> Exploration {
        let starts: Vec<usize> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, f)| f.origin() == request.origin && f.accepts_bags(request.bag_count))
            .map(|(i, _)| i)
            .collect();

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            starts = starts.len(),
            parallel = self.config.parallel,
            "Starting search"
        );

        let explorations: Vec<Exploration> = if self.config.parallel {
            starts
                .par_iter()
                .map(|&start| self.explore_from(start, request, window))
                .collect()
        } else {
            starts
                .iter()
                .map(|&start| self.explore_from(start, request, window))
                .collect()
        };

        explorations
            .into_iter()
            .fold(Exploration::default(), Exploration::merge)
    }

    /// Depth-first enumeration of all paths beginning with `start`.
    ///
    /// A path that reaches the destination is recorded and still extended,
    /// so longer paths passing through the destination are found too.
    /// Children are pushed in reverse catalog order so they pop in catalog
    /// order.
    fn explore_from(
        &self,
        start: usize,
        request: &SearchRequest,
        window: &ConnectionWindow,
    ) -> Exploration {
        let mut found = Exploration::default();
        let mut stack = vec![PartialPath::start(start, &self.catalog[start])];

        while let Some(path) = stack.pop() {
            found.explored += 1;
            let last = &self.catalog[path.last()];

            if last.destination() == request.destination {
                trace!(
                    legs = path.legs.len(),
                    first = %self.catalog[start].flight_no(),
                    "Found path to destination"
                );
                found.paths.push(path.legs.clone());
            }

            for (index, next) in self.catalog.iter().enumerate().rev() {
                if !next.accepts_bags(request.bag_count)
                    || path.visited.contains(&next.destination())
                {
                    continue;
                }
                if window.allows(last, next) {
                    stack.push(path.extend(index, next));
                }
            }
        }

        found
    }

    fn flights(&self, legs: &[usize]) -> Vec<Flight> {
        legs.iter().map(|&i| self.catalog[i].clone()).collect()
    }

    /// Every path the search emits was connected leg by leg under the
    /// configured window, so it needs no second check.
    fn to_itinerary(&self, legs: &[usize], bag_count: u32) -> Itinerary {
        Itinerary::from_connected(self.flights(legs), bag_count)
    }
}

/// Every flight sequence from `origin` to `destination` under the default
/// connection window, in discovery order.
pub fn find_flight_sequences(
    catalog: &[Flight],
    origin: AirportCode,
    destination: AirportCode,
    bag_count: u32,
) -> Vec<Vec<Flight>> {
    let config = SearchConfig::default();
    Planner::new(catalog, &config)
        .flight_sequences(&SearchRequest::new(origin, destination, bag_count))
}

/// All itineraries from `origin` to `destination`, cheapest first.
///
/// Returns an empty list when no route exists, including when origin and
/// destination are the same airport.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{AirportCode, Flight, FlightNo};
/// use flight_planner::planner::find_itineraries;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let code = |s: &str| AirportCode::parse(s).unwrap();
/// let catalog = vec![Flight::new(
///     FlightNo::new("X11".into()).unwrap(),
///     code("AAA"),
///     code("BBB"),
///     at("2022-01-01 10:00"),
///     at("2022-01-01 12:00"),
///     30.0,
///     10.0,
///     2,
/// )
/// .unwrap()];
///
/// let found = find_itineraries(&catalog, code("AAA"), code("BBB"), 1);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].total_price(), 40.0);
///
/// assert!(find_itineraries(&catalog, code("AAA"), code("CCC"), 0).is_empty());
/// ```
pub fn find_itineraries(
    catalog: &[Flight],
    origin: AirportCode,
    destination: AirportCode,
    bag_count: u32,
) -> Vec<Itinerary> {
    let config = SearchConfig::default();
    let request = SearchRequest::new(origin, destination, bag_count);
    Planner::new(catalog, &config).search(&request).itineraries
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
