//! Itinerary planner using depth-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "Which chains of flights get me from here to there, and what do they cost?"
//!
//! The search enumerates every connecting path, prices each one for the
//! requested number of bags, and ranks the results cheapest first.

mod config;
mod rank;
mod search;

pub use config::SearchConfig;
pub use rank::{rank_itineraries, rank_round_trips};
pub use search::{
    Planner, RoundTripSearchResult, SearchRequest, SearchResult, find_flight_sequences,
    find_itineraries,
};
