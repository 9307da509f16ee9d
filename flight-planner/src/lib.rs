//! Flight itinerary planner.
//!
//! Answers: "Given this catalog of flights, which chains of connecting
//! flights take me from A to B with my bags, and which is cheapest?"

pub mod catalog;
pub mod domain;
pub mod output;
pub mod planner;
