//! Nosh Algo - eatery recommendation service for the Nosh meal planner
//!
//! This library provides the recommendation ranking engine used by the
//! Nosh meal planner: it narrows live OpenStreetMap venue data against a
//! stored preference profile, scores each candidate on distance and
//! preference fit, and returns an explainable ranked subset.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    distance::{bounding_box, haversine_distance},
    RankingEngine, RankingOutcome,
};
pub use crate::models::{
    Coordinate, RankingWeights, RecommendResponse, ScoredVenue, UserProfile, Venue,
};
