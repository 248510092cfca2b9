// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use distance::{bounding_box, haversine_distance};
pub use filters::{filter_by_cuisine, has_coordinates, matches_cuisine};
pub use ranker::{RankingEngine, RankingOutcome};
pub use scoring::{blended_score, distance_score, preference_score, score_venue};
