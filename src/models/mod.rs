// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Coordinate, RankingWeights, ScoredVenue, UserProfile, Venue};
pub use requests::{RecommendQuery, VenueListQuery};
pub use responses::{
    ErrorResponse, HealthResponse, RecommendResponse, SubmitSurveyResponse, VenueListResponse,
};
