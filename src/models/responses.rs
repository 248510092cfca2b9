use crate::models::domain::{ScoredVenue, UserProfile, Venue};
use serde::{Deserialize, Serialize};

/// Response for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(rename = "profileUsed")]
    pub profile_used: UserProfile,
    pub venues: Vec<ScoredVenue>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the raw venue listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueListResponse {
    pub count: usize,
    pub venues: Vec<Venue>,
}

/// Response for a survey submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSurveyResponse {
    pub success: bool,
    #[serde(rename = "profileId")]
    pub profile_id: i64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
