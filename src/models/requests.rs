use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the recommendation endpoint
///
/// Location defaults to the configured home area when the client omits it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
    pub limit: Option<u16>,
}

/// Query parameters for the raw venue listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VenueListQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}
