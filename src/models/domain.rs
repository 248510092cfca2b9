use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// User preference profile, submitted via survey and stored verbatim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(rename = "healthGoals", default)]
    pub health_goals: Vec<String>,
    /// Survey facets the scorer does not read; kept so a stored profile
    /// round-trips unchanged.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl UserProfile {
    /// Whether the profile expresses any cuisine preference
    pub fn has_cuisines(&self) -> bool {
        !self.cuisines.is_empty()
    }

    /// Whether the profile declares the "light" health goal
    pub fn wants_light(&self) -> bool {
        self.health_goals.iter().any(|goal| goal == "light")
    }
}

/// A candidate eatery as supplied by Overpass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    #[serde(rename = "osmId")]
    pub osm_id: i64,
    pub name: String,
    /// OSM amenity value: restaurant, fast_food, cafe
    pub category: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl Venue {
    /// Position, if the source supplied one. Venues without it are
    /// unscoreable and get dropped before ranking.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) if latitude.is_finite() && longitude.is_finite() => {
                Some(Coordinate {
                    latitude,
                    longitude,
                })
            }
            _ => None,
        }
    }

    /// The OSM diet classification tag, when present
    pub fn diet_tag(&self) -> Option<&str> {
        self.tags.get("diet").map(String::as_str)
    }
}

/// A venue enriched with its score breakdown for one ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredVenue {
    #[serde(rename = "osmId")]
    pub osm_id: i64,
    pub name: String,
    pub category: String,
    pub cuisine: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "distanceScore")]
    pub distance_score: f64,
    #[serde(rename = "preferenceScore")]
    pub preference_score: f64,
    pub score: f64,
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Blend weights for the combined score
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
    pub distance: f64,
    pub preference: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            distance: 0.6,
            preference: 0.4,
        }
    }
}
