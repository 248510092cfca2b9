use crate::models::{BoundingBox, Venue};
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Overpass API client
///
/// Supplies raw venue candidates for a bounding box. One attempt per
/// fetch; retry and cancellation policy belong to the caller.
pub struct OverpassClient {
    endpoint: String,
    amenities: Vec<String>,
    client: Client,
}

impl OverpassClient {
    /// Create a new Overpass client
    pub fn new(endpoint: String, amenities: Vec<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            amenities,
            client,
        }
    }

    /// Fetch candidate venues inside the bounding box
    ///
    /// Returns the cleaned, unscored venue list. Elements the API returns
    /// without an id are skipped; missing coordinates are preserved as
    /// `None` so the ranking engine can exclude them.
    pub async fn fetch_venues(&self, bbox: &BoundingBox) -> Result<Vec<Venue>, OverpassError> {
        let query = self.build_query(bbox);

        tracing::debug!("Overpass query: {}", query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/plain")
            .body(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(OverpassError::ApiError(format!(
                "Failed to fetch venues: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let elements = json
            .get("elements")
            .and_then(|e| e.as_array())
            .ok_or_else(|| OverpassError::InvalidResponse("Missing elements array".into()))?;

        let venues: Vec<Venue> = elements.iter().filter_map(parse_element).collect();

        tracing::debug!("Fetched {} venues from Overpass", venues.len());

        Ok(venues)
    }

    /// Build the Overpass QL query for the configured amenities
    fn build_query(&self, bbox: &BoundingBox) -> String {
        let area = format!(
            "({},{},{},{})",
            bbox.min_lat, bbox.min_lon, bbox.max_lat, bbox.max_lon
        );

        let nodes: String = self
            .amenities
            .iter()
            .map(|amenity| format!("  node[\"amenity\"=\"{}\"]{};\n", amenity, area))
            .collect();

        format!("[out:json][timeout:25];\n(\n{});\nout tags center;", nodes)
    }
}

/// Map one Overpass element to a venue
fn parse_element(element: &Value) -> Option<Venue> {
    let osm_id = element.get("id").and_then(Value::as_i64)?;

    let tags: HashMap<String, String> = element
        .get("tags")
        .and_then(Value::as_object)
        .map(|object| {
            object
                .iter()
                .filter_map(|(key, value)| {
                    value.as_str().map(|text| (key.clone(), text.to_string()))
                })
                .collect()
        })
        .unwrap_or_default();

    // Nodes carry lat/lon directly; ways come back with a center object
    let latitude = element
        .get("lat")
        .and_then(Value::as_f64)
        .or_else(|| element.pointer("/center/lat").and_then(Value::as_f64));
    let longitude = element
        .get("lon")
        .and_then(Value::as_f64)
        .or_else(|| element.pointer("/center/lon").and_then(Value::as_f64));

    Some(Venue {
        osm_id,
        name: tags
            .get("name")
            .cloned()
            .unwrap_or_else(|| "Unnamed venue".to_string()),
        category: tags.get("amenity").cloned().unwrap_or_default(),
        cuisine: tags.get("cuisine").cloned().unwrap_or_default(),
        latitude,
        longitude,
        tags,
    })
}
