use crate::core::{distance::haversine_distance, filters::matches_cuisine};
use crate::models::{Coordinate, RankingWeights, ScoredVenue, UserProfile, Venue};

/// Distance beyond which a venue's distance score bottoms out at zero
pub const MAX_DISTANCE_KM: f64 = 3.0;

/// Calculate the distance desirability score (0-1)
///
/// Linear decay over the walkable radius: 0 km scores 1.0, anything at or
/// beyond 3 km scores 0.
#[inline]
pub fn distance_score(distance_km: f64) -> f64 {
    1.0 - distance_km.min(MAX_DISTANCE_KM) / MAX_DISTANCE_KM
}

/// Calculate the preference score (0-1) of a venue against a profile
///
/// Each facet the profile actually expresses contributes one point to the
/// denominator:
/// - cuisine: the venue's cuisine text contains one of the profile terms
/// - light goal: the venue is a cafe or its diet tag is "healthy"
///
/// A facet absent from the profile is skipped, not penalized. A profile
/// with no facets at all scores a neutral 0.5.
pub fn preference_score(profile: &UserProfile, venue: &Venue) -> f64 {
    let mut score = 0.0;
    let mut max_score = 0.0;

    if profile.has_cuisines() {
        max_score += 1.0;
        if matches_cuisine(profile, venue) {
            score += 1.0;
        }
    }

    if profile.wants_light() {
        max_score += 1.0;
        if venue.category == "cafe" || venue.diet_tag() == Some("healthy") {
            score += 1.0;
        }
    }

    if max_score == 0.0 {
        return 0.5;
    }

    score / max_score
}

/// Blend the two component scores, rounded to 3 decimal places
#[inline]
pub fn blended_score(distance_score: f64, preference_score: f64, weights: &RankingWeights) -> f64 {
    let raw = distance_score * weights.distance + preference_score * weights.preference;
    (raw * 1000.0).round() / 1000.0
}

/// Score a single venue against the profile and requester location
///
/// Returns `None` for a venue without a usable position.
pub fn score_venue(
    profile: &UserProfile,
    location: Coordinate,
    venue: Venue,
    weights: &RankingWeights,
) -> Option<ScoredVenue> {
    let position = venue.coordinate()?;

    let distance_km = haversine_distance(location, position);
    let d_score = distance_score(distance_km);
    let p_score = preference_score(profile, &venue);
    let score = blended_score(d_score, p_score, weights);

    Some(ScoredVenue {
        osm_id: venue.osm_id,
        name: venue.name,
        category: venue.category,
        cuisine: venue.cuisine,
        latitude: position.latitude,
        longitude: position.longitude,
        distance_km,
        distance_score: d_score,
        preference_score: p_score,
        score,
    })
}
