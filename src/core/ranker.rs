use crate::core::{
    filters::{filter_by_cuisine, has_coordinates},
    scoring::score_venue,
};
use crate::models::{Coordinate, RankingWeights, ScoredVenue, UserProfile, Venue};

/// Number of venues served from the unfiltered list when the cuisine
/// filter leaves nothing
const FALLBACK_LIMIT: usize = 10;

/// Result of one ranking pass
#[derive(Debug)]
pub struct RankingOutcome {
    pub venues: Vec<ScoredVenue>,
    pub total_candidates: usize,
}

/// Ranking orchestrator - narrows, scores and orders raw venues
///
/// # Pipeline Stages
/// 1. Drop venues without a usable position
/// 2. Cuisine hard-filter, with fallback when it empties the set
/// 3. Distance + preference scoring, blended per the configured weights
/// 4. Sort by raw distance (nearest first) and truncate
#[derive(Debug, Clone)]
pub struct RankingEngine {
    weights: RankingWeights,
}

impl RankingEngine {
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: RankingWeights::default(),
        }
    }

    /// Rank raw venues for a profile and requester location
    ///
    /// Pure over its inputs: no shared state, identical inputs produce
    /// identical output. An empty input list yields an empty result, which
    /// is a valid outcome rather than an error.
    ///
    /// # Arguments
    /// * `profile` - The preference profile snapshot for this request
    /// * `location` - The requester's position
    /// * `venues` - Raw candidates from the venue supplier
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// RankingOutcome with scored venues, nearest first
    pub fn rank(
        &self,
        profile: &UserProfile,
        location: Coordinate,
        venues: Vec<Venue>,
        limit: usize,
    ) -> RankingOutcome {
        let total_candidates = venues.len();

        // Stage 1: venues without a position cannot be scored at all
        let locatable: Vec<Venue> = venues.into_iter().filter(has_coordinates).collect();

        // Stage 2: cuisine hard-filter
        let mut candidates = filter_by_cuisine(profile, &locatable);

        if candidates.is_empty() {
            // The filter wiped the page; serve a bounded slice of the
            // unfiltered list instead of a zero-result outcome.
            tracing::debug!(
                "Cuisine filter left no candidates, falling back to first {} of {}",
                FALLBACK_LIMIT,
                locatable.len()
            );
            candidates = locatable.into_iter().take(FALLBACK_LIMIT).collect();
        }

        // Stage 3: score survivors
        let mut scored: Vec<ScoredVenue> = candidates
            .into_iter()
            .filter_map(|venue| score_venue(profile, location, venue, &self.weights))
            .collect();

        // Stage 4: nearest first. The blended score is attached for
        // explainability but raw distance stays the ordering key.
        scored.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(limit);

        RankingOutcome {
            venues: scored,
            total_candidates,
        }
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
