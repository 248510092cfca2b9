use crate::core::{distance::bounding_box, RankingEngine};
use crate::models::{
    Coordinate, ErrorResponse, HealthResponse, RecommendQuery, RecommendResponse,
    SubmitSurveyResponse, UserProfile, VenueListQuery, VenueListResponse,
};
use crate::services::{OverpassClient, ProfileStore, ProfileStoreError};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Request-level defaults taken from configuration
#[derive(Debug, Clone)]
pub struct RecommendDefaults {
    pub location: Coordinate,
    pub search_radius_km: f64,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub overpass: Arc<OverpassClient>,
    pub profiles: Arc<ProfileStore>,
    pub engine: RankingEngine,
    pub defaults: RecommendDefaults,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/survey", web::post().to(submit_survey))
        .route("/recommendations", web::get().to(recommend))
        .route("/venues", web::get().to(list_venues))
        .route("/profiles/recent", web::get().to(recent_profiles));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.profiles.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Survey submission endpoint
///
/// POST /api/v1/survey
///
/// The body is the profile itself and is stored verbatim:
/// ```json
/// {
///   "cuisines": ["taiwanese"],
///   "healthGoals": ["light"]
/// }
/// ```
async fn submit_survey(
    state: web::Data<AppState>,
    req: web::Json<UserProfile>,
) -> impl Responder {
    let profile = req.into_inner();

    match state.profiles.save(&profile).await {
        Ok(profile_id) => {
            tracing::info!("Survey saved as profile {}", profile_id);
            HttpResponse::Ok().json(SubmitSurveyResponse {
                success: true,
                profile_id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to save survey: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to save survey".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Recommendation endpoint
///
/// GET /api/v1/recommendations?lat=25.0173&lon=121.5397&limit=10
///
/// Ranks live venues around the requester against the most recently
/// submitted profile. Location falls back to the configured home area.
async fn recommend(
    state: web::Data<AppState>,
    query: web::Query<RecommendQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let location = resolve_location(&query.lat, &query.lon, &state.defaults);
    let limit = query
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.defaults.default_limit)
        .min(state.defaults.max_limit);

    tracing::info!(
        "Recommending around ({}, {}), limit {}",
        location.latitude,
        location.longitude,
        limit
    );

    // Latest profile snapshot; no default profile is substituted
    let profile = match state.profiles.latest().await {
        Ok(profile) => profile,
        Err(ProfileStoreError::NotFound) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "No user profile found".to_string(),
                message: "Submit a survey before requesting recommendations".to_string(),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to load latest profile: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load profile".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Profile used for recommendation: {:?}", profile);

    let bbox = bounding_box(location, state.defaults.search_radius_km);

    let venues = match state.overpass.fetch_venues(&bbox).await {
        Ok(venues) => venues,
        Err(e) => {
            tracing::error!("Venue fetch failed: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Venue data unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    tracing::debug!("Fetched {} raw venues", venues.len());

    let outcome = state.engine.rank(&profile, location, venues, limit);

    tracing::info!(
        "Returning {} venues (from {} candidates)",
        outcome.venues.len(),
        outcome.total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        profile_used: profile,
        venues: outcome.venues,
        total_candidates: outcome.total_candidates,
    })
}

/// Raw venue listing endpoint
///
/// GET /api/v1/venues?lat=25.0173&lon=121.5397
///
/// Returns the cleaned, unscored venue list for the area - useful for
/// inspecting what the supplier currently sees.
async fn list_venues(
    state: web::Data<AppState>,
    query: web::Query<VenueListQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let location = resolve_location(&query.lat, &query.lon, &state.defaults);
    let bbox = bounding_box(location, state.defaults.search_radius_km);

    match state.overpass.fetch_venues(&bbox).await {
        Ok(venues) => HttpResponse::Ok().json(VenueListResponse {
            count: venues.len(),
            venues,
        }),
        Err(e) => {
            tracing::error!("Venue fetch failed: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Venue data unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}

/// Latest stored profiles
///
/// GET /api/v1/profiles/recent
///
/// Returns the five most recent survey submissions with ids and
/// timestamps, for debugging.
async fn recent_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.profiles.recent(5).await {
        Ok(profiles) => HttpResponse::Ok().json(serde_json::json!({
            "count": profiles.len(),
            "profiles": profiles,
        })),
        Err(e) => {
            tracing::error!("Failed to fetch recent profiles: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch recent profiles".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn resolve_location(
    lat: &Option<f64>,
    lon: &Option<f64>,
    defaults: &RecommendDefaults,
) -> Coordinate {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Coordinate {
            latitude: *latitude,
            longitude: *longitude,
        },
        _ => defaults.location,
    }
}
