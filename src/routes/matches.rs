use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{explain, EnhancedOptions, Matcher};
use crate::models::{
    EnhancedMatchesRequest, EnhancedMatchesResponse, EnhancedScoreRequest, EnhancedScoreResponse,
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MatchStrength,
    ScoreRequest, ScoreResponse,
};
use crate::core::scoring::match_reasons;
use crate::services::ItemsApiClient;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub enhanced: EnhancedOptions,
    pub items_api: Arc<ItemsApiClient>,
    pub search_limit: u32,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_pair))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/enhanced/score", web::post().to(enhanced_score_pair))
        .route("/matches/enhanced", web::post().to(enhanced_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "lostItem": { "id": 1, "title": "...", "category": "..." },
///   "foundItem": { "id": 2, "title": "...", "category": "..." },
///   "scheme": "weighted|points"
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let matcher = match req.scheme {
        Some(scheme) if scheme != state.matcher.scheme() => Matcher::with_scheme(scheme),
        _ => state.matcher.clone(),
    };

    let match_score = matcher.score(&req.lost_item, &req.found_item);

    HttpResponse::Ok().json(ScoreResponse {
        match_score,
        match_reasons: match_reasons(&req.lost_item, &req.found_item, matcher.scheme()),
        match_strength: MatchStrength::from_score(match_score),
        scheme: matcher.scheme(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "item": { "id": 1, "title": "..." },
///   "candidates": [{ "id": 2, "title": "..." }],
///   "minScore": 15,
///   "limit": 20,
///   "scheme": "weighted"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let matcher = match req.scheme {
        Some(scheme) if scheme != state.matcher.scheme() => Matcher::with_scheme(scheme),
        _ => state.matcher.clone(),
    };
    let min_score = req.min_score.unwrap_or_else(|| matcher.min_score());

    tracing::info!(
        "Finding matches for item {:?} among {} candidates",
        req.item.id,
        req.candidates.len()
    );

    let result = matcher.find_matches_above(&req.item, req.candidates, min_score, req.limit);

    HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}

/// Score a pair with image bonuses and a display explanation
///
/// POST /api/v1/matches/enhanced/score
async fn enhanced_score_pair(
    state: web::Data<AppState>,
    req: web::Json<EnhancedScoreRequest>,
) -> impl Responder {
    let score = state.matcher.enhanced_score(&req.lost_item, &req.found_item);
    let explanation = explain(&score);

    HttpResponse::Ok().json(EnhancedScoreResponse { score, explanation })
}

/// Search the backend for found items and rank them against a lost item
///
/// POST /api/v1/matches/enhanced
///
/// Request body:
/// ```json
/// {
///   "lostItem": { "id": 1, "title": "Blue Backpack", "image_url": "..." },
///   "minScore": 60,
///   "maxResults": 10
/// }
/// ```
async fn enhanced_matches(
    state: web::Data<AppState>,
    req: web::Json<EnhancedMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let search_query = match req.lost_item.title() {
        Some(title) => title.to_string(),
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing title".to_string(),
                message: "lostItem.title is required to search found items".to_string(),
                status_code: 400,
            });
        }
    };

    let options = EnhancedOptions {
        min_score: req.min_score.unwrap_or(state.enhanced.min_score),
        max_results: req.max_results.unwrap_or(state.enhanced.max_results),
    };

    let candidates = match state
        .items_api
        .search_found_items(&search_query, state.search_limit)
        .await
    {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Failed to fetch found items for {:?}: {}", search_query, e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to fetch found items".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let total_candidates = candidates.len();
    let matches = state
        .matcher
        .find_enhanced_matches(&req.lost_item, candidates, options);

    tracing::info!(
        "Returning {} enhanced matches for {:?} (from {} candidates)",
        matches.len(),
        search_query,
        total_candidates
    );

    HttpResponse::Ok().json(EnhancedMatchesResponse {
        total: matches.len(),
        matches,
        search_query,
    })
}
