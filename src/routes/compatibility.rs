use crate::core::{EngineError, Ranker};
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn contract_violation(err: EngineError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid profile".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Score one reference/candidate pair
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "reference": { "profileId": "..." },
///   "candidate": { "profileId": "..." },
///   "weights": { "spiritual": 0.4 }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();

    tracing::debug!(
        "Scoring candidate {} against reference {}",
        req.candidate.profile_id,
        req.reference.profile_id
    );

    match state
        .ranker
        .engine()
        .calculate(&req.reference, &req.candidate, req.weights.as_ref())
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            tracing::info!("Rejected score request: {}", e);
            contract_violation(e)
        }
    }
}

/// Rank a pre-filtered candidate pool for a reference profile
///
/// POST /api/v1/compatibility/rank
///
/// Candidates must already be filtered for eligibility (verification,
/// active status, prior interactions) by the caller.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);
    let total_candidates = req.candidates.len();

    tracing::info!(
        "Ranking {} candidates for reference {}, limit {}",
        total_candidates,
        req.reference.profile_id,
        limit
    );

    match state.ranker.rank_candidates(&req.reference, req.candidates) {
        Ok(mut rankings) => {
            rankings.truncate(limit);
            tracing::debug!(
                "Returning {} of {} ranked candidates",
                rankings.len(),
                total_candidates
            );
            HttpResponse::Ok().json(RankResponse {
                rankings,
                total_candidates,
            })
        }
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            contract_violation(e)
        }
    }
}
