//! API handlers for Maintrack REST endpoints

pub mod calendar;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;

use axum::{
    extract::{FromRequest, FromRequestParts},
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the API error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/snapshot", get(health::snapshot))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route("/equipment/categories", get(equipment::category_counts))
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        .route("/equipment/:id/requests", get(equipment::equipment_requests))
        // Teams
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/:id", get(teams::get_team).put(teams::update_team))
        .route("/teams/:id/members", get(teams::team_members))
        .route("/members", get(teams::list_members).post(teams::create_member))
        .route("/members/:id", get(teams::get_member))
        .route("/departments", get(teams::list_departments))
        // Requests
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route(
            "/requests/:id",
            get(requests::get_request).put(requests::update_request),
        )
        .route("/requests/:id/status", put(requests::update_request_status))
        .route("/board", get(requests::get_board))
        // Calendar & dashboard
        .route("/calendar", get(calendar::get_month))
        .route("/calendar/day/:date", get(calendar::get_day))
        .route("/dashboard", get(calendar::get_dashboard))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
