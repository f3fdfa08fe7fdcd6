//! Calendar and dashboard API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use crate::{
    api::ApiQuery,
    error::AppResult,
    models::MaintenanceRequest,
    views::{
        calendar::{CalendarMonth, CalendarQuery},
        Dashboard,
    },
};

/// Month grid of scheduled preventive maintenance
#[utoipa::path(
    get,
    path = "/calendar",
    tag = "calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Calendar month", body = CalendarMonth),
        (status = 400, description = "Invalid month", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_month(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<CalendarQuery>,
) -> AppResult<Json<CalendarMonth>> {
    Ok(Json(state.services.calendar.month(query.year, query.month).await?))
}

/// Scheduled preventive maintenance on one day
#[utoipa::path(
    get,
    path = "/calendar/day/{date}",
    tag = "calendar",
    params(("date" = String, Path, description = "Day (YYYY-MM-DD)")),
    responses(
        (status = 200, description = "Requests scheduled that day", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn get_day(
    State(state): State<crate::AppState>,
    Path(date): Path<NaiveDate>,
) -> Json<Vec<MaintenanceRequest>> {
    Json(state.services.calendar.day(date).await)
}

/// Dashboard overview
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard", body = Dashboard)
    )
)]
pub async fn get_dashboard(State(state): State<crate::AppState>) -> Json<Dashboard> {
    Json(state.services.dashboard.dashboard().await)
}
