//! Maintenance request and kanban board API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{ApiJson, ApiQuery},
    error::AppResult,
    models::{
        request::{CreateRequest, RequestQuery, UpdateRequest, UpdateRequestStatus},
        MaintenanceRequest,
    },
    views::StatusBoard,
};

/// List requests
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "Requests", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<RequestQuery>,
) -> Json<Vec<MaintenanceRequest>> {
    Json(state.services.requests.list(&query).await)
}

/// Get a request
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MaintenanceRequest>> {
    Ok(Json(state.services.requests.get_by_id(&id).await?))
}

/// File a request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = MaintenanceRequest),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceRequest>)> {
    let request = state.services.requests.create(data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a request
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateRequest>,
) -> AppResult<Json<MaintenanceRequest>> {
    Ok(Json(state.services.requests.update(&id, &data).await?))
}

/// Change the status of a request
#[utoipa::path(
    put,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = String, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Status changed", body = MaintenanceRequest),
        (status = 404, description = "Request not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_request_status(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateRequestStatus>,
) -> AppResult<Json<MaintenanceRequest>> {
    Ok(Json(
        state
            .services
            .requests
            .update_status(&id, data.status)
            .await?,
    ))
}

/// Kanban board
#[utoipa::path(
    get,
    path = "/board",
    tag = "requests",
    params(RequestQuery),
    responses(
        (status = 200, description = "Requests grouped by status", body = StatusBoard)
    )
)]
pub async fn get_board(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<RequestQuery>,
) -> Json<StatusBoard> {
    Json(state.services.requests.board(&query).await)
}
