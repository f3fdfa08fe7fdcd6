//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::{ApiJson, ApiQuery},
    error::AppResult,
    models::{
        equipment::{CategoryCounts, CreateEquipment, EquipmentOverview, EquipmentQuery, UpdateEquipment},
        Equipment, MaintenanceRequest,
    },
};

/// List equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentOverview>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<EquipmentQuery>,
) -> Json<Vec<EquipmentOverview>> {
    Json(state.services.equipment.list(&query).await)
}

/// Number of assets per category
#[utoipa::path(
    get,
    path = "/equipment/categories",
    tag = "equipment",
    responses(
        (status = 200, description = "Category counts", body = CategoryCounts)
    )
)]
pub async fn category_counts(State(state): State<crate::AppState>) -> Json<CategoryCounts> {
    Json(state.services.equipment.category_counts().await)
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentOverview),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EquipmentOverview>> {
    let equipment = state.services.equipment.get_by_id(&id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(&id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment (its requests are kept)
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Requests filed against an asset
#[utoipa::path(
    get,
    path = "/equipment/{id}/requests",
    tag = "equipment",
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Requests for the equipment", body = Vec<MaintenanceRequest>)
    )
)]
pub async fn equipment_requests(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Vec<MaintenanceRequest>> {
    Json(state.services.equipment.requests(&id).await)
}
