//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{calendar, equipment, health, requests, teams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Maintrack API",
        version = "1.0.0",
        description = "Maintenance tracking REST API: equipment, teams, requests, board and calendar"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        health::snapshot,
        // Equipment
        equipment::list_equipment,
        equipment::category_counts,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::equipment_requests,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::team_members,
        teams::list_members,
        teams::get_member,
        teams::create_member,
        teams::list_departments,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::update_request_status,
        requests::get_board,
        // Calendar & dashboard
        calendar::get_month,
        calendar::get_day,
        calendar::get_dashboard,
    ),
    components(
        schemas(
            // Enums
            crate::models::EquipmentCategory,
            crate::models::RequestStatus,
            crate::models::RequestType,
            crate::models::Priority,
            crate::models::MemberRole,
            // Equipment
            crate::models::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::equipment::EquipmentOverview,
            crate::models::equipment::CategoryCounts,
            // Teams
            crate::models::Department,
            crate::models::Team,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            crate::models::TeamMember,
            crate::models::team::CreateTeamMember,
            crate::models::team::TeamSummary,
            // Requests
            crate::models::MaintenanceRequest,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            crate::models::request::UpdateRequestStatus,
            // Views
            crate::views::board::BoardColumn,
            crate::views::StatusBoard,
            crate::views::calendar::CalendarDay,
            crate::views::calendar::CalendarMonth,
            crate::views::Dashboard,
            crate::views::DashboardStats,
            // Health
            health::HealthResponse,
            crate::services::dashboard::SnapshotInfo,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "teams", description = "Maintenance teams, members and departments"),
        (name = "requests", description = "Maintenance requests and kanban board"),
        (name = "calendar", description = "Preventive maintenance calendar"),
        (name = "dashboard", description = "Dashboard overview")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
