//! Team, member and department API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    api::ApiJson,
    error::AppResult,
    models::{
        team::{CreateTeam, CreateTeamMember, TeamSummary, UpdateTeam},
        Department, Team, TeamMember,
    },
};

// ---- Teams ----

/// List teams with their members and request counts
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Teams", body = Vec<TeamSummary>)
    )
)]
pub async fn list_teams(State(state): State<crate::AppState>) -> Json<Vec<TeamSummary>> {
    Json(state.services.teams.list().await)
}

/// Get a team
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = TeamSummary),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamSummary>> {
    Ok(Json(state.services.teams.get_by_id(&id).await?))
}

/// Create a team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 400, description = "Missing team name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    let team = state.services.teams.create(data).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// Update a team
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 404, description = "Team not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateTeam>,
) -> AppResult<Json<Team>> {
    Ok(Json(state.services.teams.update(&id, &data).await?))
}

/// Members of a team
#[utoipa::path(
    get,
    path = "/teams/{id}/members",
    tag = "teams",
    params(("id" = String, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team members", body = Vec<TeamMember>)
    )
)]
pub async fn team_members(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> Json<Vec<TeamMember>> {
    Json(state.services.teams.members_of(&id).await)
}

// ---- Members ----

/// List all team members
#[utoipa::path(
    get,
    path = "/members",
    tag = "teams",
    responses(
        (status = 200, description = "Team members", body = Vec<TeamMember>)
    )
)]
pub async fn list_members(State(state): State<crate::AppState>) -> Json<Vec<TeamMember>> {
    Json(state.services.teams.list_members().await)
}

/// Get a team member
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "teams",
    params(("id" = String, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Team member", body = TeamMember),
        (status = 404, description = "Member not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamMember>> {
    Ok(Json(state.services.teams.get_member(&id).await?))
}

/// Add a member to a team
#[utoipa::path(
    post,
    path = "/members",
    tag = "teams",
    request_body = CreateTeamMember,
    responses(
        (status = 201, description = "Member added", body = TeamMember),
        (status = 400, description = "Missing or invalid field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateTeamMember>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let member = state.services.teams.add_member(data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// ---- Departments ----

/// List departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "teams",
    responses(
        (status = 200, description = "Departments", body = Vec<Department>)
    )
)]
pub async fn list_departments(State(state): State<crate::AppState>) -> Json<Vec<Department>> {
    Json(state.services.teams.departments().await)
}
