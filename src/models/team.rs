//! Maintenance team and team member models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::MemberRole;

/// Maintenance team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Display color (hex string, not validated)
    pub color: String,
}

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub color: String,
}

/// Update team request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Technician or manager belonging to a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub team_id: String,
    pub avatar: Option<String>,
    pub role: MemberRole,
}

/// Create team member request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTeamMember {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "team_id is required"))]
    pub team_id: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: MemberRole,
}

/// Team with the data shown on its card
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamSummary {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<TeamMember>,
    /// Requests that are new or in progress
    pub active_requests: usize,
    /// Requests that reached the repaired state
    pub completed_requests: usize,
}
