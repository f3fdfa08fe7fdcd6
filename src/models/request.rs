//! Maintenance request model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{Priority, RequestStatus, RequestType};

/// Maintenance request (a kanban card)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequest {
    pub id: String,
    pub subject: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub equipment_id: String,
    pub team_id: String,
    /// Technician in charge
    pub assigned_to_id: Option<String>,
    pub created_by_id: String,
    pub created_at: DateTime<Utc>,
    /// Planned date, meaningful for preventive requests only
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Expected duration in minutes
    pub duration: Option<u32>,
    pub priority: Priority,
    /// Set to false at creation and never recomputed
    pub is_overdue: bool,
}

impl MaintenanceRequest {
    /// UTC calendar day of the scheduled date
    pub fn scheduled_day(&self) -> Option<NaiveDate> {
        self.scheduled_date.map(|date| date.date_naive())
    }
}

/// Fields accepted by the store when filing a request.
///
/// `id`, `created_at` and `is_overdue` are always assigned by the store.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewMaintenanceRequest {
    pub subject: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub equipment_id: String,
    pub team_id: String,
    pub assigned_to_id: Option<String>,
    pub created_by_id: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub priority: Priority,
}

/// Create request payload, as submitted by a client.
///
/// `team_id` falls back to the equipment's maintenance team, `status` to new and
/// `created_by_id` to the configured current user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,
    pub description: Option<String>,
    #[serde(rename = "type", default = "default_request_type")]
    pub request_type: RequestType,
    pub status: Option<RequestStatus>,
    #[validate(length(min = 1, message = "equipment_id is required"))]
    pub equipment_id: String,
    pub team_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub created_by_id: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    #[serde(default)]
    pub priority: Priority,
}

fn default_request_type() -> RequestType {
    RequestType::Corrective
}

/// Update request payload
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRequest {
    pub subject: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub status: Option<RequestStatus>,
    pub equipment_id: Option<String>,
    pub team_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub created_by_id: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration: Option<u32>,
    pub priority: Option<Priority>,
    pub is_overdue: Option<bool>,
}

/// Status transition payload (a card dropped on a board column)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
}

/// Query parameters for request listings and the board
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct RequestQuery {
    /// Case-insensitive match on the subject
    pub search: Option<String>,
    pub team_id: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub equipment_id: Option<String>,
}
