//! Error types for Maintrack server
//!
//! The store itself never fails; these errors come from the API surface
//! (unknown ids, missing input) and from startup (seed data, configuration).

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchEquipment = 2,
    NoSuchTeam = 3,
    NoSuchMember = 4,
    NoSuchRequest = 5,
    BadValue = 6,
    MissingField = 7,
}

/// Kind of record a lookup failed for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Equipment,
    Team,
    TeamMember,
    Request,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Equipment => "Equipment",
            Entity::Team => "Team",
            Entity::TeamMember => "Team member",
            Entity::Request => "Request",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} {1} not found")]
    NotFound(Entity, String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        AppError::NotFound(entity, id.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(entity, _) => {
                let code = match entity {
                    Entity::Equipment => ErrorCode::NoSuchEquipment,
                    Entity::Team => ErrorCode::NoSuchTeam,
                    Entity::TeamMember => ErrorCode::NoSuchMember,
                    Entity::Request => ErrorCode::NoSuchRequest,
                };
                (StatusCode::NOT_FOUND, code, self.to_string())
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::MissingField,
                validation_message(errors),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Seed(e) => {
                tracing::error!("Seed data error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Seed data error".to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// One message per failed field, ordered by field name
fn validation_message(errors: &validator::ValidationErrors) -> String {
    // `field_errors()` is a hash map; its order changes between runs
    let mut field_errors: Vec<_> = errors.field_errors().into_iter().collect();
    field_errors.sort_by(|(a, _), (b, _)| a.cmp(b));
    field_errors
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found(Entity::TeamMember, "user-9");
        assert_eq!(err.to_string(), "Team member user-9 not found");
    }

    #[test]
    fn test_status_codes() {
        let response = AppError::not_found(Entity::Equipment, "equip-1").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = AppError::BadRequest("month out of range".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Io(std::io::Error::other("disk gone")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_message_is_ordered_by_field() {
        use validator::Validate;

        let mut data = crate::store::fixtures::press("T1");
        data.name = String::new();
        data.location = String::new();
        data.serial_number = String::new();
        data.maintenance_team_id = String::new();

        let expected = "location is required, maintenance_team_id is required, \
                        name is required, serial_number is required";
        // Each run builds a fresh hash map with its own iteration order
        for _ in 0..8 {
            let errors = data.validate().unwrap_err();
            assert_eq!(validation_message(&errors), expected);
        }
    }
}
