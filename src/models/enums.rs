//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Machine,
    Vehicle,
    Computer,
    Other,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 4] = [
        EquipmentCategory::Machine,
        EquipmentCategory::Vehicle,
        EquipmentCategory::Computer,
        EquipmentCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentCategory::Machine => "machine",
            EquipmentCategory::Vehicle => "vehicle",
            EquipmentCategory::Computer => "computer",
            EquipmentCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a maintenance request (one kanban column each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    /// Board column order
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::New,
        RequestStatus::InProgress,
        RequestStatus::Repaired,
        RequestStatus::Scrap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Repaired => "repaired",
            RequestStatus::Scrap => "scrap",
        }
    }

    /// Column title shown on the board
    pub fn title(&self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Repaired => "Repaired",
            RequestStatus::Scrap => "Scrap",
        }
    }

    /// Still waiting for or under work
    pub fn is_active(&self) -> bool {
        matches!(self, RequestStatus::New | RequestStatus::InProgress)
    }

    /// Closed one way or another
    pub fn is_closed(&self) -> bool {
        matches!(self, RequestStatus::Repaired | RequestStatus::Scrap)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Corrective (breakdown) or preventive (scheduled) maintenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Corrective,
    Preventive,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Corrective => "corrective",
            RequestType::Preventive => "preventive",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MemberRole
// ---------------------------------------------------------------------------

/// Role of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Technician,
    Manager,
}

impl Default for MemberRole {
    fn default() -> Self {
        MemberRole::Technician
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Technician => write!(f, "technician"),
            MemberRole::Manager => write!(f, "manager"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: RequestStatus = serde_json::from_str("\"scrap\"").unwrap();
        assert_eq!(status, RequestStatus::Scrap);
    }

    #[test]
    fn test_status_classification() {
        assert!(RequestStatus::New.is_active());
        assert!(RequestStatus::InProgress.is_active());
        assert!(RequestStatus::Repaired.is_closed());
        assert!(RequestStatus::Scrap.is_closed());
        assert!(!RequestStatus::Scrap.is_active());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::Low < Priority::Medium);
        assert_eq!(Priority::default(), Priority::Medium);
    }
}
