//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::EquipmentCategory;

/// Equipment (asset) record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub category: EquipmentCategory,
    /// Owning department name
    pub department: String,
    /// Person or desk the asset is assigned to
    pub assigned_to: Option<String>,
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: Option<NaiveDate>,
    /// Team responsible for maintaining this asset
    pub maintenance_team_id: String,
    pub default_technician_id: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl Equipment {
    /// Warranty ran out strictly before `today`. Assets without a warranty never expire.
    pub fn is_warranty_expired(&self, today: NaiveDate) -> bool {
        self.warranty_expiry.map_or(false, |expiry| expiry < today)
    }
}

fn default_active() -> bool {
    true
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "serial_number is required"))]
    pub serial_number: String,
    pub category: EquipmentCategory,
    #[validate(length(min = 1, message = "department is required"))]
    pub department: String,
    pub assigned_to: Option<String>,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: Option<NaiveDate>,
    #[validate(length(min = 1, message = "maintenance_team_id is required"))]
    pub maintenance_team_id: String,
    pub default_technician_id: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub notes: Option<String>,
}

/// Update equipment request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub department: Option<String>,
    pub assigned_to: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub maintenance_team_id: Option<String>,
    pub default_technician_id: Option<String>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

/// Query parameters for the equipment listing
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Case-insensitive match on name, serial number or location
    pub search: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub department: Option<String>,
}

/// Equipment with the data shown on its card
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentOverview {
    #[serde(flatten)]
    pub equipment: Equipment,
    /// Name of the maintenance team, if it still exists
    pub team_name: Option<String>,
    /// Requests neither repaired nor scrapped
    pub open_requests: usize,
    pub warranty_expired: bool,
}

/// Number of assets per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCounts {
    pub all: usize,
    pub machine: usize,
    pub vehicle: usize,
    pub computer: usize,
    pub other: usize,
}
