//! Data models for Maintrack

pub mod department;
pub mod enums;
pub mod equipment;
pub mod request;
pub mod team;

// Re-export commonly used types
pub use department::Department;
pub use enums::{EquipmentCategory, MemberRole, Priority, RequestStatus, RequestType};
pub use equipment::Equipment;
pub use request::MaintenanceRequest;
pub use team::{Team, TeamMember};
