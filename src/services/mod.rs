//! Business logic services

pub mod calendar;
pub mod dashboard;
pub mod equipment;
pub mod requests;
pub mod teams;

use crate::{config::StoreConfig, store::SharedStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub teams: teams::TeamsService,
    pub requests: requests::RequestsService,
    pub calendar: calendar::CalendarService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services on top of the shared store
    pub fn new(store: SharedStore, store_config: &StoreConfig) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(store.clone()),
            teams: teams::TeamsService::new(store.clone()),
            requests: requests::RequestsService::new(
                store.clone(),
                store_config.default_creator_id.clone(),
            ),
            calendar: calendar::CalendarService::new(store.clone()),
            dashboard: dashboard::DashboardService::new(store),
        }
    }
}
