//! Maintrack maintenance tracking server
//!
//! An in-memory entity store for equipment, maintenance teams and
//! maintenance requests, with derived views (kanban board, preventive
//! calendar, dashboard) served over a REST JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire services around a freshly loaded store
    pub fn new(config: AppConfig, store: store::MaintenanceStore) -> Self {
        let services = services::Services::new(store.into_shared(), &config.store);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
