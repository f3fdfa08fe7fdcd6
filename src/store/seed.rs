//! Seed dataset loaded into the store at startup

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{Department, Equipment, MaintenanceRequest, Team, TeamMember},
};

const EMBEDDED_SEED: &str = include_str!("../../data/seed.json");

/// Initial content of every collection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub requests: Vec<MaintenanceRequest>,
}

impl SeedData {
    /// Mock dataset shipped with the binary
    pub fn embedded() -> AppResult<Self> {
        Ok(serde_json::from_str(EMBEDDED_SEED)?)
    }

    /// Dataset read from a JSON file with the same layout as the embedded one
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Configured file if any, embedded dataset otherwise
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading seed data from {}", path);
                Self::from_file(path)
            }
            None => Self::embedded(),
        }
    }
}
