//! In-memory entity store
//!
//! Holds the five collections behind `Arc<Vec<_>>` snapshots. Every effective
//! mutation installs a fresh snapshot for the collection it touches and bumps
//! the store revision, so observers can detect change with [`Arc::ptr_eq`]
//! (in process) or by comparing revisions (over the wire) instead of deep
//! comparison.
//!
//! Nothing here validates foreign keys or fails: lookups on unknown ids return
//! `None` and mutations on unknown ids are silent no-ops.

pub mod equipment;
pub mod requests;
pub mod seed;
pub mod teams;

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Department, Equipment, MaintenanceRequest, Team, TeamMember};

pub use seed::SeedData;

/// Store handle shared by the services
pub type SharedStore = Arc<RwLock<MaintenanceStore>>;

#[derive(Debug, Clone, Default)]
pub struct MaintenanceStore {
    equipment: Arc<Vec<Equipment>>,
    teams: Arc<Vec<Team>>,
    team_members: Arc<Vec<TeamMember>>,
    requests: Arc<Vec<MaintenanceRequest>>,
    departments: Arc<Vec<Department>>,
    revision: u64,
}

impl MaintenanceStore {
    /// Build a store holding exactly the given seed collections
    pub fn new(seed: SeedData) -> Self {
        Self {
            equipment: Arc::new(seed.equipment),
            teams: Arc::new(seed.teams),
            team_members: Arc::new(seed.team_members),
            requests: Arc::new(seed.requests),
            departments: Arc::new(seed.departments),
            revision: 0,
        }
    }

    /// Wrap the store for sharing across handlers
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn equipment(&self) -> Arc<Vec<Equipment>> {
        Arc::clone(&self.equipment)
    }

    pub fn teams(&self) -> Arc<Vec<Team>> {
        Arc::clone(&self.teams)
    }

    pub fn team_members(&self) -> Arc<Vec<TeamMember>> {
        Arc::clone(&self.team_members)
    }

    pub fn requests(&self) -> Arc<Vec<MaintenanceRequest>> {
        Arc::clone(&self.requests)
    }

    pub fn departments(&self) -> Arc<Vec<Department>> {
        Arc::clone(&self.departments)
    }

    /// Number of effective mutations since the store was built
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn department_by_id(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

/// Opaque unique id such as `equip-5f0c...`
fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Copy the collection, apply `edit` to the copy and install it as the new snapshot
fn rewrite<T: Clone, R>(collection: &mut Arc<Vec<T>>, edit: impl FnOnce(&mut Vec<T>) -> R) -> R {
    let mut next = collection.as_ref().clone();
    let out = edit(&mut next);
    *collection = Arc::new(next);
    out
}

/// Apply `Some` fields of a partial update onto a record
macro_rules! merge_fields {
    ($target:expr, $update:expr, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(ref value) = $update.$field {
                $target.$field = value.clone().into();
            }
        )*
    };
}
pub(crate) use merge_fields;


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = generate_id("equip");
        let b = generate_id("equip");
        assert!(a.starts_with("equip-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_mutation_installs_new_snapshot() {
        let mut store = store_with_team();
        let before = store.equipment();
        let teams_before = store.teams();

        store.add_equipment(press("T1"));

        assert!(!Arc::ptr_eq(&before, &store.equipment()));
        assert!(before.is_empty(), "old snapshot must stay untouched");
        assert!(Arc::ptr_eq(&teams_before, &store.teams()));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_no_op_keeps_snapshot_identity() {
        let mut store = store_with_team();
        let before = store.equipment();

        store.delete_equipment("missing");
        store.update_equipment("missing", &Default::default());

        assert!(Arc::ptr_eq(&before, &store.equipment()));
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_department_lookup() {
        let store = store_with_team();
        assert_eq!(store.department_by_id("dept-1").map(|d| d.name.as_str()), Some("Production"));
        assert!(store.department_by_id("dept-9").is_none());
    }
}
