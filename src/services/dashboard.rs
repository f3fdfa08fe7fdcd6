//! Dashboard service

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    store::SharedStore,
    views::{self, Dashboard},
};

/// Collection sizes at a given store revision
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SnapshotInfo {
    /// Changes whenever any collection changes
    pub revision: u64,
    pub equipment: usize,
    pub teams: usize,
    pub team_members: usize,
    pub requests: usize,
    pub departments: usize,
}

#[derive(Clone)]
pub struct DashboardService {
    store: SharedStore,
}

impl DashboardService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn dashboard(&self) -> Dashboard {
        let store = self.store.read().await;
        views::dashboard(&store.requests(), &store.equipment(), &store.teams())
    }

    pub async fn snapshot(&self) -> SnapshotInfo {
        let store = self.store.read().await;
        SnapshotInfo {
            revision: store.revision(),
            equipment: store.equipment().len(),
            teams: store.teams().len(),
            team_members: store.team_members().len(),
            requests: store.requests().len(),
            departments: store.departments().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    #[tokio::test]
    async fn test_snapshot_tracks_revision() {
        let store = store_with_team().into_shared();
        let service = DashboardService::new(store.clone());

        let before = service.snapshot().await;
        assert_eq!(before.revision, 0);
        assert_eq!(before.teams, 1);

        store.write().await.add_equipment(press("T1"));
        let after = service.snapshot().await;
        assert_eq!(after.revision, 1);
        assert_eq!(after.equipment, 1);
    }

    #[tokio::test]
    async fn test_dashboard_counts() {
        let store = store_with_team().into_shared();
        store.write().await.add_request(jam("equip-1", "T1"));
        let dashboard = DashboardService::new(store).dashboard().await;

        assert_eq!(dashboard.stats.total, 1);
        assert_eq!(dashboard.stats.new, 1);
        assert_eq!(dashboard.recent_requests.len(), 1);
        assert!(dashboard.needs_attention.is_empty());
    }
}
