//! Dashboard figures and card summaries

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use super::filters::open_requests_for_equipment;
use crate::models::{
    equipment::EquipmentOverview, team::TeamSummary, Equipment, MaintenanceRequest, Priority,
    RequestStatus, Team, TeamMember,
};

/// Size of the "recent requests" list
pub const RECENT_REQUESTS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Requests whose stored overdue flag is set
    pub overdue: usize,
    pub active_equipment: usize,
    pub teams: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_requests: Vec<MaintenanceRequest>,
    pub needs_attention: Vec<MaintenanceRequest>,
}

pub fn dashboard_stats(
    requests: &[MaintenanceRequest],
    equipment: &[Equipment],
    teams: &[Team],
) -> DashboardStats {
    let count = |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();
    DashboardStats {
        total: requests.len(),
        new: count(RequestStatus::New),
        in_progress: count(RequestStatus::InProgress),
        completed: count(RequestStatus::Repaired),
        overdue: requests.iter().filter(|r| r.is_overdue).count(),
        active_equipment: equipment.iter().filter(|e| e.is_active).count(),
        teams: teams.len(),
    }
}

/// Newest first by `created_at`; ties keep store order
pub fn recent_requests(requests: &[MaintenanceRequest], limit: usize) -> Vec<MaintenanceRequest> {
    let mut sorted = requests.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// Overdue or urgent requests, in store order
pub fn needs_attention(requests: &[MaintenanceRequest]) -> Vec<MaintenanceRequest> {
    requests
        .iter()
        .filter(|r| r.is_overdue || r.priority == Priority::Urgent)
        .cloned()
        .collect()
}

pub fn dashboard(
    requests: &[MaintenanceRequest],
    equipment: &[Equipment],
    teams: &[Team],
) -> Dashboard {
    Dashboard {
        stats: dashboard_stats(requests, equipment, teams),
        recent_requests: recent_requests(requests, RECENT_REQUESTS),
        needs_attention: needs_attention(requests),
    }
}

pub fn equipment_overview(
    equipment: &Equipment,
    teams: &[Team],
    requests: &[MaintenanceRequest],
    today: NaiveDate,
) -> EquipmentOverview {
    EquipmentOverview {
        team_name: teams
            .iter()
            .find(|t| t.id == equipment.maintenance_team_id)
            .map(|t| t.name.clone()),
        open_requests: open_requests_for_equipment(requests, &equipment.id),
        warranty_expired: equipment.is_warranty_expired(today),
        equipment: equipment.clone(),
    }
}

pub fn team_summary(
    team: &Team,
    members: &[TeamMember],
    requests: &[MaintenanceRequest],
) -> TeamSummary {
    let team_requests = || requests.iter().filter(|r| r.team_id == team.id);
    TeamSummary {
        team: team.clone(),
        members: members.iter().filter(|m| m.team_id == team.id).cloned().collect(),
        active_requests: team_requests().filter(|r| r.status.is_active()).count(),
        completed_requests: team_requests()
            .filter(|r| r.status == RequestStatus::Repaired)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::request::UpdateRequest;
    use crate::store::{fixtures::*, MaintenanceStore, SeedData};

    #[test]
    fn test_stats_count_each_status() {
        let mut store = store_with_team();
        let asset = store.add_equipment(press("T1"));
        let mut idle = press("T1");
        idle.is_active = false;
        store.add_equipment(idle);

        let a = store.add_request(jam(&asset.id, "T1"));
        let b = store.add_request(jam(&asset.id, "T1"));
        store.add_request(jam(&asset.id, "T1"));
        store.update_request_status(&a.id, RequestStatus::InProgress);
        store.update_request_status(&b.id, RequestStatus::Repaired);

        let stats = dashboard_stats(&store.requests(), &store.equipment(), &store.teams());
        assert_eq!(
            stats,
            DashboardStats {
                total: 3,
                new: 1,
                in_progress: 1,
                completed: 1,
                overdue: 0,
                active_equipment: 1,
                teams: 1,
            }
        );
    }

    #[test]
    fn test_recent_requests_newest_first() {
        let mut store = store_with_team();
        store.add_request(jam("equip-1", "T1"));
        let new = store.add_request(jam("equip-1", "T1"));

        // force a clear ordering regardless of clock resolution
        let mut requests = store.requests().as_ref().clone();
        requests[0].created_at = Utc::now() - Duration::days(2);

        let recent = recent_requests(&requests, 1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, new.id);
        assert_eq!(recent_requests(&requests, 10).len(), 2);
    }

    #[test]
    fn test_needs_attention() {
        let mut store = store_with_team();
        let urgent = store.add_request(crate::models::request::NewMaintenanceRequest {
            priority: Priority::Urgent,
            ..jam("equip-1", "T1")
        });
        let flagged = store.add_request(jam("equip-1", "T1"));
        store.add_request(jam("equip-1", "T1"));
        store.update_request(
            &flagged.id,
            &UpdateRequest {
                is_overdue: Some(true),
                ..Default::default()
            },
        );

        let ids: Vec<_> = needs_attention(&store.requests())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![urgent.id, flagged.id]);
    }

    #[test]
    fn test_equipment_overview() {
        let mut store = store_with_team();
        let asset = store.add_equipment(press("T1"));
        store.add_request(jam(&asset.id, "T1"));
        let scrapped = store.add_request(jam(&asset.id, "T1"));
        store.update_request_status(&scrapped.id, RequestStatus::Scrap);

        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let overview = equipment_overview(&asset, &store.teams(), &store.requests(), today);
        assert_eq!(overview.team_name.as_deref(), Some("Mechanics"));
        assert_eq!(overview.open_requests, 1);
        assert!(overview.warranty_expired);

        let before_expiry = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        assert!(!equipment_overview(&asset, &[], &[], before_expiry).warranty_expired);
        assert!(equipment_overview(&asset, &[], &[], before_expiry).team_name.is_none());
    }

    #[test]
    fn test_team_summary() {
        let mut store = store_with_team();
        store.add_team_member(member("T1", "Alice"));
        store.add_team_member(member("T2", "Bob"));
        let a = store.add_request(jam("equip-1", "T1"));
        let b = store.add_request(jam("equip-1", "T1"));
        store.add_request(jam("equip-1", "T2"));
        store.update_request_status(&a.id, RequestStatus::Repaired);
        store.update_request_status(&b.id, RequestStatus::InProgress);

        let team = store.team_by_id("T1").unwrap().clone();
        let summary = team_summary(&team, &store.team_members(), &store.requests());
        assert_eq!(summary.members.len(), 1);
        assert_eq!(summary.members[0].name, "Alice");
        assert_eq!(summary.active_requests, 1);
        assert_eq!(summary.completed_requests, 1);
    }

    #[test]
    fn test_seeded_dashboard() {
        let store = MaintenanceStore::new(SeedData::embedded().unwrap());
        let view = dashboard(&store.requests(), &store.equipment(), &store.teams());

        assert_eq!(view.stats.total, store.requests().len());
        assert!(view.recent_requests.len() <= RECENT_REQUESTS);
        assert!(view
            .needs_attention
            .iter()
            .all(|r| r.is_overdue || r.priority == Priority::Urgent));
    }
}
