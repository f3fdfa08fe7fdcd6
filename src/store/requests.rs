//! Maintenance request operations on MaintenanceStore

use chrono::Utc;

use super::{generate_id, merge_fields, rewrite, MaintenanceStore};
use crate::models::{
    enums::RequestStatus,
    request::{NewMaintenanceRequest, UpdateRequest},
    MaintenanceRequest,
};

impl MaintenanceStore {
    /// File a request. `created_at` is now and `is_overdue` always starts false.
    pub fn add_request(&mut self, data: NewMaintenanceRequest) -> MaintenanceRequest {
        let request = MaintenanceRequest {
            id: generate_id("req"),
            subject: data.subject,
            description: data.description,
            request_type: data.request_type,
            status: data.status,
            equipment_id: data.equipment_id,
            team_id: data.team_id,
            assigned_to_id: data.assigned_to_id,
            created_by_id: data.created_by_id,
            created_at: Utc::now(),
            scheduled_date: data.scheduled_date,
            completed_at: data.completed_at,
            duration: data.duration,
            priority: data.priority,
            is_overdue: false,
        };
        let created = request.clone();
        rewrite(&mut self.requests, |all| all.push(request));
        self.bump();
        created
    }

    /// Plain merge, with no status side effects
    pub fn update_request(&mut self, id: &str, data: &UpdateRequest) -> Option<MaintenanceRequest> {
        let idx = self.requests.iter().position(|r| r.id == id)?;
        let updated = rewrite(&mut self.requests, |all| {
            let target = &mut all[idx];
            merge_fields!(target, data, [
                subject,
                description,
                request_type,
                status,
                equipment_id,
                team_id,
                assigned_to_id,
                created_by_id,
                scheduled_date,
                completed_at,
                duration,
                priority,
                is_overdue,
            ]);
            target.clone()
        });
        self.bump();
        Some(updated)
    }

    /// Move a request to another status.
    ///
    /// Entering `repaired` stamps `completed_at` with the current time; no
    /// transition ever clears it.
    pub fn update_request_status(
        &mut self,
        id: &str,
        status: RequestStatus,
    ) -> Option<MaintenanceRequest> {
        let idx = self.requests.iter().position(|r| r.id == id)?;
        let updated = rewrite(&mut self.requests, |all| {
            let target = &mut all[idx];
            target.status = status;
            if status == RequestStatus::Repaired {
                target.completed_at = Some(Utc::now());
            }
            target.clone()
        });
        self.bump();
        Some(updated)
    }

    pub fn request_by_id(&self, id: &str) -> Option<&MaintenanceRequest> {
        self.requests.iter().find(|r| r.id == id)
    }
}
