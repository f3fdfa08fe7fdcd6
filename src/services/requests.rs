//! Maintenance requests service

use validator::Validate;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        request::{CreateRequest, NewMaintenanceRequest, RequestQuery, UpdateRequest},
        MaintenanceRequest, RequestStatus,
    },
    store::SharedStore,
    views::{board::StatusBoard, filters, group_by_status},
};

#[derive(Clone)]
pub struct RequestsService {
    store: SharedStore,
    default_creator_id: String,
}

impl RequestsService {
    pub fn new(store: SharedStore, default_creator_id: String) -> Self {
        Self {
            store,
            default_creator_id,
        }
    }

    pub async fn list(&self, query: &RequestQuery) -> Vec<MaintenanceRequest> {
        filters::filter_requests(self.store.read().await.requests().iter(), query)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<MaintenanceRequest> {
        self.store
            .read()
            .await
            .request_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(Entity::Request, id))
    }

    /// File a new request.
    ///
    /// Without an explicit team the equipment's maintenance team is used. The
    /// equipment itself does not have to exist when a team is given.
    pub async fn create(&self, data: CreateRequest) -> AppResult<MaintenanceRequest> {
        data.validate()?;

        let mut store = self.store.write().await;
        let team_id = data
            .team_id
            .filter(|t| !t.is_empty())
            .or_else(|| {
                store
                    .equipment_by_id(&data.equipment_id)
                    .map(|e| e.maintenance_team_id.clone())
            })
            .ok_or_else(|| AppError::BadRequest("team_id is required".to_string()))?;

        let request = store.add_request(NewMaintenanceRequest {
            subject: data.subject,
            description: data.description,
            request_type: data.request_type,
            status: data.status.unwrap_or(RequestStatus::New),
            equipment_id: data.equipment_id,
            team_id,
            assigned_to_id: data.assigned_to_id,
            created_by_id: data
                .created_by_id
                .unwrap_or_else(|| self.default_creator_id.clone()),
            scheduled_date: data.scheduled_date,
            completed_at: None,
            duration: data.duration,
            priority: data.priority,
        });
        drop(store);

        tracing::info!(
            "Filed {} request {} on {} for team {}",
            request.request_type,
            request.id,
            request.equipment_id,
            request.team_id
        );
        Ok(request)
    }

    pub async fn update(&self, id: &str, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let request = self
            .store
            .write()
            .await
            .update_request(id, data)
            .ok_or_else(|| AppError::not_found(Entity::Request, id))?;
        tracing::debug!("Updated request {}", id);
        Ok(request)
    }

    /// Move a card to another column
    pub async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        let request = self
            .store
            .write()
            .await
            .update_request_status(id, status)
            .ok_or_else(|| AppError::not_found(Entity::Request, id))?;
        tracing::info!("Request {} moved to {}", id, status);
        Ok(request)
    }

    pub async fn board(&self, query: &RequestQuery) -> StatusBoard {
        let requests = self.list(query).await;
        group_by_status(requests.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, RequestType};
    use crate::store::fixtures::*;

    fn create_request(equipment_id: &str) -> CreateRequest {
        CreateRequest {
            subject: "Jam".to_string(),
            description: None,
            request_type: RequestType::Corrective,
            status: None,
            equipment_id: equipment_id.to_string(),
            team_id: None,
            assigned_to_id: None,
            created_by_id: None,
            scheduled_date: None,
            duration: None,
            priority: Priority::High,
        }
    }

    #[tokio::test]
    async fn test_team_is_filled_from_equipment() {
        let store = store_with_team().into_shared();
        let asset = store.write().await.add_equipment(press("T1"));
        let service = RequestsService::new(store, "user-1".to_string());

        let request = service.create(create_request(&asset.id)).await.unwrap();
        assert_eq!(request.team_id, "T1");
        assert_eq!(request.status, RequestStatus::New);
        assert_eq!(request.created_by_id, "user-1");
        assert!(!request.is_overdue);
    }

    #[tokio::test]
    async fn test_explicit_team_wins() {
        let store = store_with_team().into_shared();
        let asset = store.write().await.add_equipment(press("T1"));
        let service = RequestsService::new(store, "user-1".to_string());

        let mut data = create_request(&asset.id);
        data.team_id = Some("T2".to_string());
        data.created_by_id = Some("user-5".to_string());

        let request = service.create(data).await.unwrap();
        assert_eq!(request.team_id, "T2");
        assert_eq!(request.created_by_id, "user-5");
    }

    #[tokio::test]
    async fn test_missing_team_and_subject_are_rejected() {
        let service = RequestsService::new(store_with_team().into_shared(), "user-1".to_string());

        let unknown_equipment = service.create(create_request("equip-x")).await;
        assert!(matches!(unknown_equipment, Err(AppError::BadRequest(_))));

        let mut data = create_request("equip-x");
        data.subject = String::new();
        assert!(matches!(service.create(data).await, Err(AppError::Validation(_))));

        assert!(service.list(&RequestQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_status_flow_and_board() {
        let store = store_with_team().into_shared();
        let asset = store.write().await.add_equipment(press("T1"));
        let service = RequestsService::new(store, "user-1".to_string());

        let request = service.create(create_request(&asset.id)).await.unwrap();
        service
            .update_status(&request.id, RequestStatus::InProgress)
            .await
            .unwrap();
        let repaired = service
            .update_status(&request.id, RequestStatus::Repaired)
            .await
            .unwrap();
        assert!(repaired.completed_at.is_some());

        let board = service.board(&RequestQuery::default()).await;
        assert_eq!(board.column(RequestStatus::Repaired).map(|c| c.count), Some(1));
        assert_eq!(board.total(), 1);

        assert!(matches!(
            service.update_status("req-x", RequestStatus::Scrap).await,
            Err(AppError::NotFound(Entity::Request, _))
        ));
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let store = store_with_team().into_shared();
        let service = RequestsService::new(store, "user-1".to_string());
        let mut data = create_request("equip-1");
        data.team_id = Some("T1".to_string());
        let request = service.create(data).await.unwrap();

        let updated = service
            .update(
                &request.id,
                &UpdateRequest {
                    assigned_to_id: Some("user-2".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.assigned_to_id.as_deref(), Some("user-2"));
        assert_eq!(service.get_by_id(&request.id).await.unwrap(), updated);
        assert!(service.get_by_id("req-x").await.is_err());
    }
}
