//! Equipment service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        equipment::{CategoryCounts, CreateEquipment, EquipmentOverview, EquipmentQuery, UpdateEquipment},
        Equipment, MaintenanceRequest,
    },
    store::SharedStore,
    views::{dashboard::equipment_overview, filters},
};
use validator::Validate;

#[derive(Clone)]
pub struct EquipmentService {
    store: SharedStore,
}

impl EquipmentService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Filtered asset cards
    pub async fn list(&self, query: &EquipmentQuery) -> Vec<EquipmentOverview> {
        let store = self.store.read().await;
        let (teams, requests) = (store.teams(), store.requests());
        let today = Utc::now().date_naive();
        filters::filter_equipment(store.equipment().iter(), query)
            .iter()
            .map(|e| equipment_overview(e, &teams, &requests, today))
            .collect()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentOverview> {
        let store = self.store.read().await;
        let equipment = store
            .equipment_by_id(id)
            .ok_or_else(|| AppError::not_found(Entity::Equipment, id))?;
        Ok(equipment_overview(
            equipment,
            &store.teams(),
            &store.requests(),
            Utc::now().date_naive(),
        ))
    }

    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let equipment = self.store.write().await.add_equipment(data);
        tracing::info!("Created equipment {} ({})", equipment.id, equipment.name);
        Ok(equipment)
    }

    pub async fn update(&self, id: &str, data: &UpdateEquipment) -> AppResult<Equipment> {
        let equipment = self
            .store
            .write()
            .await
            .update_equipment(id, data)
            .ok_or_else(|| AppError::not_found(Entity::Equipment, id))?;
        tracing::debug!("Updated equipment {}", id);
        Ok(equipment)
    }

    /// Requests referencing the asset are kept
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.store.write().await.delete_equipment(id) {
            return Err(AppError::not_found(Entity::Equipment, id));
        }
        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }

    /// Requests filed against an asset, including after the asset was deleted
    pub async fn requests(&self, id: &str) -> Vec<MaintenanceRequest> {
        self.store.read().await.requests_for_equipment(id)
    }

    pub async fn category_counts(&self) -> CategoryCounts {
        filters::category_counts(self.store.read().await.equipment().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EquipmentCategory;
    use crate::store::fixtures::*;

    fn service() -> EquipmentService {
        EquipmentService::new(store_with_team().into_shared())
    }

    #[tokio::test]
    async fn test_create_validates_required_fields() {
        let service = service();
        let mut data = press("T1");
        data.serial_number = String::new();

        let err = service.create(data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(service.list(&EquipmentQuery::default()).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_list_and_get() {
        let service = service();
        let created = service.create(press("T1")).await.unwrap();

        let listed = service.list(&EquipmentQuery::default()).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].team_name.as_deref(), Some("Mechanics"));

        let card = service.get_by_id(&created.id).await.unwrap();
        assert_eq!(card.equipment, created);
        assert_eq!(card.open_requests, 0);

        let counts = service.category_counts().await;
        assert_eq!(counts.all, 1);
        assert_eq!(counts.machine, 1);

        let query = EquipmentQuery {
            category: Some(EquipmentCategory::Vehicle),
            ..Default::default()
        };
        assert!(service.list(&query).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let service = service();
        assert!(matches!(
            service.get_by_id("equip-x").await,
            Err(AppError::NotFound(Entity::Equipment, _))
        ));
        assert!(service.update("equip-x", &UpdateEquipment::default()).await.is_err());
        assert!(service.delete("equip-x").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_keeps_requests() {
        let store = store_with_team().into_shared();
        let service = EquipmentService::new(store.clone());
        let created = service.create(press("T1")).await.unwrap();
        store.write().await.add_request(jam(&created.id, "T1"));

        service.delete(&created.id).await.unwrap();

        assert!(service.get_by_id(&created.id).await.is_err());
        assert_eq!(service.requests(&created.id).await.len(), 1);
    }
}
