//! Preventive maintenance calendar service

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::MaintenanceRequest,
    store::SharedStore,
    views::calendar::{self, CalendarMonth},
};

#[derive(Clone)]
pub struct CalendarService {
    store: SharedStore,
}

impl CalendarService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn month(&self, year: i32, month: u32) -> AppResult<CalendarMonth> {
        let requests = self.store.read().await.requests();
        calendar::month_view(requests.iter(), year, month)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{}", year, month)))
    }

    /// Scheduled preventive requests on one day
    pub async fn day(&self, day: NaiveDate) -> Vec<MaintenanceRequest> {
        let requests = self.store.read().await.requests();
        calendar::requests_on_day(requests.iter(), day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::*;

    #[tokio::test]
    async fn test_month_and_day() {
        let store = store_with_team().into_shared();
        store.write().await.add_request(inspection("equip-1", "T1"));
        let service = CalendarService::new(store);

        let june = service.month(2024, 6).await.unwrap();
        let scheduled: usize = june.days.iter().map(|d| d.requests.len()).sum();
        assert_eq!(scheduled, 1);

        let july = service.month(2024, 7).await.unwrap();
        assert!(july.days.iter().all(|d| d.requests.is_empty()));

        let day = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(service.day(day).await.len(), 1);
        assert!(matches!(service.month(2024, 14).await, Err(AppError::BadRequest(_))));
    }
}
