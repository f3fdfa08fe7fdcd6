//! Listing filters for equipment and requests
//!
//! Plain predicates over the snapshot, no index. A `None` criterion matches
//! everything, as does an empty search string.

use crate::models::{
    equipment::{CategoryCounts, EquipmentQuery},
    request::RequestQuery,
    Equipment, EquipmentCategory, MaintenanceRequest,
};

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl EquipmentQuery {
    pub fn matches(&self, equipment: &Equipment) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(search) => {
                let needle = search.to_lowercase();
                contains_ignore_case(&equipment.name, &needle)
                    || contains_ignore_case(&equipment.serial_number, &needle)
                    || contains_ignore_case(&equipment.location, &needle)
            }
            None => true,
        };
        let matches_category = self.category.map_or(true, |c| equipment.category == c);
        let matches_department = self
            .department
            .as_deref()
            .map_or(true, |d| equipment.department == d);

        matches_search && matches_category && matches_department
    }
}

impl RequestQuery {
    pub fn matches(&self, request: &MaintenanceRequest) -> bool {
        let matches_search = self
            .search
            .as_deref()
            .map_or(true, |s| contains_ignore_case(&request.subject, &s.to_lowercase()));
        let matches_team = self.team_id.as_deref().map_or(true, |t| request.team_id == t);
        let matches_type = self.request_type.map_or(true, |t| request.request_type == t);
        let matches_equipment = self
            .equipment_id
            .as_deref()
            .map_or(true, |e| request.equipment_id == e);

        matches_search && matches_team && matches_type && matches_equipment
    }
}

pub fn filter_equipment<'a, I>(equipment: I, query: &EquipmentQuery) -> Vec<Equipment>
where
    I: IntoIterator<Item = &'a Equipment>,
{
    equipment.into_iter().filter(|e| query.matches(e)).cloned().collect()
}

pub fn filter_requests<'a, I>(requests: I, query: &RequestQuery) -> Vec<MaintenanceRequest>
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    requests.into_iter().filter(|r| query.matches(r)).cloned().collect()
}

/// Requests on an asset that are neither repaired nor scrapped
pub fn open_requests_for_equipment<'a, I>(requests: I, equipment_id: &str) -> usize
where
    I: IntoIterator<Item = &'a MaintenanceRequest>,
{
    requests
        .into_iter()
        .filter(|r| r.equipment_id == equipment_id && !r.status.is_closed())
        .count()
}

pub fn category_counts<'a, I>(equipment: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a Equipment>,
{
    let mut counts = CategoryCounts::default();
    for e in equipment {
        counts.all += 1;
        match e.category {
            EquipmentCategory::Machine => counts.machine += 1,
            EquipmentCategory::Vehicle => counts.vehicle += 1,
            EquipmentCategory::Computer => counts.computer += 1,
            EquipmentCategory::Other => counts.other += 1,
        }
    }
    counts
}
