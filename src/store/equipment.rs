//! Equipment operations on MaintenanceStore

use super::{generate_id, merge_fields, rewrite, MaintenanceStore};
use crate::models::{
    equipment::{CreateEquipment, UpdateEquipment},
    Equipment, MaintenanceRequest,
};

impl MaintenanceStore {
    /// Append a new asset. The maintenance team is not checked.
    pub fn add_equipment(&mut self, data: CreateEquipment) -> Equipment {
        let equipment = Equipment {
            id: generate_id("equip"),
            name: data.name,
            serial_number: data.serial_number,
            category: data.category,
            department: data.department,
            assigned_to: data.assigned_to,
            location: data.location,
            purchase_date: data.purchase_date,
            warranty_expiry: data.warranty_expiry,
            maintenance_team_id: data.maintenance_team_id,
            default_technician_id: data.default_technician_id,
            is_active: data.is_active,
            notes: data.notes,
        };
        let created = equipment.clone();
        rewrite(&mut self.equipment, |all| all.push(equipment));
        self.bump();
        created
    }

    /// Merge the given fields into an asset; `None` if there is no such asset
    pub fn update_equipment(&mut self, id: &str, data: &UpdateEquipment) -> Option<Equipment> {
        let idx = self.equipment.iter().position(|e| e.id == id)?;
        let updated = rewrite(&mut self.equipment, |all| {
            let target = &mut all[idx];
            merge_fields!(target, data, [
                name,
                serial_number,
                category,
                department,
                assigned_to,
                location,
                purchase_date,
                warranty_expiry,
                maintenance_team_id,
                default_technician_id,
                is_active,
                notes,
            ]);
            target.clone()
        });
        self.bump();
        Some(updated)
    }

    /// Remove an asset. Requests pointing at it are left as they are.
    pub fn delete_equipment(&mut self, id: &str) -> bool {
        if !self.equipment.iter().any(|e| e.id == id) {
            return false;
        }
        rewrite(&mut self.equipment, |all| all.retain(|e| e.id != id));
        self.bump();
        true
    }

    pub fn equipment_by_id(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    /// Requests filed against an asset, in insertion order
    pub fn requests_for_equipment(&self, equipment_id: &str) -> Vec<MaintenanceRequest> {
        self.requests
            .iter()
            .filter(|r| r.equipment_id == equipment_id)
            .cloned()
            .collect()
    }
}
