//! Dealership inventory
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::DISCOUNT_FOR_NEW_CUSTOMERS;
use crate::vehicle::{Vehicle, VehicleKind};

/// Shared handle to a vehicle held by a [`Dealership`]. Identity is the
/// allocation the handle points at.
pub type VehicleHandle = Arc<dyn Vehicle + Send + Sync>;

fn same_vehicle(a: &VehicleHandle, b: &VehicleHandle) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

fn position_of(list: &[VehicleHandle], vehicle: &VehicleHandle) -> Option<usize> {
    list.iter().position(|candidate| same_vehicle(candidate, vehicle))
}

/// Vehicles for sale, plus the off-road capable subset of them.
///
/// Every mutation updates both listings, so the off-road listing is always a
/// subset of the for-sale listing.
#[derive(Debug, Default)]
pub struct Dealership {
    for_sale: Vec<VehicleHandle>,
    off_road: Vec<VehicleHandle>,
}

/// One vehicle as shown in an [`InventoryReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub kind: VehicleKind,
    pub color: String,
    pub fuel_type: String,
    pub height: i32,
    /// Current off-road state, `None` for vehicles without the capability
    pub off_road: Option<bool>,
}

/// Serializable snapshot of a dealership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub discount_percent: u32,
    pub for_sale: Vec<InventoryLine>,
    pub off_road_count: usize,
}

impl Dealership {
    /// Discount percentage offered to new customers.
    pub const DISCOUNT_FOR_NEW_CUSTOMERS: u32 = DISCOUNT_FOR_NEW_CUSTOMERS;

    /// Create an empty dealership.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn discount_for_new_customers() -> u32 {
        Self::DISCOUNT_FOR_NEW_CUSTOMERS
    }

    /// Put a vehicle up for sale. Off-road capable vehicles are also listed as
    /// off-road. The same handle may be added more than once.
    pub fn add_vehicle(&mut self, vehicle: VehicleHandle) {
        if vehicle.as_off_road().is_some() {
            self.off_road.push(Arc::clone(&vehicle));
        }
        log::debug!(
            "listing {} ({}), {} for sale",
            vehicle.kind(),
            vehicle.color(),
            self.for_sale.len() + 1
        );
        self.for_sale.push(vehicle);
    }

    /// Remove the first occurrence of `vehicle` from both listings.
    ///
    /// Returns `false` and changes nothing when the vehicle is not for sale.
    pub fn remove_vehicle(&mut self, vehicle: &VehicleHandle) -> bool {
        let Some(index) = position_of(&self.for_sale, vehicle) else {
            return false;
        };
        self.for_sale.remove(index);
        if let Some(index) = position_of(&self.off_road, vehicle) {
            self.off_road.remove(index);
        }
        log::debug!(
            "removed {} ({}), {} for sale",
            vehicle.kind(),
            vehicle.color(),
            self.for_sale.len()
        );
        true
    }

    /// Vehicles for sale, in insertion order.
    #[must_use]
    pub fn list_for_sale(&self) -> Vec<VehicleHandle> {
        self.for_sale.clone()
    }

    /// Off-road capable vehicles for sale, in insertion order.
    #[must_use]
    pub fn list_off_road(&self) -> Vec<VehicleHandle> {
        self.off_road.clone()
    }

    #[must_use]
    pub fn contains(&self, vehicle: &VehicleHandle) -> bool {
        position_of(&self.for_sale, vehicle).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.for_sale.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.for_sale.is_empty()
    }

    #[must_use]
    pub fn inventory(&self) -> InventoryReport {
        let for_sale = self
            .for_sale
            .iter()
            .map(|vehicle| InventoryLine {
                kind: vehicle.kind(),
                color: vehicle.color().to_string(),
                fuel_type: vehicle.fuel_type().to_string(),
                height: vehicle.height(),
                off_road: vehicle.as_off_road().map(|cap| cap.is_off_road()),
            })
            .collect();
        InventoryReport {
            discount_percent: Self::DISCOUNT_FOR_NEW_CUSTOMERS,
            for_sale,
            off_road_count: self.off_road.len(),
        }
    }
}
