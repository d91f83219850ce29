//! Dealership Core
//!
//! Platform-agnostic vehicle and dealership logic: a shared vehicle contract,
//! sedan and SUV variants, an off-road capability, and a dealership that keeps
//! its for-sale and off-road listings in sync.
//! This crate performs no terminal or file I/O; signals are returned to the
//! caller and mirrored through the `log` facade.

pub mod constants;
pub mod counters;
pub mod dealership;
pub mod off_road;
pub mod sedan;
pub mod suv;
pub mod vehicle;

// Re-export commonly used types
pub use constants::{DISCOUNT_FOR_NEW_CUSTOMERS, FALLBACK_HEIGHT, MIN_HEIGHT};
pub use counters::{CounterSnapshot, FleetCounters, global_suv_count, global_vehicle_count};
pub use dealership::{Dealership, InventoryLine, InventoryReport, VehicleHandle};
pub use off_road::OffRoadCapable;
pub use sedan::Sedan;
pub use suv::{Suv, SuvSpec};
pub use vehicle::{Chassis, Signal, StartRepeated, Vehicle, VehicleKind, normalize_height};
