//! Centralized constants for the vehicle and dealership model.
//!
//! Defaults and signal wording live here so the variant modules only carry
//! behavior.

// Height rules -------------------------------------------------------------
/// Smallest height a vehicle may carry.
pub const MIN_HEIGHT: i32 = 1;
/// Height substituted for any value below [`MIN_HEIGHT`].
pub const FALLBACK_HEIGHT: i32 = 10;

// SUV defaults -------------------------------------------------------------
pub const DEFAULT_SUV_COLOR: &str = "Gray";
pub const DEFAULT_SUV_FUEL: &str = "Diesel";
pub const DEFAULT_SUV_4X4: bool = true;

// Dealership ---------------------------------------------------------------
/// Discount percentage offered to new customers.
pub const DISCOUNT_FOR_NEW_CUSTOMERS: u32 = 10;

// Signal wording -----------------------------------------------------------
pub(crate) const MSG_SEDAN_STARTED: &str = "The Sedan started, vruuuum vruuuum";
pub(crate) const MSG_SUV_STARTED: &str = "The SUV started, vruuuum vruuuum";
pub(crate) const MSG_OFF_ROAD: &str = "Going off road";
