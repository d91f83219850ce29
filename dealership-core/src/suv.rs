//! SUV variant
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUV_4X4, DEFAULT_SUV_COLOR, DEFAULT_SUV_FUEL};
use crate::counters::FleetCounters;
use crate::off_road::OffRoadCapable;
use crate::vehicle::{Chassis, Signal, Vehicle, VehicleKind};

/// Construction parameters for an [`Suv`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuvSpec {
    pub color: String,
    pub fuel_type: String,
    pub height: i32,
    pub is_4x4: bool,
}

impl SuvSpec {
    pub fn new(
        color: impl Into<String>,
        fuel_type: impl Into<String>,
        height: i32,
        is_4x4: bool,
    ) -> Self {
        Self {
            color: color.into(),
            fuel_type: fuel_type.into(),
            height,
            is_4x4,
        }
    }

    /// Gray diesel SUV.
    #[must_use]
    pub fn gray_diesel(height: i32, is_4x4: bool) -> Self {
        Self::new(DEFAULT_SUV_COLOR, DEFAULT_SUV_FUEL, height, is_4x4)
    }

    /// Gray diesel 4x4.
    #[must_use]
    pub fn with_height(height: i32) -> Self {
        Self::gray_diesel(height, DEFAULT_SUV_4X4)
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Suv {
    #[serde(flatten)]
    chassis: Chassis,
    is_4x4: bool,
}

impl Suv {
    /// Canonical construction path. Every other constructor ends up here, so
    /// the height rule and both counters run exactly once per SUV.
    #[must_use]
    pub fn build(counters: &FleetCounters, spec: SuvSpec) -> Self {
        let SuvSpec {
            color,
            fuel_type,
            height,
            is_4x4,
        } = spec;
        let chassis = Chassis::new(counters, color, fuel_type, height);
        counters.record_suv();
        Self { chassis, is_4x4 }
    }

    #[must_use]
    pub fn new(
        counters: &FleetCounters,
        color: impl Into<String>,
        fuel_type: impl Into<String>,
        height: i32,
        is_4x4: bool,
    ) -> Self {
        Self::build(counters, SuvSpec::new(color, fuel_type, height, is_4x4))
    }

    #[must_use]
    pub fn gray_diesel(counters: &FleetCounters, height: i32, is_4x4: bool) -> Self {
        Self::build(counters, SuvSpec::gray_diesel(height, is_4x4))
    }

    #[must_use]
    pub fn with_height(counters: &FleetCounters, height: i32) -> Self {
        Self::build(counters, SuvSpec::with_height(height))
    }

    #[must_use]
    pub const fn is_4x4(&self) -> bool {
        self.is_4x4
    }

    pub const fn set_4x4(&mut self, is_4x4: bool) {
        self.is_4x4 = is_4x4;
    }
}

impl Vehicle for Suv {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Suv
    }

    fn start(&self) -> Signal {
        Signal::SuvStarted.emit()
    }

    fn as_off_road(&self) -> Option<&dyn OffRoadCapable> {
        Some(self)
    }
}

impl OffRoadCapable for Suv {
    fn is_off_road(&self) -> bool {
        self.is_4x4
    }
}
