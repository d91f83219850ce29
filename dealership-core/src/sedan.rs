//! Sedan variant
use serde::Serialize;

use crate::counters::FleetCounters;
use crate::vehicle::{Chassis, Signal, Vehicle, VehicleKind};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Sedan {
    #[serde(flatten)]
    chassis: Chassis,
    max_speed: i32,
}

impl Sedan {
    /// Build a sedan counted against `counters`. `max_speed` is stored as given.
    #[must_use]
    pub fn new(
        counters: &FleetCounters,
        color: impl Into<String>,
        fuel_type: impl Into<String>,
        height: i32,
        max_speed: i32,
    ) -> Self {
        Self {
            chassis: Chassis::new(counters, color, fuel_type, height),
            max_speed,
        }
    }

    #[must_use]
    pub const fn max_speed(&self) -> i32 {
        self.max_speed
    }

    pub const fn set_max_speed(&mut self, max_speed: i32) {
        self.max_speed = max_speed;
    }
}

impl Vehicle for Sedan {
    fn chassis(&self) -> &Chassis {
        &self.chassis
    }

    fn chassis_mut(&mut self) -> &mut Chassis {
        &mut self.chassis
    }

    fn kind(&self) -> VehicleKind {
        VehicleKind::Sedan
    }

    fn start(&self) -> Signal {
        Signal::SedanStarted.emit()
    }
}
