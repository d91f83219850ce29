//! Shared vehicle contract
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    FALLBACK_HEIGHT, MIN_HEIGHT, MSG_OFF_ROAD, MSG_SEDAN_STARTED, MSG_SUV_STARTED,
};
use crate::counters::FleetCounters;
use crate::off_road::OffRoadCapable;

/// Observable output of a vehicle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// A sedan engine started
    SedanStarted,
    /// An SUV engine started
    SuvStarted,
    /// An off-road capable vehicle left the road
    OffRoad,
}

impl Signal {
    /// Human-readable wording for this signal.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SedanStarted => MSG_SEDAN_STARTED,
            Self::SuvStarted => MSG_SUV_STARTED,
            Self::OffRoad => MSG_OFF_ROAD,
        }
    }

    /// Log the signal and hand it back to the caller.
    pub(crate) fn emit(self) -> Self {
        log::info!("{}", self.message());
        self
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Concrete variant behind a [`Vehicle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Sedan,
    Suv,
    /// Any variant defined outside this crate
    Other,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Sedan => write!(f, "sedan"),
            VehicleKind::Suv => write!(f, "suv"),
            VehicleKind::Other => write!(f, "other"),
        }
    }
}

/// Apply the height rule: anything below [`MIN_HEIGHT`] becomes [`FALLBACK_HEIGHT`].
#[must_use]
pub const fn normalize_height(height: i32) -> i32 {
    if height < MIN_HEIGHT {
        FALLBACK_HEIGHT
    } else {
        height
    }
}

fn coerce_height(height: i32) -> i32 {
    let normalized = normalize_height(height);
    if normalized != height {
        log::debug!("height {height} below {MIN_HEIGHT}, using {normalized}");
    }
    normalized
}

/// Attributes every vehicle carries.
///
/// Not `Clone`: each chassis corresponds to exactly one counted construction.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Chassis {
    color: String,
    fuel_type: String,
    height: i32,
}

impl Chassis {
    /// Build a chassis and count it against `counters`.
    #[must_use]
    pub fn new(
        counters: &FleetCounters,
        color: impl Into<String>,
        fuel_type: impl Into<String>,
        height: i32,
    ) -> Self {
        let chassis = Self {
            color: color.into(),
            fuel_type: fuel_type.into(),
            height: coerce_height(height),
        };
        counters.record_vehicle();
        chassis
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    #[must_use]
    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Update the height, re-applying the height rule.
    pub fn set_height(&mut self, height: i32) {
        self.height = coerce_height(height);
    }
}

/// Behavior shared by every vehicle variant.
///
/// Implementors supply their [`Chassis`] and a `start` signal; the attribute
/// accessors are provided in terms of the chassis.
pub trait Vehicle: fmt::Debug {
    fn chassis(&self) -> &Chassis;

    fn chassis_mut(&mut self) -> &mut Chassis;

    fn kind(&self) -> VehicleKind;

    /// Start the engine, emitting this variant's signal.
    fn start(&self) -> Signal;

    /// Off-road capability of this vehicle, if it has one.
    fn as_off_road(&self) -> Option<&dyn OffRoadCapable> {
        None
    }

    fn color(&self) -> &str {
        self.chassis().color()
    }

    fn set_color(&mut self, color: &str) {
        self.chassis_mut().set_color(color);
    }

    fn fuel_type(&self) -> &str {
        self.chassis().fuel_type()
    }

    fn height(&self) -> i32 {
        self.chassis().height()
    }

    fn set_height(&mut self, height: i32) {
        self.chassis_mut().set_height(height);
    }
}

/// Repeated starts, implemented once for every [`Vehicle`].
///
/// The blanket impl below is the only implementation; variants cannot
/// provide their own.
pub trait StartRepeated {
    /// Call `start` `times` times in order. Non-positive counts do nothing.
    fn start_repeated(&self, times: i32) -> Vec<Signal>;
}

impl<V: Vehicle + ?Sized> StartRepeated for V {
    fn start_repeated(&self, times: i32) -> Vec<Signal> {
        (0..times.max(0)).map(|_| self.start()).collect()
    }
}
