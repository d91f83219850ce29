use serde::{Deserialize, Serialize};
use std::sync::Arc;

use dealership_core::{
    CounterSnapshot, Dealership, FleetCounters, InventoryReport, OffRoadCapable, Sedan, Signal,
    StartRepeated, Suv, Vehicle,
};

/// Inputs for one demonstration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoPlan {
    pub suv_height: i32,
    pub sedan_height: i32,
    pub max_speed: i32,
    pub starts: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SedanSummary {
    pub color: String,
    pub fuel_type: String,
    pub height: i32,
    pub max_speed: i32,
}

/// Everything the demonstration observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoOutcome {
    pub suv_height: i32,
    pub sedan: SedanSummary,
    pub signals: Vec<Signal>,
    pub inventory: InventoryReport,
    pub counters: CounterSnapshot,
}

pub fn run_demo(plan: &DemoPlan) -> DemoOutcome {
    run_demo_with(FleetCounters::global(), plan)
}

pub fn run_demo_with(counters: &FleetCounters, plan: &DemoPlan) -> DemoOutcome {
    let suv = Suv::with_height(counters, plan.suv_height);
    let sedan = Sedan::new(counters, "Red", "Gas", plan.sedan_height, plan.max_speed);

    let mut signals = suv.start_repeated(plan.starts);
    signals.extend(suv.go_off_road_if_can());

    let suv_height = suv.height();
    let mut dealership = Dealership::new();
    dealership.add_vehicle(Arc::new(suv));

    DemoOutcome {
        suv_height,
        sedan: SedanSummary {
            color: sedan.color().to_string(),
            fuel_type: sedan.fuel_type().to_string(),
            height: sedan.height(),
            max_speed: sedan.max_speed(),
        },
        signals,
        inventory: dealership.inventory(),
        counters: counters.snapshot(),
    }
}
