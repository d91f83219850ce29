//! Construction counters shared by every vehicle variant.
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_COUNTERS: FleetCounters = FleetCounters::new();

/// Running totals of constructed vehicles.
///
/// Counts only ever grow; there is no reset. Tests and embedders that need
/// isolated totals create their own instance, everything else uses
/// [`FleetCounters::global`].
#[derive(Debug, Default)]
pub struct FleetCounters {
    vehicles: AtomicU64,
    suvs: AtomicU64,
}

/// Point-in-time copy of a [`FleetCounters`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub vehicles: u64,
    pub suvs: u64,
}

impl FleetCounters {
    /// Create a fresh set of counters starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: AtomicU64::new(0),
            suvs: AtomicU64::new(0),
        }
    }

    /// The process-wide counters.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL_COUNTERS
    }

    /// Total vehicles of any variant constructed against these counters.
    #[must_use]
    pub fn vehicles(&self) -> u64 {
        self.vehicles.load(Ordering::SeqCst)
    }

    /// Total SUVs constructed against these counters.
    #[must_use]
    pub fn suvs(&self) -> u64 {
        self.suvs.load(Ordering::SeqCst)
    }

    /// Read both totals. The SUV count is loaded first so the snapshot never
    /// shows more SUVs than vehicles.
    #[must_use]
    pub fn snapshot(&self) -> CounterSnapshot {
        let suvs = self.suvs();
        let vehicles = self.vehicles();
        CounterSnapshot { vehicles, suvs }
    }

    pub(crate) fn record_vehicle(&self) {
        self.vehicles.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn record_suv(&self) {
        self.suvs.fetch_add(1, Ordering::SeqCst);
    }
}

/// Vehicles constructed against [`FleetCounters::global`].
#[must_use]
pub fn global_vehicle_count() -> u64 {
    FleetCounters::global().vehicles()
}

/// SUVs constructed against [`FleetCounters::global`].
#[must_use]
pub fn global_suv_count() -> u64 {
    FleetCounters::global().suvs()
}
