//! Off-road capability
use crate::vehicle::Signal;

/// Vehicles that can leave the paved road.
pub trait OffRoadCapable {
    /// Whether the vehicle can currently go off road.
    fn is_off_road(&self) -> bool;

    /// Go off road when [`is_off_road`](Self::is_off_road) holds; otherwise a no-op.
    fn go_off_road_if_can(&self) -> Option<Signal> {
        if self.is_off_road() {
            Some(Signal::OffRoad.emit())
        } else {
            None
        }
    }
}
