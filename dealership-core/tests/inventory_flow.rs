use std::sync::Arc;

use dealership_core::{
    Dealership, FleetCounters, OffRoadCapable, Sedan, Signal, StartRepeated, Suv, SuvSpec,
    Vehicle, VehicleHandle, VehicleKind,
};

fn off_road_is_subset(dealership: &Dealership) -> bool {
    let for_sale = dealership.list_for_sale();
    dealership.list_off_road().iter().all(|listed| {
        for_sale
            .iter()
            .any(|candidate| std::ptr::addr_eq(Arc::as_ptr(candidate), Arc::as_ptr(listed)))
    })
}

#[test]
fn demonstration_walkthrough() {
    let counters = FleetCounters::new();
    let suv = Suv::with_height(&counters, -1);
    let sedan = Sedan::new(&counters, "Red", "Gas", 100, 200);

    assert_eq!(suv.height(), 10);
    assert_eq!(sedan.height(), 100);
    assert_eq!(sedan.max_speed(), 200);
    assert_eq!(suv.start(), Signal::SuvStarted);

    let mut dealership = Dealership::new();
    dealership.add_vehicle(Arc::new(suv));

    assert_eq!(counters.vehicles(), 2);
    assert_eq!(counters.suvs(), 1);
    assert_eq!(dealership.len(), 1);
    assert_eq!(dealership.list_off_road().len(), 1);
}

#[test]
fn subset_holds_through_mixed_mutations() {
    let counters = FleetCounters::new();
    let handles: Vec<VehicleHandle> = (0..12)
        .map(|i| -> VehicleHandle {
            if i % 3 == 0 {
                Arc::new(Sedan::new(&counters, "Silver", "Gas", i, 150 + i))
            } else {
                Arc::new(Suv::build(
                    &counters,
                    SuvSpec::new("Green", "Diesel", i - 4, i % 2 == 0),
                ))
            }
        })
        .collect();

    let mut dealership = Dealership::new();
    for handle in &handles {
        dealership.add_vehicle(Arc::clone(handle));
        assert!(off_road_is_subset(&dealership));
    }
    dealership.add_vehicle(Arc::clone(&handles[1]));
    assert!(off_road_is_subset(&dealership));

    for handle in handles.iter().step_by(2) {
        dealership.remove_vehicle(handle);
        assert!(off_road_is_subset(&dealership));
    }
    for handle in &handles {
        dealership.remove_vehicle(handle);
        assert!(off_road_is_subset(&dealership));
    }
    assert!(dealership.remove_vehicle(&handles[1]));
    assert!(dealership.is_empty());
    assert!(dealership.list_off_road().is_empty());
}

#[test]
fn counters_track_every_construction() {
    let counters = FleetCounters::new();
    let mut previous = counters.snapshot();
    for height in -5_i32..20 {
        let kind = match height.rem_euclid(4) {
            0 => Sedan::new(&counters, "Blue", "Gas", height, 90).kind(),
            1 => Suv::new(&counters, "Blue", "Diesel", height, false).kind(),
            2 => Suv::gray_diesel(&counters, height, true).kind(),
            _ => Suv::with_height(&counters, height).kind(),
        };
        let current = counters.snapshot();
        assert_eq!(current.vehicles, previous.vehicles + 1);
        let expected_suvs = previous.suvs + u64::from(kind == VehicleKind::Suv);
        assert_eq!(current.suvs, expected_suvs);
        assert!(current.suvs <= current.vehicles);
        previous = current;
    }
}

#[test]
fn interleaved_duplicates_stay_in_sync() {
    let counters = FleetCounters::new();
    let suv: VehicleHandle = Arc::new(Suv::with_height(&counters, 50));
    let sedan: VehicleHandle = Arc::new(Sedan::new(&counters, "Red", "Gas", 100, 200));

    let mut dealership = Dealership::new();
    for handle in [&suv, &sedan, &suv, &sedan, &suv] {
        dealership.add_vehicle(Arc::clone(handle));
    }
    assert_eq!(dealership.len(), 5);
    assert_eq!(dealership.list_off_road().len(), 3);

    let removals = [(&sedan, 4, 3), (&suv, 3, 2), (&suv, 2, 1), (&sedan, 1, 1), (&suv, 0, 0)];
    for (handle, for_sale, off_road) in removals {
        assert!(dealership.remove_vehicle(handle));
        assert_eq!(dealership.len(), for_sale);
        assert_eq!(dealership.list_off_road().len(), off_road);
        assert!(off_road_is_subset(&dealership));
    }
    assert!(!dealership.remove_vehicle(&suv));
    assert!(!dealership.remove_vehicle(&sedan));
}

#[test]
fn heights_never_drop_below_one() {
    let counters = FleetCounters::new();
    for height in [i32::MIN, -100, -1, 0, 1, 2, 99, i32::MAX] {
        let mut sedan = Sedan::new(&counters, "Red", "Gas", height, 1);
        let suv = Suv::with_height(&counters, height);
        let expected = if height <= 0 { 10 } else { height };
        assert_eq!(sedan.height(), expected);
        assert_eq!(suv.height(), expected);

        sedan.set_height(height);
        assert_eq!(sedan.height(), expected);
        assert!(sedan.height() >= 1);
    }
}

#[test]
fn off_road_signal_requires_4x4() {
    let counters = FleetCounters::new();
    let trail = Suv::with_height(&counters, 50);
    let city = Suv::gray_diesel(&counters, 50, false);

    assert!(trail.is_4x4());
    assert_eq!(trail.go_off_road_if_can(), Some(Signal::OffRoad));
    assert_eq!(city.go_off_road_if_can(), None);
}

#[test]
fn start_repeated_through_handles() {
    let counters = FleetCounters::new();
    let handle: VehicleHandle = Arc::new(Sedan::new(&counters, "Red", "Gas", 100, 200));
    assert_eq!(handle.start_repeated(4), vec![Signal::SedanStarted; 4]);
    assert!(handle.start_repeated(-1).is_empty());
}

#[test]
fn inventory_report_serializes() {
    let counters = FleetCounters::new();
    let mut dealership = Dealership::new();
    dealership.add_vehicle(Arc::new(Sedan::new(&counters, "Red", "Gas", 100, 200)));
    dealership.add_vehicle(Arc::new(Suv::gray_diesel(&counters, -3, false)));

    let report = dealership.inventory();
    assert_eq!(report.off_road_count, 1);
    assert_eq!(report.for_sale[0].kind, VehicleKind::Sedan);
    assert_eq!(report.for_sale[0].off_road, None);
    assert_eq!(report.for_sale[1].height, 10);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["discount_percent"], 10);
    assert_eq!(json["for_sale"][1]["kind"], "suv");
    assert_eq!(json["for_sale"][1]["off_road"], false);
}
