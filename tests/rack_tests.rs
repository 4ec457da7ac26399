//! Tool rack allocation behaviour through the public API.

use pcb2gcode_rs::{Length, PlanError, Rack, RackConfig, Slot, Tool};
use pretty_assertions::assert_eq;

fn drill(d: f64) -> Tool {
    Tool::drill(Length::from_mm(d))
}

fn router(d: f64) -> Tool {
    Tool::router(Length::from_mm(d))
}

/// Tool of every slot, `None` for empty or invalidated ones.
fn contents(rack: &Rack) -> Vec<Option<Tool>> {
    (1..=rack.slot_count()).map(|i| rack.get_tool(i)).collect()
}

// ==================== Placement ====================

#[test]
fn test_unbounded_sequential_fill() {
    let mut rack = Rack::unbounded();
    let tools = [drill(1.0), drill(0.5), router(2.0), drill(3.0), router(0.8)];

    for (i, tool) in tools.iter().enumerate() {
        assert_eq!(rack.add_bit(*tool, None).unwrap(), i + 1);
    }

    assert_eq!(rack.len(), tools.len());
    assert_eq!(
        contents(&rack),
        tools.iter().copied().map(Some).collect::<Vec<_>>()
    );
}

#[test]
fn test_explicit_then_wrap() {
    for k in 1..=5 {
        let mut rack = Rack::with_capacity(5);
        rack.add_bit(drill(1.0), Some(k)).unwrap();

        let placed: Vec<usize> = (0..4)
            .map(|i| rack.add_bit(drill(1.1 + i as f64 * 0.1), None).unwrap())
            .collect();

        let expected: Vec<usize> = (1..5).map(|i| (k - 1 + i) % 5 + 1).collect();
        assert_eq!(placed, expected, "explicit placement in slot {}", k);
    }
}

#[test]
fn test_wrap_skips_invalidated() {
    let mut rack = Rack::with_capacity(5);
    rack.invalidate_slot(5).unwrap();
    rack.invalidate_slot(2).unwrap();
    rack.add_bit(drill(1.0), Some(3)).unwrap();

    assert_eq!(rack.add_bit(drill(1.1), None).unwrap(), 4);
    assert_eq!(rack.add_bit(drill(1.2), None).unwrap(), 1);
    assert!(matches!(
        rack.add_bit(drill(1.3), None),
        Err(PlanError::CapacityExhausted { capacity: 5, .. })
    ));
}

#[test]
fn test_invalidated_slots_never_hold_tools() {
    let mut rack = Rack::with_capacity(4);
    rack.invalidate_slot(1).unwrap();
    rack.invalidate_slot(3).unwrap();

    rack.add_bit(router(1.0), None).unwrap();
    rack.add_bit(drill(0.6), None).unwrap();
    rack.sort();

    assert_eq!(rack.get_tool(1), None);
    assert_eq!(rack.get_tool(3), None);
    assert_eq!(rack.slot(1), Some(&Slot::Invalidated));
    assert_eq!(rack.get_tool(2), Some(drill(0.6)));
    assert_eq!(rack.get_tool(4), Some(router(1.0)));

    assert!(matches!(
        rack.add_bit(drill(2.0), Some(3)),
        Err(PlanError::SlotInvalidated { slot: 3 })
    ));
}

#[test]
fn test_errors() {
    let mut rack = Rack::with_capacity(3);
    rack.add_bit(drill(1.0), Some(2)).unwrap();

    assert!(matches!(
        rack.add_bit(drill(2.0), Some(2)),
        Err(PlanError::SlotOccupied { slot: 2, .. })
    ));
    assert!(matches!(
        rack.invalidate_slot(2),
        Err(PlanError::SlotOccupied { slot: 2, .. })
    ));
    assert!(matches!(
        rack.add_bit(drill(2.0), Some(4)),
        Err(PlanError::IndexOutOfRange { slot: 4, capacity: 3 })
    ));
    assert!(matches!(
        rack.add_bit(drill(2.0), Some(0)),
        Err(PlanError::IndexOutOfRange { slot: 0, .. })
    ));

    // Failed calls leave the rack untouched
    assert_eq!(contents(&rack), vec![None, Some(drill(1.0)), None]);
    assert_eq!(rack.cursor(), 3);
}

// ==================== Sort ====================

#[test]
fn test_sort_order_and_idempotence() {
    let mut rack = Rack::with_capacity(8);
    rack.invalidate_slot(3).unwrap();
    for tool in [router(1.2), drill(2.6), drill(0.9), router(0.8), drill(1.8)] {
        rack.add_bit(tool, None).unwrap();
    }

    rack.sort();
    let once = rack.clone();
    rack.sort();

    assert_eq!(rack, once);
    assert_eq!(
        contents(&rack),
        vec![
            Some(drill(0.9)),
            Some(drill(1.8)),
            None,
            Some(drill(2.6)),
            Some(router(0.8)),
            Some(router(1.2)),
            None,
            None,
        ]
    );
    assert_eq!(rack.cursor(), 7);
}

// ==================== Membership ====================

#[test]
fn test_membership() {
    let mut rack = Rack::with_capacity(4);
    rack.add_bit(drill(0.8), Some(4)).unwrap();

    assert!(rack.contains(&drill(0.8)));
    assert!(!rack.contains(&router(0.8)));
    assert!(!rack.contains(&drill(0.81)));

    rack.remove_bit(4);
    assert!(!rack.contains(&drill(0.8)));
    assert_eq!(rack.cursor(), 1);
}

// ==================== Scenarios ====================

#[test]
fn test_scenario_explicit_slot_then_wrap() {
    let mut rack = Rack::with_capacity(4);
    rack.add_bit(drill(0.8), Some(2)).unwrap();
    rack.add_bit(drill(1.8), None).unwrap();
    rack.add_bit(drill(1.9), None).unwrap();
    rack.add_bit(router(0.8), None).unwrap();

    assert_eq!(
        contents(&rack),
        vec![
            Some(router(0.8)),
            Some(drill(0.8)),
            Some(drill(1.8)),
            Some(drill(1.9)),
        ]
    );
}

#[test]
fn test_scenario_sort_around_invalidated_slot() {
    let mut rack = Rack::with_capacity(5);
    rack.invalidate_slot(4).unwrap();
    rack.add_bit(drill(0.85), Some(2)).unwrap();
    rack.add_bit(drill(1.8), None).unwrap();
    rack.add_bit(drill(1.9), None).unwrap();
    rack.add_bit(drill(0.55), None).unwrap();

    rack.sort();

    assert_eq!(
        contents(&rack),
        vec![
            Some(drill(0.55)),
            Some(drill(0.85)),
            Some(drill(1.8)),
            None,
            Some(drill(1.9)),
        ]
    );
    assert!(rack.is_invalidated(4));
    insta::assert_snapshot!(rack.to_string(), @"T01: 0.55mm T02: 0.85mm T03: 1.8mm T04:- T05: 1.9mm");
}

#[test]
fn test_scenario_unbounded_drills_before_routers() {
    let mut rack = Rack::unbounded();
    for tool in [
        router(1.2),
        drill(1.8),
        router(0.8),
        drill(1.9),
        drill(2.6),
        router(1.8),
        drill(0.9),
    ] {
        rack.add_bit(tool, None).unwrap();
    }

    rack.sort();

    assert_eq!(
        contents(&rack),
        vec![
            Some(drill(0.9)),
            Some(drill(1.8)),
            Some(drill(1.9)),
            Some(drill(2.6)),
            Some(router(0.8)),
            Some(router(1.2)),
            Some(router(1.8)),
        ]
    );

    // Continued placement appends after the last tool
    assert_eq!(rack.add_bit(drill(3.0), None).unwrap(), 8);
}

// ==================== Configuration ====================

#[test]
fn test_from_config() {
    let config = RackConfig {
        capacity: Some(6),
        invalidated: vec![2, 5, 2],
        sort: true,
    };
    let rack = Rack::from_config(&config).unwrap();

    assert_eq!(rack.capacity(), Some(6));
    assert_eq!(rack.to_string(), "T01:x T02:- T03:x T04:x T05:- T06:x");

    let manual = Rack::from_config(&RackConfig {
        capacity: Some(0),
        invalidated: vec![3],
        sort: false,
    })
    .unwrap();
    assert!(!manual.is_bounded());
    assert_eq!(manual.slot_count(), 3);
    assert!(manual.is_invalidated(3));
}
