//! Tool rack (magazine) allocation.
//!
//! A rack is an ordered list of 1-based slots. A bounded rack models an
//! automatic tool changer with a fixed number of positions; an unbounded rack
//! models manual tool changes and grows one slot at a time.
//!
//! Automatic placement starts at the allocation cursor, which always points
//! just after the last placed tool, and wraps round a bounded rack. Sequential
//! placements therefore spread round the magazine rather than refilling it
//! from slot 1.

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::config::{RackConfig, MAX_RACK_SLOTS};
use crate::error::{PlanError, Result};
use crate::model::Tool;

/// State of a single rack position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "tool", rename_all = "snake_case")]
pub enum Slot {
    /// Free position.
    #[default]
    Empty,
    /// Position holding a tool.
    Occupied(Tool),
    /// Broken or reserved position. Never holds a tool again.
    Invalidated,
}

impl Slot {
    /// Tool held in this slot.
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Slot::Occupied(tool) => Some(*tool),
            Slot::Empty | Slot::Invalidated => None,
        }
    }

    /// Check if a tool can be placed here.
    pub fn is_free(&self) -> bool {
        *self == Slot::Empty
    }

    /// Check if the slot is invalidated.
    pub fn is_invalidated(&self) -> bool {
        *self == Slot::Invalidated
    }
}

/// Action for the operator to bring a rack in line with a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RackChange {
    /// Load a tool into an empty slot.
    Load { slot: usize, tool: Tool },
    /// Swap the tool of a slot.
    Replace { slot: usize, old: Tool, new: Tool },
}

impl RackChange {
    /// Slot affected by the change.
    pub fn slot(&self) -> usize {
        match self {
            RackChange::Load { slot, .. } | RackChange::Replace { slot, .. } => *slot,
        }
    }
}

impl fmt::Display for RackChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RackChange::Load { slot, tool } => write!(f, "T{:02}: load {}", slot, tool),
            RackChange::Replace { slot, old, new } => {
                write!(f, "T{:02}: replace {} with {}", slot, old, new)
            }
        }
    }
}

/// An ordered set of tool slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rack {
    slots: Vec<Slot>,
    /// Number of slots of a bounded rack.
    capacity: Option<usize>,
    /// Next slot probed by automatic placement (1-based).
    cursor: usize,
}

impl Default for Rack {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Rack {
    /// Create a rack. `None` or a zero capacity gives an unbounded rack.
    ///
    /// No rack addresses more than [`MAX_RACK_SLOTS`] slots.
    pub fn new(capacity: Option<usize>) -> Self {
        match capacity.filter(|&c| c > 0) {
            Some(capacity) if capacity > MAX_RACK_SLOTS => {
                warn!(
                    "Rack: capacity {} reduced to {} slots",
                    capacity, MAX_RACK_SLOTS
                );
                Self::new(Some(MAX_RACK_SLOTS))
            }
            Some(capacity) => Self {
                slots: vec![Slot::Empty; capacity],
                capacity: Some(capacity),
                cursor: 1,
            },
            None => Self {
                slots: Vec::new(),
                capacity: None,
                cursor: 1,
            },
        }
    }

    /// Create an unbounded (manual) rack.
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Create a bounded rack of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Some(capacity))
    }

    /// Create the rack described by the configuration.
    pub fn from_config(config: &RackConfig) -> Result<Self> {
        let mut rack = Self::new(config.capacity);

        for &slot in &config.invalidated {
            if rack.is_invalidated(slot) {
                continue;
            }
            rack.invalidate_slot(slot)?;
        }

        Ok(rack)
    }

    /// Capacity of a bounded rack.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Check if the rack has a fixed size.
    pub fn is_bounded(&self) -> bool {
        self.capacity.is_some()
    }

    /// Total number of slots, whatever their state.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.tool().is_some()).count()
    }

    /// Check if no slot holds a tool.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next slot probed by automatic placement.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Slot at a 1-based index.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        index.checked_sub(1).and_then(|i| self.slots.get(i))
    }

    /// Iterate all slots with their 1-based index.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Iterate the tools with their 1-based slot index.
    pub fn tools(&self) -> impl Iterator<Item = (usize, Tool)> + '_ {
        self.slots().filter_map(|(i, s)| s.tool().map(|t| (i, t)))
    }

    /// Tool in a slot. `None` for slot 0, out of range, empty or invalidated slots.
    pub fn get_tool(&self, index: usize) -> Option<Tool> {
        self.slot(index).and_then(Slot::tool)
    }

    /// Check if an equal tool sits in any slot.
    pub fn contains(&self, tool: &Tool) -> bool {
        self.slot_of(tool).is_some()
    }

    /// First slot holding an equal tool.
    pub fn slot_of(&self, tool: &Tool) -> Option<usize> {
        self.tools().find(|(_, t)| t == tool).map(|(i, _)| i)
    }

    /// Check if a slot is invalidated.
    pub fn is_invalidated(&self, index: usize) -> bool {
        self.slot(index).is_some_and(Slot::is_invalidated)
    }

    /// Mark an empty slot as permanently unusable.
    ///
    /// An unbounded rack grows to reach the slot.
    pub fn invalidate_slot(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.ensure_slot(index);

        match self.slots[index - 1] {
            Slot::Empty => {
                self.slots[index - 1] = Slot::Invalidated;
                debug!("Rack: T{:02} invalidated", index);
                Ok(())
            }
            Slot::Occupied(tool) => Err(PlanError::SlotOccupied { slot: index, tool }),
            Slot::Invalidated => Err(PlanError::SlotInvalidated { slot: index }),
        }
    }

    /// Place a tool, in the given slot or in the next free one.
    ///
    /// Returns the slot used. The cursor moves just past that slot.
    pub fn add_bit(&mut self, tool: Tool, slot: Option<usize>) -> Result<usize> {
        if let Some(existing) = self.slot_of(&tool) {
            warn!("Rack: {} is already present in T{:02}", tool, existing);
        }

        let index = match slot {
            Some(index) => {
                self.check_index(index)?;
                self.ensure_slot(index);

                match self.slots[index - 1] {
                    Slot::Empty => index,
                    Slot::Occupied(current) => {
                        return Err(PlanError::SlotOccupied {
                            slot: index,
                            tool: current,
                        })
                    }
                    Slot::Invalidated => return Err(PlanError::SlotInvalidated { slot: index }),
                }
            }
            None => self.find_free_slot(&tool)?,
        };

        self.slots[index - 1] = Slot::Occupied(tool);
        self.cursor = self.next_index(index);
        debug!("Rack: {} placed in T{:02}", tool, index);

        Ok(index)
    }

    /// Slot of an equal tool, placing the tool automatically if missing.
    pub fn request(&mut self, tool: Tool) -> Result<usize> {
        match self.slot_of(&tool) {
            Some(index) => Ok(index),
            None => self.add_bit(tool, None),
        }
    }

    /// Take the tool out of a slot. The cursor does not move.
    pub fn remove_bit(&mut self, index: usize) -> Option<Tool> {
        let slot = index.checked_sub(1).and_then(|i| self.slots.get_mut(i))?;
        let tool = slot.tool()?;
        *slot = Slot::Empty;
        debug!("Rack: {} removed from T{:02}", tool, index);
        Some(tool)
    }

    /// Reorder the tools drills first, then routers, smallest diameter first.
    ///
    /// Tools are written back from slot 1 skipping invalidated slots. The
    /// cursor moves to the first free slot after the last tool.
    pub fn sort(&mut self) {
        let mut tools: Vec<Tool> = self.slots.iter().filter_map(Slot::tool).collect();
        tools.sort();

        let mut tools = tools.into_iter();
        let mut last_placed = None;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_invalidated() {
                continue;
            }
            match tools.next() {
                Some(tool) => {
                    *slot = Slot::Occupied(tool);
                    last_placed = Some(i + 1);
                }
                None => *slot = Slot::Empty,
            }
        }

        let cursor = match last_placed {
            None => 1,
            Some(last) => self
                .slots()
                .skip(last)
                .find(|(_, s)| s.is_free())
                .map(|(i, _)| i)
                .unwrap_or_else(|| {
                    if self.is_bounded() {
                        self.next_index(last)
                    } else {
                        1
                    }
                }),
        };
        self.cursor = cursor;

        debug!("Rack sorted: {}", self);
    }

    /// Bring in every tool of `required` missing from this rack, drills first.
    ///
    /// When a bounded rack is full, a tool not needed by `required` is
    /// swapped out.
    pub fn merge(&mut self, required: &Rack) -> Result<()> {
        let (drills, routers): (Vec<Tool>, Vec<Tool>) =
            required.tools().map(|(_, t)| t).partition(Tool::is_drill);

        for tool in drills.into_iter().chain(routers) {
            if self.contains(&tool) {
                continue;
            }

            match self.add_bit(tool, None) {
                Ok(_) => {}
                Err(PlanError::CapacityExhausted { capacity, tool }) => {
                    let unused = self
                        .tools()
                        .find(|(_, t)| !required.contains(t))
                        .map(|(i, _)| i);

                    match unused {
                        Some(index) => {
                            let old = self.remove_bit(index);
                            debug!("Rack: swapping out {:?} from T{:02}", old, index);
                            self.add_bit(tool, Some(index))?;
                        }
                        None => return Err(PlanError::CapacityExhausted { capacity, tool }),
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Operator actions turning `current` into this rack.
    pub fn diff(&self, current: &Rack) -> Vec<RackChange> {
        self.tools()
            .filter_map(|(slot, tool)| match current.get_tool(slot) {
                None => Some(RackChange::Load { slot, tool }),
                Some(old) if old != tool => Some(RackChange::Replace {
                    slot,
                    old,
                    new: tool,
                }),
                Some(_) => None,
            })
            .collect()
    }

    /// Highest addressable slot.
    fn max_index(&self) -> usize {
        self.capacity.unwrap_or(MAX_RACK_SLOTS)
    }

    /// Reject slot 0 and slots beyond the rack.
    fn check_index(&self, index: usize) -> Result<()> {
        let capacity = self.max_index();

        if index == 0 || index > capacity {
            return Err(PlanError::IndexOutOfRange {
                slot: index,
                capacity,
            });
        }

        Ok(())
    }

    /// Grow an unbounded rack so that `index` exists.
    fn ensure_slot(&mut self, index: usize) {
        if self.slots.len() < index {
            self.slots.resize(index, Slot::Empty);
        }
    }

    /// Slot after `index`, wrapping round a bounded rack.
    fn next_index(&self, index: usize) -> usize {
        match self.capacity {
            Some(capacity) if index >= capacity => 1,
            _ => index + 1,
        }
    }

    /// First free slot from the cursor on.
    fn find_free_slot(&mut self, tool: &Tool) -> Result<usize> {
        match self.capacity {
            Some(capacity) => {
                let mut index = self.cursor.clamp(1, capacity);
                for _ in 0..capacity {
                    if self.slots[index - 1].is_free() {
                        return Ok(index);
                    }
                    index = self.next_index(index);
                }
                Err(PlanError::CapacityExhausted {
                    capacity,
                    tool: *tool,
                })
            }
            None => {
                // An unbounded rack never wraps, it grows past its end
                for index in self.cursor.max(1)..=MAX_RACK_SLOTS {
                    self.ensure_slot(index);
                    if self.slots[index - 1].is_free() {
                        return Ok(index);
                    }
                }
                Err(PlanError::CapacityExhausted {
                    capacity: MAX_RACK_SLOTS,
                    tool: *tool,
                })
            }
        }
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots() {
            if index > 1 {
                write!(f, " ")?;
            }
            match slot {
                Slot::Empty => write!(f, "T{:02}:x", index)?,
                Slot::Invalidated => write!(f, "T{:02}:-", index)?,
                Slot::Occupied(tool) => {
                    write!(f, "T{:02}:{}{}", index, tool.kind.prefix(), tool.diameter)?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Length;

    fn drill(mm: f64) -> Tool {
        Tool::drill(Length::from_mm(mm))
    }

    fn router(mm: f64) -> Tool {
        Tool::router(Length::from_mm(mm))
    }

    #[test]
    fn test_new_rack() {
        let rack = Rack::with_capacity(4);
        assert_eq!(rack.slot_count(), 4);
        assert_eq!(rack.len(), 0);
        assert!(rack.is_empty());
        assert!(rack.is_bounded());
        assert_eq!(rack.cursor(), 1);

        let rack = Rack::unbounded();
        assert_eq!(rack.slot_count(), 0);
        assert!(!rack.is_bounded());

        assert_eq!(Rack::new(Some(0)), Rack::unbounded());
    }

    #[test]
    fn test_explicit_placement_moves_cursor() {
        let mut rack = Rack::with_capacity(4);
        assert_eq!(rack.add_bit(drill(1.0), Some(2)).unwrap(), 2);
        assert_eq!(rack.cursor(), 3);

        assert_eq!(rack.add_bit(drill(1.1), Some(4)).unwrap(), 4);
        assert_eq!(rack.cursor(), 1);
    }

    #[test]
    fn test_explicit_placement_grows_unbounded_rack() {
        let mut rack = Rack::unbounded();
        rack.add_bit(drill(1.0), Some(3)).unwrap();
        assert_eq!(rack.slot_count(), 3);
        assert_eq!(rack.get_tool(3), Some(drill(1.0)));
        assert_eq!(rack.get_tool(1), None);
        assert_eq!(rack.cursor(), 4);
        assert_eq!(rack.add_bit(drill(2.0), None).unwrap(), 4);
    }

    #[test]
    fn test_placement_errors() {
        let mut rack = Rack::with_capacity(3);
        rack.invalidate_slot(2).unwrap();
        rack.add_bit(drill(1.0), Some(1)).unwrap();

        assert!(matches!(
            rack.add_bit(drill(2.0), Some(1)),
            Err(PlanError::SlotOccupied { slot: 1, .. })
        ));
        assert!(matches!(
            rack.add_bit(drill(2.0), Some(2)),
            Err(PlanError::SlotInvalidated { slot: 2 })
        ));
        assert!(matches!(
            rack.add_bit(drill(2.0), Some(4)),
            Err(PlanError::IndexOutOfRange {
                slot: 4,
                capacity: 3
            })
        ));
        assert!(matches!(
            rack.add_bit(drill(2.0), Some(0)),
            Err(PlanError::IndexOutOfRange { slot: 0, .. })
        ));

        // Failures leave the rack untouched
        assert_eq!(rack.get_tool(1), Some(drill(1.0)));
        assert_eq!(rack.cursor(), 2);
    }

    #[test]
    fn test_capacity_exhausted() {
        let mut rack = Rack::with_capacity(2);
        rack.invalidate_slot(1).unwrap();
        rack.add_bit(drill(1.0), None).unwrap();

        let err = rack.add_bit(drill(2.0), None).unwrap_err();
        assert!(matches!(
            err,
            PlanError::CapacityExhausted { capacity: 2, .. }
        ));
    }

    #[test]
    fn test_invalidate_errors() {
        let mut rack = Rack::with_capacity(3);
        rack.add_bit(drill(1.0), Some(1)).unwrap();

        assert!(matches!(
            rack.invalidate_slot(1),
            Err(PlanError::SlotOccupied { slot: 1, .. })
        ));
        rack.invalidate_slot(2).unwrap();
        assert!(matches!(
            rack.invalidate_slot(2),
            Err(PlanError::SlotInvalidated { slot: 2 })
        ));
        assert!(matches!(
            rack.invalidate_slot(5),
            Err(PlanError::IndexOutOfRange { slot: 5, .. })
        ));
    }

    #[test]
    fn test_invalidate_grows_unbounded_rack() {
        let mut rack = Rack::unbounded();
        rack.invalidate_slot(2).unwrap();
        assert_eq!(rack.slot_count(), 2);

        assert_eq!(rack.add_bit(drill(1.0), None).unwrap(), 1);
        assert_eq!(rack.add_bit(drill(1.1), None).unwrap(), 3);
    }

    #[test]
    fn test_get_tool_probing() {
        let mut rack = Rack::with_capacity(3);
        rack.invalidate_slot(3).unwrap();
        rack.add_bit(router(1.0), Some(1)).unwrap();

        assert_eq!(rack.get_tool(0), None);
        assert_eq!(rack.get_tool(1), Some(router(1.0)));
        assert_eq!(rack.get_tool(2), None);
        assert_eq!(rack.get_tool(3), None);
        assert_eq!(rack.get_tool(99), None);
    }

    #[test]
    fn test_request_reuses_slot() {
        let mut rack = Rack::unbounded();
        assert_eq!(rack.request(drill(0.8)).unwrap(), 1);
        assert_eq!(rack.request(drill(1.0)).unwrap(), 2);
        assert_eq!(rack.request(drill(0.8)).unwrap(), 1);
        assert_eq!(rack.request(router(0.8)).unwrap(), 3);
        assert_eq!(rack.len(), 3);
    }

    #[test]
    fn test_remove_bit() {
        let mut rack = Rack::with_capacity(3);
        rack.add_bit(drill(1.0), None).unwrap();
        rack.add_bit(drill(2.0), None).unwrap();
        assert_eq!(rack.cursor(), 3);

        assert_eq!(rack.remove_bit(1), Some(drill(1.0)));
        assert_eq!(rack.remove_bit(1), None);
        assert_eq!(rack.remove_bit(0), None);
        assert_eq!(rack.cursor(), 3);
        assert_eq!(rack.len(), 1);
        assert!(!rack.contains(&drill(1.0)));
        assert_eq!(rack.add_bit(drill(3.0), None).unwrap(), 3);
    }

    #[test]
    fn test_sort_moves_cursor_after_last_tool() {
        let mut rack = Rack::with_capacity(5);
        rack.add_bit(drill(2.0), Some(4)).unwrap();
        rack.add_bit(drill(1.0), None).unwrap();
        assert_eq!(rack.cursor(), 1);

        rack.sort();
        assert_eq!(rack.get_tool(1), Some(drill(1.0)));
        assert_eq!(rack.get_tool(2), Some(drill(2.0)));
        assert_eq!(rack.cursor(), 3);
        assert_eq!(rack.add_bit(drill(3.0), None).unwrap(), 3);
    }

    #[test]
    fn test_sort_full_racks() {
        let mut rack = Rack::unbounded();
        rack.add_bit(drill(2.0), None).unwrap();
        rack.add_bit(drill(1.0), None).unwrap();
        rack.sort();
        assert_eq!(rack.cursor(), 1);
        assert_eq!(rack.add_bit(drill(3.0), None).unwrap(), 3);

        let mut rack = Rack::with_capacity(2);
        rack.add_bit(drill(2.0), None).unwrap();
        rack.add_bit(drill(1.0), None).unwrap();
        rack.sort();
        assert_eq!(rack.cursor(), 1);
        assert!(rack.add_bit(drill(3.0), None).is_err());
    }

    #[test]
    fn test_sort_empty_rack() {
        let mut rack = Rack::with_capacity(3);
        rack.sort();
        assert_eq!(rack.cursor(), 1);
        assert!(rack.is_empty());
    }

    #[test]
    fn test_merge_into_bounded_rack() {
        let mut required = Rack::unbounded();
        required.add_bit(router(1.0), None).unwrap();
        required.add_bit(drill(0.8), None).unwrap();

        let mut machine = Rack::with_capacity(3);
        machine.add_bit(drill(0.8), Some(3)).unwrap();

        machine.merge(&required).unwrap();
        assert_eq!(machine.get_tool(3), Some(drill(0.8)));
        assert_eq!(machine.get_tool(1), Some(router(1.0)));
        assert_eq!(machine.len(), 2);
    }

    #[test]
    fn test_merge_swaps_unused_tools_when_full() {
        let mut required = Rack::unbounded();
        required.add_bit(drill(0.8), None).unwrap();
        required.add_bit(drill(1.0), None).unwrap();

        let mut machine = Rack::with_capacity(2);
        machine.add_bit(drill(3.0), Some(1)).unwrap();
        machine.add_bit(drill(1.0), Some(2)).unwrap();

        machine.merge(&required).unwrap();
        assert_eq!(machine.get_tool(1), Some(drill(0.8)));
        assert_eq!(machine.get_tool(2), Some(drill(1.0)));

        let mut bigger = Rack::unbounded();
        bigger.add_bit(drill(0.5), None).unwrap();
        bigger.add_bit(drill(0.6), None).unwrap();
        bigger.add_bit(drill(0.7), None).unwrap();
        let mut small = Rack::with_capacity(2);
        assert!(matches!(
            small.merge(&bigger),
            Err(PlanError::CapacityExhausted { .. })
        ));
    }

    #[test]
    fn test_diff() {
        let mut target = Rack::with_capacity(3);
        target.add_bit(drill(0.8), Some(1)).unwrap();
        target.add_bit(drill(1.0), Some(2)).unwrap();
        target.add_bit(router(1.0), Some(3)).unwrap();

        let mut current = Rack::with_capacity(3);
        current.add_bit(drill(0.8), Some(1)).unwrap();
        current.add_bit(drill(1.2), Some(3)).unwrap();

        let changes = target.diff(&current);
        assert_eq!(
            changes,
            vec![
                RackChange::Load {
                    slot: 2,
                    tool: drill(1.0)
                },
                RackChange::Replace {
                    slot: 3,
                    old: drill(1.2),
                    new: router(1.0)
                },
            ]
        );
        assert_eq!(changes[1].to_string(), "T03: replace drill 1.2mm with router 1mm");
    }

    #[test]
    fn test_unbounded_rack_limit() {
        let mut rack = Rack::unbounded();
        assert!(matches!(
            rack.add_bit(drill(1.0), Some(usize::MAX)),
            Err(PlanError::IndexOutOfRange {
                capacity: MAX_RACK_SLOTS,
                ..
            })
        ));
        assert!(matches!(
            rack.invalidate_slot(MAX_RACK_SLOTS + 1),
            Err(PlanError::IndexOutOfRange { .. })
        ));
        assert_eq!(rack.slot_count(), 0);

        rack.add_bit(drill(1.0), Some(MAX_RACK_SLOTS)).unwrap();
        assert_eq!(rack.slot_count(), MAX_RACK_SLOTS);
        assert!(matches!(
            rack.add_bit(drill(2.0), None),
            Err(PlanError::CapacityExhausted { .. })
        ));
    }

    #[test]
    fn test_capacity_clamped() {
        let rack = Rack::with_capacity(usize::MAX);
        assert_eq!(rack.capacity(), Some(MAX_RACK_SLOTS));
        assert_eq!(rack.slot_count(), MAX_RACK_SLOTS);
    }

    #[test]
    fn test_from_config() {
        let config = RackConfig {
            capacity: Some(5),
            invalidated: vec![4, 4, 1],
            sort: true,
        };
        let rack = Rack::from_config(&config).unwrap();
        assert!(rack.is_invalidated(1));
        assert!(rack.is_invalidated(4));
        assert!(!rack.is_invalidated(2));

        let config = RackConfig {
            capacity: Some(3),
            invalidated: vec![6],
            sort: true,
        };
        assert!(matches!(
            Rack::from_config(&config),
            Err(PlanError::IndexOutOfRange { slot: 6, .. })
        ));
    }

    #[test]
    fn test_display() {
        let mut rack = Rack::with_capacity(4);
        rack.invalidate_slot(4).unwrap();
        rack.add_bit(drill(0.8), Some(2)).unwrap();
        rack.add_bit(router(1.2), None).unwrap();

        insta::assert_snapshot!(rack.to_string(), @"T01:x T02: 0.8mm T03:R1.2mm T04:-");
    }
}
