//! Machining plan: which tool cuts which feature, from which rack slot.
//!
//! Tools are first collected in an unbounded rack of required tools, one per
//! distinct (kind, diameter), then merged into the machine's rack. Operations
//! are finally grouped by the slot of their tool.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::inventory::{Inventory, Operations};
use crate::model::{Coordinate, Feature, Oblong, Tool, ToolKind};
use crate::rack::{Rack, RackChange};
use crate::stock;
use crate::units::Length;

/// A single machining operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Drill one hole.
    Drill { at: Coordinate },
    /// Drill a slot as a row of overlapping holes.
    PeckSlot { points: Vec<Coordinate> },
    /// Route a slot in a single stroke.
    RouteSlot { start: Coordinate, end: Coordinate },
    /// Route a round hole no stock drill can make.
    RouteHole { center: Coordinate, diameter: Length },
}

/// All operations of one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolJob {
    /// Rack slot of the tool.
    pub slot: usize,
    /// Tool used.
    pub tool: Tool,
    /// Operations in feature discovery order.
    pub operations: Vec<Operation>,
}

/// Result of planning a board.
#[derive(Debug, Clone, Serialize)]
pub struct MachiningPlan {
    /// Board origin the coordinates are relative to.
    pub origin: Coordinate,
    /// Rack to load on the machine.
    pub rack: Rack,
    /// Operator actions to get from the supplied rack to `rack`.
    pub changes: Vec<RackChange>,
    /// Work per tool, in slot order.
    pub jobs: Vec<ToolJob>,
    /// Features no stock tool can cut.
    pub unmachined: Vec<Feature>,
}

impl MachiningPlan {
    /// Total number of operations.
    pub fn operation_count(&self) -> usize {
        self.jobs.iter().map(|j| j.operations.len()).sum()
    }

    /// Work of a given slot.
    pub fn job(&self, slot: usize) -> Option<&ToolJob> {
        self.jobs.iter().find(|j| j.slot == slot)
    }
}

/// Turns an inventory into a machining plan.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan the features selected by `ops` on the given machine rack.
    pub fn plan(
        &self,
        inventory: &Inventory,
        ops: Operations,
        machine_rack: Rack,
    ) -> Result<MachiningPlan> {
        let features = inventory.get_features(ops);

        let mut required = Rack::unbounded();
        let mut pending: Vec<(Tool, Operation)> = Vec::new();
        let mut unmachined = Vec::new();

        for (diameter, bucket) in features.iter() {
            for feature in bucket {
                let Some(wanted) = self.select_tool(feature) else {
                    warn!("Skipping {} feature: no geometry", feature);
                    continue;
                };

                let Some(tool) = self.stock_tool(feature, wanted) else {
                    warn!("No {} in stock for {} ({})", wanted, feature, diameter);
                    unmachined.push(*feature);
                    continue;
                };

                required.request(tool)?;
                if let Some(operation) = self.operation(feature, &tool) {
                    pending.push((tool, operation));
                }
            }
        }

        if self.config.rack.sort {
            required.sort();
        }

        let current = machine_rack.clone();
        let mut rack = machine_rack;
        rack.merge(&required)?;
        let changes = rack.diff(&current);

        let mut by_slot: BTreeMap<usize, (Tool, Vec<Operation>)> = BTreeMap::new();
        for (tool, operation) in pending {
            let slot = rack.request(tool)?;
            by_slot
                .entry(slot)
                .or_insert_with(|| (tool, Vec::new()))
                .1
                .push(operation);
        }

        let jobs: Vec<ToolJob> = by_slot
            .into_iter()
            .map(|(slot, (tool, operations))| ToolJob {
                slot,
                tool,
                operations,
            })
            .collect();

        let plan = MachiningPlan {
            origin: inventory.offset,
            rack,
            changes,
            jobs,
            unmachined,
        };

        info!(
            "Planned {} operation(s) with {} tool(s), rack: {}",
            plan.operation_count(),
            plan.jobs.len(),
            plan.rack
        );

        if !plan.unmachined.is_empty() {
            warn!("{} feature(s) cannot be machined", plan.unmachined.len());
        }

        Ok(plan)
    }

    /// Stock tool for a feature.
    ///
    /// A hole no stock drill matches is routed instead, unless it is smaller
    /// than the smallest drill in stock.
    fn stock_tool(&self, feature: &Feature, wanted: Tool) -> Option<Tool> {
        let stock = &self.config.stock;
        if let Some(tool) = stock::nearest(stock, wanted) {
            return Some(tool);
        }

        let Feature::Hole(hole) = feature else {
            return None;
        };
        let (smallest, largest) = stock.size_range(ToolKind::DrillBit)?;
        if hole.diameter < smallest {
            return None;
        }

        let router = stock::router_for_hole(stock, hole.diameter)?;
        if hole.diameter > largest {
            debug!("{} is larger than any drill, routing with {}", feature, router);
        } else {
            debug!("No drill in stock for {}, routing with {}", feature, router);
        }
        Some(router)
    }

    /// Tool wanted for a feature before stock matching.
    fn select_tool(&self, feature: &Feature) -> Option<Tool> {
        match feature {
            Feature::Hole(hole) => Some(Tool::drill(hole.diameter)),
            Feature::Oblong(oblong) => {
                if self.is_routed(oblong) {
                    Some(Tool::router(oblong.diameter))
                } else {
                    Some(Tool::drill(oblong.diameter))
                }
            }
            Feature::Route => None,
        }
    }

    /// Long slots are routed, short ones drilled.
    fn is_routed(&self, oblong: &Oblong) -> bool {
        let ratio = self.config.machining.slot_peck_drilling.max_length_to_bit_diameter;
        oblong.distance > oblong.diameter * ratio
    }

    fn operation(&self, feature: &Feature, tool: &Tool) -> Option<Operation> {
        match feature {
            Feature::Hole(hole) if tool.is_router() => Some(Operation::RouteHole {
                center: hole.center,
                diameter: hole.diameter,
            }),
            Feature::Hole(hole) => Some(Operation::Drill { at: hole.center }),
            Feature::Oblong(oblong) if tool.is_router() => Some(Operation::RouteSlot {
                start: oblong.start,
                end: oblong.end,
            }),
            Feature::Oblong(oblong) => Some(Operation::PeckSlot {
                points: self.peck_points(oblong, tool),
            }),
            Feature::Route => None,
        }
    }

    /// Drill points along a slot: both ends plus evenly spaced pecks in between.
    fn peck_points(&self, oblong: &Oblong, tool: &Tool) -> Vec<Coordinate> {
        if oblong.distance.is_zero() {
            return vec![oblong.start];
        }

        let pecks = self.config.machining.slot_peck_drilling.pecks_per_hole.max(1);
        let spacing = tool.diameter / pecks as f64;
        let steps = if spacing.is_zero() {
            1
        } else {
            ((oblong.distance / spacing).floor() as usize).max(1)
        };

        let mut points = vec![oblong.start, oblong.end];
        points.extend(
            (1..steps).map(|i| oblong.start.lerp(&oblong.end, i as f64 / steps as f64)),
        );
        points
    }
}
