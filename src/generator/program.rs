//! G-code program generator for a machining plan.

use crate::config::PlannerConfig;
use crate::model::{Coordinate, CutDirection, ToolKind};
use crate::planner::{MachiningPlan, Operation, ToolJob};
use crate::units::Length;

use super::gcode::{format_coord, GcodeWriter};

/// Generate the G-code program of a plan.
pub fn generate_gcode(plan: &MachiningPlan, config: &PlannerConfig, board_name: &str) -> String {
    let mut writer = GcodeWriter::new();

    generate_header(&mut writer, plan, board_name);

    for job in &plan.jobs {
        generate_job(&mut writer, job, config);
    }

    writer.write_comment("end of file");
    writer.spindle_stop();
    writer.rapid_z(config.machining.z_safe);
    writer.program_end();

    writer.take_output()
}

/// Program comment block and modal reset.
fn generate_header(writer: &mut GcodeWriter, plan: &MachiningPlan, board_name: &str) {
    writer.write_comment(&format!("Created by pcb2gcode-rs from '{}'", board_name));
    writer.write_comment(&format!(
        "Origin: X{} Y{}",
        format_coord(plan.origin.x),
        format_coord(plan.origin.y)
    ));

    for (slot, tool) in plan.rack.tools() {
        writer.write_comment(&format!("T{}: {}", slot, tool));
    }

    writer.safe_defaults();
    writer.metric();
}

/// Tool change followed by all the work of one tool.
fn generate_job(writer: &mut GcodeWriter, job: &ToolJob, config: &PlannerConfig) {
    let machining = &config.machining;
    let (rpm, z_feed) = match job.tool.kind {
        ToolKind::DrillBit => (machining.drill_rpm, machining.drill_z_feed),
        ToolKind::RouterBit => (machining.router_rpm, machining.router_z_feed),
    };

    writer.write_blank();
    writer.write_comment(&format!("T{}: {}", job.slot, job.tool));
    writer.tool_change(job.slot, rpm);
    writer.rapid_z(machining.z_safe);

    // Every drilled point of this tool goes through one canned cycle
    let drill_points: Vec<Coordinate> = job
        .operations
        .iter()
        .flat_map(|op| match op {
            Operation::Drill { at } => vec![*at],
            Operation::PeckSlot { points } => points.clone(),
            Operation::RouteSlot { .. } | Operation::RouteHole { .. } => Vec::new(),
        })
        .collect();

    if let Some((first, rest)) = drill_points.split_first() {
        writer.drill_cycle(
            first.x,
            first.y,
            machining.z_bottom,
            machining.z_safe,
            z_feed,
        );
        for point in rest {
            writer.cycle_at(point.x, point.y);
        }
        writer.cancel_cycle();
    }

    for op in &job.operations {
        match op {
            Operation::RouteSlot { start, end } => {
                writer.rapid_xy(start.x, start.y);
                writer.linear_z(machining.z_bottom, z_feed);
                writer.linear_xy(end.x, end.y, machining.router_table_feed);
                writer.rapid_z(machining.z_safe);
            }
            Operation::RouteHole { center, diameter } => {
                writer.rapid_xy(center.x, center.y);
                writer.linear_z(machining.z_bottom, z_feed);
                let radius = (*diameter - job.tool.diameter) / 2.0;
                if radius > Length::ZERO {
                    route_circle(
                        writer,
                        *center,
                        radius,
                        machining.router_cut_direction,
                        machining.router_table_feed,
                    );
                }
                writer.rapid_z(machining.z_safe);
            }
            Operation::Drill { .. } | Operation::PeckSlot { .. } => {}
        }
    }
}

/// Full circle of the tool centre around `center`, in four quarter arcs from
/// the top, then back to the centre.
fn route_circle(
    writer: &mut GcodeWriter,
    center: Coordinate,
    radius: Length,
    direction: CutDirection,
    feed: f64,
) {
    let clockwise = direction.is_clockwise();
    let zero = Length::ZERO;
    let top = center.offset(zero, radius);
    let right = center.offset(radius, zero);
    let bottom = center.offset(zero, -radius);
    let left = center.offset(-radius, zero);

    let quarters = if clockwise {
        [right, bottom, left, top]
    } else {
        [left, bottom, right, top]
    };

    writer.linear_xy(top.x, top.y, feed);
    let mut from = top;
    for to in quarters {
        writer.arc(clockwise, to.x, to.y, center.x - from.x, center.y - from.y);
        from = to;
    }
    writer.linear_xy(center.x, center.y, feed);
}
