//! Matching requested diameters to bits in stock.

use crate::config::StockConfig;
use crate::model::{Tool, ToolKind};
use crate::units::Length;

impl StockConfig {
    /// Stock diameters for a kind of tool.
    pub fn sizes(&self, kind: ToolKind) -> &[Length] {
        match kind {
            ToolKind::DrillBit => &self.drillbits,
            ToolKind::RouterBit => &self.routerbits,
        }
    }

    /// Smallest and largest stock diameter for a kind of tool.
    pub fn size_range(&self, kind: ToolKind) -> Option<(Length, Length)> {
        let sizes = self.sizes(kind);
        let min = sizes.iter().min()?;
        let max = sizes.iter().max()?;
        Some((*min, *max))
    }
}

/// Stock tool closest to the requested one.
///
/// A drill bit may be up to `oversizing_allowance_percent` larger than
/// requested, since plating shrinks the finished hole; a router bit never is.
/// Either may be up to `downsizing_allowance_percent` smaller. With no stock
/// listed for the kind, the requested diameter is used as is.
pub fn nearest(stock: &StockConfig, tool: Tool) -> Option<Tool> {
    let sizes = stock.sizes(tool.kind);
    if sizes.is_empty() {
        return Some(tool);
    }

    let wanted = tool.diameter;
    let lower = wanted - wanted * (stock.downsizing_allowance_percent / 100.0);
    let upper = wanted + wanted * (stock.oversizing_allowance_percent / 100.0);
    let allow_bigger = tool.kind == ToolKind::DrillBit;

    let mut sorted: Vec<Length> = sizes.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut best: Option<(Length, Length)> = None;

    for size in sorted {
        let too_big = if allow_bigger {
            size > upper
        } else {
            size > wanted
        };
        if too_big {
            continue;
        }

        // Sizes only get smaller from here
        if size < lower {
            break;
        }

        let delta = (wanted - size).abs();
        if best.map_or(true, |(_, d)| delta < d) {
            best = Some((size, delta));
            if delta.is_zero() {
                break;
            }
        }
    }

    best.map(|(size, _)| Tool::new(tool.kind, size))
}

/// Largest stock router bit that fits inside a hole of the given diameter.
///
/// Unlike drill bits, a router needs a listed size: with no router stock
/// there is nothing to route with.
pub fn router_for_hole(stock: &StockConfig, diameter: Length) -> Option<Tool> {
    stock
        .routerbits
        .iter()
        .filter(|size| !size.is_zero() && **size <= diameter)
        .max()
        .map(|size| Tool::router(*size))
}
