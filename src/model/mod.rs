//! Data model types for drill planning.

mod coordinate;
mod feature;
mod tool;

pub use coordinate::Coordinate;
pub use feature::{Feature, Hole, Oblong};
pub use tool::{CutDirection, Tool, ToolKind};
