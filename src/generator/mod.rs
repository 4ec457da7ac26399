//! G-code generator module.

mod gcode;
mod program;

pub use gcode::{format_coord, format_feed, GcodeWriter};
pub use program::generate_gcode;
