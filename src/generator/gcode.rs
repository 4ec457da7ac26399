//! G-code writing utilities.

use std::fmt::Write;

use crate::units::Length;

/// G-code writer.
pub struct GcodeWriter {
    /// Output buffer.
    buffer: String,
}

impl GcodeWriter {
    /// Create a new G-code writer.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Get the generated G-code.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated G-code.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line.
    pub fn write_line(&mut self, content: &str) {
        writeln!(self.buffer, "{}", content).unwrap();
    }

    /// Write a comment line.
    ///
    /// Parentheses would end the comment early, so they are replaced.
    pub fn write_comment(&mut self, comment: &str) {
        let text = comment.replace('(', "[").replace(')', "]");
        writeln!(self.buffer, "({})", text).unwrap();
    }

    /// Write an empty line.
    pub fn write_blank(&mut self) {
        writeln!(self.buffer).unwrap();
    }

    // === Setup ===

    /// Reset modal state: XY plane, G54, no compensation, no cycle, absolute.
    pub fn safe_defaults(&mut self) {
        self.write_line("G17 G54 G40 G49 G80 G90");
    }

    /// Metric units (G21).
    pub fn metric(&mut self) {
        self.write_line("G21");
    }

    // === Movement commands ===

    /// Rapid move in XY (G0).
    pub fn rapid_xy(&mut self, x: Length, y: Length) {
        self.write_line(&format!("G0 X{} Y{}", format_coord(x), format_coord(y)));
    }

    /// Rapid move in Z (G0).
    pub fn rapid_z(&mut self, z: Length) {
        self.write_line(&format!("G0 Z{}", format_coord(z)));
    }

    /// Linear move in Z at a feed rate (G1).
    pub fn linear_z(&mut self, z: Length, feed: f64) {
        self.write_line(&format!("G1 Z{} F{}", format_coord(z), format_feed(feed)));
    }

    /// Linear move in XY at a feed rate (G1).
    pub fn linear_xy(&mut self, x: Length, y: Length, feed: f64) {
        self.write_line(&format!(
            "G1 X{} Y{} F{}",
            format_coord(x),
            format_coord(y),
            format_feed(feed)
        ));
    }

    /// Arc to (`x`, `y`) around the centre offset (`i`, `j`) from the current
    /// position, clockwise (G2) or counter-clockwise (G3).
    pub fn arc(&mut self, clockwise: bool, x: Length, y: Length, i: Length, j: Length) {
        self.write_line(&format!(
            "{} X{} Y{} I{} J{}",
            if clockwise { "G2" } else { "G3" },
            format_coord(x),
            format_coord(y),
            format_coord(i),
            format_coord(j)
        ));
    }

    // === Canned cycles ===

    /// Start a simple drilling cycle (G81) at the first hole.
    pub fn drill_cycle(&mut self, x: Length, y: Length, z: Length, r: Length, feed: f64) {
        self.write_line(&format!(
            "G81 X{} Y{} Z{} R{} F{}",
            format_coord(x),
            format_coord(y),
            format_coord(z),
            format_coord(r),
            format_feed(feed)
        ));
    }

    /// Repeat the active cycle at another hole.
    pub fn cycle_at(&mut self, x: Length, y: Length) {
        self.write_line(&format!("X{} Y{}", format_coord(x), format_coord(y)));
    }

    /// Cancel the active cycle (G80).
    pub fn cancel_cycle(&mut self) {
        self.write_line("G80");
    }

    // === Tool control ===

    /// Change tool and start the spindle.
    pub fn tool_change(&mut self, slot: usize, rpm: u32) {
        self.write_line(&format!("T{} M06", slot));
        self.write_line(&format!("S{} M03", rpm));
    }

    /// Stop the spindle (M05).
    pub fn spindle_stop(&mut self) {
        self.write_line("M05");
    }

    /// End of program (M30).
    pub fn program_end(&mut self) {
        self.write_line("M30");
    }
}

impl Default for GcodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a length in millimetres, at most 4 decimals, trailing zeros trimmed.
pub fn format_coord(value: Length) -> String {
    trim_decimal(format!("{:.4}", value.mm()))
}

/// Format a feed rate in mm/min, at most 1 decimal.
pub fn format_feed(value: f64) -> String {
    trim_decimal(format!("{:.1}", value))
}

fn trim_decimal(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    if trimmed.is_empty() || trimmed == "-0" || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
