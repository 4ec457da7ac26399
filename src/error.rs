//! Error types for drill planning.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Tool;

/// Error codes for planning failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Invalid configuration (-4)
    InvalidConfig = -4,
    /// Slot already holds a tool (E100)
    SlotOccupied = 100,
    /// Slot is permanently invalidated (E101)
    SlotInvalidated = 101,
    /// No free slot left in a bounded rack (E102)
    CapacityExhausted = 102,
    /// Slot index outside the rack (E103)
    IndexOutOfRange = 103,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Slot T{slot:02} is already occupied by {tool}")]
    SlotOccupied { slot: usize, tool: Tool },

    #[error("Slot T{slot:02} is invalidated")]
    SlotInvalidated { slot: usize },

    #[error("Rack of {capacity} slots is full, cannot place {tool}")]
    CapacityExhausted { capacity: usize, tool: Tool },

    #[error("Slot T{slot:02} is out of range (capacity {capacity})")]
    IndexOutOfRange { slot: usize, capacity: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::Json { .. } => ErrorCode::ParseError,
            PlanError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            PlanError::SlotOccupied { .. } => ErrorCode::SlotOccupied,
            PlanError::SlotInvalidated { .. } => ErrorCode::SlotInvalidated,
            PlanError::CapacityExhausted { .. } => ErrorCode::CapacityExhausted,
            PlanError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            PlanError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this error comes from a rack operation.
    pub fn is_rack_error(&self) -> bool {
        matches!(
            self,
            PlanError::SlotOccupied { .. }
                | PlanError::SlotInvalidated { .. }
                | PlanError::CapacityExhausted { .. }
                | PlanError::IndexOutOfRange { .. }
        )
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
