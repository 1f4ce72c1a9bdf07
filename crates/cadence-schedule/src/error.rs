//! Error types for the schedule engine.

use thiserror::Error;

use crate::editor::EditMode;
use crate::field::FieldName;

/// Errors that can occur in schedule operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The string did not split into exactly five fields.
    #[error("invalid cron expression: expected 5 fields, got {found}")]
    MalformedFieldCount { found: usize },

    /// A field value that must be numeric was not.
    #[error("invalid {field} value: {token:?} is not a number")]
    NotANumber { field: FieldName, token: String },

    /// A numeric field value fell outside the field's range.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: FieldName,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A step token had a bad base or interval.
    #[error("invalid {field} step: {token:?}")]
    InvalidStep { field: FieldName, token: String },

    /// No preset with this label or index.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// The editor surface used does not match the current mode.
    #[error("editor is in {actual} mode, expected {expected} mode")]
    WrongMode { expected: EditMode, actual: EditMode },
}
