//! Cron schedule engine for Cadence.
//!
//! This crate provides:
//! - A lenient parser for 5-field cron strings
//! - A static catalog of named schedule presets
//! - Human-readable descriptions for any schedule string
//! - An editor that keeps a preset picker and a free-text field in sync
//! - An optional strict gate for the save path

pub mod catalog;
pub mod describe;
pub mod editor;
mod error;
pub mod field;
pub mod validate;

pub use catalog::{BUILTIN_PRESETS, Catalog, PresetEntry};
pub use describe::{CUSTOM_SCHEDULE, INVALID_EXPRESSION, describe, synthesize};
pub use editor::{
    CUSTOM_PLACEHOLDER, ChangeCallback, EditMode, EditorView, PresetOption, ScheduleEditor,
};
pub use error::ScheduleError;
pub use field::{CronExpression, Field, FieldName};
