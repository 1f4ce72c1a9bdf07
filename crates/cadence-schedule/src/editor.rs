//! Schedule editor state.
//!
//! The editor owns one canonical schedule string and shows it through one of
//! two surfaces: a preset picker or a free-text field. Switching surfaces
//! never changes the string. Every edit is reported through the change
//! callback so the owning form can persist it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, PresetEntry};
use crate::ScheduleError;

/// Picker text when the current string matches no preset.
pub const PRESET_PLACEHOLDER: &str = "Select schedule...";

/// Hint shown in an empty free-text field.
pub const CUSTOM_PLACEHOLDER: &str = "0 3 * * *";

/// Callback invoked with the new schedule string after every edit.
pub type ChangeCallback<'a> = Box<dyn FnMut(&str) + 'a>;

/// Which editing surface is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// Closed list of catalog presets.
    Preset,
    /// Free-text schedule string.
    Custom,
}

impl EditMode {
    pub fn toggled(self) -> Self {
        match self {
            EditMode::Preset => EditMode::Custom,
            EditMode::Custom => EditMode::Preset,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Preset => f.write_str("preset"),
            EditMode::Custom => f.write_str("custom"),
        }
    }
}

/// One row of the preset picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetOption {
    /// 1-based position in the picker.
    pub number: usize,
    pub label: &'static str,
    pub cron: &'static str,
    pub description: &'static str,
    /// Whether this preset matches the current string exactly.
    pub selected: bool,
}

/// Snapshot of everything the editor renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub mode: EditMode,
    pub value: String,
    pub description: String,
    /// Label of the matching preset, or the picker placeholder.
    pub picker_label: &'static str,
    /// Picker rows; empty outside preset mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PresetOption>,
}

/// Coordinates the preset picker and free-text field over one schedule string.
pub struct ScheduleEditor<'a> {
    value: String,
    mode: EditMode,
    catalog: Catalog,
    on_change: Option<ChangeCallback<'a>>,
}

impl fmt::Debug for ScheduleEditor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleEditor")
            .field("value", &self.value)
            .field("mode", &self.mode)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl<'a> ScheduleEditor<'a> {
    /// Create an editor over the built-in catalog.
    ///
    /// Starts in preset mode if `value` matches a preset exactly, otherwise
    /// in custom mode.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_catalog(value, Catalog::builtin())
    }

    /// Create an editor over a specific catalog.
    pub fn with_catalog(value: impl Into<String>, catalog: Catalog) -> Self {
        let value = value.into();
        let mode = if catalog.contains(&value) {
            EditMode::Preset
        } else {
            EditMode::Custom
        };
        debug!(value = %value, mode = %mode, "editor opened");
        Self {
            value,
            mode,
            catalog,
            on_change: None,
        }
    }

    /// Register the callback that receives every new schedule string.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The current schedule string.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Show a different surface. The schedule string is left untouched.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "editor mode switched");
            self.mode = mode;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Select a preset by zero-based picker position.
    ///
    /// Overwrites the schedule string with the preset's exact string.
    pub fn select_preset(&mut self, index: usize) -> Result<&'static PresetEntry, ScheduleError> {
        self.require_mode(EditMode::Preset)?;
        let preset = self.catalog.get(index).ok_or_else(|| {
            warn!(index, "preset index out of range");
            ScheduleError::UnknownPreset(format!("#{}", index.saturating_add(1)))
        })?;
        self.commit(preset.cron.to_string());
        Ok(preset)
    }

    /// Select a preset by its picker label.
    pub fn select_preset_by_label(
        &mut self,
        label: &str,
    ) -> Result<&'static PresetEntry, ScheduleError> {
        self.require_mode(EditMode::Preset)?;
        let preset = self.catalog.find_by_label(label).ok_or_else(|| {
            warn!(label, "no preset with this label");
            ScheduleError::UnknownPreset(label.to_string())
        })?;
        self.commit(preset.cron.to_string());
        Ok(preset)
    }

    /// Replace the free-text value, as after a keystroke.
    ///
    /// Accepted as typed: no trimming and no validation.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), ScheduleError> {
        self.require_mode(EditMode::Custom)?;
        self.commit(text.into());
        Ok(())
    }

    /// Description of the current string, recomputed on every call.
    pub fn description(&self) -> String {
        self.catalog.describe(&self.value)
    }

    /// The preset matching the current string exactly, if any.
    pub fn selected_preset(&self) -> Option<&'static PresetEntry> {
        self.catalog.find(&self.value)
    }

    /// Render the editor's current state.
    pub fn view(&self) -> EditorView {
        let options = match self.mode {
            EditMode::Preset => self
                .catalog
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| PresetOption {
                    number: i + 1,
                    label: entry.label,
                    cron: entry.cron,
                    description: entry.description,
                    selected: entry.cron == self.value,
                })
                .collect(),
            EditMode::Custom => Vec::new(),
        };

        EditorView {
            mode: self.mode,
            value: self.value.clone(),
            description: self.description(),
            picker_label: self
                .selected_preset()
                .map(|preset| preset.label)
                .unwrap_or(PRESET_PLACEHOLDER),
            options,
        }
    }

    fn require_mode(&self, expected: EditMode) -> Result<(), ScheduleError> {
        if self.mode == expected {
            Ok(())
        } else {
            warn!(expected = %expected, actual = %self.mode, "edit rejected in wrong mode");
            Err(ScheduleError::WrongMode {
                expected,
                actual: self.mode,
            })
        }
    }

    fn commit(&mut self, value: String) {
        debug!(from = %self.value, to = %value, "schedule changed");
        self.value = value;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.value);
        }
    }
}
