//! Rendering of command results as text or JSON.

use cadence_schedule::{Catalog, PresetEntry, ScheduleError, validate};
use clap::ValueEnum;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per result.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Description of one schedule string.
#[derive(Debug, Serialize)]
pub struct DescribeReport {
    pub expression: String,
    pub description: String,
    /// Label of the exactly matching preset, if any.
    pub preset: Option<&'static str>,
}

impl DescribeReport {
    pub fn new(catalog: &Catalog, expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
            description: catalog.describe(expression),
            preset: catalog.find(expression).map(|p| p.label),
        }
    }
}

/// Outcome of the strict gate for one schedule string.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub expression: String,
    pub valid: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    /// Run the strict gate, keeping the error for the caller.
    pub fn new(catalog: &Catalog, expression: &str) -> (Self, Option<ScheduleError>) {
        let error = validate::check(expression).err();
        let report = Self {
            expression: expression.to_string(),
            valid: error.is_none(),
            description: catalog.describe(expression),
            error: error.as_ref().map(ToString::to_string),
        };
        (report, error)
    }
}

pub fn render_descriptions(
    reports: &[DescribeReport],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports),
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|r| format!("{}\t{}\n", r.expression, r.description))
            .collect()),
    }
}

pub fn render_presets(
    presets: &[PresetEntry],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(presets),
        OutputFormat::Text => Ok(presets
            .iter()
            .enumerate()
            .map(|(i, preset)| {
                format!(
                    "{:>2}. {:<22} {:<14} {}\n",
                    i + 1,
                    preset.label,
                    preset.cron,
                    preset.description
                )
            })
            .collect()),
    }
}

pub fn render_validation(
    report: &ValidationReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Text => Ok(match &report.error {
            None => format!("{}\tvalid\t{}\n", report.expression, report.description),
            Some(error) => format!("{}\tinvalid\t{}\n", report.expression, error),
        }),
    }
}
