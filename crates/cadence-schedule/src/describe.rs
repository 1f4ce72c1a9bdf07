//! Human-readable schedule descriptions.
//!
//! A description is built from up to four clauses, in order: time of day,
//! day of month, month, day of week. Curated preset descriptions take
//! precedence over synthesized ones.

use crate::catalog::Catalog;
use crate::field::{CronExpression, Field};

/// Description for a string that does not have five fields.
pub const INVALID_EXPRESSION: &str = "Invalid cron expression";

/// Description when no clause applies.
pub const CUSTOM_SCHEDULE: &str = "Custom schedule";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Describe a schedule string using the built-in catalog.
///
/// # Example
///
/// ```
/// use cadence_schedule::describe;
///
/// assert_eq!(describe("0 3 * * *"), "Every day at 3:00 AM");
/// assert_eq!(describe("30 4 * * *"), "At 04:30");
/// assert_eq!(describe("a b c"), "Invalid cron expression");
/// ```
pub fn describe(raw: &str) -> String {
    Catalog::builtin().describe(raw)
}

impl Catalog {
    /// Describe a schedule string against this catalog.
    ///
    /// Malformed strings get [`INVALID_EXPRESSION`]. An exact preset match
    /// returns the preset's curated description; anything else is synthesized.
    pub fn describe(&self, raw: &str) -> String {
        let expr = match CronExpression::parse(raw) {
            Ok(expr) => expr,
            Err(_) => return INVALID_EXPRESSION.to_string(),
        };

        match self.find(raw) {
            Some(preset) => preset.description.to_string(),
            None => synthesize(&expr),
        }
    }
}

/// Build a description from the fields alone, ignoring any presets.
pub fn synthesize(expr: &CronExpression) -> String {
    let clauses = [
        Some(time_of_day(&expr.minute, &expr.hour)),
        day_of_month(&expr.day_of_month),
        month(&expr.month),
        day_of_week(&expr.day_of_week),
    ];

    let sentence = clauses
        .into_iter()
        .flatten()
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if sentence.is_empty() {
        CUSTOM_SCHEDULE.to_string()
    } else {
        sentence
    }
}

/// Minute and hour combined. First matching rule wins.
fn time_of_day(minute: &Field, hour: &Field) -> String {
    match (minute, hour) {
        (m, Field::List { values }) if m.is_zero() => {
            let times: Vec<String> = values.iter().map(|h| format!("{}:00", pad(h))).collect();
            format!("At {}", times.join(" and "))
        }
        (m, Field::Step { interval, .. }) if m.is_zero() => {
            format!("Every {} hours", every(interval))
        }
        (m, Field::Single { value }) if m.is_zero() => format!("At {}:00", pad(value)),
        (Field::Wildcard, Field::Wildcard) => "Every minute".to_string(),
        (Field::Step { interval, .. }, Field::Wildcard) => {
            format!("Every {} minutes", every(interval))
        }
        (m, Field::Wildcard) => format!("At minute {m} of every hour"),
        // Fallback, including a step minute with a fixed hour ("At 03:*/15")
        (m, h) => format!("At {}:{}", pad(&h.raw()), pad(&m.raw())),
    }
}

fn day_of_month(field: &Field) -> Option<String> {
    match field {
        Field::Wildcard => None,
        Field::Step { interval, .. } => Some(format!("every {} days", every(interval))),
        other => Some(format!("on day {other}")),
    }
}

fn month(field: &Field) -> Option<String> {
    match field {
        Field::Wildcard => None,
        Field::Step { interval, .. } => Some(format!("every {} months", every(interval))),
        other => Some(format!("in {}", names(&other.raw(), &MONTHS, 1))),
    }
}

/// Day of week has no step phrasing; a step token is echoed as written.
fn day_of_week(field: &Field) -> Option<String> {
    match field {
        Field::Wildcard => None,
        other => Some(format!("on {}", names(&other.raw(), &WEEKDAYS, 0))),
    }
}

/// Interval text of a step: everything up to the next `/`.
fn every(interval: &str) -> &str {
    interval
        .split_once('/')
        .map_or(interval, |(head, _)| head)
}

/// Map each comma-separated value to its name, echoing values outside the table.
fn names(raw: &str, table: &[&str], first: usize) -> String {
    raw.split(',')
        .map(|token| {
            leading_number(token)
                .and_then(|n| n.checked_sub(first))
                .and_then(|i| table.get(i).copied())
                .unwrap_or(token)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The decimal number a token starts with, after an optional sign.
///
/// Trailing text is ignored (`3x` is 3). Negative numbers other than zero
/// have no value.
fn leading_number(token: &str) -> Option<usize> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<usize>().ok()?;
    (!negative || value == 0).then_some(value)
}

/// Left-pad to two characters with zeros.
fn pad(token: &str) -> String {
    format!("{token:0>2}")
}
