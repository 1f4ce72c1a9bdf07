//! Cron field parsing.
//!
//! A schedule string is five whitespace-separated fields:
//! ```text
//! ┌───────────── minute
//! │ ┌───────────── hour
//! │ │ ┌───────────── day of month
//! │ │ │ ┌───────────── month
//! │ │ │ │ ┌───────────── day of week (0 = Sunday)
//! │ │ │ │ │
//! * * * * *
//! ```
//!
//! Parsing only classifies each token. Values are kept as raw text and are
//! never range-checked here; see [`crate::validate`] for the strict gate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ScheduleError;

/// Number of fields in a schedule string.
pub const FIELD_COUNT: usize = 5;

/// Position of a field within a schedule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldName {
    /// All fields in schedule-string order.
    pub const ALL: [FieldName; FIELD_COUNT] = [
        FieldName::Minute,
        FieldName::Hour,
        FieldName::DayOfMonth,
        FieldName::Month,
        FieldName::DayOfWeek,
    ];

    /// Inclusive range of accepted values, used by the strict gate.
    pub fn range(self) -> (u32, u32) {
        match self {
            FieldName::Minute => (0, 59),
            FieldName::Hour => (0, 23),
            FieldName::DayOfMonth => (1, 31),
            FieldName::Month => (1, 12),
            // 7 is accepted as an alias for Sunday
            FieldName::DayOfWeek => (0, 7),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::DayOfMonth => "day-of-month",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "day-of-week",
        };
        f.write_str(name)
    }
}

/// A classified field token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Field {
    /// `*`: every unit.
    Wildcard,
    /// One literal value.
    Single { value: String },
    /// Comma-separated literals, in order, duplicates kept.
    List { values: Vec<String> },
    /// `*/N` or `base/N`: every N units.
    Step { base: String, interval: String },
}

impl Field {
    /// Classify a single token.
    ///
    /// A token containing `/` is a step, even if it also contains commas.
    pub fn classify(token: &str) -> Self {
        if let Some((base, interval)) = token.split_once('/') {
            Field::Step {
                base: base.to_string(),
                interval: interval.to_string(),
            }
        } else if token == "*" {
            Field::Wildcard
        } else if token.contains(',') {
            Field::List {
                values: token.split(',').map(String::from).collect(),
            }
        } else {
            Field::Single {
                value: token.to_string(),
            }
        }
    }

    /// Reconstruct the original token.
    pub fn raw(&self) -> String {
        match self {
            Field::Wildcard => "*".to_string(),
            Field::Single { value } => value.clone(),
            Field::List { values } => values.join(","),
            Field::Step { base, interval } => format!("{base}/{interval}"),
        }
    }

    /// True only for the literal token `0`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Field::Single { value } if value == "0")
    }

    /// The interval of a step field.
    pub fn step_interval(&self) -> Option<&str> {
        match self {
            Field::Step { interval, .. } => Some(interval),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

/// A parsed schedule string.
///
/// Derived from the string on demand and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronExpression {
    pub minute: Field,
    pub hour: Field,
    pub day_of_month: Field,
    pub month: Field,
    pub day_of_week: Field,
}

impl CronExpression {
    /// Parse a schedule string.
    ///
    /// Fails only when the string does not split into exactly five
    /// whitespace-separated tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use cadence_schedule::{CronExpression, Field};
    ///
    /// let expr = CronExpression::parse("0 */6 * * *").unwrap();
    /// assert!(expr.minute.is_zero());
    /// assert_eq!(expr.hour.step_interval(), Some("6"));
    /// assert_eq!(expr.day_of_week, Field::Wildcard);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ScheduleError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = tokens[..] else {
            return Err(ScheduleError::MalformedFieldCount {
                found: tokens.len(),
            });
        };

        Ok(Self {
            minute: Field::classify(minute),
            hour: Field::classify(hour),
            day_of_month: Field::classify(day_of_month),
            month: Field::classify(month),
            day_of_week: Field::classify(day_of_week),
        })
    }

    /// Look up a field by position.
    pub fn field(&self, name: FieldName) -> &Field {
        match name {
            FieldName::Minute => &self.minute,
            FieldName::Hour => &self.hour,
            FieldName::DayOfMonth => &self.day_of_month,
            FieldName::Month => &self.month,
            FieldName::DayOfWeek => &self.day_of_week,
        }
    }

    /// Iterate fields in schedule-string order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &Field)> {
        FieldName::ALL.into_iter().map(|name| (name, self.field(name)))
    }
}

impl FromStr for CronExpression {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CronExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn single(value: &str) -> Field {
        Field::Single {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_fields_in_order() {
        let expr = CronExpression::parse("5 4 3 2 1").unwrap();
        assert_eq!(expr.minute, single("5"));
        assert_eq!(expr.hour, single("4"));
        assert_eq!(expr.day_of_month, single("3"));
        assert_eq!(expr.month, single("2"));
        assert_eq!(expr.day_of_week, single("1"));
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "blank")]
    #[test_case("a b c" ; "three tokens")]
    #[test_case("0 3 * *" ; "four tokens")]
    #[test_case("0 3 * * * 2026" ; "six tokens")]
    fn test_parse_rejects_wrong_field_count(raw: &str) {
        let err = CronExpression::parse(raw).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::MalformedFieldCount {
                found: raw.split_whitespace().count()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let expr = CronExpression::parse("  0\t3  *\n* *  ").unwrap();
        assert_eq!(expr.to_string(), "0 3 * * *");
    }

    #[test]
    fn test_parse_accepts_out_of_range_values() {
        let expr = CronExpression::parse("99 99 99 99 99").unwrap();
        assert_eq!(expr.hour, single("99"));
    }

    #[test]
    fn test_classify_wildcard() {
        assert_eq!(Field::classify("*"), Field::Wildcard);
    }

    #[test]
    fn test_classify_list_keeps_order_and_duplicates() {
        assert_eq!(
            Field::classify("15,3,3"),
            Field::List {
                values: vec!["15".to_string(), "3".to_string(), "3".to_string()]
            }
        );
    }

    #[test_case("*/6", "*", "6" ; "wildcard base")]
    #[test_case("2/3", "2", "3" ; "numeric base")]
    #[test_case("1,2/3", "1,2", "3" ; "slash wins over comma")]
    #[test_case("*/", "*", "" ; "empty interval")]
    fn test_classify_step(token: &str, base: &str, interval: &str) {
        assert_eq!(
            Field::classify(token),
            Field::Step {
                base: base.to_string(),
                interval: interval.to_string()
            }
        );
    }

    #[test_case("*" ; "wildcard")]
    #[test_case("7" ; "single")]
    #[test_case("1,,2" ; "list with empty item")]
    #[test_case("1/2/3" ; "step with two slashes")]
    fn test_raw_reproduces_token(token: &str) {
        assert_eq!(Field::classify(token).raw(), token);
    }

    #[test]
    fn test_is_zero_is_literal() {
        assert!(single("0").is_zero());
        assert!(!single("00").is_zero());
        assert!(!Field::Wildcard.is_zero());
    }

    #[test]
    fn test_fields_iterates_in_order() {
        let expr = CronExpression::parse("1 2 3 4 5").unwrap();
        let names: Vec<FieldName> = expr.fields().map(|(name, _)| name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_from_str() {
        let expr: CronExpression = "0 3 1 */3 *".parse().unwrap();
        assert_eq!(expr.month.step_interval(), Some("3"));
    }

    #[test]
    fn test_field_name_display() {
        assert_eq!(FieldName::DayOfMonth.to_string(), "day-of-month");
        assert_eq!(FieldName::DayOfWeek.to_string(), "day-of-week");
    }
}
