//! Strict schedule validation for the save path.
//!
//! Parsing and description stay lenient so a half-typed schedule is always
//! editable. This gate is the stricter check a form runs before persisting:
//! every literal must be an integer inside its field's range, and steps must
//! have a positive integer interval.

use crate::ScheduleError;
use crate::field::{CronExpression, Field, FieldName};

/// Parse and range-check a schedule string.
///
/// Returns the parsed expression, or the first problem found in
/// minute-to-day-of-week order.
///
/// # Example
///
/// ```
/// use cadence_schedule::validate::check;
///
/// assert!(check("0 3 * * *").is_ok());
/// assert!(check("0 99 * * *").is_err());
/// ```
pub fn check(raw: &str) -> Result<CronExpression, ScheduleError> {
    let expr = CronExpression::parse(raw)?;
    for (name, field) in expr.fields() {
        check_field(name, field)?;
    }
    Ok(expr)
}

/// True if [`check`] accepts the string.
pub fn is_valid(raw: &str) -> bool {
    check(raw).is_ok()
}

fn check_field(name: FieldName, field: &Field) -> Result<(), ScheduleError> {
    match field {
        Field::Wildcard => Ok(()),
        Field::Single { value } => check_value(name, value),
        Field::List { values } => values.iter().try_for_each(|v| check_value(name, v)),
        Field::Step { base, interval } => {
            let invalid = || ScheduleError::InvalidStep {
                field: name,
                token: field.raw(),
            };
            match interval.parse::<u32>() {
                Ok(n) if n > 0 => {}
                _ => return Err(invalid()),
            }
            if base == "*" {
                Ok(())
            } else if base.parse::<u32>().is_err() {
                Err(invalid())
            } else {
                check_value(name, base)
            }
        }
    }
}

fn check_value(name: FieldName, token: &str) -> Result<(), ScheduleError> {
    let not_a_number = || ScheduleError::NotANumber {
        field: name,
        token: token.to_string(),
    };
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    let value = token.parse::<u32>().map_err(|_| not_a_number())?;

    let (min, max) = name.range();
    if value < min || value > max {
        return Err(ScheduleError::OutOfRange {
            field: name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BUILTIN_PRESETS;
    use test_case::test_case;

    #[test]
    fn test_presets_pass() {
        for preset in BUILTIN_PRESETS {
            assert!(is_valid(preset.cron), "{} should be valid", preset.cron);
        }
    }

    #[test_case("* * * * *" ; "all wildcards")]
    #[test_case("59 23 31 12 7" ; "upper bounds")]
    #[test_case("0 0 1 1 0" ; "lower bounds")]
    #[test_case("*/5 1,2,3 */2 6/3 1,1" ; "steps and lists")]
    fn test_accepts(raw: &str) {
        assert!(check(raw).is_ok());
    }

    #[test]
    fn test_field_count() {
        assert_eq!(
            check("0 3 * *").unwrap_err(),
            ScheduleError::MalformedFieldCount { found: 4 }
        );
    }

    #[test]
    fn test_out_of_range_hour() {
        assert_eq!(
            check("0 99 * * *").unwrap_err(),
            ScheduleError::OutOfRange {
                field: FieldName::Hour,
                value: 99,
                min: 0,
                max: 23,
            }
        );
    }

    #[test]
    fn test_zero_day_of_month() {
        assert!(matches!(
            check("0 0 0 * *"),
            Err(ScheduleError::OutOfRange {
                field: FieldName::DayOfMonth,
                value: 0,
                ..
            })
        ));
    }

    #[test_case("a 3 * * *", FieldName::Minute, "a" ; "letters")]
    #[test_case("0 3,,4 * * *", FieldName::Hour, "" ; "empty list item")]
    #[test_case("0 3 * * -1", FieldName::DayOfWeek, "-1" ; "negative")]
    #[test_case("0 +3 * * *", FieldName::Hour, "+3" ; "sign")]
    fn test_not_a_number(raw: &str, field: FieldName, token: &str) {
        assert_eq!(
            check(raw).unwrap_err(),
            ScheduleError::NotANumber {
                field,
                token: token.to_string()
            }
        );
    }

    #[test_case("*/0 * * * *", "*/0" ; "zero interval")]
    #[test_case("*/ * * * *", "*/" ; "empty interval")]
    #[test_case("x/5 * * * *", "x/5" ; "bad base")]
    #[test_case("1/2/3 * * * *", "1/2/3" ; "two slashes")]
    fn test_invalid_step(raw: &str, token: &str) {
        assert_eq!(
            check(raw).unwrap_err(),
            ScheduleError::InvalidStep {
                field: FieldName::Minute,
                token: token.to_string()
            }
        );
    }

    #[test]
    fn test_step_base_range_checked() {
        assert!(matches!(
            check("0 0 * 13/2 *"),
            Err(ScheduleError::OutOfRange {
                field: FieldName::Month,
                value: 13,
                ..
            })
        ));
    }

    #[test]
    fn test_first_error_wins() {
        assert!(matches!(
            check("60 24 * * *"),
            Err(ScheduleError::OutOfRange {
                field: FieldName::Minute,
                ..
            })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = check("0 99 * * *").unwrap_err();
        assert_eq!(err.to_string(), "hour value 99 is out of range [0, 23]");
    }
}
