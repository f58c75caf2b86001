//! Common utility functions.
use crate::{bounds::Bounds, pattern::PatternValueType, CronError, Result};

/// Converts string into non-negative number.
///
/// Range bounds aren't checked here: the range compiler validates them with the whole range in hands.
pub(crate) fn parse_digital_value(input: &str) -> Result<PatternValueType> {
    let value = input.parse::<i64>().map_err(|e| CronError::InvalidNumber {
        expr: input.to_owned(),
        reason: e.to_string(),
    })?;

    if value < 0 {
        return Err(CronError::NegativeNumber {
            value,
            expr: input.to_owned(),
        });
    }

    PatternValueType::try_from(value).map_err(|e| CronError::InvalidNumber {
        expr: input.to_owned(),
        reason: e.to_string(),
    })
}

/// Converts mnemonic or numeric value representation into number.
///
/// `expr` is the range expression the value came from, used to report unknown names.
pub(crate) fn parse_value(input: &str, bounds: &Bounds, expr: &str) -> Result<PatternValueType> {
    if let Some(value) = bounds.name_value(input) {
        return Ok(value.into());
    }

    if bounds.names.is_some() && input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(CronError::UnknownName {
            name: input.to_owned(),
            expr: expr.to_owned(),
        });
    }

    parse_digital_value(input)
}
