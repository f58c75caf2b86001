use crate::{bounds::Bounds, mask::FieldMask, utils, CronError, Result};

pub(crate) type PatternValueType = u32;

/// Compiles a field expression into a mask of permitted values.
///
/// The expression is a comma-separated list of ranges: `value`, `value-value`,
/// optionally followed by `/step`, where value is a number, a mnemonic name or a wildcard (`*` or `?`).
pub(crate) fn compile(input: &str, bounds: &Bounds) -> Result<FieldMask> {
    input.split(',').try_fold(FieldMask::default(), |mask, range| {
        if range.is_empty() {
            return Err(CronError::EmptyRange(input.to_owned()));
        }
        Ok(mask | compile_range(range, bounds)?)
    })
}

/// Compiles a single range with an optional step.
fn compile_range(expr: &str, bounds: &Bounds) -> Result<FieldMask> {
    let (range, step) = match expr.split_once('/') {
        Some((_, step)) if step.contains('/') => return Err(CronError::TooManySlashes(expr.to_owned())),
        Some((range, step)) => (range, Some(step)),
        None => (expr, None),
    };

    let (low, high) = match range.split_once('-') {
        Some((_, high)) if high.contains('-') => return Err(CronError::TooManyHyphens(expr.to_owned())),
        Some((low, high)) => (low, Some(high)),
        None => (range, None),
    };

    let min = PatternValueType::from(bounds.min);
    let max = PatternValueType::from(bounds.max);

    let mut star = false;
    let (start, mut end) = if low == "*" || low == "?" {
        star = true;
        (min, max)
    } else {
        let start = utils::parse_value(low, bounds, expr)?;
        let end = match high {
            Some(high) => utils::parse_value(high, bounds, expr)?,
            None => start,
        };
        (start, end)
    };

    let step = match step {
        Some(step) => {
            let step = utils::parse_digital_value(step)?;
            // "N/step" means "N-max/step"
            if high.is_none() {
                end = max;
            }
            if step > 1 {
                star = false;
            }
            step
        }
        None => 1,
    };

    if start < min {
        return Err(CronError::BelowMinimum {
            start,
            min: bounds.min,
            expr: expr.to_owned(),
        });
    }
    if end > max {
        return Err(CronError::AboveMaximum {
            end,
            max: bounds.max,
            expr: expr.to_owned(),
        });
    }
    if start > end {
        return Err(CronError::StartBeyondEnd {
            start,
            end,
            expr: expr.to_owned(),
        });
    }
    if step == 0 {
        return Err(CronError::ZeroStep(expr.to_owned()));
    }

    Ok(FieldMask::range(start, end, step).with_star(star))
}
