//! Parser of duration strings like `1h30m`, `300ms`, `-1.5h` or `2h45m30.5s`.
use chrono::TimeDelta;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

const UNITS: &[(&str, u64)] = &[
    ("ns", NANOSECOND),
    ("us", MICROSECOND),
    ("µs", MICROSECOND), // U+00B5 micro sign
    ("μs", MICROSECOND), // U+03BC greek small letter mu
    ("ms", MILLISECOND),
    ("s", SECOND),
    ("m", MINUTE),
    ("h", HOUR),
];

/// Parses a signed sequence of decimal numbers, each with optional fraction and a mandatory unit suffix.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m`, `h`. A lone `0` needs no unit.
/// Error contains a human-readable reason.
pub(crate) fn parse_duration(input: &str) -> Result<TimeDelta, String> {
    let invalid = || format!("invalid duration {input:?}");

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = leading_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(after_dot) => leading_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, tail) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(format!("missing unit in duration {input:?}"));
        }
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(|| format!("unknown unit {unit:?} in duration {input:?}"))?;

        let value = scaled(whole, fraction, scale).ok_or_else(invalid)?;
        total = total.checked_add(value).ok_or_else(invalid)?;
        rest = tail;
    }

    let nanos = i64::try_from(total).map_err(|_| invalid())?;
    Ok(TimeDelta::nanoseconds(if negative { -nanos } else { nanos }))
}

/// Splits off the leading ASCII digits.
fn leading_digits(input: &str) -> (&str, &str) {
    let end = input.find(|c: char| !c.is_ascii_digit()).unwrap_or(input.len());
    input.split_at(end)
}

/// Converts `whole.fraction` units into nanoseconds, fraction precision is limited by the unit's scale.
fn scaled(whole: &str, fraction: &str, scale: u64) -> Option<u64> {
    let whole = if whole.is_empty() { 0 } else { whole.parse::<u64>().ok()? };
    let mut value = whole.checked_mul(scale)?;

    let mut unit = scale;
    for digit in fraction.bytes() {
        unit /= 10;
        if unit == 0 {
            break;
        }
        value = value.checked_add(u64::from(digit - b'0') * unit)?;
    }

    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("-0", 0)]
    #[case("+0", 0)]
    #[case("5s", 5_000_000_000)]
    #[case("30s", 30_000_000_000)]
    #[case("1478s", 1_478_000_000_000)]
    #[case("-5s", -5_000_000_000)]
    #[case("+5s", 5_000_000_000)]
    #[case("-0s", 0)]
    #[case("5.0s", 5_000_000_000)]
    #[case("5.6s", 5_600_000_000)]
    #[case("5.s", 5_000_000_000)]
    #[case(".5s", 500_000_000)]
    #[case("1.0s", 1_000_000_000)]
    #[case("1.004s", 1_004_000_000)]
    #[case("100.00100s", 100_001_000_000)]
    #[case("10ns", 10)]
    #[case("11us", 11_000)]
    #[case("12µs", 12_000)]
    #[case("12μs", 12_000)]
    #[case("13ms", 13_000_000)]
    #[case("14s", 14_000_000_000)]
    #[case("15m", 900_000_000_000)]
    #[case("16h", 57_600_000_000_000)]
    #[case("3h30m", 12_600_000_000_000)]
    #[case("10.5s4m", 250_500_000_000)]
    #[case("-2m3.4s", -123_400_000_000)]
    #[case("1h2m3s4ms5us6ns", 3_723_004_005_006)]
    #[case("39h9m14.425s", 140_954_425_000_000)]
    #[case("52763797000ns", 52_763_797_000)]
    #[case("0.5h", 1_800_000_000_000)]
    #[case("1.5h", 5_400_000_000_000)]
    #[case("9223372036854775807ns", i64::MAX)]
    #[case("9223372036s854ms775us807ns", i64::MAX)]
    #[case("-9223372036854775807ns", -i64::MAX)]
    fn test_parse_valid(#[case] input: &str, #[case] nanos: i64) {
        assert_eq!(parse_duration(input), Ok(TimeDelta::nanoseconds(nanos)), "input = {input}");
    }

    #[rstest]
    #[case("")]
    #[case("3")]
    #[case("-")]
    #[case("s")]
    #[case(".")]
    #[case("-.")]
    #[case(".s")]
    #[case("+.s")]
    #[case("1d")]
    #[case("1hh")]
    #[case("1h 30m")]
    #[case(" 1h")]
    #[case("9223372036854775808ns")]
    #[case("9223372036854775809ns")]
    #[case("3000000h")]
    #[case("18446744073709551616ns")]
    fn test_parse_invalid(#[case] input: &str) {
        assert!(parse_duration(input).is_err(), "input = '{input}'");
    }

    #[test]
    fn test_error_reason() {
        assert_eq!(parse_duration("1d"), Err(r#"unknown unit "d" in duration "1d""#.to_owned()));
        assert_eq!(parse_duration("3"), Err(r#"missing unit in duration "3""#.to_owned()));
        assert_eq!(parse_duration("x"), Err(r#"invalid duration "x""#.to_owned()));
    }
}
