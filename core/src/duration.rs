// core/src/duration.rs
use chrono::Duration;
use thiserror::Error;

const NANOS_PER_MINUTE: i64 = 60 * 1_000_000_000;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("expected a number at {0:?}")]
    MissingNumber(String),
    #[error("missing unit after {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("duration out of range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(NANOS_PER_MINUTE as u64),
        "h" => Some(NANOS_PER_HOUR as u64),
        _ => None,
    }
}

/// Splits off the leading run of ASCII digits.
fn take_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Parses a duration such as `"45m"`, `"1h30m"`, `"1.5h"` or `"-10s"`.
///
/// A signed sequence of `<number><unit>` components; the bare string `"0"`
/// needs no unit. Zero and negative values parse fine, callers decide
/// whether they are acceptable.
pub fn parse_duration(text: &str) -> Result<Duration, DurationError> {
    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::Empty);
    }

    // Max magnitude is i64::MAX (+1 when negative), same as a signed ns counter
    let limit: u64 = if negative { 1 << 63 } else { (1 << 63) - 1 };
    let mut total: u64 = 0;

    while !rest.is_empty() {
        let component = rest;

        let (int_digits, after_int) = take_digits(rest);
        let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
            Some(tail) => take_digits(tail),
            None => ("", after_int),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::MissingNumber(component.to_string()));
        }

        let unit_end = after_frac
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_frac.len());
        let (unit, tail) = after_frac.split_at(unit_end);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit(component.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let whole: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| DurationError::Overflow)?
        };
        let mut value = whole.checked_mul(scale).ok_or(DurationError::Overflow)?;

        if !frac_digits.is_empty() {
            // digits past u64 precision cannot change the result
            let mut frac: u64 = 0;
            let mut denom: f64 = 1.0;
            for d in frac_digits.bytes() {
                if frac > (u64::MAX - 9) / 10 {
                    break;
                }
                frac = frac * 10 + u64::from(d - b'0');
                denom *= 10.0;
            }
            let extra = (frac as f64 * (scale as f64 / denom)) as u64;
            value = value.checked_add(extra).ok_or(DurationError::Overflow)?;
        }

        total = total.checked_add(value).ok_or(DurationError::Overflow)?;
        if total > limit {
            return Err(DurationError::Overflow);
        }
        rest = tail;
    }

    let nanos = if negative {
        (total as i64).wrapping_neg()
    } else {
        total as i64
    };
    Ok(Duration::nanoseconds(nanos))
}

fn split_nanos(d: &Duration, unit: i64) -> f64 {
    match d.num_nanoseconds() {
        Some(n) => (n / unit) as f64 + (n % unit) as f64 / unit as f64,
        None => d.num_milliseconds() as f64 * 1e6 / unit as f64,
    }
}

/// Duration as fractional hours.
pub fn as_hours(d: &Duration) -> f64 {
    split_nanos(d, NANOS_PER_HOUR)
}

/// Duration as fractional minutes.
pub fn as_minutes(d: &Duration) -> f64 {
    split_nanos(d, NANOS_PER_MINUTE)
}
