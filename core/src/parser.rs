use chrono::Duration;

use crate::duration::parse_duration;
use crate::errors::ActivityError;
use crate::models::{DailySteps, TrainingRecord};

fn split_fields(raw: &str, expected: usize) -> Result<Vec<&str>, ActivityError> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != expected {
        return Err(ActivityError::InvalidArgumentCount {
            expected,
            got: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> Result<i64, ActivityError> {
    let steps = field.parse::<i64>().map_err(|source| ActivityError::MalformedNumber {
        input: field.to_string(),
        source,
    })?;
    if steps <= 0 {
        return Err(ActivityError::ZeroSteps);
    }
    Ok(steps)
}

fn parse_positive_duration(field: &str) -> Result<Duration, ActivityError> {
    let duration = parse_duration(field).map_err(|source| ActivityError::MalformedDuration {
        input: field.to_string(),
        source,
    })?;
    if duration <= Duration::zero() {
        return Err(ActivityError::ZeroDuration);
    }
    Ok(duration)
}

/// `"<steps>,<duration>"`, e.g. `"5000,1h30m"`.
pub fn parse_daily_steps(raw: &str) -> Result<DailySteps, ActivityError> {
    let fields = split_fields(raw, 2)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[1])?;
    Ok(DailySteps { steps, duration })
}

/// `"<steps>,<label>,<duration>"`, e.g. `"3456,Running,45m"`.
pub fn parse_training(raw: &str) -> Result<TrainingRecord, ActivityError> {
    let fields = split_fields(raw, 3)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_positive_duration(fields[2])?;
    Ok(TrainingRecord {
        steps,
        label: fields[1].to_string(),
        duration,
    })
}
