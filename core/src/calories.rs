// core/src/calories.rs
use chrono::Duration;

use crate::duration::{as_hours, as_minutes};
use crate::errors::ActivityError;
use crate::models::{ActivityKind, ActivityRecord, DailySteps, MetricsResult, PhysicalProfile};

pub const STRIDE_HEIGHT_FACTOR: f64 = 0.45;   // stride length per meter of height
pub const DAILY_STEP_LENGTH_M: f64 = 0.65;    // fixed stride for the daily summary (m)
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const WALKING_CALORIES_FACTOR: f64 = 0.5;

/// Meters per step, scaled by height.
#[inline]
pub fn stride_length(height: f64) -> f64 {
    STRIDE_HEIGHT_FACTOR * height
}

/// Distance in km using the height-scaled stride.
pub fn distance(steps: i64, height: f64) -> f64 {
    steps as f64 * stride_length(height) / M_IN_KM
}

/// Distance in km using the fixed 0.65 m stride. Only the daily summary uses this.
pub fn daily_distance(steps: i64) -> f64 {
    steps as f64 * DAILY_STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h; 0 for a non-positive duration.
pub fn mean_speed(steps: i64, height: f64, duration: Duration) -> f64 {
    if duration <= Duration::zero() {
        return 0.0;
    }
    distance(steps, height) / as_hours(&duration)
}

/// Calories for running. Inputs are checked in order steps, weight, height, duration.
pub fn running_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, ActivityError> {
    if steps <= 0 {
        return Err(ActivityError::ZeroSteps);
    }
    if weight <= 0.0 {
        return Err(ActivityError::ZeroWeight);
    }
    if height <= 0.0 {
        return Err(ActivityError::ZeroHeight);
    }
    if duration <= Duration::zero() {
        return Err(ActivityError::ZeroDuration);
    }

    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * as_minutes(&duration) / MIN_IN_H)
}

/// Walking burns half of what running does for the same record.
pub fn walking_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, ActivityError> {
    let calories = running_calories(steps, weight, height, duration)?;
    Ok(calories * WALKING_CALORIES_FACTOR)
}

/// Calories for a resolved kind.
pub fn calories_for(
    kind: ActivityKind,
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, ActivityError> {
    match kind {
        ActivityKind::Walking => walking_calories(steps, weight, height, duration),
        ActivityKind::Running => running_calories(steps, weight, height, duration),
    }
}

/// Training numbers: height-scaled distance and speed, calories per kind.
pub fn training_metrics(
    record: &ActivityRecord,
    profile: &PhysicalProfile,
) -> Result<MetricsResult, ActivityError> {
    let calories_kcal = calories_for(
        record.kind,
        record.steps,
        profile.weight_kg,
        profile.height_m,
        record.duration,
    )?;

    Ok(MetricsResult {
        distance_km: distance(record.steps, profile.height_m),
        mean_speed_kmh: mean_speed(record.steps, profile.height_m, record.duration),
        calories_kcal,
    })
}

/// Daily numbers: fixed-stride distance, walking calories.
pub fn daily_metrics(
    day: &DailySteps,
    profile: &PhysicalProfile,
) -> Result<MetricsResult, ActivityError> {
    let calories_kcal =
        walking_calories(day.steps, profile.weight_kg, profile.height_m, day.duration)?;

    Ok(MetricsResult {
        distance_km: daily_distance(day.steps),
        mean_speed_kmh: mean_speed(day.steps, profile.height_m, day.duration),
        calories_kcal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_scales_with_height() {
        assert!((stride_length(1.75) - 0.7875).abs() < 1e-12);
        assert!(stride_length(1.90) > stride_length(1.60));
    }

    #[test]
    fn test_two_distance_formulas_differ() {
        // 0.45 * 1.75 != 0.65, so the two paths must not agree
        let d_height = distance(10_000, 1.75);
        let d_fixed = daily_distance(10_000);
        assert!((d_height - 7.875).abs() < 1e-9);
        assert!((d_fixed - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_guard() {
        assert_eq!(mean_speed(1000, 1.75, Duration::zero()), 0.0);
        assert_eq!(mean_speed(1000, 1.75, Duration::minutes(-5)), 0.0);
        assert!((mean_speed(1000, 1.75, Duration::hours(1)) - 0.7875).abs() < 1e-12);
    }
}
