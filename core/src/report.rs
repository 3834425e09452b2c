use crate::calories::{daily_metrics, training_metrics};
use crate::duration::as_hours;
use crate::errors::ActivityError;
use crate::models::{ActivityRecord, DailySteps, MetricsResult, PhysicalProfile};
use crate::parser::{parse_daily_steps, parse_training};

/// Renders the daily summary block.
pub fn render_daily(day: &DailySteps, metrics: &MetricsResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Steps: {}.\n", day.steps));
    out.push_str(&format!("Distance: {:.2} km.\n", metrics.distance_km));
    out.push_str(&format!("Calories burned: {:.2} kcal.\n", metrics.calories_kcal));
    out
}

/// Renders the training report block.
pub fn render_training(record: &ActivityRecord, metrics: &MetricsResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Training type: {}\n", record.kind.label()));
    out.push_str(&format!("Duration: {:.2} h.\n", as_hours(&record.duration)));
    out.push_str(&format!("Distance: {:.2} km.\n", metrics.distance_km));
    out.push_str(&format!("Speed: {:.2} km/h\n", metrics.mean_speed_kmh));
    out.push_str(&format!("Calories burned: {:.2}\n", metrics.calories_kcal));
    out
}

fn daily_report(data: &str, profile: &PhysicalProfile) -> Result<String, ActivityError> {
    let day = parse_daily_steps(data)?;
    let metrics = daily_metrics(&day, profile)?;
    Ok(render_daily(&day, &metrics))
}

/// Daily step summary for `"<steps>,<duration>"`.
///
/// Never fails: any parse or calculation error is logged and an empty
/// string comes back instead.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    match daily_report(data, &PhysicalProfile::new(weight, height)) {
        Ok(report) => report,
        Err(err) => {
            log::error!("{err}");
            String::new()
        }
    }
}

/// Training report for `"<steps>,<label>,<duration>"`.
///
/// Errors are returned to the caller. Only a parse failure is logged as well.
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String, ActivityError> {
    let parsed = parse_training(data).map_err(|err| {
        log::error!("{err}");
        err
    })?;

    let record = ActivityRecord::try_from(&parsed)?;
    let metrics = training_metrics(&record, &PhysicalProfile::new(weight, height))?;
    Ok(render_training(&record, &metrics))
}

/// JSON route used by the Python bindings.
///
/// `profile_json` is a `PhysicalProfile` object; the answer is the
/// `MetricsResult` plus the resolved training type, as a JSON string.
pub fn training_metrics_json(data: &str, profile_json: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(profile_json);
    let profile: PhysicalProfile = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| format!("parse error (PhysicalProfile) at {}: {}", e.path(), e.inner()))?;

    let parsed = parse_training(data).map_err(|err| {
        log::error!("{err}");
        err.to_string()
    })?;
    let record = ActivityRecord::try_from(&parsed).map_err(|e| e.to_string())?;
    let metrics = training_metrics(&record, &profile).map_err(|e| e.to_string())?;

    let out = serde_json::json!({
        "training_type": record.kind.label(),
        "duration_h": as_hours(&record.duration),
        "distance_km": metrics.distance_km,
        "mean_speed_kmh": metrics.mean_speed_kmh,
        "calories_kcal": metrics.calories_kcal,
    });
    Ok(out.to_string())
}
