// core/tests/test_report.rs
use serde_json::Value;
use stepcalc_core::report::training_metrics_json;
use stepcalc_core::{day_action_info, training_info, ActivityError};

#[test]
fn test_training_info_running() {
    let out = training_info("3456,Running,45m", 70.0, 1.75).expect("valid record");
    assert_eq!(
        out,
        "Training type: Running\n\
         Duration: 0.75 h.\n\
         Distance: 2.72 km.\n\
         Speed: 3.63 km/h\n\
         Calories burned: 190.51\n"
    );
}

#[test]
fn test_training_info_walking() {
    let out = training_info("3456,Walking,45m", 70.0, 1.75).expect("valid record");
    assert!(out.starts_with("Training type: Walking\n"));
    assert!(out.ends_with("Calories burned: 95.26\n"));
}

#[test]
fn test_training_info_unknown_type() {
    let err = training_info("1000,Dancing,10m", 70.0, 1.75).unwrap_err();
    assert_eq!(err, ActivityError::UnknownTrainingType("Dancing".into()));

    // exact match only
    assert!(matches!(
        training_info("1000,running,10m", 70.0, 1.75),
        Err(ActivityError::UnknownTrainingType(_))
    ));
}

#[test]
fn test_training_info_propagates_errors() {
    assert!(matches!(
        training_info("1000,Running", 70.0, 1.75),
        Err(ActivityError::InvalidArgumentCount { .. })
    ));
    assert_eq!(
        training_info("1000,Running,10m", 0.0, 1.75),
        Err(ActivityError::ZeroWeight)
    );
    assert_eq!(
        training_info("1000,Walking,10m", 70.0, 0.0),
        Err(ActivityError::ZeroHeight)
    );
}

#[test]
fn test_day_action_info_ok() {
    let out = day_action_info("6000,45m", 72.0, 1.80);
    assert_eq!(
        out,
        "Steps: 6000.\n\
         Distance: 3.90 km.\n\
         Calories burned: 174.96 kcal.\n"
    );
}

#[test]
fn test_day_action_info_swallows_errors() {
    assert_eq!(day_action_info("bad,input", 70.0, 1.75), "");
    assert_eq!(day_action_info("5000", 70.0, 1.75), "");
    assert_eq!(day_action_info("0,30m", 70.0, 1.75), "");
    assert_eq!(day_action_info("5000,-1h", 70.0, 1.75), "");
    assert_eq!(day_action_info("5000,30m", 0.0, 1.75), "");
    assert_eq!(day_action_info("5000,30m", 70.0, 0.0), "");
}

#[test]
fn test_training_metrics_json() {
    let out = training_metrics_json("1000,Running,10m", r#"{"weight": 70.0, "height": 1.75}"#)
        .expect("valid input");
    let v: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["training_type"], "Running");
    assert!((v["distance_km"].as_f64().unwrap() - 0.7875).abs() < 1e-9);
    assert!((v["mean_speed_kmh"].as_f64().unwrap() - 4.725).abs() < 1e-9);
    assert!((v["calories_kcal"].as_f64().unwrap() - 55.125).abs() < 1e-6);

    let err = training_metrics_json("1000,Running,10m", r#"{"weight_kg": "heavy", "height_m": 1.75}"#)
        .unwrap_err();
    assert!(err.contains("weight_kg"), "error should name the field: {err}");

    let err = training_metrics_json("1000,Dancing,10m", r#"{"weight_kg": 70, "height_m": 1.75}"#)
        .unwrap_err();
    assert!(err.contains("Dancing"));
}
