use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::duration::parse_duration;
use crate::errors::ActivityError;

// ──────────────────────────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────────────────────────

fn to_py_err(err: ActivityError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn duration_arg(text: &str) -> PyResult<chrono::Duration> {
    parse_duration(text).map_err(|source| {
        to_py_err(ActivityError::MalformedDuration {
            input: text.to_string(),
            source,
        })
    })
}

// ──────────────────────────────────────────────────────────────────────────────
// Reports
// ──────────────────────────────────────────────────────────────────────────────

/// Daily summary; "" on any error (the error goes to the log).
#[pyfunction]
fn day_action_info(data: &str, weight: f64, height: f64) -> String {
    crate::day_action_info(data, weight, height)
}

#[pyfunction]
fn training_info(data: &str, weight: f64, height: f64) -> PyResult<String> {
    crate::training_info(data, weight, height).map_err(to_py_err)
}

#[pyfunction]
fn training_metrics_json(data: &str, profile_json: &str) -> PyResult<String> {
    crate::report::training_metrics_json(data, profile_json).map_err(PyValueError::new_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// Calculator (duration passed as text, e.g. "45m")
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
fn running_spent_calories(steps: i64, weight: f64, height: f64, duration: &str) -> PyResult<f64> {
    let d = duration_arg(duration)?;
    crate::running_calories(steps, weight, height, d).map_err(to_py_err)
}

#[pyfunction]
fn walking_spent_calories(steps: i64, weight: f64, height: f64, duration: &str) -> PyResult<f64> {
    let d = duration_arg(duration)?;
    crate::walking_calories(steps, weight, height, d).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3 module
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn stepcalc_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(day_action_info, m)?)?;
    m.add_function(wrap_pyfunction!(training_info, m)?)?;
    m.add_function(wrap_pyfunction!(training_metrics_json, m)?)?;

    m.add_function(wrap_pyfunction!(running_spent_calories, m)?)?;
    m.add_function(wrap_pyfunction!(walking_spent_calories, m)?)?;
    Ok(())
}
