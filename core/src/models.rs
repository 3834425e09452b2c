use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::errors::ActivityError;

/// The two training kinds a record can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    pub const WALKING_LABEL: &'static str = "Walking";
    pub const RUNNING_LABEL: &'static str = "Running";

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Result<Self, ActivityError> {
        match label {
            Self::WALKING_LABEL => Ok(Self::Walking),
            Self::RUNNING_LABEL => Ok(Self::Running),
            other => Err(ActivityError::UnknownTrainingType(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Walking => Self::WALKING_LABEL,
            Self::Running => Self::RUNNING_LABEL,
        }
    }
}

/// Daily step summary: `"<steps>,<duration>"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySteps {
    pub steps: i64,
    pub duration: Duration,
}

/// Training record as parsed; the label is not interpreted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: i64,
    pub label: String,
    pub duration: Duration,
}

/// Training record with a resolved kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityRecord {
    pub steps: i64,
    pub kind: ActivityKind,
    pub duration: Duration,
}

impl TryFrom<&TrainingRecord> for ActivityRecord {
    type Error = ActivityError;

    fn try_from(rec: &TrainingRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            steps: rec.steps,
            kind: ActivityKind::from_label(&rec.label)?,
            duration: rec.duration,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    #[serde(alias = "weight", alias = "weightKg")]
    pub weight_kg: f64, // kg
    #[serde(alias = "height", alias = "heightM")]
    pub height_m: f64, // meter
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self { weight_kg, height_m }
    }

    pub fn validate(&self) -> Result<(), ActivityError> {
        if self.weight_kg <= 0.0 {
            return Err(ActivityError::ZeroWeight);
        }
        if self.height_m <= 0.0 {
            return Err(ActivityError::ZeroHeight);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MetricsResult {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
