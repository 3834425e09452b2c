//! Distance and calorie estimates from step-count records.
//!
//! Two entry points: [`day_action_info`] for `"<steps>,<duration>"` daily
//! summaries and [`training_info`] for `"<steps>,<label>,<duration>"`
//! walking/running sessions.

pub mod calories;
pub mod duration;
pub mod errors;
pub mod models;
pub mod parser;
pub mod report;
pub mod storage;

#[cfg(feature = "python")]
mod py;

pub use calories::{
    calories_for, daily_distance, daily_metrics, distance, mean_speed, running_calories, stride_length,
    training_metrics, walking_calories,
};
pub use duration::parse_duration;
pub use errors::ActivityError;
pub use models::{
    ActivityKind, ActivityRecord, DailySteps, MetricsResult, PhysicalProfile, TrainingRecord,
};
pub use parser::{parse_daily_steps, parse_training};
pub use report::{day_action_info, training_info};
pub use storage::{load_profile, save_profile};
