use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::DurationError;

/// Every way a record or a profile can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    #[error("expected {expected} arguments, got {got}")]
    InvalidArgumentCount { expected: usize, got: usize },

    #[error("malformed step count {input:?}: {source}")]
    MalformedNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("malformed duration {input:?}: {source}")]
    MalformedDuration {
        input: String,
        #[source]
        source: DurationError,
    },

    #[error("steps must be greater than zero")]
    ZeroSteps,

    #[error("duration must be greater than zero")]
    ZeroDuration,

    #[error("weight must be greater than zero")]
    ZeroWeight,

    #[error("height must be greater than zero")]
    ZeroHeight,

    #[error("unknown training type: {0:?}")]
    UnknownTrainingType(String),
}
