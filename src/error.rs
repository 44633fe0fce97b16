use thiserror::Error;

/// Failures reported before any wait time is computed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The number of judges is zero, negative, or not an integer.
    #[error("invalid number of judges: {0}")]
    InvalidCapacity(String),

    #[error("invalid slot duration: {0}")]
    InvalidSlotDuration(String),

    /// A space-delimited name list contained an empty token.
    #[error("malformed name list: empty name at position {position}")]
    MalformedCohort { position: usize },

    #[error("unknown ranker: {0}")]
    UnknownRanker(String),
}

impl ScheduleError {
    pub fn is_invalid_capacity(&self) -> bool {
        matches!(self, ScheduleError::InvalidCapacity(_))
    }
}
