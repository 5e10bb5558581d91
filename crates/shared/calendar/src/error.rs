use thiserror::Error;

/// Domain-level errors for calendar operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid trading window: {0}")]
    InvalidWindow(String),

    #[error("Step {step} out of range: calendar has {len} steps")]
    StepOutOfRange { step: usize, len: usize },
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
