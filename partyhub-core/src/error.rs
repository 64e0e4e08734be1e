use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

/// Validation failures for a winner draw.
///
/// All variants are recoverable: the caller fixes the input and resubmits.
/// Every check runs before any entropy is consumed, so a failed draw has no
/// side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("invalid winner count: {0}")]
    InvalidCount(String),

    #[error("no participants to draw from")]
    NoParticipants,

    #[error("requested {requested} winners but only {available} unique participants")]
    TooManyWinners { requested: usize, available: usize },
}

impl DrawError {
    pub fn invalid_count(msg: impl Into<String>) -> Self {
        Self::InvalidCount(msg.into())
    }
}
