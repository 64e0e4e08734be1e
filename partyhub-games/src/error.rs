use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game state: {0}")]
    InvalidState(String),

    #[error("card index {index} out of bounds for a deck of {len}")]
    CardOutOfBounds { index: usize, len: usize },
}

impl GameError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}
