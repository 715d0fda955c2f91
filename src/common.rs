//! Common types for Pig: configuration errors.

/// Errors reported before a game starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Player kind string not recognized by the factory.
    UnknownPlayerKind(String),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::UnknownPlayerKind(kind) => write!(
                f,
                "player kind must be 'human' or 'computer', got '{}'",
                kind
            ),
        }
    }
}

impl std::error::Error for GameError {}
