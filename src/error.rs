//! Error type for the host-facing API

use std::fmt;

/// Errors surfaced by the game facade and configuration loaders.
///
/// The simulation itself never fails; these only cover misuse of the
/// boundary (calls before `new_game`) and bad configuration.
#[derive(Debug)]
pub enum GameError {
    /// `step`, `fire` or `snapshot` was called before `new_game`
    NotStarted,
    /// Screen dimensions must be positive and finite
    InvalidScreen { width: f32, height: f32 },
    /// Tuning or settings document could not be parsed
    Config(String),
    /// Settings file could not be read or written
    Io(std::io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotStarted => write!(f, "game not started: call new_game first"),
            GameError::InvalidScreen { width, height } => {
                write!(f, "invalid screen size {}x{}", width, height)
            }
            GameError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            GameError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GameError::NotStarted.to_string(),
            "game not started: call new_game first"
        );
        let e = GameError::InvalidScreen {
            width: 0.0,
            height: 480.0,
        };
        assert_eq!(e.to_string(), "invalid screen size 0x480");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(GameError::from(err), GameError::Config(_)));
    }
}
