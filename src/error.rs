use std::fmt;

/// Reasons a player command is rejected. None of them change game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Colony cannot afford the ant
    NotEnoughFood,
    /// Target slot at the place is already taken
    TunnelOccupied,
    /// Coordinate is malformed or off the board
    IllegalLocation,
    /// Boost target place holds no ant
    NoAntAtLocation,
    /// Boost is unknown or not in the inventory
    NoSuchBoost,
    /// Ant type name is not recognised
    UnknownAntType,
}

impl GameError {
    /// Player-facing reason
    pub const fn as_str(self) -> &'static str {
        match self {
            GameError::NotEnoughFood => "not enough food",
            GameError::TunnelOccupied => "tunnel already occupied",
            GameError::IllegalLocation => "illegal location",
            GameError::NoAntAtLocation => "no Ant at location",
            GameError::NoSuchBoost => "no such boost",
            GameError::UnknownAntType => "unknown ant type",
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for GameError {}

/// Errors raised while reading configuration or command scripts
#[derive(Debug)]
pub enum ParseError {
    /// IO operation failed
    IoError(std::io::Error),
    /// Malformed wave schedule entry
    InvalidWave(String),
    /// Configuration value out of range
    InvalidConfig(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError(err) => write!(f, "IO error: {}", err),
            ParseError::InvalidWave(msg) => write!(f, "Invalid wave: {}", msg),
            ParseError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::IoError(err)
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_messages() {
        assert_eq!(GameError::NotEnoughFood.to_string(), "not enough food");
        assert_eq!(GameError::TunnelOccupied.to_string(), "tunnel already occupied");
        assert_eq!(GameError::IllegalLocation.to_string(), "illegal location");
        assert_eq!(GameError::NoAntAtLocation.to_string(), "no Ant at location");
        assert_eq!(GameError::NoSuchBoost.to_string(), "no such boost");
        assert_eq!(GameError::UnknownAntType.to_string(), "unknown ant type");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::InvalidWave("3:x".to_string());
        assert_eq!(err.to_string(), "Invalid wave: 3:x");
    }
}
