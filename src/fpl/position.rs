//! FPL squad positions and their `element_type` mapping.

use std::fmt;
use std::str::FromStr;

use crate::error::FplError;

/// The four FPL squad positions, in `element_type` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    GKP,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Map a bootstrap `element_type` (1-4) to a position.
    pub fn try_from_element_type(element_type: u8) -> Result<Self, FplError> {
        match element_type {
            1 => Ok(Position::GKP),
            2 => Ok(Position::DEF),
            3 => Ok(Position::MID),
            4 => Ok(Position::FWD),
            other => Err(FplError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }

    /// The `element_type` the API uses for this position.
    pub fn element_type(&self) -> u8 {
        match self {
            Position::GKP => 1,
            Position::DEF => 2,
            Position::MID => 3,
            Position::FWD => 4,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Position::GKP => "GKP",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        write!(f, "{code}")
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GKP" | "GOALKEEPER" => Ok(Position::GKP),
            "DEF" | "DEFENDER" => Ok(Position::DEF),
            "MID" | "MIDFIELDER" => Ok(Position::MID),
            "FWD" | "FORWARD" => Ok(Position::FWD),
            other => Err(FplError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}
