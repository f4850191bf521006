//! Type definitions for bed selection and foundation state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One bed registered to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedDescriptor {
    /// Opaque bed identifier assigned by the service
    pub id: String,
    /// Human-readable bed name (Account Settings -> My Sleep Number Beds)
    pub name: String,
}

/// Foundation state of one bed at a point in time.
///
/// Always re-fetched; never reused across polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedStatus {
    pub is_moving: bool,
}

/// Which half of the bed to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Single-letter code used by the SleepIQ API
    pub fn code(&self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "Left"),
            Side::Right => write!(f, "Right"),
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(ValidationError::InvalidSide(s.to_string())),
        }
    }
}

/// Foundation preset positions, numbered as the SleepIQ API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Favorite = 1,
    Read = 2,
    WatchTv = 3,
    Flat = 4,
    ZeroG = 5,
    Snore = 6,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Favorite,
        Position::Read,
        Position::WatchTv,
        Position::Flat,
        Position::ZeroG,
        Position::Snore,
    ];

    /// Preset number sent on the wire
    pub fn preset(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Favorite => "Favorite",
            Position::Read => "Read",
            Position::WatchTv => "WatchTV",
            Position::Flat => "Flat",
            Position::ZeroG => "ZeroG",
            Position::Snore => "Snore",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.preset())
    }
}

impl TryFrom<u8> for Position {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Position::ALL
            .into_iter()
            .find(|p| p.preset() == value)
            .ok_or_else(|| ValidationError::InvalidPosition(value.to_string()))
    }
}

impl FromStr for Position {
    type Err = ValidationError;

    /// Accepts either the preset number or its name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Position::try_from(number);
        }

        Position::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::InvalidPosition(s.to_string()))
    }
}

/// Validated operator input, built before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRequest {
    bed_name: String,
    side: Side,
    position: Position,
}

impl PositionRequest {
    pub fn new(
        bed_name: impl Into<String>,
        side: Side,
        position: Position,
    ) -> Result<Self, ValidationError> {
        let bed_name = bed_name.into();
        if bed_name.is_empty() {
            return Err(ValidationError::EmptyBedName);
        }

        Ok(Self {
            bed_name,
            side,
            position,
        })
    }

    pub fn bed_name(&self) -> &str {
        &self.bed_name
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

/// A concrete bed, side and preset to command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    bed_id: String,
    side: Side,
    position: Position,
}

impl TargetSelection {
    pub fn new(bed_id: impl Into<String>, side: Side, position: Position) -> Result<Self, ValidationError> {
        let bed_id = bed_id.into();
        if bed_id.is_empty() {
            return Err(ValidationError::EmptyBedId);
        }

        Ok(Self {
            bed_id,
            side,
            position,
        })
    }

    pub fn bed_id(&self) -> &str {
        &self.bed_id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parsing() {
        assert_eq!("Left".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
        assert_eq!("R".parse::<Side>().unwrap(), Side::Right);
        assert_eq!(
            "".parse::<Side>(),
            Err(ValidationError::InvalidSide(String::new()))
        );
        assert!("middle".parse::<Side>().is_err());
    }

    #[test]
    fn test_side_code() {
        assert_eq!(Side::Left.code(), "L");
        assert_eq!(Side::Right.code(), "R");
    }

    #[test]
    fn test_position_rejects_zero_and_out_of_range() {
        assert_eq!(
            Position::try_from(0),
            Err(ValidationError::InvalidPosition("0".to_string()))
        );
        assert!(Position::try_from(7).is_err());
        assert!("0".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_from_number_and_name() {
        assert_eq!(Position::try_from(4).unwrap(), Position::Flat);
        assert_eq!("1".parse::<Position>().unwrap(), Position::Favorite);
        assert_eq!("watchtv".parse::<Position>().unwrap(), Position::WatchTv);
        assert_eq!("ZeroG".parse::<Position>().unwrap(), Position::ZeroG);
        assert_eq!(Position::Snore.preset(), 6);
    }

    #[test]
    fn test_request_requires_bed_name() {
        assert_eq!(
            PositionRequest::new("", Side::Left, Position::Flat),
            Err(ValidationError::EmptyBedName)
        );

        let request = PositionRequest::new("Main", Side::Left, Position::Flat).unwrap();
        assert_eq!(request.bed_name(), "Main");
    }

    #[test]
    fn test_target_requires_bed_id() {
        assert_eq!(
            TargetSelection::new("", Side::Right, Position::Read),
            Err(ValidationError::EmptyBedId)
        );
        assert!(TargetSelection::new("B", Side::Right, Position::Read).is_ok());
    }
}
