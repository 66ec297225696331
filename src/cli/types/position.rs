//! Fantasy football position types and utilities.

use std::fmt;

/// Fantasy football player positions.
///
/// Covers the individual positions a `defaultPositionId` can decode to.
/// Flexible lineup slots (FLEX, bench, IR) never show up on that field, so
/// they are not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
}

impl Position {
    /// Decode an ESPN `defaultPositionId` into a Position.
    ///
    /// Returns `None` for IDs with no known position mapping.
    pub fn from_position_id(id: i8) -> Option<Self> {
        match id {
            0 | 1 => Some(Position::QB), // ESPN uses both 0 and 1 for QB
            2 => Some(Position::RB),
            3 => Some(Position::WR),
            4 | 6 => Some(Position::TE), // TE can be position 4 or 6 in ESPN
            5 | 17 => Some(Position::K), // K can be position 5 or 17
            16 => Some(Position::DEF),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_position_id_mappings() {
        assert_eq!(Position::from_position_id(0), Some(Position::QB));
        assert_eq!(Position::from_position_id(1), Some(Position::QB)); // Alternate QB ID
        assert_eq!(Position::from_position_id(2), Some(Position::RB));
        assert_eq!(Position::from_position_id(3), Some(Position::WR));
        assert_eq!(Position::from_position_id(4), Some(Position::TE));
        assert_eq!(Position::from_position_id(5), Some(Position::K));
        assert_eq!(Position::from_position_id(6), Some(Position::TE)); // Alternate TE ID
        assert_eq!(Position::from_position_id(16), Some(Position::DEF));
        assert_eq!(Position::from_position_id(17), Some(Position::K)); // Alternate K ID
    }

    #[test]
    fn test_unmapped_position_ids() {
        assert_eq!(Position::from_position_id(7), None);
        assert_eq!(Position::from_position_id(99), None);
        assert_eq!(Position::from_position_id(-1), None);
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::RB.to_string(), "RB");
        assert_eq!(Position::WR.to_string(), "WR");
        assert_eq!(Position::TE.to_string(), "TE");
        assert_eq!(Position::K.to_string(), "K");
        assert_eq!(Position::DEF.to_string(), "D/ST");
    }
}
