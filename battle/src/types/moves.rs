//! Move definitions

use super::move_type::MoveType;

/// A named attack with a type and a base power
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Display name (e.g., "Flamethrower")
    pub name: String,

    /// Elemental type of the attack
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub move_type: MoveType,

    /// Base power before effectiveness is applied
    pub power: u32,
}

impl Move {
    /// Create a new move
    pub fn new(name: impl Into<String>, move_type: MoveType, power: u32) -> Self {
        Self {
            name: name.into(),
            move_type,
            power,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {})", self.name, self.move_type, self.power)
    }
}
