//! Elemental move types

/// Elemental type shared by moves and creatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MoveType {
    Normal = 0,
    Fire = 1,
    Grass = 2,
    Water = 3,
}

impl MoveType {
    /// Every known type, in declaration order
    pub const ALL: [MoveType; 4] = [
        MoveType::Normal,
        MoveType::Fire,
        MoveType::Grass,
        MoveType::Water,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [MoveType] {
        &Self::ALL
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(MoveType::Normal),
            "fire" => Some(MoveType::Fire),
            "grass" => Some(MoveType::Grass),
            "water" => Some(MoveType::Water),
            _ => None,
        }
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveType::Normal => "Normal",
            MoveType::Fire => "Fire",
            MoveType::Grass => "Grass",
            MoveType::Water => "Water",
        }
    }
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
