//! Creature state

use crate::error::CatalogError;

use super::move_type::MoveType;
use super::moves::Move;

/// A battling creature
///
/// Catalog templates and in-battle combatants share this type. Everything but
/// health is fixed at construction; health only changes through
/// [`Creature::take_damage`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CreatureRecord"))]
pub struct Creature {
    name: String,

    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    creature_type: MoveType,

    /// Current health, may drop below zero after a lethal hit
    health: i32,

    /// Health the creature started with
    max_health: i32,

    /// Never empty; only the first entry affects damage
    weaknesses: Vec<MoveType>,

    /// Never empty
    moves: Vec<Move>,
}

impl Creature {
    /// Create a new creature at full health
    ///
    /// Fails if `weaknesses` or `moves` is empty.
    pub fn new(
        name: impl Into<String>,
        creature_type: MoveType,
        health: i32,
        weaknesses: Vec<MoveType>,
        moves: Vec<Move>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if weaknesses.is_empty() {
            return Err(CatalogError::EmptyWeaknesses(name));
        }
        if moves.is_empty() {
            return Err(CatalogError::EmptyMoves(name));
        }

        Ok(Self {
            name,
            creature_type,
            health,
            max_health: health,
            weaknesses,
            moves,
        })
    }

    /// Constructor for built-in templates known to be well formed
    pub(crate) fn from_parts(
        name: &str,
        creature_type: MoveType,
        health: i32,
        weaknesses: Vec<MoveType>,
        moves: Vec<Move>,
    ) -> Self {
        debug_assert!(!weaknesses.is_empty() && !moves.is_empty());
        Self {
            name: name.to_string(),
            creature_type,
            health,
            max_health: health,
            weaknesses,
            moves,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creature_type(&self) -> MoveType {
        self.creature_type
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn weaknesses(&self) -> &[MoveType] {
        &self.weaknesses
    }

    /// The weakness consulted by the damage rules
    pub fn primary_weakness(&self) -> MoveType {
        self.weaknesses[0]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Find a move by name
    pub fn find_move(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    /// Defeated once health is zero or below
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Subtract damage from health, without clamping at zero
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub_unsigned(damage);
    }
}

/// Unvalidated shape of a serialized creature
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CreatureRecord {
    name: String,
    #[serde(rename = "type")]
    creature_type: MoveType,
    health: i32,
    max_health: Option<i32>,
    weaknesses: Vec<MoveType>,
    moves: Vec<Move>,
}

#[cfg(feature = "serde")]
impl TryFrom<CreatureRecord> for Creature {
    type Error = CatalogError;

    fn try_from(record: CreatureRecord) -> Result<Self, Self::Error> {
        let mut creature = Creature::new(
            record.name,
            record.creature_type,
            record.health,
            record.weaknesses,
            record.moves,
        )?;
        if let Some(max) = record.max_health {
            creature.max_health = max;
        }
        Ok(creature)
    }
}
