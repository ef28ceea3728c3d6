//! Read-only registry of creature templates

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::{Creature, Move, MoveType};

/// Name of the opponent used when none is configured
pub const DEFAULT_OPPONENT: &str = "Water Dude";

/// A fixed roster of creature templates
///
/// Templates are never handed out mutably. [`Catalog::instantiate`] returns an
/// owned copy, so any number of battles can run from the same catalog without
/// sharing health.
#[derive(Debug, Clone)]
pub struct Catalog {
    creatures: Vec<Creature>,
}

impl Catalog {
    /// Build a catalog from a custom roster
    pub fn new(creatures: Vec<Creature>) -> Result<Self, CatalogError> {
        if creatures.is_empty() {
            return Err(CatalogError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for creature in &creatures {
            if !seen.insert(creature.name()) {
                return Err(CatalogError::DuplicateCreature(creature.name().to_string()));
            }
        }

        Ok(Self { creatures })
    }

    /// The three built-in creatures: Fire Guy, Leafy Boi and Water Dude
    pub fn standard() -> Self {
        Self {
            creatures: vec![fire_guy(), leafy_boi(), water_dude()],
        }
    }

    /// All templates in catalog order
    pub fn list_creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Look up a template by exact name
    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.name() == name)
    }

    /// Check whether a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Create an independent battle copy of a template
    pub fn instantiate(&self, name: &str) -> Result<Creature, CatalogError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCreature(name.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

// Built-in templates. Each has one Normal move and two moves of its own type.
// The vectors are non-empty, so the private constructor skips validation.

fn template(
    name: &str,
    creature_type: MoveType,
    weakness: MoveType,
    moves: [(&str, MoveType, u32); 3],
) -> Creature {
    let moves = moves
        .into_iter()
        .map(|(name, ty, power)| Move::new(name, ty, power))
        .collect();
    Creature::from_parts(name, creature_type, 100, vec![weakness], moves)
}

fn fire_guy() -> Creature {
    template(
        "Fire Guy",
        MoveType::Fire,
        MoveType::Water,
        [
            ("Scratch", MoveType::Normal, 5),
            ("Fireball", MoveType::Fire, 10),
            ("Flamethrower", MoveType::Fire, 15),
        ],
    )
}

fn leafy_boi() -> Creature {
    template(
        "Leafy Boi",
        MoveType::Grass,
        MoveType::Fire,
        [
            ("Tackle", MoveType::Normal, 5),
            ("Vine Whip", MoveType::Grass, 10),
            ("Solar Beam", MoveType::Grass, 15),
        ],
    )
}

fn water_dude() -> Creature {
    template(
        "Water Dude",
        MoveType::Water,
        MoveType::Grass,
        [
            ("Tackle", MoveType::Normal, 5),
            ("Water Gun", MoveType::Water, 10),
            ("Hydro Pump", MoveType::Water, 15),
        ],
    )
}
