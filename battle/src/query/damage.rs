//! Damage resolution for a single hit

use crate::types::{Creature, Move};

/// How well a move lands against a defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effectiveness {
    /// Move shares the defender's type: half power, rounded down
    NotVeryEffective,
    /// No matchup applies: full power
    Neutral,
    /// Move matches the defender's primary weakness: double power
    SuperEffective,
}

impl Effectiveness {
    /// Apply this category to a move's base power
    pub fn apply(&self, power: u32) -> u32 {
        match self {
            Effectiveness::NotVeryEffective => power / 2,
            Effectiveness::Neutral => power,
            Effectiveness::SuperEffective => power.saturating_mul(2),
        }
    }

    /// Status line shown after the move, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Effectiveness::NotVeryEffective => Some("It's not very effective..."),
            Effectiveness::Neutral => None,
            Effectiveness::SuperEffective => Some("It's super effective!"),
        }
    }
}

/// Outcome of resolving one move against one defender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub effectiveness: Effectiveness,
    pub damage: u32,
}

/// Classify a move against a defender
///
/// Same type wins over weakness, so a creature weak to its own type still
/// only takes half damage from it.
pub fn effectiveness(attack: &Move, defender: &Creature) -> Effectiveness {
    if attack.move_type == defender.creature_type() {
        Effectiveness::NotVeryEffective
    } else if attack.move_type == defender.primary_weakness() {
        Effectiveness::SuperEffective
    } else {
        Effectiveness::Neutral
    }
}

/// Health to subtract from the defender
pub fn resolve(attack: &Move, defender: &Creature) -> u32 {
    effectiveness(attack, defender).apply(attack.power)
}

/// Classify and compute damage in one step
pub fn resolve_hit(attack: &Move, defender: &Creature) -> Hit {
    let effectiveness = effectiveness(attack, defender);
    Hit {
        effectiveness,
        damage: effectiveness.apply(attack.power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MoveType;

    fn defender(ty: MoveType, weaknesses: Vec<MoveType>) -> Creature {
        Creature::new(
            "Target",
            ty,
            100,
            weaknesses,
            vec![Move::new("Tackle", MoveType::Normal, 5)],
        )
        .unwrap()
    }

    #[test]
    fn test_same_type_halves_rounding_down() {
        let fire = defender(MoveType::Fire, vec![MoveType::Water]);
        let flamethrower = Move::new("Flamethrower", MoveType::Fire, 15);

        assert_eq!(resolve(&flamethrower, &fire), 7);
        assert_eq!(
            effectiveness(&flamethrower, &fire),
            Effectiveness::NotVeryEffective
        );
    }

    #[test]
    fn test_weakness_doubles() {
        let fire = defender(MoveType::Fire, vec![MoveType::Water]);
        let water_gun = Move::new("Water Gun", MoveType::Water, 10);

        assert_eq!(resolve(&water_gun, &fire), 20);
        assert_eq!(effectiveness(&water_gun, &fire), Effectiveness::SuperEffective);
    }

    #[test]
    fn test_unrelated_type_is_neutral() {
        let fire = defender(MoveType::Fire, vec![MoveType::Water]);
        let scratch = Move::new("Scratch", MoveType::Normal, 5);
        let vine_whip = Move::new("Vine Whip", MoveType::Grass, 10);

        assert_eq!(resolve(&scratch, &fire), 5);
        assert_eq!(resolve(&vine_whip, &fire), 10);
        assert_eq!(effectiveness(&scratch, &fire), Effectiveness::Neutral);
    }

    #[test]
    fn test_only_first_weakness_counts() {
        let fire = defender(MoveType::Fire, vec![MoveType::Water, MoveType::Grass]);
        let vine_whip = Move::new("Vine Whip", MoveType::Grass, 10);

        assert_eq!(resolve(&vine_whip, &fire), 10);
    }

    #[test]
    fn test_same_type_beats_weakness() {
        let odd = defender(MoveType::Water, vec![MoveType::Water]);
        let hydro_pump = Move::new("Hydro Pump", MoveType::Water, 15);

        assert_eq!(resolve(&hydro_pump, &odd), 7);
    }

    #[test]
    fn test_ignores_defender_health_and_name() {
        let attack = Move::new("Water Gun", MoveType::Water, 10);
        let fresh = defender(MoveType::Fire, vec![MoveType::Water]);
        let mut hurt = Creature::new(
            "Someone Else",
            MoveType::Fire,
            3,
            vec![MoveType::Water],
            vec![Move::new("Ember", MoveType::Fire, 1)],
        )
        .unwrap();
        hurt.take_damage(50);

        assert_eq!(resolve(&attack, &fresh), resolve(&attack, &hurt));
    }

    #[test]
    fn test_zero_power() {
        let fire = defender(MoveType::Fire, vec![MoveType::Water]);
        for ty in MoveType::all() {
            assert_eq!(resolve(&Move::new("Splash", *ty, 0), &fire), 0);
        }
    }

    #[test]
    fn test_resolve_hit() {
        let grass = defender(MoveType::Grass, vec![MoveType::Fire]);
        let fireball = Move::new("Fireball", MoveType::Fire, 10);

        let hit = resolve_hit(&fireball, &grass);
        assert_eq!(hit.effectiveness, Effectiveness::SuperEffective);
        assert_eq!(hit.damage, 20);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Effectiveness::NotVeryEffective.message(),
            Some("It's not very effective...")
        );
        assert_eq!(Effectiveness::Neutral.message(), None);
        assert_eq!(
            Effectiveness::SuperEffective.message(),
            Some("It's super effective!")
        );
    }
}
