//! Battle - two creatures trading blows one turn at a time

use crate::error::BattleError;
use crate::policy::MovePolicy;
use crate::query::{resolve_hit, Hit};
use crate::types::{Creature, Move};

/// One of the two combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Final result, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
}

/// Everything that happened in one completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    /// Turn number, starting at 1
    pub turn: u32,
    pub player_move: Move,
    pub player_hit: Hit,
    pub opponent_move: Move,
    pub opponent_hit: Hit,
    pub player_health: i32,
    pub opponent_health: i32,
}

/// A battle in progress
///
/// Owns its two creatures outright; nothing here points back into a catalog.
#[derive(Debug, Clone)]
pub struct Battle {
    player: Creature,
    opponent: Creature,

    /// Completed turns (0 = not started)
    turn: u32,
}

impl Battle {
    /// Create a new battle
    pub fn new(player: Creature, opponent: Creature) -> Self {
        Self {
            player,
            opponent,
            turn: 0,
        }
    }

    pub fn player(&self) -> &Creature {
        &self.player
    }

    pub fn opponent(&self) -> &Creature {
        &self.opponent
    }

    /// Get a combatant by side
    pub fn get_side(&self, side: Side) -> &Creature {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Number of completed turns
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Check whether either creature is down
    pub fn is_over(&self) -> bool {
        self.player.is_defeated() || self.opponent.is_defeated()
    }

    /// Result once the battle is over
    ///
    /// The player is checked first, so a double knockout is a loss.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player.is_defeated() {
            Some(Outcome::Lose)
        } else if self.opponent.is_defeated() {
            Some(Outcome::Win)
        } else {
            None
        }
    }

    /// Play one full turn: the player's move lands, then the opponent answers
    ///
    /// The opponent always gets its move, even if the player's hit already
    /// knocked it out. Nothing is checked between the two hits.
    pub fn play_turn<M: MovePolicy>(
        &mut self,
        player_move: &Move,
        policy: &mut M,
    ) -> Result<TurnSummary, BattleError> {
        let turn = self.turn + 1;

        let player_hit = resolve_hit(player_move, &self.opponent);
        self.opponent.take_damage(player_hit.damage);
        tracing::debug!(
            turn,
            attack = %player_move.name,
            damage = player_hit.damage,
            remaining = self.opponent.health(),
            "player hit"
        );

        let opponent_move = policy
            .choose_move(self.opponent.moves())
            .cloned()
            .ok_or_else(|| BattleError::NoMoves(self.opponent.name().to_string()))?;

        let opponent_hit = resolve_hit(&opponent_move, &self.player);
        self.player.take_damage(opponent_hit.damage);
        tracing::debug!(
            turn,
            attack = %opponent_move.name,
            damage = opponent_hit.damage,
            remaining = self.player.health(),
            "opponent hit"
        );

        self.turn = turn;

        Ok(TurnSummary {
            turn,
            player_move: player_move.clone(),
            player_hit,
            opponent_move,
            opponent_hit,
            player_health: self.player.health(),
            opponent_health: self.opponent.health(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::policy::ScriptedPolicy;
    use crate::query::Effectiveness;
    use crate::types::MoveType;

    fn standard_battle(player: &str, opponent: &str) -> Battle {
        let catalog = Catalog::standard();
        Battle::new(
            catalog.instantiate(player).unwrap(),
            catalog.instantiate(opponent).unwrap(),
        )
    }

    fn glass_cannon(name: &str, ty: MoveType, health: i32, power: u32) -> Creature {
        Creature::new(
            name,
            ty,
            health,
            vec![MoveType::Grass],
            vec![Move::new("Smash", MoveType::Normal, power)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_battle() {
        let battle = standard_battle("Fire Guy", "Water Dude");
        assert_eq!(battle.turn(), 0);
        assert!(!battle.is_over());
        assert_eq!(battle.outcome(), None);
        assert_eq!(battle.get_side(Side::Player).name(), "Fire Guy");
        assert_eq!(battle.get_side(Side::Opponent).name(), "Water Dude");
    }

    #[test]
    fn test_play_turn_applies_both_hits() {
        let mut battle = standard_battle("Leafy Boi", "Water Dude");
        let solar_beam = battle.player().find_move("Solar Beam").unwrap().clone();
        let mut policy = ScriptedPolicy::always(2);

        let summary = battle.play_turn(&solar_beam, &mut policy).unwrap();

        assert_eq!(summary.turn, 1);
        assert_eq!(summary.player_hit.effectiveness, Effectiveness::SuperEffective);
        assert_eq!(summary.player_hit.damage, 30);
        assert_eq!(summary.opponent_move.name, "Hydro Pump");
        assert_eq!(summary.opponent_hit.effectiveness, Effectiveness::Neutral);
        assert_eq!(summary.opponent_hit.damage, 15);
        assert_eq!(summary.opponent_health, 70);
        assert_eq!(summary.player_health, 85);
        assert_eq!(battle.turn(), 1);
    }

    #[test]
    fn test_defeated_opponent_still_attacks() {
        let mut battle = Battle::new(
            glass_cannon("Striker", MoveType::Fire, 50, 40),
            glass_cannon("Target", MoveType::Water, 10, 8),
        );
        let smash = battle.player().moves()[0].clone();

        let summary = battle.play_turn(&smash, &mut ScriptedPolicy::always(0)).unwrap();

        assert_eq!(summary.opponent_health, -30);
        assert_eq!(summary.player_health, 42);
        assert_eq!(battle.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_double_knockout_is_a_loss() {
        let mut battle = Battle::new(
            glass_cannon("Left", MoveType::Fire, 10, 10),
            glass_cannon("Right", MoveType::Water, 10, 10),
        );
        let smash = battle.player().moves()[0].clone();

        battle.play_turn(&smash, &mut ScriptedPolicy::always(0)).unwrap();

        assert!(battle.player().is_defeated());
        assert!(battle.opponent().is_defeated());
        assert_eq!(battle.outcome(), Some(Outcome::Lose));
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
    }
}
