//! Battle events and the sinks that receive them

use std::fmt;

use crate::engine::{Outcome, Side};
use crate::query::Effectiveness;

/// Something worth telling the player, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A side picked (or was assigned) its creature
    CreatureChosen { side: Side, name: String },

    BattleStarted,

    /// A side picked its move for the turn
    MoveChosen { side: Side, move_name: String },

    /// A hit landed with a non-neutral matchup; `attacker` made the hit
    Effectiveness {
        attacker: Side,
        effectiveness: Effectiveness,
    },

    /// Health of both creatures, after setup and after every turn
    Health { player: i32, opponent: i32 },

    Finished(Outcome),
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::CreatureChosen { side, name } => match side {
                Side::Player => write!(f, "Player chose:   {}", name),
                Side::Opponent => write!(f, "Opponent chose: {}", name),
            },
            BattleEvent::BattleStarted => write!(f, "Begin battle!"),
            BattleEvent::MoveChosen { side, move_name } => match side {
                Side::Player => write!(f, "Player chose move:   {}", move_name),
                Side::Opponent => write!(f, "Opponent chose move: {}", move_name),
            },
            BattleEvent::Effectiveness { effectiveness, .. } => {
                write!(f, "{}", effectiveness.message().unwrap_or("It hit."))
            }
            BattleEvent::Health { player, opponent } => {
                write!(f, "Player health:   {}\nOpponent health: {}", player, opponent)
            }
            BattleEvent::Finished(Outcome::Win) => write!(f, "You win!"),
            BattleEvent::Finished(Outcome::Lose) => write!(f, "You lose!"),
        }
    }
}

/// Receives battle events as they happen
pub trait Reporter {
    fn report(&mut self, event: &BattleEvent);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: &BattleEvent) {
        (**self).report(event)
    }
}

/// Record every event, mainly for tests and replays
impl Reporter for Vec<BattleEvent> {
    fn report(&mut self, event: &BattleEvent) {
        self.push(event.clone());
    }
}
