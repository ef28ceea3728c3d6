//! Turn resolution and the battle state machine

mod battle;
mod runner;

pub use battle::{Battle, Outcome, Side, TurnSummary};
pub use runner::{run_battle, BattleConfig, BattleResult};
