//! Drives a battle from creature selection to the final outcome

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{Catalog, DEFAULT_OPPONENT};
use crate::error::BattleError;
use crate::policy::{MovePolicy, RandomPolicy};
use crate::prompt::Prompt;
use crate::report::{BattleEvent, Reporter};
use crate::types::{Creature, Move};

use super::battle::{Battle, Outcome, Side, TurnSummary};

pub const CREATURE_PROMPT: &str = "Choose your creature";
pub const MOVE_PROMPT: &str = "Choose your move";

/// Settings for a single battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleConfig {
    /// Catalog name of the computer-controlled creature
    pub opponent: String,

    /// Seed for the opponent's move choices; `None` draws from the OS
    pub seed: Option<u64>,
}

impl BattleConfig {
    pub fn new(opponent: impl Into<String>) -> Self {
        Self {
            opponent: opponent.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Uniform random opponent, seeded when configured
    pub fn opponent_policy(&self) -> RandomPolicy<StdRng> {
        match self.seed {
            Some(seed) => RandomPolicy::seeded(seed),
            None => RandomPolicy::with_rng(StdRng::from_entropy()),
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OPPONENT)
    }
}

/// How a finished battle ended
#[derive(Debug, Clone)]
pub struct BattleResult {
    pub outcome: Outcome,
    pub turns: u32,
    /// Final state of both creatures
    pub player: Creature,
    pub opponent: Creature,
}

/// Run one battle to completion
///
/// The player picks a creature and then a move every turn through `prompt`;
/// the opponent is taken from `config` and moves according to `policy`.
/// A prompt failure ends the battle immediately with an error.
pub fn run_battle<P, M, R>(
    catalog: &Catalog,
    config: &BattleConfig,
    mut prompt: P,
    mut policy: M,
    mut reporter: R,
) -> Result<BattleResult, BattleError>
where
    P: Prompt,
    M: MovePolicy,
    R: Reporter,
{
    // Resolve the opponent before asking the player anything
    let opponent = catalog.instantiate(&config.opponent)?;

    let roster: Vec<(String, &Creature)> = catalog
        .list_creatures()
        .iter()
        .map(|c| (c.name().to_string(), c))
        .collect();
    let player = prompt.select_one(CREATURE_PROMPT, &roster)?;
    let player = catalog.instantiate(player.name())?;

    reporter.report(&BattleEvent::CreatureChosen {
        side: Side::Player,
        name: player.name().to_string(),
    });
    reporter.report(&BattleEvent::CreatureChosen {
        side: Side::Opponent,
        name: opponent.name().to_string(),
    });
    reporter.report(&BattleEvent::BattleStarted);

    let mut battle = Battle::new(player, opponent);
    report_health(&mut reporter, &battle);

    let outcome = loop {
        if let Some(outcome) = battle.outcome() {
            break outcome;
        }

        let player_move = choose_player_move(&mut prompt, battle.player())?;
        let summary = battle.play_turn(&player_move, &mut policy)?;
        report_turn(&mut reporter, &summary);
    };

    tracing::debug!(?outcome, turns = battle.turn(), "battle finished");
    reporter.report(&BattleEvent::Finished(outcome));

    let turns = battle.turn();
    Ok(BattleResult {
        outcome,
        turns,
        player: battle.player().clone(),
        opponent: battle.opponent().clone(),
    })
}

fn choose_player_move<P: Prompt>(prompt: &mut P, player: &Creature) -> Result<Move, BattleError> {
    let options: Vec<(String, &Move)> = player
        .moves()
        .iter()
        .map(|m| (m.name.clone(), m))
        .collect();
    let chosen = prompt.select_one(MOVE_PROMPT, &options)?;
    Ok((*chosen).clone())
}

fn report_turn<R: Reporter>(reporter: &mut R, summary: &TurnSummary) {
    reporter.report(&BattleEvent::MoveChosen {
        side: Side::Player,
        move_name: summary.player_move.name.clone(),
    });
    if summary.player_hit.effectiveness.message().is_some() {
        reporter.report(&BattleEvent::Effectiveness {
            attacker: Side::Player,
            effectiveness: summary.player_hit.effectiveness,
        });
    }

    reporter.report(&BattleEvent::MoveChosen {
        side: Side::Opponent,
        move_name: summary.opponent_move.name.clone(),
    });
    if summary.opponent_hit.effectiveness.message().is_some() {
        reporter.report(&BattleEvent::Effectiveness {
            attacker: Side::Opponent,
            effectiveness: summary.opponent_hit.effectiveness,
        });
    }

    reporter.report(&BattleEvent::Health {
        player: summary.player_health,
        opponent: summary.opponent_health,
    });
}

fn report_health<R: Reporter>(reporter: &mut R, battle: &Battle) {
    reporter.report(&BattleEvent::Health {
        player: battle.player().health(),
        opponent: battle.opponent().health(),
    });
}
