//! Error types

use thiserror::Error;

/// Problems building or reading a creature catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Creature {0} has no moves")]
    EmptyMoves(String),

    #[error("Creature {0} has no weaknesses")]
    EmptyWeaknesses(String),

    #[error("Catalog has no creatures")]
    EmptyRoster,

    #[error("Creature {0} is defined more than once")]
    DuplicateCreature(String),

    #[error("Unknown creature: {0}")]
    UnknownCreature(String),
}

/// Failures reported by a prompt collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Selection aborted")]
    Aborted,

    #[error("Prompt failed: {0}")]
    Failed(String),

    #[error("Selection {index} is out of range for {len} options")]
    OutOfRange { index: usize, len: usize },

    #[error("No options to choose from: {0}")]
    NoOptions(String),
}

/// Anything that stops a battle before it resolves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0} has no moves to choose from")]
    NoMoves(String),
}
