//! Turn-based creature battles with a three-type matchup system.
//!
//! A player picks one of the catalog's creatures and trades moves with a
//! computer-controlled opponent until one side runs out of health.
//!
//! # Overview
//!
//! ```text
//! Catalog (creature templates)
//!        │ instantiate (copies)
//!        ▼
//! engine::run_battle ──► Prompt      (player choices)
//!        │          ──► MovePolicy  (opponent choices)
//!        │          ──► Reporter    (status lines)
//!        ▼
//! query::resolve (damage rules)
//! ```
//!
//! # Main Types
//!
//! - [`MoveType`], [`Move`], [`Creature`] - domain values
//! - [`Catalog`] - read-only roster of creature templates
//! - [`resolve`] / [`Effectiveness`] - damage for a single hit
//! - [`Battle`] - two creatures and the turn counter
//! - [`run_battle`] - full state machine from creature selection to outcome
//! - [`Prompt`], [`MovePolicy`], [`Reporter`] - seams for input, AI and output
//!
//! # Example Usage
//!
//! ```
//! use scuffle_battle::{
//!     run_battle, BattleConfig, BattleEvent, Catalog, Outcome, ScriptedPolicy, ScriptedPrompt,
//! };
//!
//! let catalog = Catalog::standard();
//! let mut prompt = ScriptedPrompt::new(["Leafy Boi"]);
//! for _ in 0..4 {
//!     prompt.push("Solar Beam");
//! }
//! let mut events: Vec<BattleEvent> = Vec::new();
//!
//! let result = run_battle(
//!     &catalog,
//!     &BattleConfig::default(),
//!     prompt,
//!     ScriptedPolicy::always(0),
//!     &mut events,
//! )
//! .unwrap();
//!
//! assert_eq!(result.outcome, Outcome::Win);
//! for event in &events {
//!     println!("{event}");
//! }
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod policy;
pub mod prompt;
pub mod query;
pub mod report;
pub mod types;

// Re-export main types at crate root for convenience
pub use catalog::{Catalog, DEFAULT_OPPONENT};
pub use engine::{run_battle, Battle, BattleConfig, BattleResult, Outcome, Side, TurnSummary};
pub use error::{BattleError, CatalogError, PromptError};
pub use policy::{MovePolicy, RandomPolicy, ScriptedPolicy};
pub use prompt::{Prompt, ScriptedPrompt};
pub use query::{effectiveness, resolve, resolve_hit, Effectiveness, Hit};
pub use report::{BattleEvent, Reporter};
pub use types::{Creature, Move, MoveType};
