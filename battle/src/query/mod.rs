//! Damage rules
//!
//! Matchups are decided by the attacking move's type against the defender's
//! own type and its primary weakness. There is no type chart.

mod damage;

pub use damage::{effectiveness, resolve, resolve_hit, Effectiveness, Hit};
