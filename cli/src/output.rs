//! Console rendering of battle events and the roster

use scuffle_battle::{BattleEvent, Catalog, Reporter};

/// Prints one status line per event to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &BattleEvent) {
        if matches!(event, BattleEvent::BattleStarted) {
            println!();
        }
        println!("{}", event);
    }
}

/// Render the roster as a small table
pub fn format_roster(catalog: &Catalog) -> String {
    let mut out = String::new();
    for creature in catalog.list_creatures() {
        let weaknesses: Vec<&str> = creature.weaknesses().iter().map(|w| w.as_str()).collect();
        out.push_str(&format!(
            "{} [{}] HP {} - weak to {}\n",
            creature.name(),
            creature.creature_type(),
            creature.health(),
            weaknesses.join(", ")
        ));
        for m in creature.moves() {
            out.push_str(&format!(
                "  {:<14} {:<7} {:>3}\n",
                m.name,
                m.move_type.as_str(),
                m.power
            ));
        }
    }
    out
}
