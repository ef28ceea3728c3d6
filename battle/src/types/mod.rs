//! Domain types shared by the catalog and the battle loop

mod creature;
mod move_type;
mod moves;

pub use creature::Creature;
pub use move_type::MoveType;
pub use moves::Move;
