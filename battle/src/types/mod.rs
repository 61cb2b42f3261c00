//! Domain types for the battle snapshot

mod ability;
mod combatant;
mod conditions;
mod field;
mod item;
mod moves;
mod pokemon_type;
mod side;
mod stats;
mod status;

pub use ability::Ability;
pub use combatant::{Combatant, KnownStats};
pub use conditions::{SideCondition, Terrain, Weather};
pub use field::FieldState;
pub use item::Item;
pub use moves::{FixedDamage, MoveCategory, MoveDescriptor, TargetPattern, normalize_id};
pub use pokemon_type::{TYPE_CHART, Type};
pub use side::SideState;
pub use stats::{BaseStats, Stat, StatStages};
pub use status::{Status, Volatile};
