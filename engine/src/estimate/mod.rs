//! Stat, damage, and accuracy estimators

mod accuracy;
mod damage;
mod stat;

pub use accuracy::{SURE_HIT, estimate_accuracy};
pub use damage::{
    DamageOptions, Multipliers, estimate_damage, estimate_damage_percent, move_base_damage,
};
pub use stat::{estimate_current_hp, estimate_max_hp, estimate_stat, outspeeds};
