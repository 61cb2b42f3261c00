//! Query helpers for battle decision making

mod matchup;

pub use matchup::{best_type_multiplier, is_weak_to_any, matchup_margin};
