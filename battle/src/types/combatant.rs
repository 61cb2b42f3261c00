//! Combatant state

use std::collections::HashSet;

use super::ability::Ability;
use super::item::Item;
use super::moves::MoveDescriptor;
use super::pokemon_type::Type;
use super::stats::{BaseStats, Stat, StatStages};
use super::status::{Status, Volatile};

/// Exact stat values revealed during the battle (e.g. through damage math).
///
/// Anything still `None` must be estimated from base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownStats {
    pub hp: Option<u32>,
    pub atk: Option<u32>,
    pub def: Option<u32>,
    pub spa: Option<u32>,
    pub spd: Option<u32>,
    pub spe: Option<u32>,
}

impl KnownStats {
    pub fn get(&self, stat: Stat) -> Option<u32> {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = Some(value),
            Stat::Atk => self.atk = Some(value),
            Stat::Def => self.def = Some(value),
            Stat::Spa => self.spa = Some(value),
            Stat::Spd => self.spd = Some(value),
            Stat::Spe => self.spe = Some(value),
        }
    }
}

/// One combatant in the battle snapshot.
///
/// Owned by the snapshot; the engine treats it as immutable for the duration
/// of one decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Species name (including forme)
    pub species: String,

    /// Level (1-100)
    pub level: u8,

    /// Current types (1-2)
    pub types: Vec<Type>,

    /// Species base stats
    pub base_stats: BaseStats,

    // === HP ===
    /// Current HP as a fraction of max (0.0 - 1.0)
    pub hp_fraction: f64,

    /// Exact max HP when known (our own side); estimated otherwise
    pub max_hp: Option<u32>,

    /// Whether this combatant has fainted
    pub fainted: bool,

    // === Status and effects ===
    /// Non-volatile status condition
    pub status: Option<Status>,

    /// Active volatile effects
    pub volatiles: HashSet<Volatile>,

    /// Remaining Perish Song turns, when under Perish Song
    pub perish_count: Option<u8>,

    /// Stat stage modifiers
    pub boosts: StatStages,

    // === Identity ===
    /// Modeled ability, if revealed and modeled
    pub ability: Option<Ability>,

    /// Modeled held item, if revealed and modeled
    pub item: Option<Item>,

    // === Revealed information ===
    /// Exact stats revealed so far
    pub known_stats: KnownStats,

    /// Known move list with remaining uses
    pub moves: Vec<MoveDescriptor>,

    // === Turn bookkeeping ===
    /// First turn on the field this battle (enables Fake Out)
    pub first_turn: bool,

    /// Successive Protect uses in the current chain
    pub protect_counter: u8,
}

impl Combatant {
    /// Create a healthy combatant with no revealed information
    pub fn new(species: &str, level: u8, types: Vec<Type>, base_stats: BaseStats) -> Self {
        Self {
            species: species.to_string(),
            level,
            types,
            base_stats,
            hp_fraction: 1.0,
            max_hp: None,
            fainted: false,
            status: None,
            volatiles: HashSet::new(),
            perish_count: None,
            boosts: StatStages::new(),
            ability: None,
            item: None,
            known_stats: KnownStats::default(),
            moves: Vec::new(),
            first_turn: true,
            protect_counter: 0,
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveDescriptor>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_hp_fraction(mut self, fraction: f64) -> Self {
        self.hp_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Check if this combatant is alive
    pub fn is_alive(&self) -> bool {
        !self.fainted && self.hp_fraction > 0.0
    }

    /// Check for a volatile effect
    pub fn has_volatile(&self, v: Volatile) -> bool {
        self.volatiles.contains(&v)
    }

    /// Check for a type
    pub fn has_type(&self, t: Type) -> bool {
        self.types.contains(&t)
    }

    /// Whether a choice item or lock-in ability restricts this combatant
    /// to repeating one move
    pub fn is_choice_locked(&self) -> bool {
        self.item.is_some_and(Item::is_choice) || self.ability == Some(Ability::GorillaTactics)
    }

    /// Whether the ability is currently one of the given
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability == Some(ability)
    }
}
