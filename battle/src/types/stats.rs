//! Stats, base stat tables, and stage modifiers

/// The six core stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    /// Canonical short name ("hp", "atk", ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Atk => "atk",
            Stat::Def => "def",
            Stat::Spa => "spa",
            Stat::Spd => "spd",
            Stat::Spe => "spe",
        }
    }
}

/// Per-species base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn new(hp: u16, atk: u16, def: u16, spa: u16, spd: u16, spe: u16) -> Self {
        Self { hp, atk, def, spa, spd, spe }
    }

    /// Get the base value for a stat
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

// Stage multiplier tables, indexed by stage + 6.
// Core stats use 2/8 .. 8/2, accuracy/evasion use 3/9 .. 9/3.
const STAGE_NUM: [u32; 13] = [2, 2, 2, 2, 2, 2, 2, 3, 4, 5, 6, 7, 8];
const STAGE_DEN: [u32; 13] = [8, 7, 6, 5, 4, 3, 2, 2, 2, 2, 2, 2, 2];
const ACC_STAGE_NUM: [u32; 13] = [3, 3, 3, 3, 3, 3, 3, 4, 5, 6, 7, 8, 9];
const ACC_STAGE_DEN: [u32; 13] = [9, 8, 7, 6, 5, 4, 3, 3, 3, 3, 3, 3, 3];

/// Stat stage modifiers (-6 to +6)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the stage for a boostable stat (Hp has no stage and returns 0)
    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Hp => 0,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    /// Set the stage for a boostable stat (clamped to -6..+6, Hp ignored)
    pub fn set(&mut self, stat: Stat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            Stat::Hp => {}
            Stat::Atk => self.atk = clamped,
            Stat::Def => self.def = clamped,
            Stat::Spa => self.spa = clamped,
            Stat::Spd => self.spd = clamped,
            Stat::Spe => self.spe = clamped,
        }
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stages are at 0
    pub fn is_clear(&self) -> bool {
        self.atk == 0
            && self.def == 0
            && self.spa == 0
            && self.spd == 0
            && self.spe == 0
            && self.accuracy == 0
            && self.evasion == 0
    }

    /// Stage multiplier for core stats: +1 = 1.5x, +6 = 4x, -1 = 0.67x, -6 = 0.25x
    pub fn multiplier(stage: i8) -> f64 {
        let idx = (stage.clamp(-6, 6) + 6) as usize;
        STAGE_NUM[idx] as f64 / STAGE_DEN[idx] as f64
    }

    /// Stage multiplier for accuracy/evasion: +1 = 1.33x, +6 = 3x, -1 = 0.75x, -6 = 0.33x
    pub fn accuracy_multiplier(stage: i8) -> f64 {
        let idx = (stage.clamp(-6, 6) + 6) as usize;
        ACC_STAGE_NUM[idx] as f64 / ACC_STAGE_DEN[idx] as f64
    }
}
