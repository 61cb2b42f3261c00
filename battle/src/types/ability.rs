//! Modeled abilities

use super::pokemon_type::Type;

/// Abilities the decision heuristics know about.
///
/// Anything else revealed by the state collaborator is treated as having no
/// modeled effect (`Combatant::ability` stays `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    // Type immunities / absorption
    Levitate,
    FlashFire,
    WaterAbsorb,
    StormDrain,
    DrySkin,
    SapSipper,
    VoltAbsorb,
    LightningRod,
    MotorDrive,

    // Offense modifiers
    Guts,
    Adaptability,
    SkillLink,
    GorillaTactics,

    // Defense modifiers
    Multiscale,
    WonderGuard,

    // Speed / status interactions
    QuickFeet,
    Prankster,

    // Bypass / protection
    MoldBreaker,
    Infiltrator,
    Overcoat,
    InnerFocus,
    ShieldDust,
}

impl Ability {
    /// Parse an ability name (case/space/dash insensitive).
    /// Returns `None` for abilities outside the modeled set.
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "levitate" => Some(Ability::Levitate),
            "flashfire" => Some(Ability::FlashFire),
            "waterabsorb" => Some(Ability::WaterAbsorb),
            "stormdrain" => Some(Ability::StormDrain),
            "dryskin" => Some(Ability::DrySkin),
            "sapsipper" => Some(Ability::SapSipper),
            "voltabsorb" => Some(Ability::VoltAbsorb),
            "lightningrod" => Some(Ability::LightningRod),
            "motordrive" => Some(Ability::MotorDrive),
            "guts" => Some(Ability::Guts),
            "adaptability" => Some(Ability::Adaptability),
            "skilllink" => Some(Ability::SkillLink),
            "gorillatactics" => Some(Ability::GorillaTactics),
            "multiscale" => Some(Ability::Multiscale),
            "wonderguard" => Some(Ability::WonderGuard),
            "quickfeet" => Some(Ability::QuickFeet),
            "prankster" => Some(Ability::Prankster),
            "moldbreaker" => Some(Ability::MoldBreaker),
            "infiltrator" => Some(Ability::Infiltrator),
            "overcoat" => Some(Ability::Overcoat),
            "innerfocus" => Some(Ability::InnerFocus),
            "shielddust" => Some(Ability::ShieldDust),
            _ => None,
        }
    }

    /// Whether this ability makes its holder immune to moves of the given type
    pub fn blocks_type(self, move_type: Type) -> bool {
        match move_type {
            Type::Ground => self == Ability::Levitate,
            Type::Fire => self == Ability::FlashFire,
            Type::Water => {
                matches!(self, Ability::WaterAbsorb | Ability::StormDrain | Ability::DrySkin)
            }
            Type::Grass => self == Ability::SapSipper,
            Type::Electric => {
                matches!(self, Ability::VoltAbsorb | Ability::LightningRod | Ability::MotorDrive)
            }
            _ => false,
        }
    }

    /// Whether this ability ignores the target's ability-based defenses
    pub fn ignores_target_ability(self) -> bool {
        self == Ability::MoldBreaker
    }
}
