//! Modeled held items

use super::pokemon_type::Type;

/// Held items the decision heuristics know about.
///
/// Unmodeled items are treated as absent (`Combatant::item` stays `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    LifeOrb,
    ExpertBelt,
    ChoiceBand,
    ChoiceSpecs,
    ChoiceScarf,
    AssaultVest,
    SafetyGoggles,
    AirBalloon,
}

impl Item {
    /// Parse an item name (case/space/dash insensitive).
    /// Returns `None` for items outside the modeled set.
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "lifeorb" => Some(Item::LifeOrb),
            "expertbelt" => Some(Item::ExpertBelt),
            "choiceband" => Some(Item::ChoiceBand),
            "choicespecs" => Some(Item::ChoiceSpecs),
            "choicescarf" => Some(Item::ChoiceScarf),
            "assaultvest" => Some(Item::AssaultVest),
            "safetygoggles" => Some(Item::SafetyGoggles),
            "airballoon" => Some(Item::AirBalloon),
            _ => None,
        }
    }

    /// Whether this is a choice item (locks the holder into one move)
    pub fn is_choice(self) -> bool {
        matches!(self, Item::ChoiceBand | Item::ChoiceSpecs | Item::ChoiceScarf)
    }

    /// Whether this item makes its holder immune to moves of the given type
    pub fn blocks_type(self, move_type: Type) -> bool {
        move_type == Type::Ground && self == Item::AirBalloon
    }
}
