//! Move descriptors and targeting patterns

use super::pokemon_type::Type;
use super::status::Status;

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

/// Targeting pattern of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetPattern {
    /// Affects the user itself
    User,
    /// Single adjacent target, selectable
    Normal,
    /// Every adjacent combatant, allies included
    AllAdjacent,
    /// Every adjacent opponent
    AllAdjacentFoes,
    /// The user's side of the field
    AllySide,
    /// The opposing side of the field
    FoeSide,
    /// The whole field
    Field,
    /// Counter-class moves whose target is determined by the game
    Scripted,
}

impl TargetPattern {
    /// Whether the move requires the player to pick one opposing slot
    pub fn is_selectable(self) -> bool {
        self == TargetPattern::Normal
    }
}

/// Fixed-damage classes that bypass the damage formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedDamage {
    /// Damage equal to the user's level (Seismic Toss, Night Shade)
    UserLevel,
    /// Damage equal to half the target's current HP (Super Fang)
    HalfTargetHp,
}

/// Normalize a move name to its id form ("Fake Out" -> "fakeout")
pub fn normalize_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// A move known to a combatant, with its remaining uses
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDescriptor {
    /// Normalized identifier ("fakeout")
    pub id: String,
    /// Display name ("Fake Out")
    pub name: String,
    pub category: MoveCategory,
    pub base_power: u16,
    pub move_type: Type,
    /// Base accuracy percentage; 0 means the move never misses
    pub accuracy: u8,
    /// Priority tier (positive acts earlier)
    pub priority: i8,
    pub target: TargetPattern,
    /// Status condition the move inflicts, if any
    pub inflicts: Option<Status>,
    /// Multi-hit range (min, max); (1, 1) for single-hit moves
    pub hits: (u8, u8),
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveDescriptor {
    /// Create a single-hit move with 100 accuracy, no priority, selectable target
    pub fn new(name: &str, category: MoveCategory, base_power: u16, move_type: Type) -> Self {
        Self {
            id: normalize_id(name),
            name: name.to_string(),
            category,
            base_power,
            move_type,
            accuracy: 100,
            priority: 0,
            target: TargetPattern::Normal,
            inflicts: None,
            hits: (1, 1),
            pp: 16,
            max_pp: 16,
        }
    }

    pub fn with_accuracy(mut self, accuracy: u8) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_target(mut self, target: TargetPattern) -> Self {
        self.target = target;
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.inflicts = Some(status);
        self
    }

    pub fn with_hits(mut self, min: u8, max: u8) -> Self {
        self.hits = (min, max);
        self
    }

    /// Whether the move deals damage
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// Whether the move is a pure status move
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    /// Protection-class moves (block incoming effects for a turn)
    pub fn is_protect_like(&self) -> bool {
        matches!(self.id.as_str(), "protect" | "detect")
    }

    /// Moves that ignore screens on the defending side
    pub fn is_screen_piercing(&self) -> bool {
        matches!(self.id.as_str(), "brickbreak" | "psychicfangs")
    }

    /// Fixed-damage classes that bypass the damage formula
    pub fn fixed_damage(&self) -> Option<FixedDamage> {
        match self.id.as_str() {
            "seismictoss" | "nightshade" => Some(FixedDamage::UserLevel),
            "superfang" => Some(FixedDamage::HalfTargetHp),
            _ => None,
        }
    }

    /// Moves that never miss a Minimized target
    pub fn tramples_minimize(&self) -> bool {
        matches!(
            self.id.as_str(),
            "stomp" | "bodyslam" | "dragonrush" | "heatcrash" | "heavyslam" | "flyingpress"
        )
    }

    /// Powder- and spore-class moves (blocked by Grass types and Overcoat)
    pub fn is_powder(&self) -> bool {
        matches!(
            self.id.as_str(),
            "spore" | "sleeppowder" | "stunspore" | "poisonpowder" | "cottonspore" | "ragepowder"
        )
    }

    /// The no-other-option fallback move
    pub fn is_struggle(&self) -> bool {
        self.id == "struggle"
    }

    /// The item-swap utility move
    pub fn is_trick(&self) -> bool {
        matches!(self.id.as_str(), "trick" | "switcheroo")
    }

    /// The first-turn-only flinching opener
    pub fn is_fake_out(&self) -> bool {
        self.id == "fakeout"
    }

    /// Moves that attack with the target's Attack stat (Foul Play)
    pub fn uses_target_attack(&self) -> bool {
        self.id == "foulplay"
    }

    /// Moves that attack with the user's Defense stat (Body Press)
    pub fn uses_user_defense(&self) -> bool {
        self.id == "bodypress"
    }

    /// Special moves that strike the target's physical Defense (Psyshock)
    pub fn hits_physical_defense(&self) -> bool {
        self.id == "psyshock"
    }

    /// Weather-dependent sure-hit moves
    pub fn is_blizzard(&self) -> bool {
        self.id == "blizzard"
    }

    pub fn is_hurricane(&self) -> bool {
        self.id == "hurricane"
    }

    /// Expected number of hits for multi-hit moves.
    /// The common 2-5 hit class averages 3.1; other ranges use the midpoint.
    pub fn expected_hits(&self) -> f64 {
        match self.hits {
            (1, 1) => 1.0,
            (2, 5) => 3.1,
            (min, max) => (min as f64 + max as f64) / 2.0,
        }
    }

    /// Maximum number of hits (guaranteed under Skill Link)
    pub fn max_hits(&self) -> u8 {
        self.hits.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_move_defaults() {
        let mv = MoveDescriptor::new("Thunderbolt", MoveCategory::Special, 90, Type::Electric);
        assert_eq!(mv.id, "thunderbolt");
        assert_eq!(mv.name, "Thunderbolt");
        assert_eq!(mv.accuracy, 100);
        assert_eq!(mv.priority, 0);
        assert_eq!(mv.hits, (1, 1));
        assert!(mv.is_damaging());
        assert!(!mv.is_status());
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id("Fake Out"), "fakeout");
        assert_eq!(normalize_id("Will-O-Wisp"), "willowisp");
        assert_eq!(normalize_id("U-turn"), "uturn");
    }

    #[test]
    fn test_protect_like() {
        let protect = MoveDescriptor::new("Protect", MoveCategory::Status, 0, Type::Normal)
            .with_priority(4)
            .with_target(TargetPattern::User);
        let detect = MoveDescriptor::new("Detect", MoveCategory::Status, 0, Type::Fighting);
        let tackle = MoveDescriptor::new("Tackle", MoveCategory::Physical, 40, Type::Normal);
        assert!(protect.is_protect_like());
        assert!(detect.is_protect_like());
        assert!(!tackle.is_protect_like());
    }

    #[test]
    fn test_fixed_damage_classes() {
        let toss = MoveDescriptor::new("Seismic Toss", MoveCategory::Physical, 0, Type::Fighting);
        let fang = MoveDescriptor::new("Super Fang", MoveCategory::Physical, 0, Type::Normal);
        let surf = MoveDescriptor::new("Surf", MoveCategory::Special, 90, Type::Water);
        assert_eq!(toss.fixed_damage(), Some(FixedDamage::UserLevel));
        assert_eq!(fang.fixed_damage(), Some(FixedDamage::HalfTargetHp));
        assert_eq!(surf.fixed_damage(), None);
    }

    #[test]
    fn test_expected_hits() {
        let single = MoveDescriptor::new("Tackle", MoveCategory::Physical, 40, Type::Normal);
        assert_eq!(single.expected_hits(), 1.0);

        let rock_blast = MoveDescriptor::new("Rock Blast", MoveCategory::Physical, 25, Type::Rock)
            .with_hits(2, 5);
        assert!((rock_blast.expected_hits() - 3.1).abs() < 1e-9);
        assert_eq!(rock_blast.max_hits(), 5);

        let double_hit = MoveDescriptor::new("Double Hit", MoveCategory::Physical, 35, Type::Normal)
            .with_hits(2, 2);
        assert_eq!(double_hit.expected_hits(), 2.0);
    }

    #[test]
    fn test_powder_and_trample() {
        let spore = MoveDescriptor::new("Spore", MoveCategory::Status, 0, Type::Grass)
            .with_status(Status::Sleep);
        assert!(spore.is_powder());

        let stomp = MoveDescriptor::new("Stomp", MoveCategory::Physical, 65, Type::Normal);
        assert!(stomp.tramples_minimize());

        let surf = MoveDescriptor::new("Surf", MoveCategory::Special, 90, Type::Water);
        assert!(!surf.is_powder());
        assert!(!surf.tramples_minimize());
    }
}
