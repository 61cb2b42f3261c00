//! Status conditions (volatile and non-volatile)

/// Non-volatile status conditions (persist through switching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Burn,
    Freeze,
    Paralysis,
    Poison,
    BadPoison, // Toxic
    Sleep,
}

impl Status {
    /// Parse from short code ("brn", "frz", "par", "psn", "tox", "slp")
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "brn" => Some(Status::Burn),
            "frz" => Some(Status::Freeze),
            "par" => Some(Status::Paralysis),
            "psn" => Some(Status::Poison),
            "tox" => Some(Status::BadPoison),
            "slp" => Some(Status::Sleep),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Burn => "Burn",
            Status::Freeze => "Freeze",
            Status::Paralysis => "Paralysis",
            Status::Poison => "Poison",
            Status::BadPoison => "Toxic",
            Status::Sleep => "Sleep",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Volatile battle effects consumed by the decision heuristics.
///
/// Closed set: unknown effects reported by the state collaborator are simply
/// not represented, which keeps matches exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Volatile {
    Substitute,
    Encore,
    PerishSong,
    Minimize,
    Telekinesis,
    Recharging,
    Charging,
    Flinch,
    Taunt,
    Confusion,
    Trapped,
    LeechSeed,
    Yawn,
}

impl Volatile {
    /// Parse a volatile effect name (normalized: case/space/dash insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "substitute" => Some(Volatile::Substitute),
            "encore" => Some(Volatile::Encore),
            "perishsong" | "perish3" | "perish2" | "perish1" => Some(Volatile::PerishSong),
            "minimize" => Some(Volatile::Minimize),
            "telekinesis" => Some(Volatile::Telekinesis),
            "mustrecharge" | "recharging" => Some(Volatile::Recharging),
            "twoturnmove" | "charging" => Some(Volatile::Charging),
            "flinch" => Some(Volatile::Flinch),
            "taunt" => Some(Volatile::Taunt),
            "confusion" | "confused" => Some(Volatile::Confusion),
            "trapped" => Some(Volatile::Trapped),
            "leechseed" => Some(Volatile::LeechSeed),
            "yawn" => Some(Volatile::Yawn),
            _ => None,
        }
    }

    /// Get display name
    pub fn as_str(self) -> &'static str {
        match self {
            Volatile::Substitute => "Substitute",
            Volatile::Encore => "Encore",
            Volatile::PerishSong => "Perish Song",
            Volatile::Minimize => "Minimize",
            Volatile::Telekinesis => "Telekinesis",
            Volatile::Recharging => "Recharging",
            Volatile::Charging => "Charging",
            Volatile::Flinch => "Flinch",
            Volatile::Taunt => "Taunt",
            Volatile::Confusion => "Confusion",
            Volatile::Trapped => "Trapped",
            Volatile::LeechSeed => "Leech Seed",
            Volatile::Yawn => "Yawn",
        }
    }
}

impl std::fmt::Display for Volatile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
