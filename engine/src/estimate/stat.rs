//! Stat estimation from partial information

use tandem_battle::{Ability, Combatant, Item, Stat, StatStages, Status};

// Assumed investment for unrevealed stats: maximum individual variation,
// no effort investment, neutral nature.
const ASSUMED_IV: f64 = 31.0;

/// Estimate a combatant's effective stat.
///
/// Revealed exact values are used when present; otherwise the standard stat
/// formula is applied to the species base stat with the fixed assumption
/// above. Stage modifiers always apply; speed additionally folds in
/// paralysis and Choice Scarf. Never fails: unknown data degrades to the
/// base-stat estimate.
pub fn estimate_stat(combatant: &Combatant, stat: Stat) -> f64 {
    if stat == Stat::Hp {
        return estimate_max_hp(combatant);
    }

    let raw = match combatant.known_stats.get(stat) {
        Some(value) => value as f64,
        None => unboosted_estimate(combatant, stat),
    };

    let mut value = raw * StatStages::multiplier(combatant.boosts.get(stat));

    if stat == Stat::Spe {
        if combatant.status == Some(Status::Paralysis)
            && !combatant.has_ability(Ability::QuickFeet)
        {
            value *= 0.5;
        }
        if combatant.item == Some(Item::ChoiceScarf) {
            value *= 1.5;
        }
    }

    value
}

/// Estimate a combatant's maximum HP (exact value preferred)
pub fn estimate_max_hp(combatant: &Combatant) -> f64 {
    if let Some(max) = combatant.max_hp {
        return max as f64;
    }
    if let Some(known) = combatant.known_stats.hp {
        return known as f64;
    }
    let base = combatant.base_stats.hp as f64;
    let level = combatant.level as f64;
    ((2.0 * base + ASSUMED_IV) * level / 100.0).floor() + level + 10.0
}

/// Estimate a combatant's current HP in raw hit points
pub fn estimate_current_hp(combatant: &Combatant) -> f64 {
    combatant.hp_fraction * estimate_max_hp(combatant)
}

/// Whether `a` acts before `b` under the current turn-order rules
pub fn outspeeds(a: &Combatant, b: &Combatant, trick_room: bool) -> bool {
    let speed_a = estimate_stat(a, Stat::Spe);
    let speed_b = estimate_stat(b, Stat::Spe);
    if trick_room {
        speed_a < speed_b
    } else {
        speed_a > speed_b
    }
}

fn unboosted_estimate(combatant: &Combatant, stat: Stat) -> f64 {
    let base = combatant.base_stats.get(stat) as f64;
    let level = combatant.level as f64;
    ((2.0 * base + ASSUMED_IV) * level / 100.0).floor() + 5.0
}
