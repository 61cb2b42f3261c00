//! Move immunity rules
//!
//! Decides when a move is wasted on a target: type immunities, absorbing
//! abilities and items, powder interactions, and terrain blocks. Immune
//! (move, target) pairs score zero and never enter random selection.

use tandem_battle::{
    Ability, BattleSnapshot, Combatant, FieldState, Item, MoveDescriptor, Status, Terrain, Type,
    Volatile,
};

use crate::estimate::{DamageOptions, estimate_damage};

/// Whether the target is effectively immune to the move
pub fn is_move_immune(
    field: &FieldState,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
) -> bool {
    let effectiveness = mv.move_type.effectiveness_against(&target.types);
    if mv.is_damaging() && effectiveness == 0.0 {
        return true;
    }

    if let Some(ability) = target.ability {
        if ability.blocks_type(mv.move_type) {
            return true;
        }
        if ability == Ability::WonderGuard && mv.is_damaging() && effectiveness <= 1.0 {
            return true;
        }
    }
    if target.item.is_some_and(|item| item.blocks_type(mv.move_type)) {
        return true;
    }

    if mv.is_powder()
        && (target.has_type(Type::Grass)
            || target.has_ability(Ability::Overcoat)
            || target.item == Some(Item::SafetyGoggles))
    {
        return true;
    }

    if mv.is_status() && mv.inflicts.is_some() {
        // Substitutes and existing conditions block fresh status
        if target.has_volatile(Volatile::Substitute) || target.status.is_some() {
            return true;
        }
        if field.terrain == Some(Terrain::Misty) {
            return true;
        }
        if mv.inflicts == Some(Status::Sleep) && field.terrain == Some(Terrain::Electric) {
            return true;
        }
    }

    if mv.is_status() && user.has_ability(Ability::Prankster) && target.has_type(Type::Dark) {
        return true;
    }

    if mv.priority > 0 && field.terrain == Some(Terrain::Psychic) {
        return true;
    }

    false
}

/// Whether the attacker has any known move that can deal damage to the
/// defender (used to count real threats)
pub fn can_damage(battle: &BattleSnapshot, attacker: &Combatant, defender: &Combatant) -> bool {
    attacker.moves.iter().any(|mv| {
        mv.is_damaging()
            && !is_move_immune(&battle.field, mv, attacker, defender)
            && estimate_damage(battle, mv, attacker, defender, DamageOptions::default()) > 0.0
    })
}

/// Whether the attacker has a known damaging move that hits the defender
/// super-effectively
pub fn has_effective_move(
    battle: &BattleSnapshot,
    attacker: &Combatant,
    defender: &Combatant,
) -> bool {
    attacker.moves.iter().any(|mv| {
        mv.is_damaging()
            && !is_move_immune(&battle.field, mv, attacker, defender)
            && mv.move_type.effectiveness_against(&defender.types) > 1.0
    })
}
