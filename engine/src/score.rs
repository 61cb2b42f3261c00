//! Move scoring and weighted selection

use rand::Rng;
use tracing::trace;

use tandem_battle::{BattleSnapshot, Combatant, MoveDescriptor, Status, TARGET_IMPLICIT};

use crate::config::EngineConfig;
use crate::decision::ScoredAction;
use crate::estimate::{
    DamageOptions, estimate_accuracy, estimate_current_hp, estimate_damage, move_base_damage,
};
use crate::immunity::is_move_immune;

/// Outcome of move selection for one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// A move was chosen
    Chosen(ScoredAction),

    /// No legal (move, target) pair is usable; the game's forced fallback
    /// applies
    NoMoves,
}

/// Score every legal (move, target) pair for a slot.
///
/// Moves with a fixed scope get one aggregate score under the implicit
/// target; selectable moves keep only their best-scoring target. Scores are
/// always non-negative, and zero marks an unusable pair.
pub fn score_moves(
    battle: &BattleSnapshot,
    slot: usize,
    config: &EngineConfig,
) -> Vec<ScoredAction> {
    let Some(user) = battle.active(slot) else {
        return Vec::new();
    };

    let mut scored = Vec::new();
    for (move_index, mv) in battle.legal_moves(slot) {
        let targets = battle.possible_targets(mv, slot);
        if targets == [TARGET_IMPLICIT] {
            let score = score_aggregate(battle, slot, mv, user, config);
            scored.push(ScoredAction { move_index, target: TARGET_IMPLICIT, score });
        } else {
            let mut best: Option<ScoredAction> = None;
            for target_slot in targets {
                let Some(target) = battle.opponent_at(target_slot) else {
                    continue;
                };
                let score = score_single(battle, slot, mv, user, target, config);
                if best.is_none_or(|b| score > b.score) {
                    best = Some(ScoredAction { move_index, target: target_slot, score });
                }
            }
            if let Some(best) = best {
                scored.push(best);
            }
        }
    }

    for action in &scored {
        debug_assert!(action.score >= 0.0, "move scores must be non-negative");
        trace!(
            move_index = action.move_index,
            target = action.target,
            score = action.score,
            "scored move"
        );
    }
    scored
}

/// Pick an action from the scored list.
///
/// The preferred subset holds every action within [`EngineConfig::preferred_ratio`]
/// of the best score or above [`EngineConfig::preferred_floor`], with the best
/// action counted twice; one is drawn uniformly. When nothing scored above
/// zero, a uniformly random legal non-immune pair is used instead.
pub fn select_action<R: Rng>(
    battle: &BattleSnapshot,
    slot: usize,
    scored: &[ScoredAction],
    config: &EngineConfig,
    rng: &mut R,
) -> Selection {
    let max_score = scored.iter().map(|s| s.score).fold(0.0, f64::max);

    if max_score > 0.0 {
        let mut preferred = Vec::new();
        for action in scored {
            if action.score <= 0.0 {
                continue;
            }
            if action.score < config.preferred_floor
                && action.score < max_score * config.preferred_ratio
            {
                continue;
            }
            preferred.push(*action);
            if action.score == max_score {
                // Doubly prefer the best action
                preferred.push(*action);
            }
        }
        let pick = preferred[rng.gen_range(0..preferred.len())];
        return Selection::Chosen(pick);
    }

    // Everything scored zero: fall back to any legal pair the target does
    // not outright ignore
    let Some(user) = battle.active(slot) else {
        return Selection::NoMoves;
    };
    let mut candidates = Vec::new();
    for (move_index, mv) in battle.legal_moves(slot) {
        for target_slot in battle.possible_targets(mv, slot) {
            let usable = match battle.opponent_at(target_slot) {
                Some(target) => !is_move_immune(&battle.field, mv, user, target),
                None => !battle
                    .opponents()
                    .iter()
                    .all(|(_, opp)| is_move_immune(&battle.field, mv, user, opp)),
            };
            if usable {
                candidates.push(ScoredAction { move_index, target: target_slot, score: 0.0 });
            }
        }
    }
    if candidates.is_empty() {
        return Selection::NoMoves;
    }
    Selection::Chosen(candidates[rng.gen_range(0..candidates.len())])
}

/// Score a selectable move against one target
pub(crate) fn score_single(
    battle: &BattleSnapshot,
    slot: usize,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    config: &EngineConfig,
) -> f64 {
    let mut score = 100.0;

    let no_bench = battle.legal_switches(slot).is_empty();
    if no_bench {
        if mv.is_status() {
            score /= 1.5;
        } else if target.hp_fraction <= 0.5 {
            score *= 1.5;
        }
    }

    let base_damage = move_base_damage(mv, user, target);
    let has_power = mv.is_damaging() && (base_damage > 0.0 || mv.fixed_damage().is_some());

    // Avoid wasting a choice lock on a move that does nothing afterwards
    if user.is_choice_locked() {
        if mv.is_damaging() && base_damage >= 60.0 {
            score += 60.0;
        } else if mv.is_damaging() && base_damage > 0.0 {
            score += 30.0;
        } else if mv.is_trick() {
            score += 70.0;
        } else {
            score -= 60.0;
        }
    }

    if is_move_immune(&battle.field, mv, user, target) {
        return 0.0;
    }

    if has_power {
        score += damage_contribution(battle, mv, user, target, config);
    } else {
        score -= 10.0;
        score = status_heuristics(mv, target, score);
        let accuracy = estimate_accuracy(mv, user, target, &battle.field);
        score *= accuracy / 100.0;
        if score <= config.status_collapse_score {
            score = 0.0;
        }
    }

    score.max(0.0)
}

/// Score a fixed-scope move (self, side, field, or spread) as one aggregate
fn score_aggregate(
    battle: &BattleSnapshot,
    slot: usize,
    mv: &MoveDescriptor,
    user: &Combatant,
    config: &EngineConfig,
) -> f64 {
    let mut total: f64 = 200.0;

    let no_bench = battle.legal_switches(slot).is_empty();
    if no_bench {
        if mv.is_status() {
            total /= 1.5;
        } else {
            total *= 1.5;
        }
    }

    if mv.is_status() {
        // Self-targeted or field utility: keep the base desirability
        return (total / 2.0).max(0.0);
    }

    for (_, opponent) in battle.opponents() {
        if is_move_immune(&battle.field, mv, user, opponent) {
            continue;
        }
        total += damage_contribution(battle, mv, user, opponent, config);
    }

    (total / 2.0).max(0.0)
}

/// Accuracy-weighted damage as a percentage of the target's current HP,
/// capped and with a bonus for expected knockouts
fn damage_contribution(
    battle: &BattleSnapshot,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    config: &EngineConfig,
) -> f64 {
    let mut damage = estimate_damage(battle, mv, user, target, DamageOptions::default());
    let accuracy = estimate_accuracy(mv, user, target, &battle.field);
    damage *= accuracy / 100.0;

    let current_hp = estimate_current_hp(target).max(1.0);
    let mut percent = damage * 100.0 / current_hp;
    if percent > config.lethal_cap {
        percent = config.lethal_cap;
    }
    if percent > 100.0 {
        // Prefer moves likely to be lethal
        percent += config.lethal_bonus;
    }
    percent
}

/// Heuristic bonuses for status-inflicting moves
fn status_heuristics(mv: &MoveDescriptor, target: &Combatant, score: f64) -> f64 {
    let mut score = score;
    match mv.inflicts {
        Some(Status::Burn) if target.base_stats.atk > 100 => {
            score *= 2.0;
        }
        Some(Status::Paralysis) if target.base_stats.spe > 70 => {
            score += 50.0;
            if target.base_stats.spe > 100 {
                score += 20.0;
            }
        }
        _ => {}
    }
    score
}
