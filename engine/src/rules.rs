//! The ordered decision-rule chain
//!
//! One rule per pipeline stage, evaluated in a fixed order; the first rule to
//! return a decision wins and everything else defers to the next rule. Each
//! rule is a plain function over the shared [`RuleContext`], so the stages
//! can be unit-tested in isolation.
//!
//! Order: forced switch, priority knockout, protect stall, proactive switch,
//! attack fallback.

use rand::Rng;
use tracing::debug;

use tandem_battle::{BattleSnapshot, Combatant, MoveDescriptor, TARGET_IMPLICIT, Volatile};

use crate::config::EngineConfig;
use crate::decision::Decision;
use crate::estimate::{DamageOptions, estimate_accuracy, estimate_damage_percent, outspeeds};
use crate::immunity::{can_damage, is_move_immune};
use crate::score::{Selection, score_moves, score_single, select_action};
use crate::switch::{MovePrediction, best_forced_switch, rank_reactive_switch};

/// Shared inputs for one rule evaluation
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub battle: &'a BattleSnapshot,
    pub slot: usize,
    pub config: &'a EngineConfig,

    /// Bench index most recently switched into this slot, to dampen
    /// switch oscillation
    pub last_switch: Option<usize>,
}

/// Stage 1: the battle demands a replacement in this slot
pub fn forced_switch(ctx: &RuleContext<'_>) -> Option<Decision> {
    if !ctx.battle.force_switch(ctx.slot) {
        return None;
    }
    let decision = match best_forced_switch(ctx.battle, ctx.slot) {
        Some(bench_index) => Decision::Switch { bench_index },
        None => Decision::Default,
    };
    debug!(slot = ctx.slot, "forced switch");
    Some(decision)
}

/// Stage 2: a priority move expected to knock out a target this turn
/// short-circuits everything else
pub fn priority_knockout(ctx: &RuleContext<'_>) -> Option<Decision> {
    let user = ctx.battle.active(ctx.slot)?;
    for (move_index, mv) in ctx.battle.legal_moves(ctx.slot) {
        if mv.priority <= 0 || !mv.is_damaging() {
            continue;
        }
        // Fake Out only works on the user's first turn out
        if mv.is_fake_out() && !user.first_turn {
            continue;
        }
        for target_slot in ctx.battle.possible_targets(mv, ctx.slot) {
            let Some(target) = ctx.battle.opponent_at(target_slot) else {
                continue;
            };
            if is_move_immune(&ctx.battle.field, mv, user, target) {
                continue;
            }
            let percent =
                estimate_damage_percent(ctx.battle, mv, user, target, DamageOptions::default())
                    * estimate_accuracy(mv, user, target, &ctx.battle.field)
                    / 100.0;
            if percent >= 100.0 {
                debug!(slot = ctx.slot, move_index, target = target_slot, "priority knockout");
                return Some(Decision::Move { move_index, target: target_slot });
            }
        }
    }
    None
}

/// Stage 3: stall behind a protection move, with a probability scaled by
/// how many opponents can actually hurt us
pub fn protect_stall<R: Rng>(ctx: &RuleContext<'_>, rng: &mut R) -> Option<Decision> {
    let user = ctx.battle.active(ctx.slot)?;
    let (move_index, _) = ctx
        .battle
        .legal_moves(ctx.slot)
        .into_iter()
        .find(|(_, mv)| mv.is_protect_like())?;
    // Consecutive uses fail more and more often; don't chain them
    if user.protect_counter > 0 {
        return None;
    }

    let threats = ctx
        .battle
        .opponents()
        .iter()
        .filter(|(_, opponent)| can_damage(ctx.battle, opponent, user))
        .count();
    if threats == 0 {
        return None;
    }

    let mut chance = ctx.config.protect_chance_per_threat * threats as f64;
    if ctx.battle.legal_switches(ctx.slot).is_empty() {
        chance *= ctx.config.protect_empty_bench_factor;
    }
    if rng.r#gen::<f64>() < chance {
        debug!(slot = ctx.slot, threats, "protect stall");
        return Some(Decision::Move { move_index, target: TARGET_IMPLICIT });
    }
    None
}

/// Stage 4: bail out of a losing position before it costs the slot
pub fn proactive_switch<R: Rng>(ctx: &RuleContext<'_>, rng: &mut R) -> Option<Decision> {
    let user = ctx.battle.active(ctx.slot)?;
    if ctx.battle.legal_switches(ctx.slot).is_empty() {
        return None;
    }

    let mut should_switch = false;
    let mut predictions = Vec::new();

    // A faster opponent with a super-effective, heavy hit is the main signal
    for (_, opponent) in ctx.battle.opponents() {
        let Some((mv, percent)) = strongest_known_move(ctx.battle, opponent, user) else {
            continue;
        };
        predictions.push(MovePrediction { attacker: opponent, move_type: mv.move_type });

        if outspeeds(opponent, user, ctx.battle.field.trick_room)
            && mv.move_type.effectiveness_against(&user.types) > 1.0
        {
            let chance = if percent >= ctx.config.switch_ohko_percent {
                ctx.config.switch_ohko_chance
            } else if percent > ctx.config.switch_heavy_percent {
                ctx.config.switch_heavy_chance
            } else {
                0.0
            };
            if chance > 0.0 && rng.r#gen::<f64>() < chance {
                should_switch = true;
            }
        }
    }

    let legal_moves = ctx.battle.legal_moves(ctx.slot);

    // Nothing left but the fallback move
    if legal_moves.len() == 1 && legal_moves[0].1.is_struggle() {
        should_switch = true;
    }

    // Encore-locked into a move that is not worth repeating
    if user.has_volatile(Volatile::Encore) && !legal_moves.is_empty() {
        let (_, locked) = legal_moves[0];
        let opponents = ctx.battle.opponents();
        if !opponents.is_empty() {
            let total: f64 = opponents
                .iter()
                .map(|(_, opp)| score_single(ctx.battle, ctx.slot, locked, user, opp, ctx.config))
                .sum();
            let average = total / opponents.len() as f64;
            if average <= ctx.config.encore_bad_score
                && rng.r#gen::<f64>() < ctx.config.encore_switch_chance
            {
                should_switch = true;
            }
        }
    }

    // About to drop to Perish Song
    if user.perish_count == Some(1) {
        should_switch = true;
    }

    // A lone recharging opponent is a free turn; stay in
    let opponents = ctx.battle.opponents();
    if opponents.len() == 1 && opponents[0].1.has_volatile(Volatile::Recharging) {
        should_switch = false;
    }

    if !should_switch {
        return None;
    }

    let ranked = rank_reactive_switch(ctx.battle, ctx.slot, &predictions, ctx.config, rng);
    let mut pick = match ranked.first() {
        Some(&index) => index,
        // No candidate absorbs the predicted moves; fall back to raw matchups
        None => best_forced_switch(ctx.battle, ctx.slot)?,
    };

    if Some(pick) == ctx.last_switch {
        // Avoid ping-ponging the same two combatants
        match ranked.get(1) {
            Some(&second) => pick = second,
            None => return None,
        }
    }
    debug!(slot = ctx.slot, bench_index = pick, "proactive switch");
    Some(Decision::Switch { bench_index: pick })
}

/// Stage 5: score the legal moves and sample from the preferred set
pub fn attack_fallback<R: Rng>(ctx: &RuleContext<'_>, rng: &mut R) -> Option<Decision> {
    let scored = score_moves(ctx.battle, ctx.slot, ctx.config);
    let decision = match select_action(ctx.battle, ctx.slot, &scored, ctx.config, rng) {
        Selection::Chosen(action) => {
            Decision::Move { move_index: action.move_index, target: action.target }
        }
        Selection::NoMoves => Decision::Default,
    };
    Some(decision)
}

/// The most damaging known move of `attacker` into `defender`, with its
/// expected damage percent
fn strongest_known_move<'a>(
    battle: &BattleSnapshot,
    attacker: &'a Combatant,
    defender: &Combatant,
) -> Option<(&'a MoveDescriptor, f64)> {
    let opts = DamageOptions { from_opponent: true, ..Default::default() };
    attacker
        .moves
        .iter()
        .filter(|mv| mv.is_damaging())
        .map(|mv| (mv, estimate_damage_percent(battle, mv, attacker, defender, opts)))
        .filter(|(_, percent)| *percent > 0.0)
        .max_by(|a, b| a.1.total_cmp(&b.1))
}
