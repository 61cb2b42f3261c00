//! The engine front-end

use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use tandem_battle::{BattleSnapshot, Combatant};

use crate::config::EngineConfig;
use crate::decision::Decision;
use crate::rules::{
    RuleContext, attack_fallback, forced_switch, priority_knockout, proactive_switch, protect_stall,
};
use crate::team;

/// The heuristic decision engine.
///
/// Stateless across turns except for the per-slot memory of the most recent
/// switch-in (the oscillation guard) and the injected random source. A fixed
/// seed makes every decision reproducible.
#[derive(Debug)]
pub struct Engine<R: Rng = SmallRng> {
    config: EngineConfig,
    rng: R,
    last_switch: HashMap<usize, usize>,
}

impl Engine<SmallRng> {
    /// Create an engine with an entropy-seeded random source
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create an engine with a fixed seed (reproducible decisions)
    pub fn from_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with a caller-supplied random source
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        Self { config, rng, last_switch: HashMap::new() }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide the action for one active slot.
    ///
    /// Runs the rule chain in order; the first rule to produce a decision
    /// wins. Returns [`Decision::Default`] when no legal action exists.
    pub fn decide_slot(&mut self, battle: &BattleSnapshot, slot: usize) -> Decision {
        let ctx = RuleContext {
            battle,
            slot,
            config: &self.config,
            last_switch: self.last_switch.get(&slot).copied(),
        };

        let decision = if let Some(decision) = forced_switch(&ctx) {
            decision
        } else if let Some(decision) = priority_knockout(&ctx) {
            decision
        } else if let Some(decision) = protect_stall(&ctx, &mut self.rng) {
            decision
        } else if let Some(decision) = proactive_switch(&ctx, &mut self.rng) {
            decision
        } else if let Some(decision) = attack_fallback(&ctx, &mut self.rng) {
            decision
        } else {
            Decision::Default
        };

        match decision {
            Decision::Switch { bench_index } => {
                debug_assert!(
                    battle.legal_switches(slot).contains(&bench_index),
                    "switch decision must name a legal bench member"
                );
                self.last_switch.insert(slot, bench_index);
            }
            Decision::Move { move_index, target } => {
                debug_assert!(
                    battle
                        .legal_moves(slot)
                        .into_iter()
                        .find(|(i, _)| *i == move_index)
                        .is_some_and(|(_, mv)| battle.possible_targets(mv, slot).contains(&target)),
                    "move decision must stay inside the legal target set"
                );
            }
            Decision::Default => {}
        }
        debug!(slot, ?decision, "slot decided");
        decision
    }

    /// Decide every slot that needs an action this turn.
    ///
    /// Produces exactly one decision per living active slot (or per slot the
    /// battle marks as needing a replacement).
    pub fn decide(&mut self, battle: &BattleSnapshot) -> Vec<(usize, Decision)> {
        (0..battle.ours.active.len())
            .filter(|&slot| battle.active(slot).is_some() || battle.force_switch(slot))
            .map(|slot| (slot, self.decide_slot(battle, slot)))
            .collect()
    }

    /// Record an externally observed switch-in, feeding the oscillation guard
    pub fn note_switch(&mut self, slot: usize, bench_index: usize) {
        self.last_switch.insert(slot, bench_index);
    }

    /// Order our roster for team preview against the opponent's revealed
    /// roster (best lead first)
    pub fn rank_team(&self, roster: &[Combatant], opponents: &[Combatant]) -> Vec<usize> {
        team::rank_team(roster, opponents)
    }
}
