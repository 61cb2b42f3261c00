//! Bench ranking for switch decisions
//!
//! Two variants: the forced ranking sums type matchups against both opposing
//! actives (lowest total wins), while the reactive ranking weighs candidates
//! against the moves the opponents are predicted to use.

use rand::Rng;
use tracing::trace;

use tandem_battle::{BattleSnapshot, Combatant, Type};
use tandem_battle::query::best_type_multiplier;

use crate::config::EngineConfig;
use crate::estimate::outspeeds;
use crate::immunity::has_effective_move;

/// An opponent's predicted strongest attack, used to weigh reactive switches
#[derive(Debug, Clone, Copy)]
pub struct MovePrediction<'a> {
    pub attacker: &'a Combatant,
    pub move_type: Type,
}

/// Matchup score of a bench candidate against one opposing active.
///
/// The defensive multiplier is the worse of the opponent's types against the
/// candidate; lower totals are better.
pub fn matchup_score(battle: &BattleSnapshot, candidate: &Combatant, opponent: &Combatant) -> f64 {
    let mut score = 0.0;

    let defensive = best_type_multiplier(&opponent.types, &candidate.types);
    if defensive == 4.0 {
        score += 1.0;
    } else if defensive == 2.0 {
        score += 0.5;
    } else if defensive == 0.5 {
        score -= 0.5;
    } else if defensive == 0.25 {
        score -= 1.0;
    }

    if outspeeds(candidate, opponent, battle.field.trick_room) {
        score += 0.5;
    }
    if has_effective_move(battle, candidate, opponent) {
        score += 0.5;
    }
    score
}

/// Pick the replacement with the best summed matchup against the opposing
/// actives. Lowest total wins; ties keep the earlier bench position.
pub fn best_forced_switch(battle: &BattleSnapshot, slot: usize) -> Option<usize> {
    let opponents = battle.opponents();
    let mut best: Option<(usize, f64)> = None;
    for &index in battle.legal_switches(slot) {
        let Some(candidate) = battle.ours.combatants.get(index) else {
            continue;
        };
        let total: f64 = opponents
            .iter()
            .map(|(_, opp)| matchup_score(battle, candidate, opp))
            .sum();
        trace!(index, total, "forced switch candidate");
        if best.is_none_or(|(_, b)| total < b) {
            best = Some((index, total));
        }
    }
    best.map(|(index, _)| index)
}

/// Order the bench by how well each candidate absorbs the predicted incoming
/// moves. Immune candidates weigh 65 (85 when they can retaliate
/// super-effectively), resistant ones 40 (60 with retaliation); anything
/// below the minimum weight is skipped, and a random draw against the weight
/// decides front-of-order placement.
pub fn rank_reactive_switch<R: Rng>(
    battle: &BattleSnapshot,
    slot: usize,
    predictions: &[MovePrediction<'_>],
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<usize> {
    let mut order = Vec::new();
    for &index in battle.legal_switches(slot) {
        let Some(candidate) = battle.ours.combatants.get(index) else {
            continue;
        };

        let mut weight: f64 = 0.0;
        for prediction in predictions {
            let type_mod = prediction.move_type.effectiveness_against(&candidate.types);
            let mut candidate_weight = 0.0;
            if type_mod == 0.0 {
                candidate_weight = 65.0;
                if has_effective_move(battle, candidate, prediction.attacker) {
                    candidate_weight = 85.0;
                }
            } else if type_mod < 1.0 {
                candidate_weight = 40.0;
                if has_effective_move(battle, candidate, prediction.attacker) {
                    candidate_weight = 60.0;
                }
            }
            weight = weight.max(candidate_weight);
        }

        if weight < config.switch_min_weight {
            continue;
        }
        trace!(index, weight, "reactive switch candidate");
        if rng.gen_range(0.0..100.0) < weight {
            order.insert(0, index);
        } else {
            order.push(index);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use tandem_battle::{
        BaseStats, MoveCategory, MoveDescriptor, SideState, SlotRequest, SnapshotBuilder, Stat,
    };

    fn mon(species: &str, types: Vec<Type>, speed: u32) -> Combatant {
        let mut c = Combatant::new(species, 50, types, BaseStats::new(100, 100, 100, 100, 100, 100));
        c.known_stats.set(Stat::Spe, speed);
        c
    }

    fn damaging(name: &str, move_type: Type) -> MoveDescriptor {
        MoveDescriptor::new(name, MoveCategory::Physical, 80, move_type)
    }

    fn arena(bench: Vec<Combatant>, opponents: Vec<Combatant>) -> BattleSnapshot {
        let mut ours = SideState::doubles();
        ours.combatants.push(mon("Active", vec![Type::Normal], 100));
        let switch_indices: Vec<usize> = (1..=bench.len()).collect();
        for member in bench {
            ours.combatants.push(member);
        }
        ours.active = vec![Some(0), None];

        let mut theirs = SideState::doubles();
        let mut active = Vec::new();
        for (i, opp) in opponents.into_iter().enumerate() {
            theirs.combatants.push(opp);
            active.push(Some(i));
        }
        active.resize(2, None);
        theirs.active = active;

        SnapshotBuilder::new()
            .ours(ours)
            .theirs(theirs)
            .request(SlotRequest {
                legal_moves: vec![],
                legal_switches: switch_indices,
                force_switch: true,
            })
            .request(SlotRequest::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_forced_switch_prefers_resistant_candidate() {
        // Opponent is a Fire type. A Grass/Bug candidate takes 4x, a
        // Water candidate takes 0.5x, outspeeds, and hits back hard.
        let frail = mon("Frail", vec![Type::Grass, Type::Bug], 60);
        let sturdy = mon("Sturdy", vec![Type::Water], 140)
            .with_moves(vec![damaging("Waterfall", Type::Water)]);
        let opponent = mon("Foe", vec![Type::Fire], 100);

        let battle = arena(vec![frail, sturdy], vec![opponent]);
        assert_eq!(best_forced_switch(&battle, 0), Some(2));
    }

    #[test]
    fn test_forced_switch_tie_keeps_input_order() {
        let first = mon("First", vec![Type::Normal], 100);
        let second = mon("Second", vec![Type::Normal], 100);
        let opponent = mon("Foe", vec![Type::Fire], 200);

        let battle = arena(vec![first, second], vec![opponent]);
        assert_eq!(best_forced_switch(&battle, 0), Some(1));
    }

    #[test]
    fn test_no_bench_means_no_switch() {
        let opponent = mon("Foe", vec![Type::Fire], 100);
        let battle = arena(vec![], vec![opponent]);
        assert_eq!(best_forced_switch(&battle, 0), None);
    }

    #[test]
    fn test_matchup_score_components() {
        let opponent = mon("Foe", vec![Type::Fire], 100);
        let battle = arena(vec![], vec![opponent.clone()]);

        // 4x weak, slower, no retaliation: +1
        let frail = mon("Frail", vec![Type::Grass, Type::Bug], 60);
        assert_eq!(matchup_score(&battle, &frail, &opponent), 1.0);

        // 0.5x resist, faster, super-effective answer: -0.5 + 0.5 + 0.5
        let sturdy = mon("Sturdy", vec![Type::Water], 140)
            .with_moves(vec![damaging("Waterfall", Type::Water)]);
        assert_eq!(matchup_score(&battle, &sturdy, &opponent), 0.5);
    }

    #[test]
    fn test_matchup_score_respects_trick_room() {
        let opponent = mon("Foe", vec![Type::Fire], 100);
        let mut battle = arena(vec![], vec![opponent.clone()]);
        let slow = mon("Slow", vec![Type::Normal], 20);

        assert_eq!(matchup_score(&battle, &slow, &opponent), 0.0);

        battle.field.trick_room = true;
        assert_eq!(matchup_score(&battle, &slow, &opponent), 0.5);
    }

    #[test]
    fn test_reactive_ranking_skips_poor_absorbers() {
        // Predicted move is Fire. Neutral candidates weigh 0 and are skipped.
        let neutral = mon("Neutral", vec![Type::Normal], 100);
        let resistant = mon("Resistant", vec![Type::Water], 100);
        let opponent = mon("Foe", vec![Type::Fire], 100);
        let battle = arena(vec![neutral, resistant], vec![opponent]);

        let opponents = battle.opponents();
        let predictions = vec![MovePrediction { attacker: opponents[0].1, move_type: Type::Fire }];

        let mut rng = SmallRng::seed_from_u64(1);
        let order =
            rank_reactive_switch(&battle, 0, &predictions, &EngineConfig::default(), &mut rng);
        assert_eq!(order, vec![2]);
    }

    #[test]
    fn test_reactive_ranking_prefers_immune_retaliator() {
        // Predicted move is Ground: a Flying candidate is immune and can
        // answer with Ice; weight 85 beats the resistant one on average.
        let flier = mon("Flier", vec![Type::Flying], 100)
            .with_moves(vec![damaging("Ice Wing", Type::Ice)]);
        let bulky = mon("Bulky", vec![Type::Bug], 100);
        let opponent = mon("Foe", vec![Type::Ground], 100);
        let battle = arena(vec![flier, bulky], vec![opponent]);

        let opponents = battle.opponents();
        let predictions = vec![MovePrediction { attacker: opponents[0].1, move_type: Type::Ground }];

        // Raising the cutoff past the resist weight (40) leaves only the
        // immune retaliator (85) in the order, whatever the dice say
        let config = EngineConfig { switch_min_weight: 80.0, ..Default::default() };
        for seed in 0..10 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let order = rank_reactive_switch(&battle, 0, &predictions, &config, &mut rng);
            assert_eq!(order, vec![1]);
        }
    }
}
