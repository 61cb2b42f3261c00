//! Team-preview ordering

use tandem_battle::Combatant;
use tandem_battle::query::matchup_margin;

/// Order a roster by average type-advantage margin against the opponent's
/// revealed roster, best first. Returned indices refer to the input order;
/// ties keep it.
pub fn rank_team(roster: &[Combatant], opponents: &[Combatant]) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = roster
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let average = if opponents.is_empty() {
                0.0
            } else {
                opponents
                    .iter()
                    .map(|opp| matchup_margin(&member.types, &opp.types))
                    .sum::<f64>()
                    / opponents.len() as f64
            };
            (index, average)
        })
        .collect();

    // Stable sort keeps input order between equal margins
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(index, _)| index).collect()
}
