//! One player's side of the battle

use std::collections::HashSet;

use super::combatant::Combatant;
use super::conditions::SideCondition;

/// One side of a doubles battle: the party, which members are active,
/// and the side conditions in effect.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Party members in team order
    pub combatants: Vec<Combatant>,

    /// Active slot -> party index (two slots in doubles; `None` = empty slot)
    pub active: Vec<Option<usize>>,

    /// Side conditions currently in effect
    pub conditions: HashSet<SideCondition>,
}

impl SideState {
    /// Create an empty side with the given number of active slots
    pub fn new(slots: usize) -> Self {
        Self {
            combatants: Vec::new(),
            active: vec![None; slots],
            conditions: HashSet::new(),
        }
    }

    /// Create a doubles side (two active slots)
    pub fn doubles() -> Self {
        Self::new(2)
    }

    /// The active combatant in a slot, if present and alive
    pub fn active(&self, slot: usize) -> Option<&Combatant> {
        self.active
            .get(slot)
            .and_then(|idx| idx.as_ref())
            .and_then(|&idx| self.combatants.get(idx))
            .filter(|c| c.is_alive())
    }

    /// Iterate over living active combatants with their slot numbers
    pub fn actives(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        (0..self.active.len()).filter_map(|slot| self.active(slot).map(|c| (slot, c)))
    }

    /// Iterate over bench combatants (alive, not active) with party indices
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Combatant)> {
        let active_set: HashSet<usize> = self.active.iter().filter_map(|idx| *idx).collect();
        self.combatants
            .iter()
            .enumerate()
            .filter(move |(idx, c)| !active_set.contains(idx) && c.is_alive())
    }

    /// Count living party members
    pub fn alive_count(&self) -> usize {
        self.combatants.iter().filter(|c| c.is_alive()).count()
    }

    /// Number of living combatants currently on the field
    pub fn active_count(&self) -> usize {
        self.actives().count()
    }

    /// Check a side condition
    pub fn has_condition(&self, cond: SideCondition) -> bool {
        self.conditions.contains(&cond)
    }

    /// Whether any damage-reducing screen is up
    pub fn has_screens(&self) -> bool {
        self.conditions.iter().any(|c| c.is_screen())
    }
}
