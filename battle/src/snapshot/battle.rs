//! The per-turn battle snapshot and its query surface

use thiserror::Error;

use crate::types::{Combatant, FieldState, MoveDescriptor, SideState, TargetPattern};

/// Target slot sentinel for moves with no selectable target
/// (self, field, side, or spread moves)
pub const TARGET_IMPLICIT: i8 = 0;

/// Errors raised when assembling an inconsistent snapshot
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("active index {index} out of range for a party of {party}")]
    ActiveIndexOutOfRange { index: usize, party: usize },

    #[error("expected {expected} slot requests, found {found}")]
    RequestCountMismatch { expected: usize, found: usize },

    #[error("slot {slot}: legal move index {index} out of range")]
    IllegalMoveIndex { slot: usize, index: usize },

    #[error("slot {slot}: switch target {index} is not a usable bench member")]
    IllegalSwitchTarget { slot: usize, index: usize },
}

/// What the battle allows one of our active slots to do this turn.
///
/// Legality (PP, Taunt, Encore, trapping, ...) is decided by the state
/// collaborator; the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRequest {
    /// Indices into the active combatant's move list
    pub legal_moves: Vec<usize>,

    /// Party indices of bench members this slot may switch to
    pub legal_switches: Vec<usize>,

    /// The battle requires a replacement in this slot
    pub force_switch: bool,
}

/// A fully-observed snapshot of the battle at one decision point.
///
/// Read-only for the engine: one snapshot per turn, used for the duration of
/// a single decision and then discarded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    /// Our side
    pub ours: SideState,

    /// The opposing side (revealed information only)
    pub theirs: SideState,

    /// Global field state
    pub field: FieldState,

    /// Per-active-slot requests, parallel to `ours.active`
    pub requests: Vec<SlotRequest>,
}

impl BattleSnapshot {
    /// Our active combatant in a slot, if present and alive
    pub fn active(&self, slot: usize) -> Option<&Combatant> {
        self.ours.active(slot)
    }

    /// Living opposing actives with their target slot numbers (1-based)
    pub fn opponents(&self) -> Vec<(i8, &Combatant)> {
        self.theirs
            .actives()
            .map(|(slot, c)| (slot as i8 + 1, c))
            .collect()
    }

    /// The opposing active a target slot number refers to
    pub fn opponent_at(&self, target: i8) -> Option<&Combatant> {
        if target < 1 {
            return None;
        }
        self.theirs.active(target as usize - 1)
    }

    /// Legal moves for a slot, as (move index, descriptor) pairs
    pub fn legal_moves(&self, slot: usize) -> Vec<(usize, &MoveDescriptor)> {
        let Some(active) = self.active(slot) else {
            return Vec::new();
        };
        self.requests
            .get(slot)
            .map(|req| {
                req.legal_moves
                    .iter()
                    .filter_map(|&i| active.moves.get(i).map(|m| (i, m)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Legal switch targets for a slot (party indices)
    pub fn legal_switches(&self, slot: usize) -> &[usize] {
        self.requests
            .get(slot)
            .map(|req| req.legal_switches.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the battle requires a replacement in this slot
    pub fn force_switch(&self, slot: usize) -> bool {
        self.requests.get(slot).is_some_and(|req| req.force_switch)
    }

    /// The set of legal target slot numbers for a move used from one of our
    /// slots. Selectable moves list each living opposing slot; everything
    /// else gets the implicit sentinel.
    pub fn possible_targets(&self, mv: &MoveDescriptor, _slot: usize) -> Vec<i8> {
        if mv.target.is_selectable() {
            let targets: Vec<i8> = self.opponents().iter().map(|(t, _)| *t).collect();
            if targets.is_empty() {
                vec![TARGET_IMPLICIT]
            } else {
                targets
            }
        } else {
            vec![TARGET_IMPLICIT]
        }
    }

    /// Whether a move will strike more than one combatant in the current
    /// field arrangement (triggers the spread damage penalty)
    pub fn targets_multiple(&self, mv: &MoveDescriptor) -> bool {
        match mv.target {
            TargetPattern::AllAdjacent => {
                self.ours.active_count() + self.theirs.active_count() > 2
            }
            TargetPattern::AllAdjacentFoes => self.theirs.active_count() > 1,
            _ => false,
        }
    }
}

/// Assembles a [`BattleSnapshot`], validating cross-references on build.
#[derive(Debug)]
pub struct SnapshotBuilder {
    ours: SideState,
    theirs: SideState,
    field: FieldState,
    requests: Vec<SlotRequest>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            ours: SideState::doubles(),
            theirs: SideState::doubles(),
            field: FieldState::new(),
            requests: Vec::new(),
        }
    }

    pub fn ours(mut self, side: SideState) -> Self {
        self.ours = side;
        self
    }

    pub fn theirs(mut self, side: SideState) -> Self {
        self.theirs = side;
        self
    }

    pub fn field(mut self, field: FieldState) -> Self {
        self.field = field;
        self
    }

    pub fn request(mut self, request: SlotRequest) -> Self {
        self.requests.push(request);
        self
    }

    pub fn build(self) -> Result<BattleSnapshot, SnapshotError> {
        for side in [&self.ours, &self.theirs] {
            for idx in side.active.iter().flatten() {
                if *idx >= side.combatants.len() {
                    return Err(SnapshotError::ActiveIndexOutOfRange {
                        index: *idx,
                        party: side.combatants.len(),
                    });
                }
            }
        }

        if self.requests.len() != self.ours.active.len() {
            return Err(SnapshotError::RequestCountMismatch {
                expected: self.ours.active.len(),
                found: self.requests.len(),
            });
        }

        for (slot, req) in self.requests.iter().enumerate() {
            let move_count = self
                .ours
                .active(slot)
                .map(|c| c.moves.len())
                .unwrap_or(0);
            for &index in &req.legal_moves {
                if index >= move_count {
                    return Err(SnapshotError::IllegalMoveIndex { slot, index });
                }
            }

            let active_set: Vec<usize> = self.ours.active.iter().flatten().copied().collect();
            for &index in &req.legal_switches {
                let usable = self
                    .ours
                    .combatants
                    .get(index)
                    .is_some_and(|c| c.is_alive() && !active_set.contains(&index));
                if !usable {
                    return Err(SnapshotError::IllegalSwitchTarget { slot, index });
                }
            }
        }

        Ok(BattleSnapshot {
            ours: self.ours,
            theirs: self.theirs,
            field: self.field,
            requests: self.requests,
        })
    }
}
