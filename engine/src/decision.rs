//! Engine output types

/// The engine's verdict for one active slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Use a move (index into the active combatant's move list) against a
    /// target slot (0 = implicit/self/field, 1.. = opposing slots)
    Move { move_index: usize, target: i8 },

    /// Switch to a bench combatant (party index)
    Switch { bench_index: usize },

    /// No legal action: the transport layer maps this to the game's forced
    /// fallback (Struggle or pass)
    Default,
}

/// A candidate action with its desirability score.
///
/// Created transiently during scoring; scores are always non-negative and a
/// zero score marks an action excluded from selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAction {
    /// Index into the active combatant's move list
    pub move_index: usize,

    /// Chosen target slot (0 = implicit)
    pub target: i8,

    /// Non-negative desirability score
    pub score: f64,
}
