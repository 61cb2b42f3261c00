//! Battle snapshot types and query surface for doubles battle AI.
//!
//! This crate provides the shared type system consumed by the decision
//! engine: domain types, the per-turn snapshot, and matchup queries.
//!
//! # Overview
//!
//! `tandem-battle` sits between the state-tracking collaborator (which parses
//! the game's battle log into a snapshot) and the decision engine:
//!
//! ```text
//! state collaborator (log parsing, legality)
//!        │
//!        ▼
//! tandem-battle (domain types + snapshot) ← THIS CRATE
//!        │
//!        └─> tandem-engine (heuristic decisions)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Elemental types with effectiveness chart
//! - [`Status`], [`Volatile`] - Status conditions and volatile effects
//! - [`StatStages`], [`BaseStats`] - Stage modifiers and species stats
//! - [`Ability`], [`Item`] - The modeled ability and item sets
//! - [`Weather`], [`Terrain`], [`SideCondition`], [`FieldState`] - Field state
//! - [`MoveDescriptor`] - A known move with category, power, and targeting
//! - [`Combatant`], [`SideState`] - Battle participants
//!
//! ## Snapshot
//! - [`BattleSnapshot`] - The read-only per-turn view the engine decides from
//! - [`SnapshotBuilder`] - Validating constructor for snapshots
//!
//! # Example
//!
//! ```
//! use tandem_battle::{
//!     BaseStats, BattleSnapshot, Combatant, SideState, SlotRequest, SnapshotBuilder, Type,
//! };
//!
//! let mut ours = SideState::doubles();
//! ours.combatants.push(Combatant::new(
//!     "Garchomp",
//!     50,
//!     vec![Type::Dragon, Type::Ground],
//!     BaseStats::new(108, 130, 95, 80, 85, 102),
//! ));
//! ours.active = vec![Some(0), None];
//!
//! let battle: BattleSnapshot = SnapshotBuilder::new()
//!     .ours(ours)
//!     .request(SlotRequest::default())
//!     .request(SlotRequest::default())
//!     .build()
//!     .unwrap();
//! assert_eq!(battle.active(0).unwrap().species, "Garchomp");
//! ```

pub mod query;
pub mod snapshot;
pub mod types;

// Re-export main types at crate root for convenience
pub use snapshot::{BattleSnapshot, SlotRequest, SnapshotBuilder, SnapshotError, TARGET_IMPLICIT};
pub use types::{
    Ability, BaseStats, Combatant, FieldState, FixedDamage, Item, KnownStats, MoveCategory,
    MoveDescriptor, SideCondition, SideState, Stat, StatStages, Status, TYPE_CHART, TargetPattern,
    Terrain, Type, Volatile, Weather,
};
