//! Heuristic decision engine for two-on-two turn-based battles.
//!
//! Given a read-only [`BattleSnapshot`](tandem_battle::BattleSnapshot) of the
//! current turn, the engine picks one action per active slot: a move against
//! a target, a switch to a bench combatant, or the game's default fallback.
//!
//! # Architecture
//!
//! ```text
//! Engine::decide_slot
//!   ├─ forced switch      (battle demands a replacement)
//!   ├─ priority knockout  (a priority move finishes a target)
//!   ├─ protect stall      (probabilistic, threat-scaled)
//!   ├─ proactive switch   (bail out of losing matchups)
//!   └─ attack fallback    (move scorer + weighted selection)
//!                              │
//!                              ├─ damage estimator ── stat estimator
//!                              ├─ accuracy estimator
//!                              └─ immunity rules
//! ```
//!
//! The engine is synchronous and holds no battle state: each decision is a
//! pure function of the snapshot, the configuration, the injected random
//! source, and the per-slot memory of the last switch-in. Seed the random
//! source for reproducible decisions.
//!
//! # Example
//!
//! ```
//! use tandem_battle::{
//!     BaseStats, Combatant, MoveCategory, MoveDescriptor, SideState, SlotRequest,
//!     SnapshotBuilder, Type,
//! };
//! use tandem_engine::{Decision, Engine, EngineConfig};
//!
//! let attacker = Combatant::new(
//!     "Pikachu",
//!     50,
//!     vec![Type::Electric],
//!     BaseStats::new(35, 55, 40, 50, 50, 90),
//! )
//! .with_moves(vec![MoveDescriptor::new(
//!     "Thunderbolt",
//!     MoveCategory::Special,
//!     90,
//!     Type::Electric,
//! )]);
//!
//! let mut ours = SideState::doubles();
//! ours.combatants.push(attacker);
//! ours.active = vec![Some(0), None];
//!
//! let mut theirs = SideState::doubles();
//! theirs.combatants.push(Combatant::new(
//!     "Gyarados",
//!     50,
//!     vec![Type::Water, Type::Flying],
//!     BaseStats::new(95, 125, 79, 60, 100, 81),
//! ));
//! theirs.active = vec![Some(0), None];
//!
//! let battle = SnapshotBuilder::new()
//!     .ours(ours)
//!     .theirs(theirs)
//!     .request(SlotRequest { legal_moves: vec![0], legal_switches: vec![], force_switch: false })
//!     .request(SlotRequest::default())
//!     .build()
//!     .unwrap();
//!
//! let mut engine = Engine::from_seed(EngineConfig::default(), 1);
//! let decision = engine.decide_slot(&battle, 0);
//! assert_eq!(decision, Decision::Move { move_index: 0, target: 1 });
//! ```

mod config;
mod decision;
mod engine;
pub mod estimate;
pub mod immunity;
pub mod rules;
pub mod score;
pub mod switch;
pub mod team;

pub use config::EngineConfig;
pub use decision::{Decision, ScoredAction};
pub use engine::Engine;
pub use score::Selection;
