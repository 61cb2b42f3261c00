//! Per-turn battle snapshot and query surface

mod battle;

pub use battle::{BattleSnapshot, SlotRequest, SnapshotBuilder, SnapshotError, TARGET_IMPLICIT};
