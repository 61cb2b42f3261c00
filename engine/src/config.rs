//! Engine tuning knobs

/// Named thresholds and probabilities for the decision heuristics.
///
/// Every probabilistic branch in the pipeline reads from here, so behavior
/// can be tuned (and tested) without touching algorithm code.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Protect trigger probability per opposing combatant able to damage us
    pub protect_chance_per_threat: f64,

    /// Factor applied to the Protect probability when no bench remains
    pub protect_empty_bench_factor: f64,

    /// Predicted damage percent treated as a near-certain knockout
    pub switch_ohko_percent: f64,

    /// Switch probability when a faster opponent threatens a knockout
    pub switch_ohko_chance: f64,

    /// Predicted damage percent treated as heavy damage
    pub switch_heavy_percent: f64,

    /// Switch probability when a faster opponent threatens heavy damage
    pub switch_heavy_chance: f64,

    /// Average move score at or below which an Encore lock is considered bad
    pub encore_bad_score: f64,

    /// Switch probability when Encore-locked into a bad move
    pub encore_switch_chance: f64,

    /// Reactive switch candidates below this weight are skipped
    pub switch_min_weight: f64,

    /// A scored move within this fraction of the best score is preferred
    pub preferred_ratio: f64,

    /// A scored move at or above this absolute score is always preferred
    pub preferred_floor: f64,

    /// Status-move scores at or below this collapse to zero
    pub status_collapse_score: f64,

    /// Cap on the damage-percent contribution to a move score
    pub lethal_cap: f64,

    /// Extra score for moves expected to be lethal (percent > 100)
    pub lethal_bonus: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            protect_chance_per_threat: 0.30,
            protect_empty_bench_factor: 0.5,
            switch_ohko_percent: 98.0,
            switch_ohko_chance: 0.80,
            switch_heavy_percent: 70.0,
            switch_heavy_chance: 0.30,
            encore_bad_score: 20.0,
            encore_switch_chance: 0.80,
            switch_min_weight: 40.0,
            preferred_ratio: 0.8,
            preferred_floor: 200.0,
            status_collapse_score: 10.0,
            lethal_cap: 120.0,
            lethal_bonus: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_sane() {
        let config = EngineConfig::default();
        assert!(config.protect_chance_per_threat > 0.0 && config.protect_chance_per_threat <= 1.0);
        assert!(config.switch_ohko_percent > config.switch_heavy_percent);
        assert!(config.switch_ohko_chance > config.switch_heavy_chance);
        assert!(config.preferred_ratio > 0.0 && config.preferred_ratio < 1.0);
    }
}
