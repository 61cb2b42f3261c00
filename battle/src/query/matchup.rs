//! Type matchup helpers for decision making

use crate::types::Type;

/// Best multiplier any of the attacking types achieves against the defending
/// type set.
///
/// Used offensively (how hard can A hit B) and defensively (how hard can B's
/// typing hit A at worst).
pub fn best_type_multiplier(attacking: &[Type], defending: &[Type]) -> f64 {
    attacking
        .iter()
        .map(|t| t.effectiveness_against(defending))
        .fold(0.0, f64::max)
}

/// Type-advantage margin of `a` over `b`: how hard `a`'s typing hits `b`
/// minus how hard `b`'s typing hits back. Positive favors `a`.
pub fn matchup_margin(a: &[Type], b: &[Type]) -> f64 {
    best_type_multiplier(a, b) - best_type_multiplier(b, a)
}

/// Check if the defender takes super-effective damage from any of the
/// attacking types
pub fn is_weak_to_any(defender: &[Type], attacking: &[Type]) -> bool {
    attacking.iter().any(|t| t.effectiveness_against(defender) > 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_type_multiplier_takes_worse_type() {
        // Water/Flying defending against Electric: 4x through either lens
        let eff = best_type_multiplier(&[Type::Electric], &[Type::Water, Type::Flying]);
        assert_eq!(eff, 4.0);

        // Fire/Ground attacking Steel: Fire 2x, Ground 2x -> 2x
        let eff = best_type_multiplier(&[Type::Fire, Type::Ground], &[Type::Steel]);
        assert_eq!(eff, 2.0);

        // Normal attacking Ghost: immune
        let eff = best_type_multiplier(&[Type::Normal], &[Type::Ghost]);
        assert_eq!(eff, 0.0);
    }

    #[test]
    fn test_matchup_margin() {
        // Water hits Fire 2x, Fire hits Water 0.5x -> margin 1.5
        let margin = matchup_margin(&[Type::Water], &[Type::Fire]);
        assert!((margin - 1.5).abs() < 1e-9);

        // Mirror matchup is symmetric
        let margin = matchup_margin(&[Type::Fire], &[Type::Water]);
        assert!((margin + 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_weak_to_any() {
        assert!(is_weak_to_any(&[Type::Water], &[Type::Electric, Type::Grass]));
        assert!(!is_weak_to_any(&[Type::Water], &[Type::Fire, Type::Ice]));
    }
}
