//! Effective accuracy estimation

use tandem_battle::{Combatant, FieldState, MoveDescriptor, StatStages, Volatile, Weather};

/// Sentinel for moves that effectively cannot miss
pub const SURE_HIT: f64 = 125.0;

/// Estimate the chance (as a percentage, 0..125) that a move connects.
///
/// Returns [`SURE_HIT`] for moves that bypass the accuracy check entirely:
/// accuracy-exempt moves, trampling a Minimized target, a target held by
/// Telekinesis, and the weather-backed sure hits.
pub fn estimate_accuracy(
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    field: &FieldState,
) -> f64 {
    if target.has_volatile(Volatile::Minimize) && mv.tramples_minimize() {
        return SURE_HIT;
    }
    if target.has_volatile(Volatile::Telekinesis) {
        return SURE_HIT;
    }
    if mv.accuracy == 0 {
        return SURE_HIT;
    }
    if mv.is_blizzard() && field.weather.is_some_and(Weather::is_freezing) {
        return SURE_HIT;
    }
    if mv.is_hurricane() && field.weather == Some(Weather::Rain) {
        return SURE_HIT;
    }

    let accuracy = 100.0 * StatStages::accuracy_multiplier(user.boosts.accuracy);
    let evasion = (100.0 * StatStages::accuracy_multiplier(target.boosts.evasion)).max(1.0);
    mv.accuracy as f64 * accuracy / evasion
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_battle::{BaseStats, MoveCategory, Type};

    fn mon() -> Combatant {
        Combatant::new("Testmon", 50, vec![Type::Normal], BaseStats::new(80, 80, 80, 80, 80, 80))
    }

    fn move_with_accuracy(accuracy: u8) -> MoveDescriptor {
        MoveDescriptor::new("Test Move", MoveCategory::Physical, 80, Type::Normal)
            .with_accuracy(accuracy)
    }

    #[test]
    fn test_plain_accuracy() {
        let field = FieldState::new();
        let acc = estimate_accuracy(&move_with_accuracy(90), &mon(), &mon(), &field);
        assert_eq!(acc, 90.0);
    }

    #[test]
    fn test_accuracy_exempt_move() {
        let field = FieldState::new();
        let swift = move_with_accuracy(0);
        assert_eq!(estimate_accuracy(&swift, &mon(), &mon(), &field), SURE_HIT);
    }

    #[test]
    fn test_stages_shift_accuracy() {
        let field = FieldState::new();
        let mut user = mon();
        user.boosts.accuracy = 1;
        // 90 * 4/3 = 120
        let acc = estimate_accuracy(&move_with_accuracy(90), &user, &mon(), &field);
        assert!((acc - 120.0).abs() < 1e-9);

        let mut target = mon();
        target.boosts.evasion = 2;
        // 90 / (5/3) = 54
        let acc = estimate_accuracy(&move_with_accuracy(90), &mon(), &target, &field);
        assert!((acc - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_minimize_trample() {
        let field = FieldState::new();
        let mut target = mon();
        target.volatiles.insert(Volatile::Minimize);

        let stomp = MoveDescriptor::new("Stomp", MoveCategory::Physical, 65, Type::Normal)
            .with_accuracy(100);
        assert_eq!(estimate_accuracy(&stomp, &mon(), &target, &field), SURE_HIT);

        // Non-trampling moves still go through the normal calculation
        let tackle = move_with_accuracy(95);
        assert_eq!(estimate_accuracy(&tackle, &mon(), &target, &field), 95.0);
    }

    #[test]
    fn test_telekinesis() {
        let field = FieldState::new();
        let mut target = mon();
        target.volatiles.insert(Volatile::Telekinesis);
        assert_eq!(estimate_accuracy(&move_with_accuracy(70), &mon(), &target, &field), SURE_HIT);
    }

    #[test]
    fn test_weather_sure_hits() {
        let mut field = FieldState::new();
        field.weather = Some(Weather::Hail);

        let blizzard = MoveDescriptor::new("Blizzard", MoveCategory::Special, 110, Type::Ice)
            .with_accuracy(70);
        assert_eq!(estimate_accuracy(&blizzard, &mon(), &mon(), &field), SURE_HIT);

        field.weather = Some(Weather::Rain);
        assert_eq!(estimate_accuracy(&blizzard, &mon(), &mon(), &field), 70.0);

        let hurricane = MoveDescriptor::new("Hurricane", MoveCategory::Special, 110, Type::Flying)
            .with_accuracy(70);
        assert_eq!(estimate_accuracy(&hurricane, &mon(), &mon(), &field), SURE_HIT);
    }
}
