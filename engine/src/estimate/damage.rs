//! Expected damage estimation
//!
//! A deterministic expected-value model of the damage formula: no random
//! roll, with an optional pessimistic 0.85 floor for worst-case checks.

use tandem_battle::{
    Ability, BattleSnapshot, Combatant, FixedDamage, Item, MoveCategory, MoveDescriptor,
    SideCondition, SideState, Stat, Status, TargetPattern, Terrain, Type, Weather,
};

use super::stat::{estimate_current_hp, estimate_max_hp, estimate_stat};

/// Options for a damage estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageOptions {
    /// Apply the worst-case 0.85 roll floor
    pub pessimistic: bool,

    /// The attack is delivered by an opponent against our side; selects
    /// which side's screens and spread counts apply
    pub from_opponent: bool,
}

/// The multiplier bundle threaded through the damage adjustment steps.
///
/// Each step takes the record by value and returns the updated record, so
/// every contributing factor is visible in the call chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub base_damage: f64,
    pub attack: f64,
    pub defense: f64,
    pub final_damage: f64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            base_damage: 1.0,
            attack: 1.0,
            defense: 1.0,
            final_damage: 1.0,
        }
    }
}

/// Effective base damage of a move before the main formula: target-pattern
/// and item quirks, plus multi-hit scaling.
pub fn move_base_damage(mv: &MoveDescriptor, user: &Combatant, target: &Combatant) -> f64 {
    let mut base = mv.base_power as f64;

    if mv.target == TargetPattern::Scripted {
        base = 60.0;
    }
    match mv.id.as_str() {
        "acrobatics" if user.item.is_none() => base *= 2.0,
        "gyroball" => {
            let target_speed = estimate_stat(target, Stat::Spe);
            let user_speed = estimate_stat(user, Stat::Spe).max(1.0);
            base = (25.0 * target_speed / user_speed).floor().clamp(1.0, 150.0);
        }
        _ => {}
    }

    if user.has_ability(Ability::SkillLink) {
        base * mv.max_hits() as f64
    } else {
        base * mv.expected_hits()
    }
}

/// Estimate the raw HP a move removes from the target.
///
/// Returns 0 for status moves and immune targets rather than failing.
pub fn estimate_damage(
    battle: &BattleSnapshot,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    opts: DamageOptions,
) -> f64 {
    if let Some(fixed) = mv.fixed_damage() {
        return match fixed {
            FixedDamage::UserLevel => user.level as f64,
            FixedDamage::HalfTargetHp => (estimate_current_hp(target) / 2.0).floor(),
        };
    }
    if mv.is_status() {
        return 0.0;
    }

    let effectiveness = mv.move_type.effectiveness_against(&target.types);
    if effectiveness == 0.0 {
        return 0.0;
    }

    let base = move_base_damage(mv, user, target);
    if base <= 0.0 {
        return 0.0;
    }

    let atk = attacking_stat(mv, user, target);
    let def = defending_stat(mv, target);

    let mut m = Multipliers::default();
    m.base_damage *= effectiveness;
    m = item_adjustments(m, mv, user, target, effectiveness);
    m = status_adjustments(m, mv, user);
    m = target_ability_adjustments(m, user, target);
    m = terrain_adjustments(m, mv, battle.field.terrain);
    m = weather_adjustments(m, mv, target, battle.field.weather);
    if is_spread(battle, mv, opts) {
        m.final_damage *= 0.75;
    }
    m = stab_adjustments(m, mv, user);
    m.final_damage *= effectiveness;
    m = burn_adjustment(m, mv, user);
    m = screen_adjustments(m, mv, user, defending_side(battle, opts));

    let base = (base * m.base_damage).round().max(1.0);
    let atk = (atk * m.attack).round().max(1.0);
    let def = (def * m.defense).round().max(1.0);

    let level_term = (2.0 * user.level as f64 / 5.0 + 2.0).floor();
    let mut damage = ((level_term * base * atk / def).floor() / 50.0).floor() + 2.0;
    damage = (damage * m.final_damage).round().max(1.0);

    if opts.pessimistic {
        damage = (damage * 0.85).floor().max(1.0);
    }
    damage
}

/// Estimated damage as a percentage of the target's estimated maximum HP
pub fn estimate_damage_percent(
    battle: &BattleSnapshot,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    opts: DamageOptions,
) -> f64 {
    let max_hp = estimate_max_hp(target);
    if max_hp <= 0.0 {
        return 0.0;
    }
    estimate_damage(battle, mv, user, target, opts) * 100.0 / max_hp
}

fn attacking_stat(mv: &MoveDescriptor, user: &Combatant, target: &Combatant) -> f64 {
    if mv.uses_target_attack() {
        estimate_stat(target, Stat::Atk)
    } else if mv.uses_user_defense() {
        estimate_stat(user, Stat::Def)
    } else if mv.category == MoveCategory::Special {
        estimate_stat(user, Stat::Spa)
    } else {
        estimate_stat(user, Stat::Atk)
    }
}

fn defending_stat(mv: &MoveDescriptor, target: &Combatant) -> f64 {
    if mv.category == MoveCategory::Special && !mv.hits_physical_defense() {
        estimate_stat(target, Stat::Spd)
    } else {
        estimate_stat(target, Stat::Def)
    }
}

fn defending_side<'a>(battle: &'a BattleSnapshot, opts: DamageOptions) -> &'a SideState {
    if opts.from_opponent { &battle.ours } else { &battle.theirs }
}

fn is_spread(battle: &BattleSnapshot, mv: &MoveDescriptor, opts: DamageOptions) -> bool {
    match mv.target {
        TargetPattern::AllAdjacent => battle.ours.active_count() + battle.theirs.active_count() > 2,
        TargetPattern::AllAdjacentFoes => defending_side(battle, opts).active_count() > 1,
        _ => false,
    }
}

fn item_adjustments(
    mut m: Multipliers,
    mv: &MoveDescriptor,
    user: &Combatant,
    target: &Combatant,
    effectiveness: f64,
) -> Multipliers {
    match user.item {
        Some(Item::LifeOrb) => m.attack *= 1.3,
        Some(Item::ExpertBelt) if effectiveness >= 2.0 => m.base_damage *= 1.2,
        _ => {}
    }

    match mv.category {
        MoveCategory::Special => {
            if user.item == Some(Item::ChoiceSpecs) {
                m.attack *= 1.5;
            }
            if target.item == Some(Item::AssaultVest) {
                m.defense *= 1.5;
            }
        }
        MoveCategory::Physical => {
            if user.item == Some(Item::ChoiceBand) {
                m.attack *= 1.5;
            }
        }
        MoveCategory::Status => {}
    }
    m
}

fn status_adjustments(mut m: Multipliers, mv: &MoveDescriptor, user: &Combatant) -> Multipliers {
    if mv.category == MoveCategory::Physical && user.status.is_some() {
        if user.has_ability(Ability::Guts) {
            m.attack *= 1.5;
        }
        if mv.id == "facade" {
            m.base_damage *= 2.0;
        }
    }
    m
}

fn target_ability_adjustments(
    mut m: Multipliers,
    user: &Combatant,
    target: &Combatant,
) -> Multipliers {
    let ignored = user.ability.is_some_and(Ability::ignores_target_ability);
    if !ignored && target.has_ability(Ability::Multiscale) && target.hp_fraction >= 1.0 {
        m.defense *= 2.0;
    }
    m
}

fn terrain_adjustments(
    mut m: Multipliers,
    mv: &MoveDescriptor,
    terrain: Option<Terrain>,
) -> Multipliers {
    match terrain {
        Some(Terrain::Electric) if mv.move_type == Type::Electric => m.base_damage *= 1.5,
        Some(Terrain::Grassy) if mv.move_type == Type::Grass => m.base_damage *= 1.5,
        Some(Terrain::Psychic) if mv.move_type == Type::Psychic => m.base_damage *= 1.5,
        Some(Terrain::Misty) if mv.move_type == Type::Dragon => m.base_damage *= 0.5,
        _ => {}
    }
    m
}

fn weather_adjustments(
    mut m: Multipliers,
    mv: &MoveDescriptor,
    target: &Combatant,
    weather: Option<Weather>,
) -> Multipliers {
    match weather {
        Some(Weather::Sun) => {
            if mv.move_type == Type::Fire {
                m.final_damage *= 1.5;
            } else if mv.move_type == Type::Water {
                m.final_damage *= 0.5;
            }
        }
        Some(Weather::Rain) => {
            if mv.move_type == Type::Water {
                m.final_damage *= 1.5;
            } else if mv.move_type == Type::Fire {
                m.final_damage *= 0.5;
            }
        }
        Some(Weather::Sand) => {
            // Rock types get a special defense boost in sand
            if target.has_type(Type::Rock)
                && mv.category == MoveCategory::Special
                && !mv.hits_physical_defense()
            {
                m.defense *= 1.5;
            }
        }
        _ => {}
    }
    m
}

fn stab_adjustments(mut m: Multipliers, mv: &MoveDescriptor, user: &Combatant) -> Multipliers {
    if user.has_type(mv.move_type) {
        if user.has_ability(Ability::Adaptability) {
            m.final_damage *= 2.0;
        } else {
            m.final_damage *= 1.5;
        }
    }
    m
}

fn burn_adjustment(mut m: Multipliers, mv: &MoveDescriptor, user: &Combatant) -> Multipliers {
    if mv.category == MoveCategory::Physical
        && user.status == Some(Status::Burn)
        && !user.has_ability(Ability::Guts)
        && mv.id != "facade"
    {
        m.final_damage *= 0.5;
    }
    m
}

fn screen_adjustments(
    mut m: Multipliers,
    mv: &MoveDescriptor,
    user: &Combatant,
    defending: &SideState,
) -> Multipliers {
    if user.has_ability(Ability::Infiltrator) || mv.is_screen_piercing() {
        return m;
    }
    // In doubles, screens reduce damage by roughly a third
    let screened = defending.has_condition(SideCondition::AuroraVeil)
        || (defending.has_condition(SideCondition::Reflect)
            && mv.category == MoveCategory::Physical)
        || (defending.has_condition(SideCondition::LightScreen)
            && mv.category == MoveCategory::Special);
    if screened {
        m.final_damage *= 2.0 / 3.0;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_battle::{BaseStats, SlotRequest, SnapshotBuilder};

    fn pinned(species: &str, types: Vec<Type>) -> Combatant {
        let mut mon = Combatant::new(species, 50, types, BaseStats::new(100, 100, 100, 100, 100, 100));
        mon.known_stats.set(Stat::Atk, 100);
        mon.known_stats.set(Stat::Def, 100);
        mon.known_stats.set(Stat::Spa, 100);
        mon.known_stats.set(Stat::Spd, 100);
        mon.known_stats.set(Stat::Spe, 100);
        mon.max_hp = Some(200);
        mon
    }

    fn arena(user: Combatant, target: Combatant) -> BattleSnapshot {
        let mut ours = tandem_battle::SideState::doubles();
        ours.combatants.push(user);
        ours.active = vec![Some(0), None];

        let mut theirs = tandem_battle::SideState::doubles();
        theirs.combatants.push(target);
        theirs.active = vec![Some(0), None];

        SnapshotBuilder::new()
            .ours(ours)
            .theirs(theirs)
            .request(SlotRequest::default())
            .request(SlotRequest::default())
            .build()
            .unwrap()
    }

    fn physical_100() -> MoveDescriptor {
        MoveDescriptor::new("Strength", MoveCategory::Physical, 100, Type::Normal)
    }

    #[test]
    fn test_neutral_physical_hit() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // floor(floor(22 * 100 * 100 / 100) / 50) + 2 = 46
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 46.0);
    }

    #[test]
    fn test_status_move_deals_nothing() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let wisp = MoveDescriptor::new("Will-O-Wisp", MoveCategory::Status, 0, Type::Fire)
            .with_status(Status::Burn);
        assert_eq!(estimate_damage(&battle, &wisp, user, target, DamageOptions::default()), 0.0);
    }

    #[test]
    fn test_immune_target_short_circuits() {
        let battle = arena(
            pinned("User", vec![Type::Electric]),
            pinned("Target", vec![Type::Ground]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let bolt = MoveDescriptor::new("Thunderbolt", MoveCategory::Special, 90, Type::Electric);
        assert_eq!(estimate_damage(&battle, &bolt, user, target, DamageOptions::default()), 0.0);
    }

    #[test]
    fn test_stab() {
        let battle = arena(
            pinned("User", vec![Type::Normal]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // 46 * 1.5 = 69
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 69.0);
    }

    #[test]
    fn test_super_effective_compounds() {
        let battle = arena(
            pinned("User", vec![Type::Normal]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let ice = MoveDescriptor::new("Ice Punch", MoveCategory::Physical, 100, Type::Ice);
        // Effectiveness feeds both the base damage and the final multiplier:
        // base 100 -> 200 gives floor(floor(22*200*100/100)/50)+2 = 90, then x2 = 180
        let damage = estimate_damage(&battle, &ice, user, target, DamageOptions::default());
        assert_eq!(damage, 180.0);
    }

    #[test]
    fn test_fixed_damage_classes() {
        let battle = arena(
            pinned("User", vec![Type::Normal]),
            pinned("Target", vec![Type::Dragon]).with_hp_fraction(0.5),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let toss = MoveDescriptor::new("Seismic Toss", MoveCategory::Physical, 0, Type::Fighting);
        assert_eq!(estimate_damage(&battle, &toss, user, target, DamageOptions::default()), 50.0);

        // Half of the target's current HP (200 max * 0.5 = 100 current)
        let fang = MoveDescriptor::new("Super Fang", MoveCategory::Physical, 0, Type::Normal);
        assert_eq!(estimate_damage(&battle, &fang, user, target, DamageOptions::default()), 50.0);
    }

    #[test]
    fn test_screens_cut_a_third() {
        let mut battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        battle.theirs.conditions.insert(SideCondition::AuroraVeil);
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // round(46 * 2/3) = 31
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 31.0);
    }

    #[test]
    fn test_reflect_only_blocks_physical() {
        let mut battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        battle.theirs.conditions.insert(SideCondition::Reflect);
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let physical = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(physical, 31.0);

        let special = MoveDescriptor::new("Swift", MoveCategory::Special, 100, Type::Normal);
        let damage = estimate_damage(&battle, &special, user, target, DamageOptions::default());
        assert_eq!(damage, 46.0);
    }

    #[test]
    fn test_screen_piercing_ignores_screens() {
        let mut battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        battle.theirs.conditions.insert(SideCondition::Reflect);
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let brick = MoveDescriptor::new("Brick Break", MoveCategory::Physical, 100, Type::Fighting);
        // Fighting vs Dragon is neutral; Reflect ignored
        let damage = estimate_damage(&battle, &brick, user, target, DamageOptions::default());
        assert_eq!(damage, 46.0);
    }

    #[test]
    fn test_burn_halves_physical() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]).with_status(Status::Burn),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 23.0);
    }

    #[test]
    fn test_guts_ignores_burn_and_boosts() {
        let battle = arena(
            pinned("User", vec![Type::Dragon])
                .with_status(Status::Burn)
                .with_ability(Ability::Guts),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // atk 100 -> 150: floor(floor(22*100*150/100)/50)+2 = 68, no burn halving
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 68.0);
    }

    #[test]
    fn test_choice_band() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]).with_item(Item::ChoiceBand),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 68.0);
    }

    #[test]
    fn test_multiscale_at_full_hp() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]).with_ability(Ability::Multiscale),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // def 100 -> 200: floor(floor(22*100*100/200)/50)+2 = 24
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 24.0);

        // Mold Breaker ignores it
        let battle = arena(
            pinned("User", vec![Type::Dragon]).with_ability(Ability::MoldBreaker),
            pinned("Target", vec![Type::Dragon]).with_ability(Ability::Multiscale),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let damage = estimate_damage(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(damage, 46.0);
    }

    #[test]
    fn test_spread_penalty_with_two_foes() {
        let mut battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        battle.theirs.combatants.push(pinned("Second", vec![Type::Dragon]));
        battle.theirs.active = vec![Some(0), Some(1)];
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let spread = MoveDescriptor::new("Spread", MoveCategory::Physical, 100, Type::Normal)
            .with_target(TargetPattern::AllAdjacentFoes);
        // round(46 * 0.75) = 35 (x1.5 STAB does not apply: Normal vs Dragon user)
        let damage = estimate_damage(&battle, &spread, user, target, DamageOptions::default());
        assert_eq!(damage, 35.0);
    }

    #[test]
    fn test_multi_hit_expected_and_skill_link() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let blast = MoveDescriptor::new("Rock Blast", MoveCategory::Physical, 25, Type::Rock)
            .with_hits(2, 5);
        assert_eq!(move_base_damage(&blast, user, target), 25.0 * 3.1);

        let linked = pinned("Linked", vec![Type::Dragon]).with_ability(Ability::SkillLink);
        assert_eq!(move_base_damage(&blast, &linked, target), 125.0);
    }

    #[test]
    fn test_pessimistic_floor() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        let opts = DamageOptions { pessimistic: true, ..Default::default() };
        // floor(46 * 0.85) = 39
        assert_eq!(estimate_damage(&battle, &physical_100(), user, target, opts), 39.0);
    }

    #[test]
    fn test_damage_percent() {
        let battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Dragon]),
        );
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());
        // 46 damage on a 200 HP target
        let pct =
            estimate_damage_percent(&battle, &physical_100(), user, target, DamageOptions::default());
        assert_eq!(pct, 23.0);
    }

    #[test]
    fn test_weather() {
        let mut battle = arena(
            pinned("User", vec![Type::Dragon]),
            pinned("Target", vec![Type::Normal]),
        );
        battle.field.weather = Some(Weather::Sun);
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let ember = MoveDescriptor::new("Flame Wheel", MoveCategory::Physical, 100, Type::Fire);
        // neutral 46 * 1.5 sun = 69
        assert_eq!(estimate_damage(&battle, &ember, user, target, DamageOptions::default()), 69.0);

        let splash = MoveDescriptor::new("Waterfall", MoveCategory::Physical, 100, Type::Water);
        // 46 * 0.5 = 23
        assert_eq!(estimate_damage(&battle, &splash, user, target, DamageOptions::default()), 23.0);
    }

    #[test]
    fn test_foul_play_uses_target_attack() {
        let mut strong_target = pinned("Target", vec![Type::Dragon]);
        strong_target.known_stats.set(Stat::Atk, 200);
        let battle = arena(pinned("User", vec![Type::Dragon]), strong_target);
        let (user, target) = (battle.active(0).unwrap(), battle.opponent_at(1).unwrap());

        let foul = MoveDescriptor::new("Foul Play", MoveCategory::Physical, 95, Type::Dark);
        let strength = MoveDescriptor::new("Night Slash", MoveCategory::Physical, 95, Type::Dark);
        let foul_damage = estimate_damage(&battle, &foul, user, target, DamageOptions::default());
        let own_damage = estimate_damage(&battle, &strength, user, target, DamageOptions::default());
        assert!(foul_damage > own_damage);
    }
}
