//! StatAggregator - turns a selection into the final stat block.
//!
//! The calculation runs in two passes:
//!
//! ```text
//! [ Flat pass ]        level growth → ascension → core flat props → weapon attack
//!      ↓                                 ↓
//! [ BaseStats ]  (frozen)          DeferredModifiers
//!      ↓                                 ↓
//! [ Percentage pass ]  derived stats → core % props → weapon substat
//!      ↓
//! [ Rounding ]
//! ```
//!
//! Every percentage bonus is computed against the frozen [`BaseStats`], never
//! against the raw character base or a partially-updated total, so the order
//! of bonuses inside the percentage pass does not matter.

use tracing::{debug, warn};

use crate::model::{
    Character, CharacterBaseStats, CoreRank, Level, PERCENT_SCALE, RATE_SCALE, Weapon,
};

use super::block::{StatBlock, StatKind};
use super::core_rank::clamp_core_rank;
use super::modifiers::{CoreProperty, DeferredModifiers, SubstatEffect};
use super::weapon::{WeaponStats, weapon_stats};

/// Output of the flat pass: the base every percentage bonus multiplies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
    pub impact: f64,
    pub anomaly_mastery: f64,
    pub energy_regen: f64,
}

impl BaseStats {
    /// Energy Regen every character starts with.
    pub const BASE_ENERGY_REGEN: f64 = 1.2;

    /// Level-scaled character base, before any bonus.
    pub fn at_level(stats: &CharacterBaseStats, level: Level) -> Self {
        let steps = f64::from(level.steps());
        Self {
            attack: stats.attack + stats.attack_growth * steps / RATE_SCALE,
            defense: stats.defence + stats.defence_growth * steps / RATE_SCALE,
            hp: stats.hp_max + stats.hp_growth * steps / RATE_SCALE,
            impact: stats.break_stun.unwrap_or(0.0),
            anomaly_mastery: stats.element_abnormal_power,
            energy_regen: Self::BASE_ENERGY_REGEN,
        }
    }

    /// The frozen base for `kind`, if the flat pass tracks it.
    pub fn get(&self, kind: StatKind) -> Option<f64> {
        match kind {
            StatKind::Attack => Some(self.attack),
            StatKind::Defense => Some(self.defense),
            StatKind::Hp => Some(self.hp),
            StatKind::Impact => Some(self.impact),
            StatKind::AnomalyMastery => Some(self.anomaly_mastery),
            StatKind::EnergyRegen => Some(self.energy_regen),
            _ => None,
        }
    }
}

/// Stateless entry point for stat computation.
pub struct StatAggregator;

impl StatAggregator {
    /// Computes the rounded stat block for one character slot.
    ///
    /// `core_rank` is clamped to what `level` allows before use. A weapon whose
    /// tables are incomplete contributes nothing. Returns `None` when the
    /// character has no base stats.
    ///
    /// # Example
    /// ```
    /// # use planner_core::*;
    /// let stats = CharacterBaseStats {
    ///     attack: 100.0,
    ///     attack_growth: 10_000.0,
    ///     ..CharacterBaseStats::default()
    /// };
    /// let character = Character::with_stats("c", stats);
    ///
    /// let level = Level::new(11).unwrap();
    /// let block = StatAggregator::compute(&character, level, CoreRank::None, None).unwrap();
    /// assert_eq!(block.attack, 110.0);
    /// assert_eq!(block.energy_regen, 1.2);
    /// ```
    pub fn compute(
        character: &Character,
        level: Level,
        core_rank: CoreRank,
        weapon: Option<(&Weapon, Level)>,
    ) -> Option<StatBlock> {
        let weapon = weapon.and_then(|(weapon, weapon_level)| {
            weapon_stats(weapon, weapon_level)
                .inspect_err(|err| {
                    debug!(weapon = %weapon.id, level = %weapon_level, %err, "weapon contributes no stats");
                })
                .ok()
        });

        Self::compute_with_weapon_stats(character, level, core_rank, weapon.as_ref())
    }

    /// Same as [`StatAggregator::compute`], with weapon stats computed by the caller.
    pub fn compute_with_weapon_stats(
        character: &Character,
        level: Level,
        core_rank: CoreRank,
        weapon: Option<&WeaponStats>,
    ) -> Option<StatBlock> {
        let stats = character.stats.as_ref()?;
        let core_rank = clamp_core_rank(core_rank, level);
        let (base, deferred) = Self::flat_pass(character, level, core_rank, weapon)?;
        Some(Self::percentage_pass(stats, &base, &deferred, weapon).rounded())
    }

    /// Accumulates flat bonuses and collects percentage core properties.
    ///
    /// `core_rank` is used as given; [`StatAggregator::compute`] clamps it first.
    /// Returns `None` when the character has no base stats.
    pub fn flat_pass(
        character: &Character,
        level: Level,
        core_rank: CoreRank,
        weapon: Option<&WeaponStats>,
    ) -> Option<(BaseStats, DeferredModifiers)> {
        let mut base = BaseStats::at_level(character.stats.as_ref()?, level);
        let mut deferred = DeferredModifiers::new();

        if let Some(tier) = character.ascension_at(level.get()) {
            base.attack += tier.attack;
            base.defense += tier.defense;
            base.hp += tier.max_hp;
        }

        let core_tier = core_rank
            .tier_max_level()
            .and_then(|max_level| character.extra_ascension_for(max_level));
        match core_tier {
            Some(tier) => {
                for prop in &tier.props {
                    let Ok(property) = prop.name.parse::<CoreProperty>() else {
                        debug!(character = %character.id, name = %prop.name, "ignoring unknown core property");
                        continue;
                    };
                    match property {
                        CoreProperty::BaseAtk => base.attack += prop.value,
                        CoreProperty::Impact => base.impact += prop.value,
                        CoreProperty::AnomalyMastery => base.anomaly_mastery += prop.value,
                        CoreProperty::BaseEnergyRegen => {
                            base.energy_regen += prop.value / PERCENT_SCALE
                        }
                        deferred_property => deferred.insert(deferred_property, prop.value),
                    }
                }
            }
            None if core_rank != CoreRank::None => {
                debug!(character = %character.id, %core_rank, "no core tier for rank");
            }
            None => {}
        }

        if let Some(weapon) = weapon {
            base.attack += weapon.attack;
        }

        Some((base, deferred))
    }

    /// Builds the unrounded block from the frozen base.
    pub fn percentage_pass(
        stats: &CharacterBaseStats,
        base: &BaseStats,
        deferred: &DeferredModifiers,
        weapon: Option<&WeaponStats>,
    ) -> StatBlock {
        let mut block = StatBlock {
            attack: base.attack,
            defense: base.defense,
            hp: base.hp,
            impact: base.impact,
            anomaly_mastery: base.anomaly_mastery,
            energy_regen: base.energy_regen,
            crit_rate: stats.crit / PERCENT_SCALE,
            crit_dmg: stats.crit_damage / PERCENT_SCALE,
            pen_flat: stats.pen_delta,
            pen_ratio: stats.pen_rate / PERCENT_SCALE,
            anomaly_proficiency: stats.element_mystery,
        };

        for (property, value) in deferred.iter() {
            let percent = value / PERCENT_SCALE;
            match property {
                CoreProperty::CritRate => block.crit_rate += percent,
                CoreProperty::CritDmg => block.crit_dmg += percent,
                CoreProperty::PenRatio => block.pen_ratio += percent,
                CoreProperty::Atk => block.attack += (base.attack * percent).floor(),
                CoreProperty::Hp => block.hp += (base.hp * percent).floor(),
                CoreProperty::Defence => block.defense += (base.defense * percent).floor(),
                CoreProperty::AnomalyProficiency => block.anomaly_proficiency += value,
                // applied in the flat pass
                CoreProperty::BaseAtk
                | CoreProperty::Impact
                | CoreProperty::AnomalyMastery
                | CoreProperty::BaseEnergyRegen => {}
            }
        }

        if let Some(weapon) = weapon {
            Self::apply_substat(&mut block, base, weapon);
        }

        block
    }

    fn apply_substat(block: &mut StatBlock, base: &BaseStats, weapon: &WeaponStats) {
        let value = weapon.substat_value;
        let Some(effect) = SubstatEffect::for_name(&weapon.substat_name) else {
            warn!(substat = %weapon.substat_name, "weapon substat matches no stat, ignoring");
            return;
        };

        match effect {
            SubstatEffect::PercentOfBase(kind) => {
                let of = base.get(kind).unwrap_or(0.0);
                block.add(kind, (of * (value / PERCENT_SCALE)).floor());
            }
            SubstatEffect::FractionOfBase(kind) => {
                let of = base.get(kind).unwrap_or(0.0);
                block.add(kind, of * value / PERCENT_SCALE);
            }
            SubstatEffect::Flat(kind) => block.add(kind, value),
            SubstatEffect::ScaledFlat(kind) => block.add(kind, value * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AscensionTier, ExtraAscensionTier, Property};

    fn level(value: u32) -> Level {
        Level::saturating(value)
    }

    fn stats() -> CharacterBaseStats {
        CharacterBaseStats {
            attack: 100.0,
            defence: 50.0,
            hp_max: 500.0,
            crit: 500.0,
            crit_damage: 5000.0,
            element_abnormal_power: 90.0,
            element_mystery: 92.0,
            pen_delta: 0.0,
            pen_rate: 0.0,
            break_stun: Some(86.0),
            attack_growth: 10_000.0,
            defence_growth: 5_000.0,
            hp_growth: 20_000.0,
        }
    }

    fn character() -> Character {
        Character::with_stats("anby", stats())
            .with_ascension(vec![
                AscensionTier {
                    min_level: 0,
                    max_level: 10,
                    ..AscensionTier::default()
                },
                AscensionTier {
                    min_level: 10,
                    max_level: 20,
                    attack: 40.0,
                    defense: 20.0,
                    max_hp: 100.0,
                },
            ])
            .with_extra_ascension(vec![
                ExtraAscensionTier {
                    max_level: 15,
                    props: vec![Property::new("Base ATK", 10.0)],
                },
                ExtraAscensionTier {
                    max_level: 60,
                    props: vec![
                        Property::new("Base ATK", 25.0),
                        Property::new("Impact", 6.0),
                        Property::new("Base Energy Regen", 12.0),
                        Property::new("ATK", 10.0),
                        Property::new("CRIT Rate", 4.8),
                    ],
                },
            ])
    }

    #[test]
    fn level_growth_only() {
        let character = Character::with_stats("c", stats());
        let block = StatAggregator::compute(&character, level(11), CoreRank::None, None).unwrap();
        assert_eq!(block.attack, 110.0);
        assert_eq!(block.defense, 55.0);
        assert_eq!(block.hp, 520.0);
        assert_eq!(block.impact, 86.0);
        assert_eq!(block.anomaly_mastery, 90.0);
        assert_eq!(block.energy_regen, 1.2);
        assert_eq!(block.crit_rate, 5.0);
        assert_eq!(block.crit_dmg, 50.0);
        assert_eq!(block.anomaly_proficiency, 92.0);
    }

    #[test]
    fn ascension_applies_above_min_level() {
        let at_10 = StatAggregator::compute(&character(), level(10), CoreRank::None, None).unwrap();
        let at_11 = StatAggregator::compute(&character(), level(11), CoreRank::None, None).unwrap();
        assert_eq!(at_10.attack, 109.0);
        assert_eq!(at_11.attack, 150.0);
        assert_eq!(at_11.defense, 75.0);
        assert_eq!(at_11.hp, 620.0);
    }

    #[test]
    fn core_flat_props_feed_frozen_base() {
        let (base, deferred) =
            StatAggregator::flat_pass(&character(), level(60), CoreRank::F, None).unwrap();
        // 100 + 59 + 40 + 25
        assert_eq!(base.attack, 224.0);
        assert_eq!(base.impact, 92.0);
        assert!((base.energy_regen - 1.32).abs() < 1e-9);
        assert_eq!(deferred.get(CoreProperty::Atk), Some(10.0));
        assert_eq!(deferred.get(CoreProperty::BaseAtk), None);
    }

    #[test]
    fn percentage_props_use_frozen_base() {
        let block = StatAggregator::compute(&character(), level(60), CoreRank::F, None).unwrap();
        // 224 + floor(224 * 0.10)
        assert_eq!(block.attack, 246.0);
        assert_eq!(block.crit_rate, 5.0);
        assert_eq!(block.energy_regen, 1.32);
    }

    #[test]
    fn atk_percent_against_base_of_200() {
        let base = BaseStats {
            attack: 200.0,
            ..BaseStats::default()
        };
        let mut deferred = DeferredModifiers::new();
        deferred.insert(CoreProperty::Atk, 10.0);
        let block = StatAggregator::percentage_pass(&stats(), &base, &deferred, None);
        assert_eq!(block.attack, 220.0);
    }

    #[test]
    fn core_rank_is_clamped_to_level() {
        // Core F requested at level 20 falls back to core A (Base ATK 10)
        let requested = StatAggregator::compute(&character(), level(20), CoreRank::F, None)
            .unwrap();
        let core_a = StatAggregator::compute(&character(), level(20), CoreRank::A, None).unwrap();
        assert_eq!(requested, core_a);
        assert_eq!(core_a.attack, 100.0 + 19.0 + 40.0 + 10.0);
    }

    #[test]
    fn missing_core_tier_is_skipped() {
        let none = StatAggregator::compute(&character(), level(60), CoreRank::None, None).unwrap();
        let core_c = StatAggregator::compute(&character(), level(60), CoreRank::C, None).unwrap();
        assert_eq!(none, core_c);
    }

    #[test]
    fn weapon_attack_and_percent_substat() {
        let weapon = Weapon::new("w")
            .with_base_attack(100.0)
            .with_substat("ATK", 1000.0)
            .with_level_rate(60, 0.0)
            .with_star_rate(5, 0.0, 0.0);
        let block = StatAggregator::compute(
            &character(),
            level(60),
            CoreRank::None,
            Some((&weapon, level(60))),
        ).unwrap();
        // base = 100 + 59 + 40 + 100 = 299; + floor(299 * 0.1)
        assert_eq!(block.attack, 299.0 + 29.0);
    }

    #[test]
    fn anomaly_proficiency_substat_is_scaled_flat() {
        let weapon = WeaponStats {
            attack: 0.0,
            substat_name: "Anomaly Proficiency".into(),
            substat_value: 0.5,
        };
        let block = StatAggregator::compute_with_weapon_stats(
            &Character::with_stats("c", stats()),
            level(1),
            CoreRank::None,
            Some(&weapon),
        ).unwrap();
        assert_eq!(block.anomaly_proficiency, 92.0 + 50.0);
    }

    #[test]
    fn energy_regen_substat_is_fraction_of_base() {
        let weapon = WeaponStats {
            attack: 0.0,
            substat_name: "Energy Regen".into(),
            substat_value: 50.0,
        };
        let block = StatAggregator::compute_with_weapon_stats(
            &Character::with_stats("c", stats()),
            level(1),
            CoreRank::None,
            Some(&weapon),
        ).unwrap();
        assert_eq!(block.energy_regen, 1.8);
    }

    #[test]
    fn incomplete_weapon_matches_no_weapon_baseline() {
        let weapon = Weapon::new("w")
            .with_base_attack(100.0)
            .with_substat("ATK", 1000.0)
            .with_level_rate(35, 100.0)
            .with_star_rate(0, 0.0, 0.0);
        let with = StatAggregator::compute(
            &character(),
            level(60),
            CoreRank::F,
            Some((&weapon, level(35))),
        ).unwrap();
        let without = StatAggregator::compute(&character(), level(60), CoreRank::F, None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn compute_is_idempotent() {
        let a = StatAggregator::compute(&character(), level(45), CoreRank::D, None).unwrap();
        let b = StatAggregator::compute(&character(), level(45), CoreRank::D, None).unwrap();
        assert_eq!(a, b);
    }

    fn flat_base_character(props: Vec<Property>) -> Character {
        let stats = CharacterBaseStats {
            attack: 100.0,
            defence: 200.0,
            hp_max: 1000.0,
            crit: 500.0,
            crit_damage: 5000.0,
            element_abnormal_power: 80.0,
            element_mystery: 90.0,
            ..CharacterBaseStats::default()
        };
        Character::with_stats("c", stats).with_extra_ascension(vec![ExtraAscensionTier {
            max_level: 60,
            props,
        }])
    }

    #[test]
    fn core_props_apply_per_kind() {
        let character = flat_base_character(vec![
            Property::new("HP", 10.0),
            Property::new("Defence", 15.0),
            Property::new("Anomaly Proficiency", 12.0),
            Property::new("PEN Ratio", 4.8),
            Property::new("CRIT DMG", 9.6),
            Property::new("Anomaly Mastery", 6.0),
        ]);

        let (base, deferred) =
            StatAggregator::flat_pass(&character, level(60), CoreRank::F, None).unwrap();
        assert_eq!(base.anomaly_mastery, 86.0);
        assert_eq!(base.hp, 1000.0);

        let unrounded = StatAggregator::percentage_pass(
            character.stats.as_ref().unwrap(),
            &base,
            &deferred,
            None,
        );
        assert!((unrounded.pen_ratio - 0.048).abs() < 1e-9);
        assert!((unrounded.crit_dmg - 50.096).abs() < 1e-9);

        let block = StatAggregator::compute(&character, level(60), CoreRank::F, None).unwrap();
        // floor(1000 * 0.10), floor(200 * 0.15)
        assert_eq!(block.hp, 1100.0);
        assert_eq!(block.defense, 230.0);
        // added as is, not as a percentage
        assert_eq!(block.anomaly_proficiency, 102.0);
        assert_eq!(block.anomaly_mastery, 86.0);
        assert_eq!(block.crit_dmg, 50.1);
        assert_eq!(block.pen_ratio, 0.0);
    }

    #[test]
    fn substats_apply_per_kind() {
        let character = Character::with_stats("c", stats());
        let cases = [
            ("HP", 30.0, StatKind::Hp, 650.0),
            ("DEF", 20.0, StatKind::Defense, 60.0),
            ("Impact", 6.0, StatKind::Impact, 91.0),
            ("Anomaly Mastery", 10.0, StatKind::AnomalyMastery, 99.0),
            ("CRIT DMG", 9.6, StatKind::CritDmg, 59.6),
            ("PEN Ratio", 24.0, StatKind::PenRatio, 24.0),
        ];

        for (name, value, kind, expected) in cases {
            let weapon = WeaponStats {
                attack: 0.0,
                substat_name: name.into(),
                substat_value: value,
            };
            let block = StatAggregator::compute_with_weapon_stats(
                &character,
                level(1),
                CoreRank::None,
                Some(&weapon),
            )
            .unwrap();
            assert_eq!(block.get(kind), expected, "{name}");
        }
    }

    #[test]
    fn percent_substat_uses_base_with_core_hp() {
        let character = flat_base_character(vec![Property::new("HP", 10.0)]);
        let weapon = WeaponStats {
            attack: 0.0,
            substat_name: "HP".into(),
            substat_value: 30.0,
        };
        let block = StatAggregator::compute_with_weapon_stats(
            &character,
            level(60),
            CoreRank::F,
            Some(&weapon),
        )
        .unwrap();
        // 1000 + floor(1000 * 0.10) + floor(1000 * 0.30)
        assert_eq!(block.hp, 1400.0);
    }

    #[test]
    fn energy_regen_substat_includes_core_regen() {
        let weapon = WeaponStats {
            attack: 0.0,
            substat_name: "Energy Regen".into(),
            substat_value: 50.0,
        };
        let block = StatAggregator::compute_with_weapon_stats(
            &character(),
            level(60),
            CoreRank::F,
            Some(&weapon),
        )
        .unwrap();
        // (1.2 + 0.12) * 1.5
        assert_eq!(block.energy_regen, 1.98);
    }

    #[test]
    fn character_without_stats_has_no_block() {
        let character = Character {
            stats: None,
            ..character()
        };
        assert!(StatAggregator::compute(&character, level(60), CoreRank::F, None).is_none());
        assert!(StatAggregator::flat_pass(&character, level(60), CoreRank::F, None).is_none());
    }
}
