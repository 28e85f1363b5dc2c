//! Resolves selections against the data oracles and runs the aggregator.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::env::PlannerEnv;
use crate::error::SelectionError;
use crate::model::{Character, CoreRank, Level, Weapon};
use crate::selection::{Selection, Team};
use crate::stats::{StatAggregator, StatBlock, WeaponStats, weapon_stats};

/// Everything the character panel shows for one slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SlotReport<'a> {
    pub character: &'a Character,
    pub level: Level,
    /// Core rank actually applied.
    pub core_rank: CoreRank,
    pub weapon: Option<&'a Weapon>,
    pub weapon_level: Option<Level>,
    /// `None` when no weapon is equipped or its tables are incomplete.
    pub weapon_stats: Option<WeaponStats>,
    /// `None` when the character has no base stats.
    pub stats: Option<StatBlock>,
}

/// Reports for the occupied slots of a team, with their slot indices.
pub type TeamReport<'a> = ArrayVec<(usize, SlotReport<'a>), { Team::CAPACITY }>;

/// Front door for stat computation over loaded data.
#[derive(Clone, Copy)]
pub struct Planner<'a> {
    env: PlannerEnv<'a>,
}

impl<'a> Planner<'a> {
    pub fn new(env: PlannerEnv<'a>) -> Self {
        Self { env }
    }

    fn character(&self, id: &str) -> Result<&'a Character, SelectionError> {
        self.env
            .characters()?
            .character(id)
            .ok_or_else(|| SelectionError::UnknownCharacter(id.to_string()))
    }

    fn weapon(&self, id: &str) -> Result<&'a Weapon, SelectionError> {
        self.env
            .weapons()?
            .weapon(id)
            .ok_or_else(|| SelectionError::UnknownWeapon(id.to_string()))
    }

    /// Computes the stat block for one selection.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError` if the character or weapon id is unknown or an
    /// oracle is missing. An incomplete weapon or a character without base
    /// stats is not an error.
    pub fn resolve(&self, selection: &Selection) -> Result<SlotReport<'a>, SelectionError> {
        let character = self.character(selection.character_id())?;

        let (weapon, weapon_stats) = match selection.weapon() {
            Some(equipped) => {
                let weapon = self.weapon(&equipped.weapon_id)?;
                let stats = weapon_stats(weapon, equipped.level)
                    .inspect_err(|err| {
                        debug!(weapon = %weapon.id, level = %equipped.level, %err, "weapon has no stats");
                    })
                    .ok();
                (Some(weapon), stats)
            }
            None => (None, None),
        };

        let stats = StatAggregator::compute_with_weapon_stats(
            character,
            selection.level(),
            selection.core_rank(),
            weapon_stats.as_ref(),
        );
        if stats.is_none() {
            debug!(character = %character.id, "character has no base stats");
        }
        debug!(
            character = %character.id,
            level = %selection.level(),
            core = %selection.core_rank(),
            weapon = weapon.map(|w| w.id.as_str()),
            "resolved selection"
        );

        Ok(SlotReport {
            character,
            level: selection.level(),
            core_rank: selection.core_rank(),
            weapon,
            weapon_level: selection.weapon().map(|w| w.level),
            weapon_stats,
            stats,
        })
    }

    /// Resolves every occupied slot; the first failing slot aborts.
    ///
    /// # Errors
    ///
    /// Returns the first `SelectionError` raised by [`Planner::resolve`].
    pub fn resolve_team(&self, team: &Team) -> Result<TeamReport<'a>, SelectionError> {
        team.iter()
            .map(|(index, selection)| Ok((index, self.resolve(selection)?)))
            .collect()
    }

    /// Weapon panel values for `weapon_id` at `level`.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownWeapon` if the id is unknown. Incomplete
    /// tables yield `Ok((weapon, None))`.
    pub fn weapon_panel(
        &self,
        weapon_id: &str,
        level: Level,
    ) -> Result<(&'a Weapon, Option<WeaponStats>), SelectionError> {
        let weapon = self.weapon(weapon_id)?;
        Ok((weapon, weapon_stats(weapon, level).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogSnapshot, Env, OracleError};
    use crate::model::CharacterBaseStats;

    fn catalog() -> CatalogSnapshot {
        let stats = CharacterBaseStats {
            attack: 100.0,
            attack_growth: 10_000.0,
            crit: 500.0,
            crit_damage: 5000.0,
            ..CharacterBaseStats::default()
        };
        CatalogSnapshot::new()
            .with_character(Character::with_stats("anby", stats))
            .with_weapon(
                Weapon::new("full")
                    .with_base_attack(100.0)
                    .with_substat("CRIT Rate", 480.0)
                    .with_level_rate(60, 0.0)
                    .with_star_rate(5, 0.0, 0.0),
            )
            .with_character(Character {
                stats: None,
                ..Character::with_stats("eous", CharacterBaseStats::default())
            })
            .with_weapon(Weapon::new("bare"))
    }

    #[test]
    fn resolves_character_and_weapon() {
        let catalog = catalog();
        let planner = Planner::new(Env::with_all(&catalog, &catalog).into_planner_env());
        let selection = Selection::new("anby").with_weapon("full", Level::MAX);

        let report = planner.resolve(&selection).unwrap();
        assert_eq!(report.character.id, "anby");
        assert_eq!(report.weapon_stats.as_ref().map(|w| w.attack), Some(100.0));
        // 100 + 59 + 100 weapon
        let stats = report.stats.unwrap();
        assert_eq!(stats.attack, 259.0);
        // 5 + 4.8
        assert_eq!(stats.crit_rate, 9.8);
    }

    #[test]
    fn incomplete_weapon_is_not_an_error() {
        let catalog = catalog();
        let planner = Planner::new(Env::with_all(&catalog, &catalog).into_planner_env());
        let with_bare = Selection::new("anby").with_weapon("bare", Level::MAX);

        let report = planner.resolve(&with_bare).unwrap();
        assert!(report.weapon.is_some());
        assert!(report.weapon_stats.is_none());
        let baseline = planner.resolve(&Selection::new("anby")).unwrap();
        assert_eq!(report.stats, baseline.stats);
    }

    #[test]
    fn character_without_stats_resolves_without_panel() {
        let catalog = catalog();
        let planner = Planner::new(Env::with_all(&catalog, &catalog).into_planner_env());
        let selection = Selection::new("eous").with_weapon("full", Level::MAX);

        let report = planner.resolve(&selection).unwrap();
        assert_eq!(report.character.id, "eous");
        assert!(report.stats.is_none());
        assert!(report.weapon_stats.is_some());
    }

    #[test]
    fn unknown_ids_are_errors() {
        let catalog = catalog();
        let planner = Planner::new(Env::with_all(&catalog, &catalog).into_planner_env());

        assert_eq!(
            planner.resolve(&Selection::new("nobody")).err(),
            Some(SelectionError::UnknownCharacter("nobody".into()))
        );
        assert_eq!(
            planner
                .resolve(&Selection::new("anby").with_weapon("ghost", Level::MAX))
                .err(),
            Some(SelectionError::UnknownWeapon("ghost".into()))
        );
    }

    #[test]
    fn missing_oracle_is_reported() {
        let planner = Planner::new(PlannerEnv::empty());
        assert_eq!(
            planner.resolve(&Selection::new("anby")).err(),
            Some(SelectionError::Oracle(OracleError::CharactersNotAvailable))
        );
    }

    #[test]
    fn team_reports_keep_slot_indices() {
        let catalog = catalog();
        let planner = Planner::new(Env::with_all(&catalog, &catalog).into_planner_env());
        let mut team = Team::new();
        team.set(2, Selection::new("anby")).unwrap();

        let reports = planner.resolve_team(&team).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, 2);
    }
}
