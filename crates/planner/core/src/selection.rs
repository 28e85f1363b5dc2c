//! Per-slot selection state and the three-slot team.
//!
//! A [`Selection`] owns the invariant that its core rank never exceeds what
//! its level unlocks: lowering the level lowers the rank with it.

use crate::config::PlannerConfig;
use crate::error::SelectionError;
use crate::model::{CoreRank, Level};
use crate::stats::clamp_core_rank;

/// The weapon equipped in a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSelection {
    pub weapon_id: String,
    pub level: Level,
}

impl WeaponSelection {
    pub fn new(weapon_id: impl Into<String>, level: Level) -> Self {
        Self {
            weapon_id: weapon_id.into(),
            level,
        }
    }
}

/// One character slot: character, level, core rank, and optional weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Selection {
    character_id: String,
    level: Level,
    core_rank: CoreRank,
    weapon: Option<WeaponSelection>,
}

impl Selection {
    /// A selection at level 60, core F, no weapon.
    pub fn new(character_id: impl Into<String>) -> Self {
        Self::with_config(character_id, &PlannerConfig::default())
    }

    /// A selection using the configured defaults.
    pub fn with_config(character_id: impl Into<String>, config: &PlannerConfig) -> Self {
        let level = config.default_level;
        Self {
            character_id: character_id.into(),
            level,
            core_rank: clamp_core_rank(config.default_core_rank, level),
            weapon: None,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.set_level(level);
        self
    }

    pub fn with_core_rank(mut self, core_rank: CoreRank) -> Self {
        self.set_core_rank(core_rank);
        self
    }

    pub fn with_weapon(mut self, weapon_id: impl Into<String>, level: Level) -> Self {
        self.weapon = Some(WeaponSelection::new(weapon_id, level));
        self
    }

    pub fn character_id(&self) -> &str {
        &self.character_id
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn core_rank(&self) -> CoreRank {
        self.core_rank
    }

    pub fn weapon(&self) -> Option<&WeaponSelection> {
        self.weapon.as_ref()
    }

    /// Changes the level, lowering the core rank if it is no longer unlocked.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.core_rank = clamp_core_rank(self.core_rank, level);
    }

    /// Requests a core rank; returns the rank actually applied.
    pub fn set_core_rank(&mut self, requested: CoreRank) -> CoreRank {
        self.core_rank = clamp_core_rank(requested, self.level);
        self.core_rank
    }

    pub fn set_weapon(&mut self, weapon: Option<WeaponSelection>) {
        self.weapon = weapon;
    }

    /// Changes the equipped weapon's level. No-op without a weapon.
    pub fn set_weapon_level(&mut self, level: Level) {
        if let Some(weapon) = self.weapon.as_mut() {
            weapon.level = level;
        }
    }
}

/// Up to three character slots, indexed `0..Team::CAPACITY`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Team {
    slots: [Option<Selection>; PlannerConfig::MAX_TEAM_SLOTS],
}

impl Team {
    pub const CAPACITY: usize = PlannerConfig::MAX_TEAM_SLOTS;

    pub fn new() -> Self {
        Self::default()
    }

    fn check(index: usize) -> Result<(), SelectionError> {
        if index < Self::CAPACITY {
            Ok(())
        } else {
            Err(SelectionError::SlotOutOfRange {
                index,
                capacity: Self::CAPACITY,
            })
        }
    }

    /// Puts `selection` in slot `index`.
    ///
    /// A character appears at most once: if it already sits in another slot,
    /// the two slots swap contents instead.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::SlotOutOfRange` if `index >= CAPACITY`.
    pub fn set(&mut self, index: usize, selection: Selection) -> Result<(), SelectionError> {
        Self::check(index)?;

        let existing = self.slots.iter().position(|slot| {
            slot.as_ref()
                .is_some_and(|s| s.character_id == selection.character_id)
        });
        match existing {
            Some(other) if other != index => {
                self.slots.swap(index, other);
                self.slots[index] = Some(selection);
            }
            _ => self.slots[index] = Some(selection),
        }
        Ok(())
    }

    /// Empties slot `index`, returning what was there.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::SlotOutOfRange` if `index >= CAPACITY`.
    pub fn clear(&mut self, index: usize) -> Result<Option<Selection>, SelectionError> {
        Self::check(index)?;
        Ok(self.slots[index].take())
    }

    pub fn get(&self, index: usize) -> Option<&Selection> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied slots with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Selection)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|s| (index, s)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::highest_available_core;

    fn level(value: u32) -> Level {
        Level::saturating(value)
    }

    #[test]
    fn defaults_are_level_60_core_f() {
        let selection = Selection::new("1191");
        assert_eq!(selection.level(), Level::MAX);
        assert_eq!(selection.core_rank(), CoreRank::F);
        assert!(selection.weapon().is_none());
    }

    #[test]
    fn lowering_level_reclamps_core() {
        let mut selection = Selection::new("1191");
        selection.set_level(level(30));
        assert_eq!(selection.core_rank(), CoreRank::B);

        // raising the level again does not restore the old rank
        selection.set_level(level(60));
        assert_eq!(selection.core_rank(), CoreRank::B);
    }

    #[test]
    fn core_request_is_clamped() {
        let mut selection = Selection::new("1191").with_level(level(40));
        assert_eq!(selection.set_core_rank(CoreRank::F), CoreRank::C);
        assert_eq!(selection.set_core_rank(CoreRank::A), CoreRank::A);
    }

    #[test]
    fn invariant_holds_for_every_level() {
        let mut selection = Selection::new("1191");
        for lvl in Level::all().rev() {
            selection.set_level(lvl);
            selection.set_core_rank(CoreRank::F);
            assert!(selection.core_rank() <= highest_available_core(lvl));
        }
    }

    #[test]
    fn weapon_level_follows_selection() {
        let mut selection = Selection::new("1191").with_weapon("14119", level(60));
        selection.set_weapon_level(level(20));
        assert_eq!(selection.weapon().map(|w| w.level), Some(level(20)));

        selection.set_weapon(None);
        selection.set_weapon_level(level(30));
        assert!(selection.weapon().is_none());
    }

    #[test]
    fn team_set_get_clear() {
        let mut team = Team::new();
        assert!(team.is_empty());
        team.set(1, Selection::new("a")).unwrap();
        assert_eq!(team.get(1).map(Selection::character_id), Some("a"));
        assert!(team.get(0).is_none());

        let cleared = team.clear(1).unwrap();
        assert_eq!(cleared.map(|s| s.character_id), Some("a".to_string()));
        assert!(team.is_empty());
    }

    #[test]
    fn team_rejects_out_of_range_slot() {
        let mut team = Team::new();
        assert_eq!(
            team.set(3, Selection::new("a")),
            Err(SelectionError::SlotOutOfRange {
                index: 3,
                capacity: 3
            })
        );
        assert!(team.get(7).is_none());
    }

    #[test]
    fn team_swaps_duplicate_character() {
        let mut team = Team::new();
        team.set(0, Selection::new("a")).unwrap();
        team.set(1, Selection::new("b")).unwrap();
        team.set(1, Selection::new("a").with_level(level(30))).unwrap();

        assert_eq!(team.get(0).map(Selection::character_id), Some("b"));
        assert_eq!(team.get(1).map(Selection::level), Some(level(30)));
        let ids: Vec<_> = team.iter().map(|(i, s)| (i, s.character_id())).collect();
        assert_eq!(ids, vec![(0, "b"), (1, "a")]);
    }
}
