//! In-memory oracle backed by owned maps.
//!
//! Used by tests and by callers that build their data programmatically rather
//! than loading it from disk.

use std::collections::BTreeMap;

use super::{CharacterOracle, WeaponOracle};
use crate::model::{Character, Weapon};

/// Owned snapshot of character and weapon definitions, keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSnapshot {
    pub characters: BTreeMap<String, Character>,
    pub weapons: BTreeMap<String, Weapon>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character, replacing any existing one with the same id.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id.clone(), character);
        self
    }

    /// Inserts a weapon, replacing any existing one with the same id.
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.insert(weapon.id.clone(), weapon);
        self
    }
}

impl CharacterOracle for CatalogSnapshot {
    fn character(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    fn all_characters(&self) -> Vec<&Character> {
        self.characters.values().collect()
    }
}

impl WeaponOracle for CatalogSnapshot {
    fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    fn all_weapons(&self) -> Vec<&Weapon> {
        self.weapons.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CharacterBaseStats;

    #[test]
    fn lookups_and_stable_order() {
        let snapshot = CatalogSnapshot::new()
            .with_character(Character::with_stats("1191", CharacterBaseStats::default()))
            .with_character(Character::with_stats("1011", CharacterBaseStats::default()))
            .with_weapon(Weapon::new("14001"));

        assert!(snapshot.character("1191").is_some());
        assert!(snapshot.character("9999").is_none());
        let ids: Vec<_> = snapshot.all_characters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1011", "1191"]);
        assert_eq!(snapshot.all_weapons().len(), 1);
    }
}
