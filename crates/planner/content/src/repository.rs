//! Loaded catalog exposed through the planner-core oracles.

use planner_core::{
    CatalogSnapshot, Character, CharacterFilter, CharacterOracle, Env, Planner, Weapon,
    WeaponFilter, WeaponOracle,
};

/// Characters and weapons loaded from a data directory.
///
/// Duplicate ids keep the record loaded last.
#[derive(Clone, Debug, Default)]
pub struct ContentRepository {
    catalog: CatalogSnapshot,
}

impl ContentRepository {
    pub fn new(
        characters: impl IntoIterator<Item = Character>,
        weapons: impl IntoIterator<Item = Weapon>,
    ) -> Self {
        let catalog = characters
            .into_iter()
            .fold(CatalogSnapshot::new(), CatalogSnapshot::with_character);
        let catalog = weapons
            .into_iter()
            .fold(catalog, CatalogSnapshot::with_weapon);
        Self { catalog }
    }

    /// A planner reading from this repository.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(Env::with_all(self, self).into_planner_env())
    }

    /// Characters matching `filter`, ordered by id.
    pub fn find_characters(&self, filter: &CharacterFilter) -> Vec<&Character> {
        filter.apply(self.catalog.characters.values())
    }

    /// Weapons matching `filter`, ordered by rarity then id.
    pub fn find_weapons(&self, filter: &WeaponFilter) -> Vec<&Weapon> {
        filter.apply(self.catalog.weapons.values())
    }
}

impl CharacterOracle for ContentRepository {
    fn character(&self, id: &str) -> Option<&Character> {
        self.catalog.character(id)
    }

    fn all_characters(&self) -> Vec<&Character> {
        self.catalog.all_characters()
    }
}

impl WeaponOracle for ContentRepository {
    fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.catalog.weapon(id)
    }

    fn all_weapons(&self) -> Vec<&Weapon> {
        self.catalog.all_weapons()
    }
}
