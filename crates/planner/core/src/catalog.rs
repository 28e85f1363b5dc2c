//! Filters for the character and weapon pickers.
//!
//! Each set filter matches everything while empty; a non-empty set must
//! contain the record's value. The name search is a case-insensitive
//! substring match.

use std::collections::BTreeSet;

use crate::model::{Character, Rarity, Weapon};

/// Adds `value` to `set`, or removes it if already present.
fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn accepts<T: Ord + ?Sized, Q: Ord>(set: &BTreeSet<Q>, value: &T) -> bool
where
    Q: std::borrow::Borrow<T>,
{
    set.is_empty() || set.contains(value)
}

fn name_matches(search: &str, name: &str) -> bool {
    name.to_lowercase().contains(&search.to_lowercase())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    pub search: String,
    pub elements: BTreeSet<String>,
    pub specialties: BTreeSet<String>,
    pub factions: BTreeSet<String>,
    pub rarities: BTreeSet<Rarity>,
}

impl CharacterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn toggle_element(&mut self, element: impl Into<String>) {
        toggle(&mut self.elements, element.into());
    }

    pub fn toggle_specialty(&mut self, specialty: impl Into<String>) {
        toggle(&mut self.specialties, specialty.into());
    }

    pub fn toggle_faction(&mut self, faction: impl Into<String>) {
        toggle(&mut self.factions, faction.into());
    }

    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        toggle(&mut self.rarities, rarity);
    }

    /// Resets every filter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, character: &Character) -> bool {
        name_matches(&self.search, &character.name)
            && accepts(&self.elements, character.element.as_str())
            && accepts(&self.specialties, character.specialty.as_str())
            && accepts(&self.factions, character.faction.as_str())
            && accepts(&self.rarities, &character.rarity)
    }

    /// Matching characters, in input order.
    pub fn apply<'a>(&self, characters: impl IntoIterator<Item = &'a Character>) -> Vec<&'a Character> {
        characters.into_iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeaponFilter {
    pub search: String,
    pub rarities: BTreeSet<Rarity>,
    pub types: BTreeSet<String>,
}

impl WeaponFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        toggle(&mut self.rarities, rarity);
    }

    pub fn toggle_type(&mut self, weapon_type: impl Into<String>) {
        toggle(&mut self.types, weapon_type.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, weapon: &Weapon) -> bool {
        name_matches(&self.search, &weapon.name)
            && accepts(&self.rarities, &weapon.rarity)
            && accepts(&self.types, weapon.weapon_type.as_str())
    }

    /// Matching weapons sorted S, A, B; input order is kept within a rarity.
    pub fn apply<'a>(&self, weapons: impl IntoIterator<Item = &'a Weapon>) -> Vec<&'a Weapon> {
        let mut matched: Vec<_> = weapons.into_iter().filter(|w| self.matches(w)).collect();
        matched.sort_by_key(|w| w.rarity);
        matched
    }
}
