//! Record shapes of the game data files.
//!
//! Records mirror the files as published; [`CharacterRecord::into_character`]
//! and [`WeaponRecord::into_weapon`] convert them into the planner-core model.

use std::collections::BTreeMap;

use serde::Deserialize;

use planner_core::{
    AscensionTier, Character, CharacterBaseStats, ExtraAscensionTier, LevelRate, Rarity, StarRate,
    Weapon, WeaponBaseProperty, WeaponRandProperty,
};

/// A `{ "name": ... }` reference to an element, specialty, faction, or weapon type.
#[derive(Clone, Debug, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// Ids in the index files are numbers in some dumps and strings in others.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    pub fn into_string(self) -> String {
        match self {
            Self::Number(id) => id.to_string(),
            Self::Text(id) => id,
        }
    }
}

/// Entry of `weapons.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct WeaponIndexEntry {
    pub id: RecordId,
}

/// Contents of `<character_id>.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct CharacterRecord {
    pub code_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub rarity: Rarity,
    pub element: NamedRef,
    pub specialty: NamedRef,
    #[serde(default)]
    pub faction: Option<NamedRef>,
    #[serde(default)]
    pub stats: Option<CharacterBaseStats>,
    #[serde(default)]
    pub ascension: Option<Vec<AscensionTier>>,
    #[serde(default)]
    pub extra_ascension: Option<Vec<ExtraAscensionTier>>,
    #[serde(default)]
    pub phase_1_cinema_art: Option<String>,
    #[serde(default)]
    pub phase_2_cinema_art: Option<String>,
    #[serde(default)]
    pub phase_3_cinema_art: Option<String>,
}

impl CharacterRecord {
    pub fn into_character(self, id: impl Into<String>) -> Character {
        Character {
            id: id.into(),
            name: self.code_name,
            rarity: self.rarity,
            element: self.element.name,
            specialty: self.specialty.name,
            faction: self.faction.map(|f| f.name).unwrap_or_default(),
            stats: self.stats,
            ascension: self.ascension.unwrap_or_default(),
            extra_ascension: self.extra_ascension.unwrap_or_default(),
        }
    }
}

/// Contents of `<weapon_id>.json`.
#[derive(Clone, Debug, Deserialize)]
pub struct WeaponRecord {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub weapon_type: NamedRef,
    #[serde(default)]
    pub levels: Option<BTreeMap<u32, LevelRate>>,
    #[serde(default)]
    pub stars: Option<BTreeMap<u32, StarRate>>,
    #[serde(default)]
    pub base_property: Option<WeaponBaseProperty>,
    #[serde(default)]
    pub rand_property: Option<WeaponRandProperty>,
}

impl WeaponRecord {
    pub fn into_weapon(self, id: impl Into<String>) -> Weapon {
        Weapon {
            id: id.into(),
            name: self.name,
            rarity: self.rarity,
            weapon_type: self.weapon_type.name,
            levels: self.levels,
            stars: self.stars,
            base_property: self.base_property,
            rand_property: self.rand_property,
        }
    }
}
