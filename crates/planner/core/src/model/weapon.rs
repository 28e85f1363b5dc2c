use std::collections::BTreeMap;

use super::Rarity;

/// Per-level attack growth, in ten-thousandths of base attack.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRate {
    pub rate: f64,
}

/// Per-star-bracket growth rates, in ten-thousandths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarRate {
    /// Applied to base attack.
    pub star_rate: f64,
    /// Applied to the random substat.
    pub rand_rate: f64,
}

/// Base attack of a weapon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponBaseProperty {
    pub value: f64,
}

/// The single random substat of a weapon; `value` is in hundredths.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponRandProperty {
    pub name: String,
    pub value: f64,
}

/// A weapon record.
///
/// Growth tables and properties are optional because the data files are not
/// uniformly complete. Any missing piece makes the weapon contribute nothing
/// (see [`crate::stats::weapon_stats`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub weapon_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub levels: Option<BTreeMap<u32, LevelRate>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stars: Option<BTreeMap<u32, StarRate>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_property: Option<WeaponBaseProperty>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rand_property: Option<WeaponRandProperty>,
}

impl Weapon {
    /// Builds a weapon with no growth tables; descriptive fields default.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            rarity: Rarity::A,
            weapon_type: String::new(),
            levels: None,
            stars: None,
            base_property: None,
            rand_property: None,
        }
    }

    pub fn with_base_attack(mut self, value: f64) -> Self {
        self.base_property = Some(WeaponBaseProperty { value });
        self
    }

    pub fn with_substat(mut self, name: impl Into<String>, value: f64) -> Self {
        self.rand_property = Some(WeaponRandProperty {
            name: name.into(),
            value,
        });
        self
    }

    pub fn with_level_rate(mut self, level: u32, rate: f64) -> Self {
        self.levels
            .get_or_insert_with(BTreeMap::new)
            .insert(level, LevelRate { rate });
        self
    }

    pub fn with_star_rate(mut self, star: u32, star_rate: f64, rand_rate: f64) -> Self {
        self.stars.get_or_insert_with(BTreeMap::new).insert(
            star,
            StarRate {
                star_rate,
                rand_rate,
            },
        );
        self
    }
}
