use super::Rarity;

/// Base stats of a character at level 1, as stored in the data files.
///
/// Growth values are in ten-thousandths per level; `Crit`, `CritDamage`, and
/// `PenRate` are in hundredths of a percent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct CharacterBaseStats {
    pub attack: f64,
    pub defence: f64,
    pub hp_max: f64,
    pub crit: f64,
    pub crit_damage: f64,
    pub element_abnormal_power: f64,
    pub element_mystery: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pen_delta: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pen_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub break_stun: Option<f64>,
    pub attack_growth: f64,
    pub defence_growth: f64,
    pub hp_growth: f64,
}

/// Level-banded flat bonus granted by character ascension.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AscensionTier {
    pub min_level: u32,
    pub max_level: u32,
    pub attack: f64,
    pub defense: f64,
    pub max_hp: f64,
}

/// A named stat modifier carried by a core tier, e.g. `("CRIT Rate", 480)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub value: f64,
}

impl Property {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Core ("extra ascension") tier, keyed by the level cap it belongs to.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtraAscensionTier {
    pub max_level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub props: Vec<Property>,
}

/// A playable character with everything the aggregator needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub element: String,
    pub specialty: String,
    pub faction: String,
    /// `None` for characters listed without base stats; they can be browsed
    /// but have no stat panel.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: Option<CharacterBaseStats>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ascension: Vec<AscensionTier>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_ascension: Vec<ExtraAscensionTier>,
}

impl Character {
    /// Builds a character with only stats set; descriptive fields are empty.
    pub fn with_stats(id: impl Into<String>, stats: CharacterBaseStats) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            rarity: Rarity::A,
            element: String::new(),
            specialty: String::new(),
            faction: String::new(),
            stats: Some(stats),
            ascension: Vec::new(),
            extra_ascension: Vec::new(),
        }
    }

    pub fn with_ascension(mut self, ascension: Vec<AscensionTier>) -> Self {
        self.ascension = ascension;
        self
    }

    pub fn with_extra_ascension(mut self, extra_ascension: Vec<ExtraAscensionTier>) -> Self {
        self.extra_ascension = extra_ascension;
        self
    }

    /// The active ascension tier at `level`: greatest `min_level` strictly below it.
    pub fn ascension_at(&self, level: u32) -> Option<&AscensionTier> {
        self.ascension
            .iter()
            .rev()
            .filter(|tier| tier.min_level < level)
            .max_by_key(|tier| tier.min_level)
    }

    /// The core tier whose `max_level` equals `max_level`.
    pub fn extra_ascension_for(&self, max_level: u32) -> Option<&ExtraAscensionTier> {
        self.extra_ascension
            .iter()
            .find(|tier| tier.max_level == max_level)
    }
}
