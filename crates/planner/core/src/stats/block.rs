//! The final stat block rendered on the character panel.

use strum::IntoEnumIterator;

/// Fields of the final stat block, in display order.
///
/// The display names double as the lookup keys for weapon substats that are
/// added flatly, and they decide each field's rounding (see [`Rounding`]).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Attack,
    Defense,
    #[strum(serialize = "HP")]
    #[cfg_attr(feature = "serde", serde(rename = "HP"))]
    Hp,
    Impact,
    #[strum(serialize = "Anomaly Mastery")]
    #[cfg_attr(feature = "serde", serde(rename = "Anomaly Mastery"))]
    AnomalyMastery,
    #[strum(serialize = "Energy Regen")]
    #[cfg_attr(feature = "serde", serde(rename = "Energy Regen"))]
    EnergyRegen,
    #[strum(serialize = "Crit Rate")]
    #[cfg_attr(feature = "serde", serde(rename = "Crit Rate"))]
    CritRate,
    #[strum(serialize = "Crit DMG")]
    #[cfg_attr(feature = "serde", serde(rename = "Crit DMG"))]
    CritDmg,
    #[strum(serialize = "Pen Flat")]
    #[cfg_attr(feature = "serde", serde(rename = "Pen Flat"))]
    PenFlat,
    #[strum(serialize = "Pen Ratio")]
    #[cfg_attr(feature = "serde", serde(rename = "Pen Ratio"))]
    PenRatio,
    #[strum(serialize = "Anomaly Proficiency")]
    #[cfg_attr(feature = "serde", serde(rename = "Anomaly Proficiency"))]
    AnomalyProficiency,
}

impl StatKind {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn rounding(self) -> Rounding {
        Rounding::for_name(self.name())
    }

    /// Whether the value is shown with a trailing `%`.
    ///
    /// Rate/DMG/Ratio fields are percentages; Anomaly Proficiency never is.
    pub fn is_percent(self) -> bool {
        self != Self::AnomalyProficiency && Rounding::is_fractional_name(self.name())
    }
}

/// Per-field rounding applied once, after every bonus has been added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Round half up to two decimals.
    TwoDecimals,
    /// Round half up to one decimal.
    OneDecimal,
    /// Floor to an integer.
    Floor,
}

impl Rounding {
    pub fn for_name(name: &str) -> Self {
        if name == "Energy Regen" {
            Self::TwoDecimals
        } else if Self::is_fractional_name(name) {
            Self::OneDecimal
        } else {
            Self::Floor
        }
    }

    fn is_fractional_name(name: &str) -> bool {
        name.contains("Rate") || name.contains("DMG") || name.contains("Ratio")
    }

    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::TwoDecimals => round_half_up(value * 100.0) / 100.0,
            Self::OneDecimal => round_half_up(value * 10.0) / 10.0,
            Self::Floor => value.floor(),
        }
    }

    /// Digits after the decimal point when rendered.
    pub const fn decimals(self) -> usize {
        match self {
            Self::TwoDecimals => 2,
            Self::OneDecimal => 1,
            Self::Floor => 0,
        }
    }
}

/// Rounds .5 toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Final stats for one character slot.
///
/// Values are unrounded while the aggregator is still adding bonuses;
/// [`StatBlock::rounded`] produces the displayed numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
    pub impact: f64,
    pub anomaly_mastery: f64,
    pub energy_regen: f64,
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub pen_flat: f64,
    pub pen_ratio: f64,
    pub anomaly_proficiency: f64,
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Hp => self.hp,
            StatKind::Impact => self.impact,
            StatKind::AnomalyMastery => self.anomaly_mastery,
            StatKind::EnergyRegen => self.energy_regen,
            StatKind::CritRate => self.crit_rate,
            StatKind::CritDmg => self.crit_dmg,
            StatKind::PenFlat => self.pen_flat,
            StatKind::PenRatio => self.pen_ratio,
            StatKind::AnomalyProficiency => self.anomaly_proficiency,
        }
    }

    pub fn get_mut(&mut self, kind: StatKind) -> &mut f64 {
        match kind {
            StatKind::Attack => &mut self.attack,
            StatKind::Defense => &mut self.defense,
            StatKind::Hp => &mut self.hp,
            StatKind::Impact => &mut self.impact,
            StatKind::AnomalyMastery => &mut self.anomaly_mastery,
            StatKind::EnergyRegen => &mut self.energy_regen,
            StatKind::CritRate => &mut self.crit_rate,
            StatKind::CritDmg => &mut self.crit_dmg,
            StatKind::PenFlat => &mut self.pen_flat,
            StatKind::PenRatio => &mut self.pen_ratio,
            StatKind::AnomalyProficiency => &mut self.anomaly_proficiency,
        }
    }

    pub fn add(&mut self, kind: StatKind, amount: f64) {
        *self.get_mut(kind) += amount;
    }

    /// Applies each field's [`Rounding`].
    #[must_use]
    pub fn rounded(mut self) -> Self {
        for kind in StatKind::iter() {
            let value = self.get_mut(kind);
            *value = kind.rounding().apply(*value);
        }
        self
    }

    /// Iterates `(kind, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        StatKind::iter().map(move |kind| (kind, self.get(kind)))
    }
}
