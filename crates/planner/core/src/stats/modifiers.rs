//! Named properties from core tiers and weapon substats.
//!
//! Core tiers mix two kinds of properties: flat ones applied during the flat
//! pass, and percentage ones deferred until the base is frozen. Weapon
//! substats are always applied in the percentage pass.

use std::collections::BTreeMap;

use super::block::StatKind;

/// Core-tier property names recognised by the aggregator.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
pub enum CoreProperty {
    // flat, applied to the running base
    #[strum(serialize = "Base ATK")]
    BaseAtk,
    #[strum(serialize = "Impact")]
    Impact,
    #[strum(serialize = "Anomaly Mastery")]
    AnomalyMastery,
    #[strum(serialize = "Base Energy Regen")]
    BaseEnergyRegen,

    // deferred, applied against the frozen base
    #[strum(serialize = "CRIT Rate")]
    CritRate,
    #[strum(serialize = "CRIT DMG")]
    CritDmg,
    #[strum(serialize = "PEN Ratio")]
    PenRatio,
    #[strum(serialize = "ATK")]
    Atk,
    #[strum(serialize = "HP")]
    Hp,
    #[strum(serialize = "Defence")]
    Defence,
    #[strum(serialize = "Anomaly Proficiency")]
    AnomalyProficiency,
}

/// Percentage properties collected during the flat pass.
///
/// Keyed by property: a tier that lists the same property twice keeps the
/// last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeferredModifiers {
    entries: BTreeMap<CoreProperty, f64>,
}

impl DeferredModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, property: CoreProperty, value: f64) {
        self.entries.insert(property, value);
    }

    pub fn get(&self, property: CoreProperty) -> Option<f64> {
        self.entries.get(&property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CoreProperty, f64)> + '_ {
        self.entries.iter().map(|(property, value)| (*property, *value))
    }
}

/// How a weapon substat is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubstatEffect {
    /// `floor(base * value / 100)` added to the stat.
    PercentOfBase(StatKind),
    /// `base * value / 100` added without flooring (Energy Regen).
    FractionOfBase(StatKind),
    /// `value` added as is.
    Flat(StatKind),
    /// `value * 100` added; the substat is stored in hundredths.
    ScaledFlat(StatKind),
}

impl SubstatEffect {
    /// Resolves a substat name, or `None` if it names no stat in the block.
    pub fn for_name(name: &str) -> Option<Self> {
        let effect = match name {
            "ATK" => Self::PercentOfBase(StatKind::Attack),
            "DEF" => Self::PercentOfBase(StatKind::Defense),
            "HP" => Self::PercentOfBase(StatKind::Hp),
            "Impact" => Self::PercentOfBase(StatKind::Impact),
            "Anomaly Mastery" => Self::PercentOfBase(StatKind::AnomalyMastery),
            "Energy Regen" => Self::FractionOfBase(StatKind::EnergyRegen),
            "Anomaly Proficiency" => Self::ScaledFlat(StatKind::AnomalyProficiency),
            "CRIT Rate" => Self::Flat(StatKind::CritRate),
            "CRIT DMG" => Self::Flat(StatKind::CritDmg),
            "PEN Ratio" => Self::Flat(StatKind::PenRatio),
            other => Self::Flat(other.parse().ok()?),
        };
        Some(effect)
    }
}
