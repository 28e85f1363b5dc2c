//! Display formatting for stat values.

use crate::stats::StatKind;

/// Suffix shown after a stat value: `"%"` for percentage stats, else empty.
pub fn stat_suffix(kind: StatKind) -> &'static str {
    if kind.is_percent() { "%" } else { "" }
}

/// Formats a rounded stat the way the character panel shows it.
///
/// Energy Regen has two decimals, Rate/DMG/Ratio stats one, everything else
/// none.
///
/// # Example
/// ```
/// # use planner_core::{StatKind, format_stat};
/// assert_eq!(format_stat(StatKind::EnergyRegen, 1.2), "1.20");
/// assert_eq!(format_stat(StatKind::CritDmg, 50.0), "50.0%");
/// assert_eq!(format_stat(StatKind::Attack, 1234.0), "1234");
/// ```
pub fn format_stat(kind: StatKind, value: f64) -> String {
    let decimals = kind.rounding().decimals();
    format!("{value:.decimals$}{}", stat_suffix(kind))
}
