//! Weapon attack and substat at a given weapon level.
//!
//! ```text
//! star    = floor((level - 1) / 10)
//! attack  = floor(base * star_rate / 10000 + base * level_rate / 10000 + base)
//! substat = round((sub / 100 * rand_rate / 10000 + sub / 100) * 100) / 100
//! ```
//!
//! A weapon with any required table or entry missing yields an error rather
//! than a partial value; callers render that as "no stats available".

use crate::model::{Level, PERCENT_SCALE, RATE_SCALE, Weapon};

use super::block::round_half_up;

/// Why a weapon produced no stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponStatsError {
    #[error("weapon has no base property")]
    MissingBaseProperty,

    #[error("weapon has no level table")]
    MissingLevels,

    #[error("weapon has no star table")]
    MissingStars,

    #[error("weapon has no random property")]
    MissingRandProperty,

    #[error("weapon level table has no entry for level {0}")]
    MissingLevelRate(u32),

    #[error("weapon star table has no entry for star {0}")]
    MissingStarRate(u32),
}

/// Weapon contribution at one level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponStats {
    /// Flat attack, already floored.
    pub attack: f64,
    /// Substat name as it appears in the data, e.g. `"CRIT Rate"`.
    pub substat_name: String,
    /// Substat value in percent, rounded to two decimals.
    pub substat_value: f64,
}

impl WeaponStats {
    /// Substat as shown on the weapon panel.
    ///
    /// Anomaly Proficiency is a flat stat stored in hundredths, so it renders
    /// as `round(value * 100)`; everything else is a percentage.
    pub fn display_substat(&self) -> String {
        if self.substat_name == "Anomaly Proficiency" {
            format!("{}", round_half_up(self.substat_value * 100.0))
        } else {
            format!("{}%", self.substat_value)
        }
    }
}

/// Computes a weapon's attack and substat at `level`.
///
/// # Errors
///
/// Returns a [`WeaponStatsError`] naming the first missing table or entry.
///
/// # Example
/// ```
/// # use planner_core::{Level, Weapon, weapon_stats};
/// let weapon = Weapon::new("w")
///     .with_base_attack(100.0)
///     .with_substat("ATK", 1000.0)
///     .with_level_rate(20, 500.0)
///     .with_star_rate(1, 200.0, 0.0);
///
/// let stats = weapon_stats(&weapon, Level::new(20).unwrap()).unwrap();
/// assert_eq!(stats.attack, 107.0);
/// assert_eq!(stats.substat_value, 10.0);
/// ```
pub fn weapon_stats(weapon: &Weapon, level: Level) -> Result<WeaponStats, WeaponStatsError> {
    let base = weapon
        .base_property
        .as_ref()
        .ok_or(WeaponStatsError::MissingBaseProperty)?;
    let levels = weapon
        .levels
        .as_ref()
        .ok_or(WeaponStatsError::MissingLevels)?;
    let stars = weapon
        .stars
        .as_ref()
        .ok_or(WeaponStatsError::MissingStars)?;
    let rand = weapon
        .rand_property
        .as_ref()
        .ok_or(WeaponStatsError::MissingRandProperty)?;

    let star = level.star_bracket();
    // A present entry with rate 0 (level 1 in the published tables) is used
    // as is; only a missing entry fails.
    let level_rate = levels
        .get(&level.get())
        .ok_or(WeaponStatsError::MissingLevelRate(level.get()))?
        .rate
        / RATE_SCALE;
    let star_entry = stars
        .get(&star)
        .ok_or(WeaponStatsError::MissingStarRate(star))?;

    let base_attack = base.value;
    let attack = (base_attack * star_entry.star_rate / RATE_SCALE
        + base_attack * level_rate
        + base_attack)
        .floor();

    let substat = rand.value / PERCENT_SCALE;
    let substat_value =
        round_half_up((substat * star_entry.rand_rate / RATE_SCALE + substat) * 100.0) / 100.0;

    Ok(WeaponStats {
        attack,
        substat_name: rand.name.clone(),
        substat_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(value: u32) -> Level {
        Level::saturating(value)
    }

    fn full_weapon() -> Weapon {
        Weapon::new("w")
            .with_base_attack(100.0)
            .with_substat("CRIT Rate", 480.0)
            .with_level_rate(20, 500.0)
            .with_star_rate(1, 200.0, 5000.0)
    }

    #[test]
    fn attack_combines_star_and_level_rates() {
        let stats = weapon_stats(&full_weapon(), level(20)).unwrap();
        assert_eq!(stats.attack, 107.0);
    }

    #[test]
    fn substat_scales_with_rand_rate() {
        // 4.8 * 0.5 + 4.8 = 7.2
        let stats = weapon_stats(&full_weapon(), level(20)).unwrap();
        assert_eq!(stats.substat_name, "CRIT Rate");
        assert_eq!(stats.substat_value, 7.2);
    }

    #[test]
    fn missing_level_entry_yields_error() {
        assert_eq!(
            weapon_stats(&full_weapon(), level(21)),
            Err(WeaponStatsError::MissingLevelRate(21))
        );
    }

    #[test]
    fn missing_star_entry_yields_error() {
        let weapon = full_weapon().with_level_rate(31, 900.0);
        assert_eq!(
            weapon_stats(&weapon, level(31)),
            Err(WeaponStatsError::MissingStarRate(3))
        );
    }

    #[test]
    fn missing_tables_yield_errors() {
        let mut weapon = full_weapon();
        weapon.rand_property = None;
        assert_eq!(
            weapon_stats(&weapon, level(20)),
            Err(WeaponStatsError::MissingRandProperty)
        );

        weapon.stars = None;
        assert_eq!(
            weapon_stats(&weapon, level(20)),
            Err(WeaponStatsError::MissingStars)
        );

        let bare = Weapon::new("bare");
        assert_eq!(
            weapon_stats(&bare, level(20)),
            Err(WeaponStatsError::MissingBaseProperty)
        );
    }

    #[test]
    fn zero_rate_entry_is_valid() {
        // level 1 rows carry rate 0; they still produce stats
        let weapon = Weapon::new("w")
            .with_base_attack(48.0)
            .with_substat("ATK", 1000.0)
            .with_level_rate(1, 0.0)
            .with_star_rate(0, 0.0, 0.0);
        let stats = weapon_stats(&weapon, level(1)).unwrap();
        assert_eq!(stats.attack, 48.0);
        assert_eq!(stats.substat_value, 10.0);
    }

    #[test]
    fn display_substat_formats() {
        let crit = WeaponStats {
            attack: 0.0,
            substat_name: "CRIT Rate".into(),
            substat_value: 7.2,
        };
        assert_eq!(crit.display_substat(), "7.2%");

        let proficiency = WeaponStats {
            attack: 0.0,
            substat_name: "Anomaly Proficiency".into(),
            substat_value: 0.9,
        };
        assert_eq!(proficiency.display_substat(), "90");
    }
}
