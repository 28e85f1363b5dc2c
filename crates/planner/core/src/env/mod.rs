//! Traits describing read-only planner data.
//!
//! Oracles expose character and weapon definitions. The [`PlannerEnv`]
//! aggregate bundles them so the [`crate::Planner`] can resolve selections
//! without coupling to a concrete loader.
mod characters;
mod error;
mod snapshot;
mod weapons;

pub use characters::CharacterOracle;
pub use error::OracleError;
pub use snapshot::CatalogSnapshot;
pub use weapons::WeaponOracle;

/// Aggregates the read-only oracles a planner needs.
#[derive(Debug)]
pub struct Env<'a, C, W>
where
    C: CharacterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
{
    characters: Option<&'a C>,
    weapons: Option<&'a W>,
}

// Manual impls: derived ones would require `C: Clone` / `W: Clone`.
impl<C, W> Clone for Env<'_, C, W>
where
    C: CharacterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, W> Copy for Env<'_, C, W>
where
    C: CharacterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
{
}

pub type PlannerEnv<'a> = Env<'a, dyn CharacterOracle + 'a, dyn WeaponOracle + 'a>;

impl<'a, C, W> Env<'a, C, W>
where
    C: CharacterOracle + ?Sized,
    W: WeaponOracle + ?Sized,
{
    pub fn new(characters: Option<&'a C>, weapons: Option<&'a W>) -> Self {
        Self {
            characters,
            weapons,
        }
    }

    pub fn with_all(characters: &'a C, weapons: &'a W) -> Self {
        Self::new(Some(characters), Some(weapons))
    }

    pub fn empty() -> Self {
        Self {
            characters: None,
            weapons: None,
        }
    }

    /// Returns the CharacterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CharactersNotAvailable` if no character oracle was provided.
    pub fn characters(&self) -> Result<&'a C, OracleError> {
        self.characters.ok_or(OracleError::CharactersNotAvailable)
    }

    /// Returns the WeaponOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::WeaponsNotAvailable` if no weapon oracle was provided.
    pub fn weapons(&self) -> Result<&'a W, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }
}

impl<'a, C, W> Env<'a, C, W>
where
    C: CharacterOracle + 'a,
    W: WeaponOracle + 'a,
{
    /// Converts this environment into a trait-object based `PlannerEnv`.
    pub fn into_planner_env(self) -> PlannerEnv<'a> {
        let characters: Option<&'a dyn CharacterOracle> = self.characters.map(|c| c as _);
        let weapons: Option<&'a dyn WeaponOracle> = self.weapons.map(|w| w as _);
        Env::new(characters, weapons)
    }
}
