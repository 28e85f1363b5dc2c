//! Oracle access errors.

/// Errors that occur when an oracle is missing from the environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// CharacterOracle is not available in the environment.
    #[error("CharacterOracle not available")]
    CharactersNotAvailable,

    /// WeaponOracle is not available in the environment.
    #[error("WeaponOracle not available")]
    WeaponsNotAvailable,
}

impl OracleError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CharactersNotAvailable => "ORACLE_CHARACTERS_NOT_AVAILABLE",
            Self::WeaponsNotAvailable => "ORACLE_WEAPONS_NOT_AVAILABLE",
        }
    }
}
