use crate::model::Character;

/// Read-only access to character definitions.
pub trait CharacterOracle: Send + Sync {
    fn character(&self, id: &str) -> Option<&Character>;

    /// Every character, in a stable order (ascending id).
    fn all_characters(&self) -> Vec<&Character>;
}
