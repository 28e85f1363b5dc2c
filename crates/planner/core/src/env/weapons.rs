use crate::model::Weapon;

/// Read-only access to weapon definitions.
pub trait WeaponOracle: Send + Sync {
    fn weapon(&self, id: &str) -> Option<&Weapon>;

    /// Every weapon, in a stable order (ascending id).
    fn all_weapons(&self) -> Vec<&Weapon>;
}
