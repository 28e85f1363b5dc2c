/// Rarity grade of a character or weapon.
///
/// Declaration order is the catalog sort order: S first, then A, then B.
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
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    S,
    A,
    B,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_s_before_a_before_b() {
        let mut grades = vec![Rarity::B, Rarity::S, Rarity::A];
        grades.sort();
        assert_eq!(grades, vec![Rarity::S, Rarity::A, Rarity::B]);
    }

    #[test]
    fn parses_single_letter() {
        assert_eq!("A".parse::<Rarity>(), Ok(Rarity::A));
        assert!("C".parse::<Rarity>().is_err());
    }
}
