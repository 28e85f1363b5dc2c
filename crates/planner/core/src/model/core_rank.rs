use crate::error::CoreRankError;
use crate::model::Level;

/// Core upgrade rank of a character.
///
/// Ranks are numbered 1..=7 in the data and in the UI (1 = no core,
/// 7 = core F). Each rank unlocks at a fixed character level and selects the
/// extra-ascension tier whose `max_level` matches [`CoreRank::tier_max_level`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[repr(u8)]
pub enum CoreRank {
    #[default]
    #[strum(to_string = "No Core")]
    None = 1,
    #[strum(to_string = "Core A")]
    A = 2,
    #[strum(to_string = "Core B")]
    B = 3,
    #[strum(to_string = "Core C")]
    C = 4,
    #[strum(to_string = "Core D")]
    D = 5,
    #[strum(to_string = "Core E")]
    E = 6,
    #[strum(to_string = "Core F")]
    F = 7,
}

impl CoreRank {
    /// Every rank in ascending order.
    pub const ALL: [Self; 7] = [
        Self::None,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
    ];

    /// Converts the 1..=7 rank index used by the data and UI.
    pub fn from_index(index: u32) -> Result<Self, CoreRankError> {
        Self::ALL
            .iter()
            .copied()
            .find(|rank| rank.index() == index)
            .ok_or(CoreRankError { value: index })
    }

    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Minimum character level at which this rank can be selected.
    pub const fn required_level(self) -> u32 {
        match self {
            Self::None => 1,
            Self::A => 15,
            Self::B => 25,
            Self::C => 35,
            Self::D => 45,
            Self::E => 55,
            Self::F => 60,
        }
    }

    /// `max_level` of the extra-ascension tier this rank applies.
    ///
    /// `None` for [`CoreRank::None`], which applies no tier.
    pub const fn tier_max_level(self) -> Option<u32> {
        match self {
            Self::None => None,
            Self::A => Some(15),
            Self::B => Some(25),
            Self::C => Some(35),
            Self::D => Some(45),
            Self::E => Some(55),
            Self::F => Some(60),
        }
    }

    /// Whether a character at `level` may select this rank.
    pub const fn is_available_at(self, level: Level) -> bool {
        level.get() >= self.required_level()
    }
}

impl TryFrom<u32> for CoreRank {
    type Error = CoreRankError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_index(value)
    }
}

impl From<CoreRank> for u32 {
    fn from(rank: CoreRank) -> Self {
        rank.index()
    }
}
