use core::fmt;

use crate::error::LevelError;

/// A character or weapon level in `1..=60`.
///
/// Levels arrive from sliders and config files as plain integers; wrapping
/// them here keeps the `level - 1` growth step and the star bracket math from
/// ever seeing zero or an out-of-range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Level(u8);

impl Level {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(60);

    /// Creates a level, rejecting values outside `1..=60`.
    pub fn new(value: u32) -> Result<Self, LevelError> {
        if (Self::MIN.get()..=Self::MAX.get()).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(LevelError { value })
        }
    }

    /// Creates a level, saturating into `1..=60`.
    pub fn saturating(value: u32) -> Self {
        Self(value.clamp(Self::MIN.get(), Self::MAX.get()) as u8)
    }

    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Number of growth steps above level 1.
    pub const fn steps(self) -> u32 {
        self.0 as u32 - 1
    }

    /// Weapon star bracket: `floor((level - 1) / 10)`.
    pub const fn star_bracket(self) -> u32 {
        self.steps() / 10
    }

    /// Iterates every level from 1 to 60.
    pub fn all() -> impl DoubleEndedIterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.get()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
