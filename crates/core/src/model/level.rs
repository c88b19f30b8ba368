use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level must be between 1 and 3, got {value}")]
    OutOfRange { value: u8 },
}

/// Difficulty tier used to filter the question bank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const BASIC: Level = Level(1);
    pub const INTERMEDIATE: Level = Level(2);
    pub const ADVANCED: Level = Level(3);

    /// Every level, in ascending difficulty.
    pub const ALL: [Level; 3] = [Level::BASIC, Level::INTERMEDIATE, Level::ADVANCED];

    /// Creates a level from its numeric tier.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::OutOfRange` if `value` is not in `1..=3`.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LevelError::OutOfRange { value })
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
