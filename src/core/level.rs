//! Severity levels

use super::error::JogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level names in rank order, most verbose first
pub const LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    /// Every level, ordered by rank
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Rank of a level name, or `None` when the name is not a level.
    ///
    /// Names are matched exactly; `"INFO"` is not a level.
    pub fn rank_of(name: &str) -> Option<u8> {
        Self::from_name(name).map(|level| level.rank())
    }

    /// Whether an event at `self` passes a logger set to `threshold`
    #[inline]
    pub fn passes(&self, threshold: Level) -> bool {
        self.rank() >= threshold.rank()
    }

    /// Level with exactly this name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Level {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Level {
    type Err = JogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| JogError::invalid_level(s))
    }
}

impl TryFrom<&str> for Level {
    type Error = JogError;

    fn try_from(s: &str) -> Result<Self, JogError> {
        s.parse()
    }
}
