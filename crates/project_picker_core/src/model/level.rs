//! Fixed money/time level enumeration.

use crate::model::entry::EntryValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One value of the fixed `1|2|3` scale used by money and time levels.
///
/// Ordering follows the numeric scale so level sets render as `1, 2, 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
}

impl Level {
    /// Every selectable level, in scale order. Bounds the add/edit selectors.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Returns the wire/display form (`"1"`, `"2"` or `"3"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }

    /// Parses one raw level value, tolerating surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "1" => Some(Self::One),
            "2" => Some(Self::Two),
            "3" => Some(Self::Three),
            _ => None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = EntryValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| EntryValidationError::UnknownLevel(value.to_string()))
    }
}

/// Parses raw selector input into a level set.
///
/// Duplicates collapse. Any value outside the enumeration rejects the whole
/// input instead of being silently dropped.
pub fn parse_levels<I, S>(values: I) -> Result<BTreeSet<Level>, EntryValidationError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().parse::<Level>())
        .collect()
}
