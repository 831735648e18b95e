//! Path type: which section attribute a route minimises.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::Section;

/// Error returned when parsing an unknown path type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid path type {0:?}: expected DISTANCE or DURATION")]
pub struct InvalidPathType(String);

/// Selects the edge weight used for shortest-path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathType {
    Distance,
    Duration,
}

impl PathType {
    /// Project a section onto its weight for this path type.
    pub fn weight(self, section: &Section) -> u64 {
        match self {
            PathType::Distance => section.distance(),
            PathType::Duration => section.duration(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathType::Distance => "DISTANCE",
            PathType::Duration => "DURATION",
        }
    }
}

impl FromStr for PathType {
    type Err = InvalidPathType;

    /// Parse a tag case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DISTANCE" => Ok(PathType::Distance),
            "DURATION" => Ok(PathType::Duration),
            _ => Err(InvalidPathType(s.to_string())),
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
