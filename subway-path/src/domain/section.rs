//! Section: one traversable edge of the network.

use std::sync::Arc;

use super::{Line, Station};

/// Error returned when a section violates its value invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid section: {reason}")]
pub struct InvalidSection {
    reason: &'static str,
}

/// A stretch of a line between two adjacent stations.
///
/// Sections are routable in both directions; "up" and "down" only record
/// how the topology owner described them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    line: Arc<Line>,
    up_station: Station,
    down_station: Station,
    distance: u64,
    duration: u64,
}

impl Section {
    /// Longest distance (km) or duration (min) a single section may have.
    ///
    /// Keeps route totals far below `u64::MAX`.
    pub const MAX_LENGTH: u64 = 1_000_000;

    /// Create a section.
    ///
    /// Distance and duration must be in `1..=MAX_LENGTH` and the two
    /// stations must differ.
    pub fn new(
        line: Arc<Line>,
        up_station: Station,
        down_station: Station,
        distance: u64,
        duration: u64,
    ) -> Result<Self, InvalidSection> {
        if distance == 0 {
            return Err(InvalidSection {
                reason: "distance must be positive",
            });
        }
        if duration == 0 {
            return Err(InvalidSection {
                reason: "duration must be positive",
            });
        }
        if distance > Self::MAX_LENGTH || duration > Self::MAX_LENGTH {
            return Err(InvalidSection {
                reason: "distance and duration must not exceed 1000000",
            });
        }
        if up_station == down_station {
            return Err(InvalidSection {
                reason: "up and down stations must differ",
            });
        }

        Ok(Self {
            line,
            up_station,
            down_station,
            distance,
            duration,
        })
    }

    pub fn line(&self) -> &Arc<Line> {
        &self.line
    }

    pub fn up_station(&self) -> &Station {
        &self.up_station
    }

    pub fn down_station(&self) -> &Station {
        &self.down_station
    }

    /// Distance in kilometres.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Duration in minutes.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// The station at the other end from `station`, if `station` is an end.
    pub fn opposite(&self, station: &Station) -> Option<&Station> {
        if *station == self.up_station {
            Some(&self.down_station)
        } else if *station == self.down_station {
            Some(&self.up_station)
        } else {
            None
        }
    }
}
