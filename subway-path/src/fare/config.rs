//! Distance tier configuration for the base fare.

use serde::Deserialize;

/// Error returned when a fare configuration cannot produce fares.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare config: {reason}")]
pub struct InvalidFareConfig {
    reason: &'static str,
}

/// Parameters of the distance tiers.
///
/// Distances are in kilometres and fares in won. Any field omitted when
/// deserializing takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FareConfig {
    /// Flat fare every route pays.
    pub basic_fare: u64,

    /// Distance covered by the flat fare.
    pub basic_distance_km: u64,

    /// Upper bound of the middle tier; beyond it the long tier applies.
    pub middle_limit_km: u64,

    /// Middle tier charges per started step of this many kilometres.
    pub middle_step_km: u64,

    /// Long tier charges per started step of this many kilometres.
    pub long_step_km: u64,

    /// Charge per step in either tier.
    pub step_fare: u64,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        basic_fare: u64,
        basic_distance_km: u64,
        middle_limit_km: u64,
        middle_step_km: u64,
        long_step_km: u64,
        step_fare: u64,
    ) -> Self {
        Self {
            basic_fare,
            basic_distance_km,
            middle_limit_km,
            middle_step_km,
            long_step_km,
            step_fare,
        }
    }

    /// Check the tiers are well formed.
    pub fn validate(&self) -> Result<(), InvalidFareConfig> {
        if self.middle_step_km == 0 || self.long_step_km == 0 {
            return Err(InvalidFareConfig {
                reason: "step lengths must be positive",
            });
        }
        if self.middle_limit_km < self.basic_distance_km {
            return Err(InvalidFareConfig {
                reason: "middle tier must not end before the basic distance",
            });
        }
        Ok(())
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            basic_fare: 1250,
            basic_distance_km: 10,
            middle_limit_km: 50,
            middle_step_km: 5,
            long_step_km: 8,
            step_fare: 100,
        }
    }
}
