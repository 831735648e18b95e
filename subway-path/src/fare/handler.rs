//! Distance tiers of the base fare.
//!
//! Each tier contributes an increment for the part of the distance it
//! covers. Tiers are evaluated in a fixed order and their increments summed.

use super::{FareConfig, InvalidFareConfig};

/// One distance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareHandler {
    /// Flat fare, paid on every route.
    Basic,
    /// Per started step between the basic distance and the middle limit.
    Over10Km,
    /// Per started step beyond the middle limit.
    Over50Km,
}

impl FareHandler {
    /// All tiers, in evaluation order.
    pub const CHAIN: [FareHandler; 3] = [
        FareHandler::Basic,
        FareHandler::Over10Km,
        FareHandler::Over50Km,
    ];

    /// Fare this tier adds for a route of `distance` kilometres.
    ///
    /// `config` must have passed [`FareConfig::validate`]. Fares saturate
    /// at `u64::MAX`.
    pub fn increment(self, distance: u64, config: &FareConfig) -> u64 {
        match self {
            FareHandler::Basic => config.basic_fare,
            FareHandler::Over10Km => {
                if distance <= config.basic_distance_km {
                    return 0;
                }
                let covered = distance.min(config.middle_limit_km) - config.basic_distance_km;
                covered
                    .div_ceil(config.middle_step_km)
                    .saturating_mul(config.step_fare)
            }
            FareHandler::Over50Km => {
                if distance <= config.middle_limit_km {
                    return 0;
                }
                let covered = distance - config.middle_limit_km;
                covered
                    .div_ceil(config.long_step_km)
                    .saturating_mul(config.step_fare)
            }
        }
    }
}

/// Computes the base fare by running every tier.
///
/// Only holds a validated [`FareConfig`].
#[derive(Debug, Clone, Default)]
pub struct FareHandlerFactory {
    config: FareConfig,
}

impl FareHandlerFactory {
    /// Create a factory, rejecting tiers that cannot produce fares.
    pub fn new(config: FareConfig) -> Result<Self, InvalidFareConfig> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Base fare in won for a route of `distance` kilometres.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_path::fare::FareHandlerFactory;
    ///
    /// let factory = FareHandlerFactory::default();
    /// assert_eq!(factory.calculate_fare(10), 1250);
    /// assert_eq!(factory.calculate_fare(11), 1350);
    /// assert_eq!(factory.calculate_fare(59), 2250);
    /// ```
    pub fn calculate_fare(&self, distance: u64) -> u64 {
        FareHandler::CHAIN.iter().fold(0, |fare: u64, handler| {
            fare.saturating_add(handler.increment(distance, &self.config))
        })
    }
}
