//! Fare calculation.
//!
//! The fare for a route is built in a fixed order:
//!
//! 1. base fare for the total distance, summed over the distance tiers
//!    ([`FareHandlerFactory`])
//! 2. plus the highest extra fare among the lines used
//! 3. minus the rider's age-group discount
//!
//! Steps 2 and 3 are the [`FarePolicies`] for the route.

mod age;
mod config;
mod handler;
mod policy;

pub use age::FareAgeGroup;
pub use config::{FareConfig, InvalidFareConfig};
pub use handler::{FareHandler, FareHandlerFactory};
pub use policy::{FarePolicies, FarePolicy};
