//! Adjustments applied to the base fare.

use crate::domain::Lines;

use super::FareAgeGroup;

/// One adjustment to a fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarePolicy {
    /// Add a line surcharge.
    LineExtra { extra_fare: u64 },
    /// Apply an age-group discount.
    AgeDiscount(FareAgeGroup),
}

impl FarePolicy {
    pub fn apply(self, fare: u64) -> u64 {
        match self {
            FarePolicy::LineExtra { extra_fare } => fare.saturating_add(extra_fare),
            FarePolicy::AgeDiscount(group) => group.calculate_fare(fare),
        }
    }
}

/// The adjustments for one route: line surcharge, then age discount.
///
/// Only [`FarePolicies::for_route`] builds the list, so the order is
/// always surcharge before discount and each applies exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarePolicies {
    policies: [FarePolicy; 2],
}

impl FarePolicies {
    /// Policies for a route over `lines` ridden by someone in `age_group`.
    pub fn for_route(lines: &Lines, age_group: FareAgeGroup) -> Self {
        Self {
            policies: [
                FarePolicy::LineExtra {
                    extra_fare: lines.max_extra_fare(),
                },
                FarePolicy::AgeDiscount(age_group),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FarePolicy> {
        self.policies.iter()
    }

    /// Final fare from a base fare.
    pub fn apply(&self, base_fare: u64) -> u64 {
        self.policies
            .iter()
            .fold(base_fare, |fare, policy| policy.apply(fare))
    }
}
