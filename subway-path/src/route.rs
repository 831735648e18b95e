//! Route planning: shortest route plus the fare owed for it.

use tracing::debug;

use crate::domain::{Lines, PathError, PathType, Section, Station};
use crate::fare::{
    FareAgeGroup, FareConfig, FareHandlerFactory, FarePolicies, InvalidFareConfig,
};
use crate::network::Network;
use crate::path::Path;

/// Request for a route between two stations.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub source: Station,
    pub target: Station,

    /// Attribute to minimise.
    pub path_type: PathType,

    /// Rider age; `None` is charged as an adult.
    pub age: Option<i32>,
}

impl RouteRequest {
    /// Create an adult request.
    pub fn new(source: Station, target: Station, path_type: PathType) -> Self {
        Self {
            source,
            target,
            path_type,
            age: None,
        }
    }

    /// Set the rider age.
    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn age_group(&self) -> FareAgeGroup {
        self.age.map_or(FareAgeGroup::Adult, FareAgeGroup::of)
    }
}

/// A planned route and its fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Stations visited, source first.
    pub stations: Vec<Station>,

    /// Sections traversed, in travel order.
    pub sections: Vec<Section>,

    /// Total distance in kilometres.
    pub distance: u64,

    /// Total duration in minutes.
    pub duration: u64,

    /// Fare in won after surcharge and discount.
    pub fare: u64,
}

/// Plans routes over a fixed set of sections.
///
/// Graphs for both path types are built once at construction and never
/// modified, so a planner can be shared between threads.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    by_distance: Path,
    by_duration: Path,
    fares: FareHandlerFactory,
}

impl RoutePlanner {
    /// Build a planner; fails if the fare tiers are malformed.
    pub fn new(sections: &[Section], config: FareConfig) -> Result<Self, InvalidFareConfig> {
        Ok(Self {
            by_distance: Path::from_sections(sections, PathType::Distance),
            by_duration: Path::from_sections(sections, PathType::Duration),
            fares: FareHandlerFactory::new(config)?,
        })
    }

    pub fn from_network(network: &Network) -> Result<Self, InvalidFareConfig> {
        Self::new(network.sections(), network.fare_config().clone())
    }

    fn path(&self, path_type: PathType) -> &Path {
        match path_type {
            PathType::Distance => &self.by_distance,
            PathType::Duration => &self.by_duration,
        }
    }

    /// Find the shortest route for the request and price it.
    ///
    /// The fare always follows the route's distance, even when the route was
    /// chosen by duration.
    pub fn plan(&self, request: &RouteRequest) -> Result<RouteSummary, PathError> {
        let route = self
            .path(request.path_type)
            .find_shortest(&request.source, &request.target)?;

        let distance = route
            .sections
            .iter()
            .map(Section::distance)
            .fold(0, u64::saturating_add);
        let duration = route
            .sections
            .iter()
            .map(Section::duration)
            .fold(0, u64::saturating_add);
        let fare = self.fare(&route.sections, distance, request.age_group());

        debug!(
            source = %request.source,
            target = %request.target,
            path_type = %request.path_type,
            weight = route.weight,
            distance,
            fare,
            "Planned route"
        );

        Ok(RouteSummary {
            stations: route.stations,
            sections: route.sections,
            distance,
            duration,
            fare,
        })
    }

    /// Fare for riding `sections` covering `distance` kilometres.
    pub fn fare(&self, sections: &[Section], distance: u64, age_group: FareAgeGroup) -> u64 {
        let base_fare = self.fares.calculate_fare(distance);
        let lines = Lines::from_sections(sections);
        FarePolicies::for_route(&lines, age_group).apply(base_fare)
    }
}
