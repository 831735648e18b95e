//! Shortest-path search over the subway network.
//!
//! Sections are loaded into an undirected weighted multigraph keyed by
//! station. A [`ShortestPathStrategy`] answers route queries over it and
//! [`Path`] adds request validation on top.

mod dijkstra;
mod graph;

pub use dijkstra::{Dijkstra, GraphPath, ShortestPathStrategy};
pub use graph::{Edge, Multigraph};

use crate::domain::{PathError, PathType, Section, Station};

/// Shortest-path queries for one path type.
///
/// A `Path` is a pure function of the graph it was built from: repeating a
/// query returns the same answer.
#[derive(Debug, Clone)]
pub struct Path<S = Dijkstra> {
    strategy: S,
    path_type: PathType,
}

impl Path<Dijkstra> {
    /// Build a Dijkstra-backed path over the given sections.
    pub fn from_sections(sections: &[Section], path_type: PathType) -> Self {
        Self::new(Dijkstra::new(sections, path_type), path_type)
    }
}

impl<S: ShortestPathStrategy> Path<S> {
    /// Wrap a strategy built for `path_type`.
    pub fn new(strategy: S, path_type: PathType) -> Self {
        Self {
            strategy,
            path_type,
        }
    }

    pub fn path_type(&self) -> PathType {
        self.path_type
    }

    /// Stations along the shortest route, source first.
    pub fn find_shortest_path(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<Vec<Station>, PathError> {
        validate_distinct(source, target)?;
        self.strategy.shortest_path(source, target)
    }

    /// Sections traversed by the shortest route, in travel order.
    pub fn find_shortest_edges(
        &self,
        source: &Station,
        target: &Station,
    ) -> Result<Vec<Section>, PathError> {
        validate_distinct(source, target)?;
        self.strategy.shortest_edges(source, target)
    }

    /// Total weight of the shortest route, in units of the path type.
    pub fn find_shortest_value(&self, source: &Station, target: &Station) -> Result<u64, PathError> {
        validate_distinct(source, target)?;
        self.strategy.shortest_value(source, target)
    }

    /// The full route in one search: stations, sections and weight.
    pub fn find_shortest(&self, source: &Station, target: &Station) -> Result<GraphPath, PathError> {
        validate_distinct(source, target)?;
        self.strategy.find_path(source, target)
    }
}

fn validate_distinct(source: &Station, target: &Station) -> Result<(), PathError> {
    if source == target {
        return Err(PathError::SameStation);
    }
    Ok(())
}
