//! Dijkstra shortest-path strategy.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use super::graph::Multigraph;
use crate::domain::{PathError, PathType, Section, Station};

/// A resolved route through the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath {
    /// Stations visited, source first, target last.
    pub stations: Vec<Station>,

    /// Sections traversed, one fewer than `stations`.
    pub sections: Vec<Section>,

    /// Sum of edge weights under the graph's path type.
    pub weight: u64,
}

/// Trait for shortest-path algorithms over a section network.
///
/// Implementors only provide [`find_path`](Self::find_path); the narrower
/// queries project its result.
pub trait ShortestPathStrategy {
    /// Find a minimal-weight route from `source` to `target`.
    ///
    /// Fails with [`PathError::UnknownStation`] when either station is not in
    /// the graph and [`PathError::NoPath`] when they are not connected.
    fn find_path(&self, source: &Station, target: &Station) -> Result<GraphPath, PathError>;

    fn shortest_path(&self, source: &Station, target: &Station) -> Result<Vec<Station>, PathError> {
        self.find_path(source, target).map(|p| p.stations)
    }

    fn shortest_edges(&self, source: &Station, target: &Station) -> Result<Vec<Section>, PathError> {
        self.find_path(source, target).map(|p| p.sections)
    }

    fn shortest_value(&self, source: &Station, target: &Station) -> Result<u64, PathError> {
        self.find_path(source, target).map(|p| p.weight)
    }
}

/// Binary-heap Dijkstra over a [`Multigraph`].
///
/// Ties between equal-weight routes resolve by input order: the heap pops
/// the lowest (distance, vertex index) pair and a predecessor is only
/// replaced on strict improvement.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    graph: Multigraph,
}

impl Dijkstra {
    pub fn new(sections: &[Section], path_type: PathType) -> Self {
        Self {
            graph: Multigraph::build(sections, path_type),
        }
    }

    pub fn graph(&self) -> &Multigraph {
        &self.graph
    }

    fn index_of(&self, station: &Station) -> Result<usize, PathError> {
        self.graph
            .vertex_index(station)
            .ok_or(PathError::UnknownStation(station.id()))
    }
}

impl ShortestPathStrategy for Dijkstra {
    fn find_path(&self, source: &Station, target: &Station) -> Result<GraphPath, PathError> {
        let start = self.index_of(source)?;
        let goal = self.index_of(target)?;

        let n = self.graph.vertex_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        // (previous vertex, section used to arrive)
        let mut prev: Vec<Option<(usize, usize)>> = vec![None; n];
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

        dist[start] = Some(0);
        heap.push(Reverse((0, start)));

        while let Some(Reverse((d, u))) = heap.pop() {
            if dist[u].is_some_and(|best| d > best) {
                continue;
            }
            if u == goal {
                break;
            }

            trace!(station = %self.graph.vertex(u), weight = d, "Settled station");

            for edge in self.graph.neighbors(u) {
                // Section lengths are bounded, so this only fails on a
                // graph with more sections than memory could hold.
                let Some(next) = d.checked_add(edge.weight) else {
                    continue;
                };
                if dist[edge.to].is_none_or(|best| next < best) {
                    dist[edge.to] = Some(next);
                    prev[edge.to] = Some((u, edge.section));
                    heap.push(Reverse((next, edge.to)));
                }
            }
        }

        let Some(weight) = dist[goal] else {
            return Err(PathError::NoPath);
        };

        let mut stations = vec![self.graph.vertex(goal).clone()];
        let mut sections = Vec::new();
        let mut current = goal;
        while let Some((from, section)) = prev[current] {
            sections.push(self.graph.section(section).clone());
            stations.push(self.graph.vertex(from).clone());
            current = from;
        }
        stations.reverse();
        sections.reverse();

        Ok(GraphPath {
            stations,
            sections,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, LineId, StationId};
    use std::sync::Arc;

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn section(line: u64, up: u64, down: u64, distance: u64, duration: u64) -> Section {
        Section::new(
            Arc::new(Line::new(LineId(line), format!("L{line}"), 0)),
            station(up),
            station(down),
            distance,
            duration,
        )
        .unwrap()
    }

    #[test]
    fn single_edge() {
        let dijkstra = Dijkstra::new(&[section(1, 1, 2, 7, 3)], PathType::Distance);
        let path = dijkstra.find_path(&station(1), &station(2)).unwrap();
        assert_eq!(path.stations, vec![station(1), station(2)]);
        assert_eq!(path.sections.len(), 1);
        assert_eq!(path.weight, 7);
    }

    #[test]
    fn longest_sections_stay_connected() {
        let sections = [
            section(1, 1, 2, Section::MAX_LENGTH, 1),
            section(1, 2, 3, Section::MAX_LENGTH, 1),
        ];
        let dijkstra = Dijkstra::new(&sections, PathType::Distance);
        assert_eq!(dijkstra.graph().vertex_count(), 3);
        assert_eq!(dijkstra.graph().edge_count(), 2);

        let path = dijkstra.find_path(&station(1), &station(3)).unwrap();
        assert_eq!(path.weight, 2 * Section::MAX_LENGTH);
        assert_eq!(path.stations, vec![station(1), station(2), station(3)]);
    }

    #[test]
    fn traverses_section_against_its_direction() {
        let dijkstra = Dijkstra::new(&[section(1, 1, 2, 7, 3)], PathType::Duration);
        let path = dijkstra.find_path(&station(2), &station(1)).unwrap();
        assert_eq!(path.stations, vec![station(2), station(1)]);
        assert_eq!(path.weight, 3);
    }

    #[test]
    fn cheapest_parallel_edge_chosen() {
        let sections = [section(1, 1, 2, 10, 10), section(3, 1, 2, 5, 50)];

        let by_distance = Dijkstra::new(&sections, PathType::Distance);
        let path = by_distance.find_path(&station(1), &station(2)).unwrap();
        assert_eq!(path.weight, 5);
        assert_eq!(path.sections[0].line().id, LineId(3));

        let by_duration = Dijkstra::new(&sections, PathType::Duration);
        let path = by_duration.find_path(&station(1), &station(2)).unwrap();
        assert_eq!(path.weight, 10);
        assert_eq!(path.sections[0].line().id, LineId(1));
    }

    #[test]
    fn equal_weight_tie_prefers_earlier_section() {
        // 1-2-4 and 1-3-4 both weigh 2
        let sections = [
            section(1, 1, 2, 1, 1),
            section(1, 2, 4, 1, 1),
            section(2, 1, 3, 1, 1),
            section(2, 3, 4, 1, 1),
        ];
        let dijkstra = Dijkstra::new(&sections, PathType::Distance);
        let first = dijkstra.find_path(&station(1), &station(4)).unwrap();
        assert_eq!(first.stations, vec![station(1), station(2), station(4)]);
        let again = dijkstra.find_path(&station(1), &station(4)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn unknown_source_and_target() {
        let dijkstra = Dijkstra::new(&[section(1, 1, 2, 1, 1)], PathType::Distance);
        assert_eq!(
            dijkstra.find_path(&station(9), &station(1)),
            Err(PathError::UnknownStation(StationId(9)))
        );
        assert_eq!(
            dijkstra.find_path(&station(1), &station(9)),
            Err(PathError::UnknownStation(StationId(9)))
        );
    }

    #[test]
    fn disconnected_components() {
        let dijkstra = Dijkstra::new(
            &[section(1, 1, 2, 1, 1), section(2, 3, 4, 1, 1)],
            PathType::Distance,
        );
        assert_eq!(
            dijkstra.find_path(&station(1), &station(4)),
            Err(PathError::NoPath)
        );
    }

    #[test]
    fn projections_agree_with_full_path() {
        let sections = [section(1, 1, 2, 2, 2), section(1, 2, 3, 3, 3)];
        let dijkstra = Dijkstra::new(&sections, PathType::Distance);
        let full = dijkstra.find_path(&station(1), &station(3)).unwrap();
        assert_eq!(
            dijkstra.shortest_path(&station(1), &station(3)).unwrap(),
            full.stations
        );
        assert_eq!(
            dijkstra.shortest_edges(&station(1), &station(3)).unwrap(),
            full.sections
        );
        assert_eq!(dijkstra.shortest_value(&station(1), &station(3)).unwrap(), 5);
    }
}
