//! Undirected weighted multigraph built from sections.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{PathType, Section, Station, StationId};

/// One direction of a section, as seen from the vertex that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Vertex index at the far end.
    pub to: usize,

    /// Weight under the graph's path type.
    pub weight: u64,

    /// Index of the originating section.
    pub section: usize,
}

/// Adjacency-list multigraph over stations.
///
/// Vertices are numbered in order of first appearance in the section list.
/// Parallel edges between the same pair of stations are all kept.
#[derive(Debug, Clone)]
pub struct Multigraph {
    vertices: Vec<Station>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Edge>>,
    sections: Vec<Section>,
}

impl Multigraph {
    /// Build the graph, weighting each section by `path_type`.
    pub fn build(sections: &[Section], path_type: PathType) -> Self {
        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            sections: sections.to_vec(),
        };

        for (section_idx, section) in sections.iter().enumerate() {
            let up = graph.add_vertex(section.up_station());
            let down = graph.add_vertex(section.down_station());
            let weight = path_type.weight(section);

            graph.adjacency[up].push(Edge {
                to: down,
                weight,
                section: section_idx,
            });
            graph.adjacency[down].push(Edge {
                to: up,
                weight,
                section: section_idx,
            });
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            path_type = %path_type,
            "Built section graph"
        );

        graph
    }

    fn add_vertex(&mut self, station: &Station) -> usize {
        if let Some(&idx) = self.index.get(&station.id()) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(station.clone());
        self.index.insert(station.id(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Vertex index of a station, if any section touches it.
    pub fn vertex_index(&self, station: &Station) -> Option<usize> {
        self.index.get(&station.id()).copied()
    }

    pub fn vertex(&self, idx: usize) -> &Station {
        &self.vertices[idx]
    }

    /// Edges leaving a vertex, in section order.
    pub fn neighbors(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }

    pub fn section(&self, idx: usize) -> &Section {
        &self.sections[idx]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges (one per section).
    pub fn edge_count(&self) -> usize {
        self.sections.len()
    }
}
