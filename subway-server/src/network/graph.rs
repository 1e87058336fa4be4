//! Network graph: every line's sections flattened into one weighted multigraph.
//!
//! The graph is a disposable snapshot built for a single path query. It is
//! never mutated after construction.

use std::collections::HashMap;

use crate::domain::{LineTopology, StationId};

use super::config::EdgeDirection;

/// An outgoing edge in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Edge {
    /// Index of the destination vertex.
    pub to: usize,
    pub weight: u64,
}

/// Directed, weighted multigraph over station handles.
///
/// Parallel edges are kept: two lines joining the same pair of stations
/// contribute two independently weighted edges.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    /// Vertices in first-seen order.
    vertices: Vec<StationId>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Edge>>,
    section_count: usize,
}

impl NetworkGraph {
    /// Builds the graph from every line's current topology.
    ///
    /// Vertices are numbered in the order stations are first met, walking
    /// the lines in the order given, so the same input always yields the
    /// same graph.
    pub fn build(lines: &[LineTopology], direction: EdgeDirection) -> Self {
        let mut graph = NetworkGraph::default();

        for line in lines {
            for section in line.sections() {
                let up = graph.intern(section.up());
                let down = graph.intern(section.down());
                let weight = u64::from(section.distance().get());

                graph.adjacency[up].push(Edge { to: down, weight });
                if direction == EdgeDirection::Both {
                    graph.adjacency[down].push(Edge { to: up, weight });
                }
                graph.section_count += 1;
            }
        }

        graph
    }

    fn intern(&mut self, station: StationId) -> usize {
        if let Some(&idx) = self.index.get(&station) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(station);
        self.index.insert(station, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of sections the graph was built from (parallel edges included).
    pub fn edge_count(&self) -> usize {
        self.section_count
    }

    /// Stations in vertex order.
    pub fn stations(&self) -> &[StationId] {
        &self.vertices
    }

    pub(crate) fn vertex_index(&self, station: StationId) -> Option<usize> {
        self.index.get(&station).copied()
    }

    pub(crate) fn station_at(&self, idx: usize) -> StationId {
        self.vertices[idx]
    }

    pub(crate) fn edges_from(&self, idx: usize) -> &[Edge] {
        &self.adjacency[idx]
    }
}

/// Builds a [`NetworkGraph`] from every line's topology.
pub fn build_graph(lines: &[LineTopology], direction: EdgeDirection) -> NetworkGraph {
    NetworkGraph::build(lines, direction)
}

#[cfg(test)]
impl NetworkGraph {
    /// Weights of every edge from `from` to `to`.
    pub(crate) fn weights_between(&self, from: StationId, to: StationId) -> Vec<u64> {
        let (Some(&a), Some(&b)) = (self.index.get(&from), self.index.get(&to)) else {
            return Vec::new();
        };
        self.adjacency[a]
            .iter()
            .filter(|e| e.to == b)
            .map(|e| e.weight)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;

    fn s(n: u64) -> StationId {
        StationId(n)
    }

    fn line(sections: &[(u64, u64, u32)]) -> LineTopology {
        let sections = sections
            .iter()
            .map(|&(u, d, dist)| Section::with_raw_distance(s(u), s(d), dist).unwrap())
            .collect();
        LineTopology::from_sections(sections).unwrap()
    }

    #[test]
    fn empty_graph() {
        let graph = build_graph(&[], EdgeDirection::UpToDown);
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains(s(1)));
    }

    #[test]
    fn vertices_are_union_of_stations() {
        let lines = [line(&[(1, 2, 10)]), line(&[(2, 3, 2), (3, 4, 3)])];
        let graph = build_graph(&lines, EdgeDirection::UpToDown);

        assert_eq!(graph.stations(), &[s(1), s(2), s(3), s(4)]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn parallel_edges_kept() {
        let lines = [line(&[(1, 2, 10)]), line(&[(1, 2, 7)])];
        let graph = build_graph(&lines, EdgeDirection::UpToDown);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weights_between(s(1), s(2)), vec![10, 7]);
    }

    #[test]
    fn directed_edges_only_up_to_down() {
        let graph = build_graph(&[line(&[(1, 2, 10)])], EdgeDirection::UpToDown);
        assert_eq!(graph.weights_between(s(1), s(2)), vec![10]);
        assert!(graph.weights_between(s(2), s(1)).is_empty());
    }

    #[test]
    fn both_directions_mirror_edges() {
        let graph = build_graph(&[line(&[(1, 2, 10)])], EdgeDirection::Both);
        assert_eq!(graph.weights_between(s(2), s(1)), vec![10]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn build_does_not_touch_input() {
        let lines = vec![line(&[(1, 2, 10), (2, 3, 5)])];
        let before = lines.clone();
        let _ = build_graph(&lines, EdgeDirection::Both);
        assert_eq!(lines, before);
    }
}
