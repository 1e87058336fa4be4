//! Cross-line path queries.
//!
//! Ties the station and line lookups to the graph builder and the shortest
//! path search: resolve both stations, snapshot every line, build the graph,
//! search it.

use tracing::debug;

use crate::domain::{LineTopology, Station, StationId};

use super::config::PathConfig;
use super::dijkstra::{PathError, PathResult, find_path};
use super::graph::NetworkGraph;

/// Trait for providing stations and line topologies to the path finder.
///
/// This abstraction allows the finder to be tested with mock data.
pub trait NetworkSource {
    /// Look up a station, returning `None` if it does not exist.
    fn resolve_station(&self, id: StationId) -> Option<Station>;

    /// Snapshot of every line's current topology.
    ///
    /// Each returned chain must be complete and valid; it may be from just
    /// before or just after a concurrent mutation, but never in between.
    fn line_topologies(&self) -> Vec<LineTopology>;
}

/// A path resolved back into station records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub stations: Vec<Station>,
    pub distance: u64,
}

/// Path finder over the whole network.
pub struct PathFinder<'a, S: NetworkSource> {
    source: &'a S,
    config: &'a PathConfig,
}

impl<'a, S: NetworkSource> PathFinder<'a, S> {
    pub fn new(source: &'a S, config: &'a PathConfig) -> Self {
        Self { source, config }
    }

    /// Builds a fresh graph from the current state of every line.
    pub fn snapshot(&self) -> NetworkGraph {
        NetworkGraph::build(&self.source.line_topologies(), self.config.direction)
    }

    /// Finds the shortest route between two station ids.
    ///
    /// Both stations are resolved before anything else, so unknown ids are
    /// reported as `StationNotFound` even when they are equal.
    pub fn find(&self, from: StationId, to: StationId) -> Result<Route, PathError> {
        let origin = self
            .source
            .resolve_station(from)
            .ok_or(PathError::StationNotFound(from))?;
        let destination = self
            .source
            .resolve_station(to)
            .ok_or(PathError::StationNotFound(to))?;

        if origin.id == destination.id {
            return Err(PathError::SameStation(origin.id));
        }

        let graph = self.snapshot();
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            direction = %self.config.direction,
            "network graph built"
        );

        let path = find_path(&graph, origin.id, destination.id)?;
        let hops = path.hops();
        let PathResult {
            stations,
            total_distance,
        } = path;

        let stations = stations
            .into_iter()
            .map(|id| {
                self.source
                    .resolve_station(id)
                    .ok_or(PathError::StationNotFound(id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            from = %origin.name,
            to = %destination.name,
            hops,
            distance = total_distance,
            "route found"
        );

        Ok(Route {
            stations,
            distance: total_distance,
        })
    }
}
