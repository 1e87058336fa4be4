//! Shortest path search over a [`NetworkGraph`].

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::domain::{ErrorCode, FailureKind, StationId};

use super::graph::NetworkGraph;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Origin and destination are the same station
    #[error("origin and destination are the same station ({0})")]
    SameStation(StationId),

    /// A station does not exist or is not on any line
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No route joins the two stations
    #[error("no route from station {from} to station {to}")]
    NotConnected { from: StationId, to: StationId },
}

impl PathError {
    pub fn kind(&self) -> FailureKind {
        match self {
            PathError::SameStation(_) => FailureKind::InvalidPathRequest,
            PathError::StationNotFound(_) => FailureKind::NotFound,
            PathError::NotConnected { .. } => FailureKind::PathNotFound,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PathError::SameStation(_) => ErrorCode::SameOriginAndDestination,
            PathError::StationNotFound(_) => ErrorCode::StationNotFound,
            PathError::NotConnected { .. } => ErrorCode::NotConnected,
        }
    }
}

/// A minimum-distance route between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Stations visited, both endpoints included.
    pub stations: Vec<StationId>,
    /// Sum of the traversed edge weights.
    pub total_distance: u64,
}

impl PathResult {
    /// Number of edges travelled.
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Finds a minimum-distance path from `source` to `target`.
///
/// Uses Dijkstra's algorithm with a binary heap keyed on
/// `(distance, vertex index)`, so ties are always broken the same way for
/// the same graph. Distances accumulate as integers.
///
/// # Errors
///
/// - `SameStation` if `source == target` (checked before the graph is read)
/// - `StationNotFound` if either station is not a vertex
/// - `NotConnected` if `target` is unreachable from `source`
///
/// # Examples
///
/// ```
/// use subway_server::domain::{LineTopology, Section, StationId};
/// use subway_server::network::{EdgeDirection, build_graph, find_path};
///
/// let line = LineTopology::from_sections(vec![
///     Section::with_raw_distance(StationId(1), StationId(2), 2).unwrap(),
///     Section::with_raw_distance(StationId(2), StationId(3), 3).unwrap(),
/// ])
/// .unwrap();
///
/// let graph = build_graph(&[line], EdgeDirection::UpToDown);
/// let path = find_path(&graph, StationId(1), StationId(3)).unwrap();
///
/// assert_eq!(path.stations, vec![StationId(1), StationId(2), StationId(3)]);
/// assert_eq!(path.total_distance, 5);
/// ```
pub fn find_path(
    graph: &NetworkGraph,
    source: StationId,
    target: StationId,
) -> Result<PathResult, PathError> {
    if source == target {
        return Err(PathError::SameStation(source));
    }

    let start = graph
        .vertex_index(source)
        .ok_or(PathError::StationNotFound(source))?;
    let goal = graph
        .vertex_index(target)
        .ok_or(PathError::StationNotFound(target))?;

    let n = graph.vertex_count();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[start] = Some(0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if v == goal {
            break;
        }
        // Stale entry
        if dist[v].is_some_and(|best| d > best) {
            continue;
        }

        for edge in graph.edges_from(v) {
            let candidate = d.saturating_add(edge.weight);
            if dist[edge.to].is_none_or(|best| candidate < best) {
                dist[edge.to] = Some(candidate);
                prev[edge.to] = Some(v);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    let Some(total_distance) = dist[goal] else {
        return Err(PathError::NotConnected {
            from: source,
            to: target,
        });
    };

    let mut stations = vec![graph.station_at(goal)];
    let mut current = goal;
    while let Some(p) = prev[current] {
        stations.push(graph.station_at(p));
        current = p;
    }
    stations.reverse();

    trace!(%source, %target, total_distance, hops = stations.len() - 1, "shortest path found");

    Ok(PathResult {
        stations,
        total_distance,
    })
}
