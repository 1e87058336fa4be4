//! Cross-line path finding.
//!
//! This module flattens every line's sections into one weighted multigraph
//! and answers "what is the shortest way from this station to that one?"
//! using Dijkstra's algorithm. The graph is rebuilt for every query and
//! never shared between queries.

mod config;
mod dijkstra;
mod finder;
mod graph;

pub use config::{EdgeDirection, InvalidEdgeDirection, PathConfig};
pub use dijkstra::{PathError, PathResult, find_path};
pub use finder::{NetworkSource, PathFinder, Route};
pub use graph::{NetworkGraph, build_graph};

#[cfg(test)]
mod finder_tests;
