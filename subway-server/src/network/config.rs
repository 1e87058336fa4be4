//! Path search configuration.

use std::fmt;
use std::str::FromStr;

/// Which way a section may be travelled when searching for paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDirection {
    /// Sections are one-way, from up station to down station.
    #[default]
    UpToDown,
    /// Sections can be ridden in both directions.
    Both,
}

/// Error returned when parsing an unknown edge direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge direction {0:?} (expected \"up-to-down\" or \"both\")")]
pub struct InvalidEdgeDirection(String);

impl FromStr for EdgeDirection {
    type Err = InvalidEdgeDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up-to-down" | "directed" => Ok(EdgeDirection::UpToDown),
            "both" | "undirected" => Ok(EdgeDirection::Both),
            _ => Err(InvalidEdgeDirection(s.to_string())),
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDirection::UpToDown => f.write_str("up-to-down"),
            EdgeDirection::Both => f.write_str("both"),
        }
    }
}

/// Configuration parameters for path search.
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// How sections become graph edges.
    pub direction: EdgeDirection,
}

impl PathConfig {
    pub fn new(direction: EdgeDirection) -> Self {
        Self { direction }
    }
}
