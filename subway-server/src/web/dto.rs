//! Data transfer objects for web requests and responses.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::domain::{Line, Section, Station};
use crate::network::Route;

/// Request to create a station.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    pub name: String,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: u64,
    pub name: String,
}

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.as_str().to_string(),
        }
    }
}

/// Request to create a line with its first section.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: u64,
    pub down_station_id: u64,
    /// Checked for positivity by the domain layer
    pub distance: i64,
}

/// Request to rename or recolour a line.
#[derive(Debug, Deserialize)]
pub struct UpdateLineRequest {
    pub name: String,
    pub color: String,
}

/// Request to attach a section to a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: i64,
}

/// Query string for removing a station from a line.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStationQuery {
    pub station_id: u64,
}

/// A section in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub up_station_id: u64,
    pub down_station_id: u64,
    pub distance: u32,
}

impl SectionResponse {
    pub fn from_section(section: &Section) -> Self {
        Self {
            up_station_id: section.up().0,
            down_station_id: section.down().0,
            distance: section.distance().get(),
        }
    }
}

/// A line in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineResponse {
    pub id: u64,
    pub name: String,
    pub color: String,
    /// Stations from origin to terminus
    pub stations: Vec<StationResponse>,
    pub sections: Vec<SectionResponse>,
    /// Total length of the line
    pub distance: u64,
}

impl LineResponse {
    /// Build from a line and its resolved stations (in chain order).
    pub fn from_line(line: &Line, stations: &[Station]) -> Self {
        Self {
            id: line.id.0,
            name: line.name.as_str().to_string(),
            color: line.color.as_str().to_string(),
            stations: stations.iter().map(StationResponse::from_station).collect(),
            sections: line
                .topology
                .sections()
                .iter()
                .map(SectionResponse::from_section)
                .collect(),
            distance: line.topology.total_distance(),
        }
    }
}

/// Query string for a path search.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    pub source: u64,
    pub target: u64,
}

/// A shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub stations: Vec<StationResponse>,
    pub distance: u64,
}

impl PathResponse {
    pub fn from_route(route: &Route) -> Self {
        Self {
            stations: route
                .stations
                .iter()
                .map(StationResponse::from_station)
                .collect(),
            distance: route.distance,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable failure code
    pub code: u32,
    pub message: String,
}
