//! Domain types for the subway network.
//!
//! This module contains the core domain model types: station and line
//! identities, sections, and the line topology engine. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod error;
mod line;
mod section;
mod station;
mod topology;

pub use error::{ErrorCode, FailureKind, MIN_STATIONS, TopologyError};
pub use line::{InvalidLineAttribute, Line, LineColor, LineId, LineName};
pub use section::{Distance, InvalidSection, Section};
pub use station::{InvalidStationName, MAX_NAME_LEN, Station, StationId, StationName};
pub use topology::LineTopology;
