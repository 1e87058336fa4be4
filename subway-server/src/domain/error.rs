//! Domain error types.
//!
//! These errors represent rejected topology operations and the failure
//! taxonomy shared by every layer. They are distinct from transport errors:
//! the web layer maps a [`FailureKind`] onto a status code and reports the
//! [`ErrorCode`] to clients.

use super::StationId;

/// Fewest stations a line may keep.
pub const MIN_STATIONS: usize = 2;

/// Broad class of a failure, independent of which operation raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// A referenced station or line does not exist
    NotFound,
    /// A section insert or station removal was rejected
    InvalidTopologyOperation,
    /// A path was requested between a station and itself
    InvalidPathRequest,
    /// Source and target are not connected
    PathNotFound,
    /// A name, distance or section failed validation
    InvalidInput,
    /// An internal invariant was broken
    Internal,
}

/// Stable identifying codes reported alongside every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    LineNotFound,
    NoSharedStation,
    CannotAttach,
    SectionTooLong,
    DistanceOverflow,
    BelowMinimumStations,
    StationNotFound,
    SectionAlreadyExists,
    StationNotInLine,
    StationInUse,
    SameOriginAndDestination,
    NotConnected,
    InvalidInput,
    BrokenChain,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        match self {
            ErrorCode::LineNotFound => 1000,
            ErrorCode::NoSharedStation => 2000,
            ErrorCode::CannotAttach => 2002,
            ErrorCode::SectionTooLong => 2004,
            ErrorCode::DistanceOverflow => 2007,
            ErrorCode::BelowMinimumStations => 3000,
            ErrorCode::StationNotFound => 3001,
            ErrorCode::SectionAlreadyExists => 3002,
            ErrorCode::StationNotInLine => 3003,
            ErrorCode::StationInUse => 3004,
            ErrorCode::SameOriginAndDestination => 4000,
            ErrorCode::NotConnected => 4001,
            ErrorCode::InvalidInput => 5000,
            ErrorCode::BrokenChain => 9000,
        }
    }
}

/// Rejections from `LineTopology::add_section` / `remove_station`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Neither end of the new section is on the line
    #[error("neither station {up} nor station {down} is on the line")]
    NoSharedStation { up: StationId, down: StationId },

    /// Both ends of the new section are already on the line
    #[error("a section between station {up} and station {down} already exists")]
    SectionAlreadyExists { up: StationId, down: StationId },

    /// An interior split would need a section at least as long as the one it splits
    #[error("new section ({new}) must be shorter than the section it splits ({existing})")]
    SectionTooLong { new: u32, existing: u32 },

    /// No attachment rule applied
    #[error("section from station {up} to station {down} cannot be attached to the line")]
    CannotAttach { up: StationId, down: StationId },

    /// Removing a station would leave fewer than the minimum
    #[error("a line must keep at least {0} stations")]
    BelowMinimumStations(usize),

    /// The station to remove is not on the line
    #[error("station {0} is not on the line")]
    StationNotInLine(StationId),

    /// Merging two sections overflowed the distance type
    #[error("merged section distance overflows")]
    DistanceOverflow,

    /// The resulting chain failed re-validation
    #[error("line topology invariant violated: {0}")]
    BrokenChain(&'static str),
}

impl TopologyError {
    pub fn kind(&self) -> FailureKind {
        match self {
            TopologyError::BrokenChain(_) => FailureKind::Internal,
            _ => FailureKind::InvalidTopologyOperation,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            TopologyError::NoSharedStation { .. } => ErrorCode::NoSharedStation,
            TopologyError::SectionAlreadyExists { .. } => ErrorCode::SectionAlreadyExists,
            TopologyError::SectionTooLong { .. } => ErrorCode::SectionTooLong,
            TopologyError::CannotAttach { .. } => ErrorCode::CannotAttach,
            TopologyError::BelowMinimumStations(_) => ErrorCode::BelowMinimumStations,
            TopologyError::StationNotInLine(_) => ErrorCode::StationNotInLine,
            TopologyError::DistanceOverflow => ErrorCode::DistanceOverflow,
            TopologyError::BrokenChain(_) => ErrorCode::BrokenChain,
        }
    }
}
