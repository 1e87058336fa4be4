//! Directory error types.

use crate::domain::{
    ErrorCode, FailureKind, InvalidLineAttribute, InvalidSection, InvalidStationName, LineId,
    StationId, StationName, TopologyError,
};

/// Errors from station and line directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No line with this id
    #[error("line {0} not found")]
    LineNotFound(LineId),

    /// The station is still part of at least one line
    #[error("station {station} is still used by line {line}")]
    StationInUse { station: StationId, line: LineId },

    /// Both stations of a new section are already on the line
    #[error("a section between {up} and {down} already exists")]
    DuplicateSection { up: StationName, down: StationName },

    /// Neither station of a new section is on the line
    #[error("neither {up} nor {down} is on the line")]
    Unattached { up: StationName, down: StationName },

    /// Invalid station name
    #[error(transparent)]
    StationName(#[from] InvalidStationName),

    /// Invalid line name or colour
    #[error(transparent)]
    LineAttribute(#[from] InvalidLineAttribute),

    /// Invalid section
    #[error(transparent)]
    Section(#[from] InvalidSection),

    /// Rejected topology change
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

impl DirectoryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            DirectoryError::StationNotFound(_) | DirectoryError::LineNotFound(_) => {
                FailureKind::NotFound
            }
            DirectoryError::StationInUse { .. }
            | DirectoryError::DuplicateSection { .. }
            | DirectoryError::Unattached { .. } => FailureKind::InvalidTopologyOperation,
            DirectoryError::StationName(_)
            | DirectoryError::LineAttribute(_)
            | DirectoryError::Section(_) => FailureKind::InvalidInput,
            DirectoryError::Topology(e) => e.kind(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DirectoryError::StationNotFound(_) => ErrorCode::StationNotFound,
            DirectoryError::LineNotFound(_) => ErrorCode::LineNotFound,
            DirectoryError::StationInUse { .. } => ErrorCode::StationInUse,
            DirectoryError::DuplicateSection { .. } => ErrorCode::SectionAlreadyExists,
            DirectoryError::Unattached { .. } => ErrorCode::NoSharedStation,
            DirectoryError::StationName(_)
            | DirectoryError::LineAttribute(_)
            | DirectoryError::Section(_) => ErrorCode::InvalidInput,
            DirectoryError::Topology(e) => e.code(),
        }
    }
}
