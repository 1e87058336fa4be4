//! Line records: a named, coloured route owning one topology.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LineTopology;
use super::station::MAX_NAME_LEN;

/// Error returned when a line name or colour fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line {field}: {reason}")]
pub struct InvalidLineAttribute {
    field: &'static str,
    reason: &'static str,
}

/// Opaque handle identifying a line record.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated line name, e.g. "2호선".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineName(String);

impl LineName {
    pub fn parse(s: &str) -> Result<Self, InvalidLineAttribute> {
        non_blank(s, "name").map(LineName)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A display colour token, e.g. "bg-green-600".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineColor(String);

impl LineColor {
    pub fn parse(s: &str) -> Result<Self, InvalidLineAttribute> {
        non_blank(s, "color").map(LineColor)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_blank(s: &str, field: &'static str) -> Result<String, InvalidLineAttribute> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidLineAttribute {
            field,
            reason: "must not be empty",
        });
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(InvalidLineAttribute {
            field,
            reason: "must be at most 100 characters",
        });
    }
    Ok(trimmed.to_string())
}

/// A line and its current section chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: LineName,
    pub color: LineColor,
    pub topology: LineTopology,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_and_color() {
        assert_eq!(LineName::parse(" 신분당선 ").unwrap().as_str(), "신분당선");
        assert_eq!(
            LineColor::parse("bg-red-600").unwrap().as_str(),
            "bg-red-600"
        );
    }

    #[test]
    fn reject_blank() {
        let err = LineName::parse(" ").unwrap_err();
        assert_eq!(err.to_string(), "invalid line name: must not be empty");

        let err = LineColor::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid line color: must not be empty");
    }

    #[test]
    fn reject_too_long() {
        assert!(LineName::parse(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }
}
