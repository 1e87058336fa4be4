//! Sections: the directed, distance-weighted edges a line is built from.

use std::fmt;

use super::StationId;

/// Error returned when constructing an invalid section or distance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSection {
    /// Distances must be strictly positive
    #[error("section distance must be positive")]
    NonPositiveDistance,

    /// Both ends of the section are the same station
    #[error("section cannot start and end at station {0}")]
    SelfLoop(StationId),
}

/// A strictly positive section length.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let d = Distance::new(10).unwrap();
/// assert_eq!(d.get(), 10);
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(u32);

impl Distance {
    pub fn new(value: u32) -> Result<Self, InvalidSection> {
        if value == 0 {
            return Err(InvalidSection::NonPositiveDistance);
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Sum of two distances, or `None` on overflow.
    pub fn checked_add(self, other: Distance) -> Option<Distance> {
        self.0.checked_add(other.0).map(Distance)
    }

    /// Difference of two distances, or `None` unless `other` is strictly shorter.
    pub fn checked_sub(self, other: Distance) -> Option<Distance> {
        match self.0.checked_sub(other.0) {
            Some(0) | None => None,
            Some(rest) => Some(Distance(rest)),
        }
    }
}

impl fmt::Debug for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distance({})", self.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge from `up` to `down` within one line.
///
/// Sections are immutable values. A line "updates" a section by replacing it
/// in its chain, never by mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    up: StationId,
    down: StationId,
    distance: Distance,
}

impl Section {
    /// Creates a section, rejecting one that loops back onto its own station.
    pub fn new(up: StationId, down: StationId, distance: Distance) -> Result<Self, InvalidSection> {
        if up == down {
            return Err(InvalidSection::SelfLoop(up));
        }
        Ok(Section { up, down, distance })
    }

    /// Convenience constructor from a raw distance.
    pub fn with_raw_distance(
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Self, InvalidSection> {
        Section::new(up, down, Distance::new(distance)?)
    }

    pub fn up(&self) -> StationId {
        self.up
    }

    pub fn down(&self) -> StationId {
        self.down
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Returns true if `station` is either end of this section.
    pub fn touches(&self, station: StationId) -> bool {
        self.up == station || self.down == station
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u64) -> StationId {
        StationId(n)
    }

    #[test]
    fn distance_must_be_positive() {
        assert_eq!(Distance::new(0), Err(InvalidSection::NonPositiveDistance));
        assert_eq!(Distance::new(1).unwrap().get(), 1);
    }

    #[test]
    fn checked_sub_requires_strictly_shorter() {
        let ten = Distance::new(10).unwrap();
        let four = Distance::new(4).unwrap();
        assert_eq!(ten.checked_sub(four), Some(Distance::new(6).unwrap()));
        assert_eq!(ten.checked_sub(ten), None);
        assert_eq!(four.checked_sub(ten), None);
    }

    #[test]
    fn checked_add_detects_overflow() {
        let max = Distance::new(u32::MAX).unwrap();
        let one = Distance::new(1).unwrap();
        assert_eq!(max.checked_add(one), None);
        assert_eq!(one.checked_add(one), Some(Distance::new(2).unwrap()));
    }

    #[test]
    fn self_loop_rejected() {
        let err = Section::with_raw_distance(s(1), s(1), 5).unwrap_err();
        assert_eq!(err, InvalidSection::SelfLoop(s(1)));
        assert_eq!(err.to_string(), "section cannot start and end at station 1");
    }

    #[test]
    fn zero_distance_rejected() {
        assert_eq!(
            Section::with_raw_distance(s(1), s(2), 0),
            Err(InvalidSection::NonPositiveDistance)
        );
    }

    #[test]
    fn touches_either_end() {
        let section = Section::with_raw_distance(s(1), s(2), 5).unwrap();
        assert!(section.touches(s(1)));
        assert!(section.touches(s(2)));
        assert!(!section.touches(s(3)));
    }
}
