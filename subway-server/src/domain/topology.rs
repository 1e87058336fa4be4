//! Line topology: the ordered chain of sections making up one line.
//!
//! A `LineTopology` is immutable. `add_section` and `remove_station` build a
//! new chain, re-validate it, and hand it back; the caller swaps it in. A
//! rejected operation therefore never leaves a half-spliced chain behind.

use std::collections::HashSet;

use tracing::{debug, error};

use super::error::MIN_STATIONS;
use super::{Section, StationId, TopologyError};

/// An ordered chain of sections from a line's origin to its terminus.
///
/// # Invariants
///
/// - At least one section
/// - Consecutive sections connect (`sections[i].down() == sections[i + 1].up()`)
/// - No station appears twice, so the chain is a simple path with no
///   branches, cycles or duplicate edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTopology {
    sections: Vec<Section>,
}

impl LineTopology {
    /// Creates a topology holding a single initial section.
    pub fn new(initial: Section) -> Self {
        LineTopology {
            sections: vec![initial],
        }
    }

    /// Rebuilds a topology from an ordered list of sections.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::BrokenChain` if the sections are empty, do not
    /// connect end to end, or revisit a station.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_server::domain::{LineTopology, Section, StationId};
    ///
    /// let a = Section::with_raw_distance(StationId(1), StationId(2), 10).unwrap();
    /// let b = Section::with_raw_distance(StationId(2), StationId(3), 5).unwrap();
    ///
    /// let line = LineTopology::from_sections(vec![a, b]).unwrap();
    /// assert_eq!(line.stations(), vec![StationId(1), StationId(2), StationId(3)]);
    ///
    /// // Gaps are rejected
    /// assert!(LineTopology::from_sections(vec![b, a]).is_err());
    /// ```
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, TopologyError> {
        let topology = LineTopology { sections };
        topology.validate()?;
        Ok(topology)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections in the chain.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a valid topology; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The first station of the line.
    pub fn origin(&self) -> StationId {
        self.sections[0].up()
    }

    /// The last station of the line.
    pub fn terminus(&self) -> StationId {
        self.sections[self.sections.len() - 1].down()
    }

    /// Stations in order from origin to terminus.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(self.origin());
        stations.extend(self.sections.iter().map(Section::down));
        stations
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// Sum of all section distances.
    pub fn total_distance(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.distance().get()))
            .sum()
    }

    /// Returns the chain with `candidate` attached.
    ///
    /// Rules are tried in order and the first that applies wins:
    ///
    /// 1. Reject if neither end of `candidate` is on the line.
    /// 2. Reject if both ends are already on the line (this covers the
    ///    exact pair in either direction).
    /// 3. Append if `candidate` starts at the terminus.
    /// 4. Prepend if `candidate` ends at the origin.
    /// 5. Split the section starting at `candidate.up()`: the new section
    ///    takes its first part, the remainder runs on to the old down station.
    /// 6. Split the section ending at `candidate.down()`: the remainder runs
    ///    from the old up station, the new section takes the last part.
    ///
    /// Splits require the new section to be strictly shorter than the one
    /// it splits.
    pub fn add_section(&self, candidate: Section) -> Result<LineTopology, TopologyError> {
        let up = candidate.up();
        let down = candidate.down();

        let has_up = self.contains_station(up);
        let has_down = self.contains_station(down);

        if !has_up && !has_down {
            return Err(TopologyError::NoSharedStation { up, down });
        }
        if has_up && has_down {
            return Err(TopologyError::SectionAlreadyExists { up, down });
        }

        let mut sections = self.sections.clone();

        if up == self.terminus() {
            sections.push(candidate);
        } else if down == self.origin() {
            sections.insert(0, candidate);
        } else if let Some(idx) = sections.iter().position(|s| s.up() == up) {
            let existing = sections[idx];
            let rest = remaining_distance(&existing, &candidate)?;
            let tail = Section::new(down, existing.down(), rest)
                .map_err(|_| TopologyError::BrokenChain("split produced a self-loop"))?;
            sections.splice(idx..=idx, [candidate, tail]);
        } else if let Some(idx) = sections.iter().position(|s| s.down() == down) {
            let existing = sections[idx];
            let rest = remaining_distance(&existing, &candidate)?;
            let head = Section::new(existing.up(), up, rest)
                .map_err(|_| TopologyError::BrokenChain("split produced a self-loop"))?;
            sections.splice(idx..=idx, [head, candidate]);
        } else {
            return Err(TopologyError::CannotAttach { up, down });
        }

        debug!(%up, %down, distance = %candidate.distance(), "section added");
        Self::checked(sections)
    }

    /// Returns the chain with `station` removed.
    ///
    /// Removing the origin or terminus drops its one section. Removing an
    /// interior station merges its two sections into one spanning both,
    /// with the distances summed.
    pub fn remove_station(&self, station: StationId) -> Result<LineTopology, TopologyError> {
        if self.sections.len() <= MIN_STATIONS - 1 {
            return Err(TopologyError::BelowMinimumStations(MIN_STATIONS));
        }
        if !self.contains_station(station) {
            return Err(TopologyError::StationNotInLine(station));
        }

        let mut sections = self.sections.clone();

        if station == self.origin() {
            sections.remove(0);
        } else if station == self.terminus() {
            sections.pop();
        } else {
            let idx = sections
                .iter()
                .position(|s| s.down() == station)
                .ok_or(TopologyError::BrokenChain("interior station has no incoming section"))?;
            let incoming = sections[idx];
            let outgoing = *sections
                .get(idx + 1)
                .filter(|s| s.up() == station)
                .ok_or(TopologyError::BrokenChain("interior station has no outgoing section"))?;

            let distance = incoming
                .distance()
                .checked_add(outgoing.distance())
                .ok_or(TopologyError::DistanceOverflow)?;
            let merged = Section::new(incoming.up(), outgoing.down(), distance)
                .map_err(|_| TopologyError::BrokenChain("merge produced a self-loop"))?;
            sections.splice(idx..=idx + 1, [merged]);
        }

        debug!(%station, sections = sections.len(), "station removed");
        Self::checked(sections)
    }

    /// Check every invariant of the chain.
    pub fn validate(&self) -> Result<(), TopologyError> {
        let Some(first) = self.sections.first() else {
            return Err(TopologyError::BrokenChain("line has no sections"));
        };

        for window in self.sections.windows(2) {
            if window[0].down() != window[1].up() {
                return Err(TopologyError::BrokenChain("sections do not connect"));
            }
        }

        let mut seen = HashSet::with_capacity(self.sections.len() + 1);
        seen.insert(first.up());
        for section in &self.sections {
            if !seen.insert(section.down()) {
                return Err(TopologyError::BrokenChain("station appears twice"));
            }
        }

        Ok(())
    }

    /// Wrap freshly spliced sections, failing loudly if they broke the chain.
    fn checked(sections: Vec<Section>) -> Result<LineTopology, TopologyError> {
        let topology = LineTopology { sections };
        if let Err(e) = topology.validate() {
            error!(error = %e, "rejecting spliced line topology");
            return Err(e);
        }
        Ok(topology)
    }
}

/// Distance left over when `candidate` is carved out of `existing`.
fn remaining_distance(
    existing: &Section,
    candidate: &Section,
) -> Result<super::Distance, TopologyError> {
    existing
        .distance()
        .checked_sub(candidate.distance())
        .ok_or(TopologyError::SectionTooLong {
            new: candidate.distance().get(),
            existing: existing.distance().get(),
        })
}
