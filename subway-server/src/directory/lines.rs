//! Line records and their section chains.

use tracing::{debug, warn};

use crate::domain::{
    Line, LineColor, LineId, LineName, LineTopology, Section, Station, StationId, TopologyError,
};

use super::{Directory, DirectoryError};

impl Directory {
    /// Create a line with a single section from `up` to `down`.
    pub fn create_line(
        &self,
        name: &str,
        color: &str,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Line, DirectoryError> {
        let name = LineName::parse(name)?;
        let color = LineColor::parse(color)?;

        let mut lines = self.inner.lines.write();
        {
            let stations = self.inner.stations.read();
            for id in [up, down] {
                if !stations.contains_key(&id) {
                    return Err(DirectoryError::StationNotFound(id));
                }
            }
        }

        let section = Section::with_raw_distance(up, down, distance)?;
        let line = Line {
            id: self.inner.next_line_id(),
            name,
            color,
            topology: LineTopology::new(section),
        };
        lines.insert(line.id, line.clone());

        debug!(id = %line.id, name = line.name.as_str(), "line created");
        Ok(line)
    }

    /// All lines, ordered by id.
    pub fn lines(&self) -> Vec<Line> {
        self.inner.lines.read().values().cloned().collect()
    }

    pub fn line(&self, id: LineId) -> Result<Line, DirectoryError> {
        self.inner
            .lines
            .read()
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::LineNotFound(id))
    }

    /// The current section chain of one line.
    pub fn resolve_line(&self, id: LineId) -> Result<LineTopology, DirectoryError> {
        self.line(id).map(|line| line.topology)
    }

    /// Rename or recolour a line.
    pub fn update_line(&self, id: LineId, name: &str, color: &str) -> Result<Line, DirectoryError> {
        let name = LineName::parse(name)?;
        let color = LineColor::parse(color)?;

        let mut lines = self.inner.lines.write();
        let line = lines.get_mut(&id).ok_or(DirectoryError::LineNotFound(id))?;
        line.name = name;
        line.color = color;

        debug!(%id, name = line.name.as_str(), "line updated");
        Ok(line.clone())
    }

    pub fn delete_line(&self, id: LineId) -> Result<(), DirectoryError> {
        if self.inner.lines.write().remove(&id).is_none() {
            return Err(DirectoryError::LineNotFound(id));
        }
        debug!(%id, "line deleted");
        Ok(())
    }

    /// Attach a new section to a line.
    pub fn add_section(
        &self,
        id: LineId,
        up: StationId,
        down: StationId,
        distance: u32,
    ) -> Result<Line, DirectoryError> {
        let mut lines = self.inner.lines.write();
        let (up_name, down_name) = {
            let stations = self.inner.stations.read();
            let name = |station: StationId| {
                stations
                    .get(&station)
                    .map(|s| s.name.clone())
                    .ok_or(DirectoryError::StationNotFound(station))
            };
            (name(up)?, name(down)?)
        };
        let line = lines.get_mut(&id).ok_or(DirectoryError::LineNotFound(id))?;

        let section = Section::with_raw_distance(up, down, distance)?;
        let topology = line
            .topology
            .add_section(section)
            .map_err(|e| match e {
                TopologyError::SectionAlreadyExists { .. } => DirectoryError::DuplicateSection {
                    up: up_name,
                    down: down_name,
                },
                TopologyError::NoSharedStation { .. } => DirectoryError::Unattached {
                    up: up_name,
                    down: down_name,
                },
                other => other.into(),
            })
            .inspect_err(|e| {
                warn!(line = %id, %up, %down, distance, error = %e, "section rejected");
            })?;
        line.topology = topology;

        Ok(line.clone())
    }

    /// Remove a station from a line, merging its neighbouring sections.
    pub fn remove_station(&self, id: LineId, station: StationId) -> Result<Line, DirectoryError> {
        let mut lines = self.inner.lines.write();
        if !self.inner.stations.read().contains_key(&station) {
            return Err(DirectoryError::StationNotFound(station));
        }
        let line = lines.get_mut(&id).ok_or(DirectoryError::LineNotFound(id))?;

        let topology = line.topology.remove_station(station).inspect_err(|e| {
            warn!(line = %id, %station, error = %e, "station removal rejected");
        })?;
        line.topology = topology;

        Ok(line.clone())
    }

    /// Station records along a line, from origin to terminus.
    pub fn stations_on(&self, line: &Line) -> Result<Vec<Station>, DirectoryError> {
        let stations = self.inner.stations.read();
        line.topology
            .stations()
            .into_iter()
            .map(|id| {
                stations
                    .get(&id)
                    .cloned()
                    .ok_or(DirectoryError::StationNotFound(id))
            })
            .collect()
    }
}
