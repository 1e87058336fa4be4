//! Station records.

use tracing::debug;

use crate::domain::{Station, StationId, StationName};

use super::{Directory, DirectoryError};

impl Directory {
    /// Register a new station.
    pub fn create_station(&self, name: &str) -> Result<Station, DirectoryError> {
        let name = StationName::parse(name)?;
        let station = Station::new(self.inner.next_station_id(), name);

        self.inner
            .stations
            .write()
            .insert(station.id, station.clone());

        debug!(id = %station.id, name = %station.name, "station created");
        Ok(station)
    }

    /// All stations, ordered by id.
    pub fn stations(&self) -> Vec<Station> {
        self.inner.stations.read().values().cloned().collect()
    }

    pub fn station(&self, id: StationId) -> Result<Station, DirectoryError> {
        self.inner
            .stations
            .read()
            .get(&id)
            .cloned()
            .ok_or(DirectoryError::StationNotFound(id))
    }

    /// Delete a station that no line uses any more.
    pub fn delete_station(&self, id: StationId) -> Result<(), DirectoryError> {
        let lines = self.inner.lines.read();
        let mut stations = self.inner.stations.write();

        if !stations.contains_key(&id) {
            return Err(DirectoryError::StationNotFound(id));
        }
        if let Some(line) = lines.values().find(|l| l.topology.contains_station(id)) {
            return Err(DirectoryError::StationInUse {
                station: id,
                line: line.id,
            });
        }

        stations.remove(&id);
        debug!(%id, "station deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_get() {
        let dir = Directory::new();
        let created = dir.create_station(" 강남역 ").unwrap();
        assert_eq!(created.name.as_str(), "강남역");
        assert_eq!(dir.station(created.id).unwrap(), created);
    }

    #[test]
    fn same_name_distinct_stations() {
        let dir = Directory::new();
        let a = dir.create_station("신촌역").unwrap();
        let b = dir.create_station("신촌역").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(dir.stations().len(), 2);
    }

    #[test]
    fn invalid_name_rejected() {
        let dir = Directory::new();
        assert!(matches!(
            dir.create_station(""),
            Err(DirectoryError::StationName(_))
        ));
        assert!(dir.stations().is_empty());
    }

    #[test]
    fn unknown_station_not_found() {
        let dir = Directory::new();
        assert_eq!(
            dir.station(StationId(99)),
            Err(DirectoryError::StationNotFound(StationId(99)))
        );
        assert_eq!(
            dir.delete_station(StationId(99)),
            Err(DirectoryError::StationNotFound(StationId(99)))
        );
    }

    #[test]
    fn delete_unused_station() {
        let dir = Directory::new();
        let station = dir.create_station("성수역").unwrap();
        dir.delete_station(station.id).unwrap();
        assert!(dir.station(station.id).is_err());
    }

    #[test]
    fn delete_station_in_use_rejected() {
        let dir = Directory::new();
        let a = dir.create_station("건대역").unwrap().id;
        let b = dir.create_station("성수역").unwrap().id;
        let line = dir.create_line("A호선", "bg-black-600", a, b, 7).unwrap();

        assert_eq!(
            dir.delete_station(a),
            Err(DirectoryError::StationInUse {
                station: a,
                line: line.id
            })
        );
        assert!(dir.station(a).is_ok());
    }
}
