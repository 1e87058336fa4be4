//! In-memory station and line directory.
//!
//! Owns every station and line record and hands out validated snapshots.
//! Line mutations run under the line table's write lock: the new topology is
//! built and validated first, then swapped in, so readers only ever see a
//! complete chain.
//!
//! Locks are always taken lines first, then stations.

mod error;
mod lines;
mod stations;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::{Line, LineId, LineTopology, Station, StationId};
use crate::network::NetworkSource;

pub use error::DirectoryError;

/// Thread-safe registry of stations and lines.
#[derive(Clone, Default)]
pub struct Directory {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    stations: RwLock<BTreeMap<StationId, Station>>,
    lines: RwLock<BTreeMap<LineId, Line>>,
    last_station_id: AtomicU64,
    last_line_id: AtomicU64,
}

impl Inner {
    fn next_station_id(&self) -> StationId {
        StationId(self.last_station_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn next_line_id(&self) -> LineId {
        LineId(self.last_line_id.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NetworkSource for Directory {
    fn resolve_station(&self, id: StationId) -> Option<Station> {
        self.inner.stations.read().get(&id).cloned()
    }

    fn line_topologies(&self) -> Vec<LineTopology> {
        self.inner
            .lines
            .read()
            .values()
            .map(|line| line.topology.clone())
            .collect()
    }
}
