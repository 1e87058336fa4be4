//! Scenario tests for cross-line path queries.

use super::*;
use crate::domain::{LineTopology, Section, Station, StationId, StationName};
use std::collections::BTreeMap;
use std::sync::Mutex;

const GANGNAM: StationId = StationId(1);
const GYODAE: StationId = StationId(2);
const NAMBU: StationId = StationId(3);
const YANGJAE: StationId = StationId(4);
const KONKUK: StationId = StationId(5);
const SEONGSU: StationId = StationId(6);
const WANGSIMNI: StationId = StationId(7);

fn section(up: StationId, down: StationId, distance: u32) -> Section {
    Section::with_raw_distance(up, down, distance).unwrap()
}

/// Mock network for testing.
struct MockSource {
    stations: BTreeMap<StationId, Station>,
    lines: Vec<LineTopology>,
    snapshot_count: Mutex<usize>,
}

impl MockSource {
    fn new() -> Self {
        Self {
            stations: BTreeMap::new(),
            lines: Vec::new(),
            snapshot_count: Mutex::new(0),
        }
    }

    fn add_station(&mut self, id: StationId, name: &str) {
        self.stations
            .insert(id, Station::new(id, StationName::parse(name).unwrap()));
    }

    fn add_line(&mut self, line: LineTopology) {
        self.lines.push(line);
    }

    fn snapshots_taken(&self) -> usize {
        *self.snapshot_count.lock().unwrap()
    }
}

impl NetworkSource for MockSource {
    fn resolve_station(&self, id: StationId) -> Option<Station> {
        self.stations.get(&id).cloned()
    }

    fn line_topologies(&self) -> Vec<LineTopology> {
        *self.snapshot_count.lock().unwrap() += 1;
        self.lines.clone()
    }
}

/// ```text
/// 교대역 <-- 2호선 d10 -- 강남역
///   |                       |
/// 3호선 d2              신분당선 d10
///   v                       v
/// 남부터미널역 -- 3호선 d3 --> 양재역
///
/// 건대역 -- A호선 d7 --> 성수역 -- d3 --> 왕십리역
/// ```
fn reference_network() -> MockSource {
    let mut source = MockSource::new();
    for (id, name) in [
        (GANGNAM, "강남역"),
        (GYODAE, "교대역"),
        (NAMBU, "남부터미널역"),
        (YANGJAE, "양재역"),
        (KONKUK, "건대역"),
        (SEONGSU, "성수역"),
        (WANGSIMNI, "왕십리역"),
    ] {
        source.add_station(id, name);
    }

    // 2호선
    source.add_line(LineTopology::new(section(GANGNAM, GYODAE, 10)));

    // 3호선, extended at the terminus
    let line3 = LineTopology::new(section(GYODAE, NAMBU, 2))
        .add_section(section(NAMBU, YANGJAE, 3))
        .unwrap();
    source.add_line(line3);

    // 신분당선
    source.add_line(LineTopology::new(section(GANGNAM, YANGJAE, 10)));

    // A호선, disconnected from everything above
    let line_a = LineTopology::new(section(KONKUK, SEONGSU, 7))
        .add_section(section(SEONGSU, WANGSIMNI, 3))
        .unwrap();
    source.add_line(line_a);

    source
}

fn names(route: &Route) -> Vec<&str> {
    route.stations.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn path_along_one_line() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    let route = finder.find(GYODAE, YANGJAE).unwrap();

    assert_eq!(names(&route), vec!["교대역", "남부터미널역", "양재역"]);
    assert_eq!(route.distance, 5);
}

#[test]
fn path_across_lines_beats_direct_line() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    let route = finder.find(GANGNAM, NAMBU).unwrap();

    assert_eq!(names(&route), vec!["강남역", "교대역", "남부터미널역"]);
    assert_eq!(route.distance, 12);
}

#[test]
fn disconnected_lines_have_no_path() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    let err = finder.find(GYODAE, WANGSIMNI).unwrap_err();

    assert_eq!(
        err,
        PathError::NotConnected {
            from: GYODAE,
            to: WANGSIMNI
        }
    );
    assert_eq!(err.kind(), crate::domain::FailureKind::PathNotFound);
}

#[test]
fn disconnected_in_both_directions_when_undirected() {
    let source = reference_network();
    let config = PathConfig::new(EdgeDirection::Both);
    let finder = PathFinder::new(&source, &config);

    assert!(matches!(
        finder.find(GYODAE, WANGSIMNI),
        Err(PathError::NotConnected { .. })
    ));
    assert!(matches!(
        finder.find(WANGSIMNI, GYODAE),
        Err(PathError::NotConnected { .. })
    ));
}

#[test]
fn same_station_is_invalid() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    let err = finder.find(GANGNAM, GANGNAM).unwrap_err();

    assert_eq!(err, PathError::SameStation(GANGNAM));
    assert_eq!(err.kind(), crate::domain::FailureKind::InvalidPathRequest);
    assert_eq!(source.snapshots_taken(), 0);
}

#[test]
fn unknown_stations_not_found() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    let err = finder.find(StationId(99), StationId(98)).unwrap_err();

    assert_eq!(err, PathError::StationNotFound(StationId(99)));
    assert_eq!(err.kind(), crate::domain::FailureKind::NotFound);
    assert_eq!(source.snapshots_taken(), 0);
}

#[test]
fn station_on_no_line_not_found() {
    let mut source = reference_network();
    source.add_station(StationId(50), "미개통역");
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    assert_eq!(
        finder.find(GANGNAM, StationId(50)),
        Err(PathError::StationNotFound(StationId(50)))
    );
}

#[test]
fn directed_search_ignores_reverse_travel() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    // Only reachable against the section direction
    assert!(matches!(
        finder.find(YANGJAE, GANGNAM),
        Err(PathError::NotConnected { .. })
    ));
}

#[test]
fn undirected_search_rides_sections_backwards() {
    let source = reference_network();
    let config = PathConfig::new(EdgeDirection::Both);
    let finder = PathFinder::new(&source, &config);

    let route = finder.find(YANGJAE, GANGNAM).unwrap();

    assert_eq!(names(&route), vec!["양재역", "강남역"]);
    assert_eq!(route.distance, 10);
}

#[test]
fn each_query_takes_a_fresh_snapshot() {
    let source = reference_network();
    let config = PathConfig::default();
    let finder = PathFinder::new(&source, &config);

    finder.find(GYODAE, YANGJAE).unwrap();
    finder.find(GANGNAM, NAMBU).unwrap();

    assert_eq!(source.snapshots_taken(), 2);
}

#[test]
fn snapshot_reflects_topology_changes() {
    let mut source = reference_network();
    let config = PathConfig::default();

    // Shortcut on 2호선: 강남 -> 남부터미널 (4) -> 교대 (6)
    let line2 = source.lines[0]
        .add_section(section(GANGNAM, NAMBU, 4))
        .unwrap();
    source.lines[0] = line2;

    let finder = PathFinder::new(&source, &config);
    let route = finder.find(GANGNAM, NAMBU).unwrap();

    assert_eq!(names(&route), vec!["강남역", "남부터미널역"]);
    assert_eq!(route.distance, 4);
}
