//! Network catalog: stations, lines and sections as supplied by the
//! topology owner.
//!
//! The catalog is read from a JSON document:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "Gangnam" }],
//!   "lines": [{ "id": 1, "name": "Shinbundang", "extra_fare": 900 }],
//!   "sections": [{ "line": 1, "up": 1, "down": 2, "distance": 10, "duration": 10 }],
//!   "fare": { "basic_fare": 1250 }
//! }
//! ```
//!
//! Ids are resolved to shared values; whether the sections form a sensible
//! network is not checked.

use std::collections::HashMap;
use std::path::Path as FsPath;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{InvalidSection, Line, LineId, Section, Station, StationId};
use crate::fare::{FareConfig, InvalidFareConfig};

/// Errors from loading a network catalog.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Failed to read the catalog file
    #[error("failed to read network: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("duplicate line id {0}")]
    DuplicateLine(LineId),

    /// A section names a station that is not in the catalog
    #[error("section {section} references unknown station {station}")]
    UnknownStation { section: usize, station: StationId },

    /// A section names a line that is not in the catalog
    #[error("section {section} references unknown line {line}")]
    UnknownLine { section: usize, line: LineId },

    /// A section violates its value invariants
    #[error("section {section}: {source}")]
    InvalidSection {
        section: usize,
        source: InvalidSection,
    },

    /// Fare tiers are malformed
    #[error(transparent)]
    InvalidFare(#[from] InvalidFareConfig),
}

#[derive(Deserialize)]
struct StationRecord {
    id: u64,
    name: String,
}

#[derive(Deserialize)]
struct LineRecord {
    id: u64,
    name: String,
    #[serde(default)]
    extra_fare: u64,
}

#[derive(Deserialize)]
struct SectionRecord {
    line: u64,
    up: u64,
    down: u64,
    distance: u64,
    duration: u64,
}

#[derive(Deserialize)]
struct NetworkDocument {
    stations: Vec<StationRecord>,
    lines: Vec<LineRecord>,
    sections: Vec<SectionRecord>,
    #[serde(default)]
    fare: FareConfig,
}

/// A resolved network catalog.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    lines: HashMap<LineId, Arc<Line>>,
    sections: Vec<Section>,
    fare: FareConfig,
}

impl Network {
    /// Read and resolve a catalog file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Parse and resolve a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, NetworkError> {
        let document: NetworkDocument = serde_json::from_str(json)?;
        document.fare.validate()?;

        let mut stations = HashMap::with_capacity(document.stations.len());
        for record in document.stations {
            let id = StationId(record.id);
            if stations
                .insert(id, Station::new(id, record.name))
                .is_some()
            {
                return Err(NetworkError::DuplicateStation(id));
            }
        }

        let mut lines = HashMap::with_capacity(document.lines.len());
        for record in document.lines {
            let id = LineId(record.id);
            let line = Arc::new(Line::new(id, record.name, record.extra_fare));
            if lines.insert(id, line).is_some() {
                return Err(NetworkError::DuplicateLine(id));
            }
        }

        let mut sections = Vec::with_capacity(document.sections.len());
        for (idx, record) in document.sections.into_iter().enumerate() {
            let line = lines
                .get(&LineId(record.line))
                .cloned()
                .ok_or(NetworkError::UnknownLine {
                    section: idx,
                    line: LineId(record.line),
                })?;
            let lookup = |id: u64| {
                stations
                    .get(&StationId(id))
                    .cloned()
                    .ok_or(NetworkError::UnknownStation {
                        section: idx,
                        station: StationId(id),
                    })
            };
            let up = lookup(record.up)?;
            let down = lookup(record.down)?;

            let section = Section::new(line, up, down, record.distance, record.duration)
                .map_err(|source| NetworkError::InvalidSection {
                    section: idx,
                    source,
                })?;
            sections.push(section);
        }

        debug!(
            stations = stations.len(),
            lines = lines.len(),
            sections = sections.len(),
            "Loaded network"
        );

        Ok(Self {
            stations,
            lines,
            sections,
            fare: document.fare,
        })
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn line(&self, id: LineId) -> Option<&Arc<Line>> {
        self.lines.get(&id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn fare_config(&self) -> &FareConfig {
        &self.fare
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "stations": [
            { "id": 1, "name": "Gangnam" },
            { "id": 2, "name": "Seolleung" },
            { "id": 3, "name": "Yangjae" }
        ],
        "lines": [
            { "id": 1, "name": "Shinbundang", "extra_fare": 900 },
            { "id": 2, "name": "Bundang" }
        ],
        "sections": [
            { "line": 1, "up": 1, "down": 2, "distance": 10, "duration": 10 },
            { "line": 2, "up": 2, "down": 3, "distance": 20, "duration": 20 }
        ]
    }"#;

    #[test]
    fn parse_sample() {
        let network = Network::from_json_str(SAMPLE).unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.station(StationId(1)).unwrap().name(), "Gangnam");
        assert!(network.station(StationId(9)).is_none());
        assert_eq!(network.line(LineId(1)).unwrap().extra_fare, 900);
        assert_eq!(network.line(LineId(2)).unwrap().extra_fare, 0);
        assert_eq!(network.sections().len(), 2);
        assert_eq!(network.sections()[1].distance(), 20);
        assert_eq!(network.fare_config(), &FareConfig::default());
    }

    #[test]
    fn sections_share_line_values() {
        let network = Network::from_json_str(SAMPLE).unwrap();
        let line = network.line(LineId(1)).unwrap();
        assert!(Arc::ptr_eq(network.sections()[0].line(), line));
    }

    #[test]
    fn fare_override() {
        let json = SAMPLE.replacen('{', r#"{ "fare": { "basic_fare": 1400 },"#, 1);
        let network = Network::from_json_str(&json).unwrap();
        assert_eq!(network.fare_config().basic_fare, 1400);
        assert_eq!(network.fare_config().step_fare, 100);
    }

    #[test]
    fn invalid_fare_rejected() {
        let json = SAMPLE.replacen('{', r#"{ "fare": { "long_step_km": 0 },"#, 1);
        let err = Network::from_json_str(&json).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidFare(_)));
    }

    #[test]
    fn unknown_station_rejected() {
        let json = SAMPLE.replace(r#""down": 3"#, r#""down": 4"#);
        let err = Network::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::UnknownStation {
                section: 1,
                station: StationId(4)
            }
        ));
        assert_eq!(err.to_string(), "section 1 references unknown station 4");
    }

    #[test]
    fn unknown_line_rejected() {
        let json = SAMPLE.replace(r#""line": 2"#, r#""line": 5"#);
        let err = Network::from_json_str(&json).unwrap_err();
        assert_eq!(err.to_string(), "section 1 references unknown line 5");
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = SAMPLE.replace(r#""id": 3, "name": "Yangjae""#, r#""id": 2, "name": "Yangjae""#);
        let err = Network::from_json_str(&json).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateStation(StationId(2))));

        let json = SAMPLE.replace(r#""id": 2, "name": "Bundang""#, r#""id": 1, "name": "Bundang""#);
        let err = Network::from_json_str(&json).unwrap_err();
        assert!(matches!(err, NetworkError::DuplicateLine(LineId(1))));
    }

    #[test]
    fn invalid_section_rejected() {
        let json = SAMPLE.replace(r#""distance": 20"#, r#""distance": 0"#);
        let err = Network::from_json_str(&json).unwrap_err();
        assert_eq!(
            err.to_string(),
            "section 1: invalid section: distance must be positive"
        );
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Network::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = Network::load(file.path()).unwrap();
        assert_eq!(network.sections().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Network::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
