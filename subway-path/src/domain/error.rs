//! Path query error types.
//!
//! All three are caller-input errors. They are raised at query time and
//! carry no partial result.

use super::StationId;

/// Errors from a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and target are the same station
    #[error("source and target stations are the same")]
    SameStation,

    /// Station is not touched by any section of the network
    #[error("station {0} does not exist on any line")]
    UnknownStation(StationId),

    /// Both stations exist but are not connected
    #[error("source and target stations are not connected")]
    NoPath,
}

impl PathError {
    /// Stable machine-readable code for the calling layer.
    pub fn code(&self) -> &'static str {
        match self {
            PathError::SameStation => "SAME_STATION",
            PathError::UnknownStation(_) => "UNKNOWN_STATION",
            PathError::NoPath => "NO_PATH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::SameStation;
        assert_eq!(err.to_string(), "source and target stations are the same");

        let err = PathError::UnknownStation(StationId(7));
        assert_eq!(err.to_string(), "station 7 does not exist on any line");

        let err = PathError::NoPath;
        assert_eq!(
            err.to_string(),
            "source and target stations are not connected"
        );
    }

    #[test]
    fn error_codes_are_distinct() {
        let codes = [
            PathError::SameStation.code(),
            PathError::UnknownStation(StationId(1)).code(),
            PathError::NoPath.code(),
        ];
        assert_eq!(codes, ["SAME_STATION", "UNKNOWN_STATION", "NO_PATH"]);
    }
}
