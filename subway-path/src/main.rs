use std::num::ParseIntError;
use std::process::ExitCode;

use subway_path::domain::{InvalidPathType, PathError, PathType, Station, StationId};
use subway_path::fare::InvalidFareConfig;
use subway_path::network::{Network, NetworkError};
use subway_path::route::{RoutePlanner, RouteRequest, RouteSummary};
use tracing::{error, info};

const USAGE: &str =
    "usage: subway-path <network.json> <source-id> <target-id> [DISTANCE|DURATION] [age]";

/// Errors surfaced to the command line.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Wrong number of arguments
    #[error("{}", USAGE)]
    Usage,

    /// Station id is not an unsigned integer
    #[error("invalid station id {raw:?}: {source}")]
    StationId { raw: String, source: ParseIntError },

    /// Age is not an integer
    #[error("invalid age {raw:?}: {source}")]
    Age { raw: String, source: ParseIntError },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    PathType(#[from] InvalidPathType),

    #[error(transparent)]
    Fare(#[from] InvalidFareConfig),

    /// Route query failed; shown with its code
    #[error("[{}] {}", .0.code(), .0)]
    Path(#[from] PathError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(summary) => {
            let names: Vec<&str> = summary.stations.iter().map(|s| s.name()).collect();
            println!("Route:    {}", names.join(" -> "));
            println!("Distance: {} km", summary.distance);
            println!("Duration: {} min", summary.duration);
            println!("Fare:     {} won", summary.fare);
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let CliError::Path(path_error) = &e {
                error!(code = path_error.code(), "Route query failed");
            }
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<RouteSummary, CliError> {
    let [network_path, source, target, rest @ ..] = args else {
        return Err(CliError::Usage);
    };

    let network = Network::load(network_path)?;
    info!(
        path = %network_path,
        stations = network.station_count(),
        sections = network.sections().len(),
        "Network loaded"
    );

    let source = lookup_station(&network, source)?;
    let target = lookup_station(&network, target)?;

    let path_type = match rest.first() {
        Some(tag) => tag.parse::<PathType>()?,
        None => PathType::Distance,
    };

    let mut request = RouteRequest::new(source, target, path_type);
    if let Some(raw) = rest.get(1) {
        let age = raw.parse::<i32>().map_err(|source| CliError::Age {
            raw: raw.clone(),
            source,
        })?;
        request = request.with_age(age);
    }

    let planner = RoutePlanner::from_network(&network)?;
    Ok(planner.plan(&request)?)
}

fn lookup_station(network: &Network, raw: &str) -> Result<Station, CliError> {
    let id = raw.parse::<u64>().map_err(|source| CliError::StationId {
        raw: raw.to_string(),
        source,
    })?;
    // Stations absent from the catalog still reach the planner, which
    // reports them as unknown.
    Ok(network
        .station(StationId(id))
        .cloned()
        .unwrap_or_else(|| Station::new(StationId(id), raw)))
}
