//! Domain types for the path and fare engine.
//!
//! Stations, lines and sections are supplied by the topology owner and are
//! never mutated here. Types that carry invariants enforce them at
//! construction time.

mod error;
mod line;
mod path_type;
mod section;
mod station;

pub use error::PathError;
pub use line::{Line, LineId, Lines};
pub use path_type::{InvalidPathType, PathType};
pub use section::{InvalidSection, Section};
pub use station::{Station, StationId};
