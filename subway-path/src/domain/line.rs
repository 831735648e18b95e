//! Line types and the per-route line set.

use std::fmt;
use std::sync::Arc;

use super::Section;

/// Opaque line identifier assigned by the topology owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line and the surcharge charged for riding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    pub name: String,

    /// Surcharge in won added to the fare of any route using this line.
    pub extra_fare: u64,
}

impl Line {
    pub fn new(id: LineId, name: impl Into<String>, extra_fare: u64) -> Self {
        Self {
            id,
            name: name.into(),
            extra_fare,
        }
    }
}

/// The distinct lines touched by a route, in first-use order.
#[derive(Debug, Clone, Default)]
pub struct Lines {
    lines: Vec<Arc<Line>>,
}

impl Lines {
    /// Collect the lines used by a sequence of traversed sections.
    ///
    /// A line appearing on several sections is kept once.
    pub fn from_sections(sections: &[Section]) -> Self {
        let mut lines: Vec<Arc<Line>> = Vec::new();
        for section in sections {
            if !lines.iter().any(|l| l.id == section.line().id) {
                lines.push(section.line().clone());
            }
        }
        Self { lines }
    }

    /// The surcharge owed for the route: the highest extra fare among its
    /// lines, or 0 when no line carries one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use subway_path::domain::{Line, LineId, Lines, Section, Station, StationId};
    ///
    /// let a = Station::new(StationId(1), "A");
    /// let b = Station::new(StationId(2), "B");
    /// let c = Station::new(StationId(3), "C");
    /// let red = Arc::new(Line::new(LineId(1), "Red", 500));
    /// let blue = Arc::new(Line::new(LineId(2), "Blue", 900));
    /// let sections = vec![
    ///     Section::new(red, a, b.clone(), 5, 5).unwrap(),
    ///     Section::new(blue, b, c, 5, 5).unwrap(),
    /// ];
    /// assert_eq!(Lines::from_sections(&sections).max_extra_fare(), 900);
    /// ```
    pub fn max_extra_fare(&self) -> u64 {
        self.lines.iter().map(|l| l.extra_fare).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().map(|l| l.as_ref())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, StationId};

    fn station(id: u64) -> Station {
        Station::new(StationId(id), format!("S{id}"))
    }

    fn section(line: &Arc<Line>, up: u64, down: u64) -> Section {
        Section::new(line.clone(), station(up), station(down), 3, 3).unwrap()
    }

    #[test]
    fn empty_route_has_no_surcharge() {
        let lines = Lines::from_sections(&[]);
        assert!(lines.is_empty());
        assert_eq!(lines.max_extra_fare(), 0);
    }

    #[test]
    fn lines_without_surcharge_add_nothing() {
        let free = Arc::new(Line::new(LineId(1), "Free", 0));
        let lines = Lines::from_sections(&[section(&free, 1, 2), section(&free, 2, 3)]);
        assert_eq!(lines.max_extra_fare(), 0);
    }

    #[test]
    fn highest_surcharge_wins_not_sum() {
        let cheap = Arc::new(Line::new(LineId(1), "Cheap", 300));
        let dear = Arc::new(Line::new(LineId(2), "Dear", 800));
        let lines = Lines::from_sections(&[
            section(&cheap, 1, 2),
            section(&dear, 2, 3),
            section(&cheap, 3, 4),
        ]);
        assert_eq!(lines.max_extra_fare(), 800);
    }

    #[test]
    fn repeated_line_kept_once_in_order() {
        let one = Arc::new(Line::new(LineId(1), "One", 0));
        let two = Arc::new(Line::new(LineId(2), "Two", 100));
        let lines = Lines::from_sections(&[
            section(&two, 1, 2),
            section(&one, 2, 3),
            section(&two, 3, 4),
        ]);
        let ids: Vec<LineId> = lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![LineId(2), LineId(1)]);
        assert_eq!(lines.len(), 2);
    }
}
