//! Attribute filters and free-text search over stations.

use crate::domain::Station;

/// Exact-match attribute filters plus free-text search.
///
/// Unset fields match every station.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationFilter {
    pub city: Option<String>,
    pub state: Option<String>,
    pub connection_type: Option<String>,
    pub operator: Option<String>,
    /// Signed so that a negative count parses and matches nothing.
    pub charging_points: Option<i64>,

    /// Lowercased search terms. Every term must appear in the name,
    /// city or state.
    search_terms: Vec<String>,
}

impl StationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search.
    ///
    /// The text is split on whitespace and commas; blank text clears the
    /// search.
    pub fn with_search(mut self, text: &str) -> Self {
        self.search_terms = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        self
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    /// Check whether a station passes every filter.
    pub fn matches(&self, station: &Station) -> bool {
        eq(&self.city, &station.city)
            && eq(&self.state, &station.state)
            && eq(&self.connection_type, &station.connection_type)
            && self
                .operator
                .as_ref()
                .is_none_or(|op| station.operator.as_ref() == Some(op))
            && self
                .charging_points
                .is_none_or(|n| i64::from(station.charging_points) == n)
            && self.matches_search(station)
    }

    fn matches_search(&self, station: &Station) -> bool {
        if self.search_terms.is_empty() {
            return true;
        }

        let fields = [
            station.name.to_lowercase(),
            station.city.to_lowercase(),
            station.state.to_lowercase(),
        ];

        self.search_terms
            .iter()
            .all(|term| fields.iter().any(|f| f.contains(term.as_str())))
    }
}

fn eq(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().is_none_or(|w| w == actual)
}
