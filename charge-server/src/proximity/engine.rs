//! Station search: radius filtering, ranking, heatmap and pagination.

use crate::domain::Station;

use super::distance::Proximity;
use super::filter::StationFilter;

/// What shape of result the caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Ranked list, paginated.
    #[default]
    Default,
    /// Raw positions for density maps. Proximity is ignored.
    Heatmap,
    /// Every matching station in one batch.
    All,
}

impl SearchMode {
    /// Pick the mode from the `heatmap` and `all-india` query flags.
    ///
    /// Only the literal value `"true"` enables a flag; heatmap wins when
    /// both are set.
    pub fn from_flags(heatmap: Option<&str>, all: Option<&str>) -> Self {
        if heatmap == Some("true") {
            SearchMode::Heatmap
        } else if all == Some("true") {
            SearchMode::All
        } else {
            SearchMode::Default
        }
    }
}

/// Offset pagination for the default mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    /// `None` returns everything after `offset`.
    pub limit: Option<usize>,
}

/// A station search.
#[derive(Debug, Clone, Default)]
pub struct StationQuery {
    pub filter: StationFilter,
    pub proximity: Option<Proximity>,
    pub mode: SearchMode,
    pub page: Page,
}

/// A search hit, with its distance from the reference point when a
/// proximity filter was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation<'a> {
    pub station: &'a Station,
    pub distance_km: Option<f64>,
}

/// Result of a station search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    Stations(Vec<RankedStation<'a>>),
    /// `[lat, lon]` pairs.
    Heatmap(Vec<[f64; 2]>),
}

/// Run a search over a catalog snapshot.
pub fn search<'a>(stations: &'a [Station], query: &StationQuery) -> SearchOutcome<'a> {
    match query.mode {
        SearchMode::Heatmap => SearchOutcome::Heatmap(heatmap(stations, &query.filter)),
        SearchMode::All => {
            SearchOutcome::Stations(rank(stations, &query.filter, query.proximity.as_ref()))
        }
        SearchMode::Default => {
            let ranked = rank(stations, &query.filter, query.proximity.as_ref());
            let page = ranked
                .into_iter()
                .skip(query.page.offset)
                .take(query.page.limit.unwrap_or(usize::MAX))
                .collect();
            SearchOutcome::Stations(page)
        }
    }
}

/// Positions of every station passing the attribute filters.
pub fn heatmap(stations: &[Station], filter: &StationFilter) -> Vec<[f64; 2]> {
    stations
        .iter()
        .filter(|s| filter.matches(s))
        .map(|s| s.location.lat_lon())
        .collect()
}

/// Filter stations and, given a proximity, keep those within the radius
/// sorted nearest first.
///
/// Without a proximity, catalog order is kept and no distance is attached.
pub fn rank<'a>(
    stations: &'a [Station],
    filter: &StationFilter,
    proximity: Option<&Proximity>,
) -> Vec<RankedStation<'a>> {
    let matching = stations.iter().filter(|s| filter.matches(s));

    let Some(proximity) = proximity else {
        return matching
            .map(|station| RankedStation {
                station,
                distance_km: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedStation<'a>> = matching
        .filter_map(|station| {
            proximity
                .distance_within(station.location)
                .map(|km| RankedStation {
                    station,
                    distance_km: Some(km),
                })
        })
        .collect();

    // Stable sort: equidistant stations keep catalog order
    ranked.sort_by(|a, b| {
        let a = a.distance_km.unwrap_or(f64::INFINITY);
        let b = b.distance_km.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });

    ranked
}
