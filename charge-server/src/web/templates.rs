//! Askama templates for the web frontend.

use askama::Template;

/// Home page: station map with search, directions and route planning.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Stations in the catalog when the page was rendered.
    pub station_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_station_count() {
        let html = IndexTemplate {
            station_count: 1234,
        }
        .render()
        .unwrap();
        assert!(html.contains("1234 charging stations"));
        assert!(html.contains("/static/js/app.js"));
    }
}
