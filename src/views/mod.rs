//! The three dashboard panels and the render cycle that produces them.
//!
//! Every panel is a pure function of the table and the current selection.
//! Panels are computed independently, so one panel having no data never
//! affects the others.

pub mod chart;
pub mod info;
pub mod map;

pub use chart::{chart_panel, ChartSeries, ChartView, LineStyle};
pub use info::{info_panel, ExtremeReading, InfoView};
pub use map::{map_panel, Coordinates, MapMarker, MapView};

use serde::Serialize;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::{Selection, TemperatureTable};
use crate::processors::TemperatureQuery;

/// A panel either has something to draw or a sentence explaining why not
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready(T),
    NoData(String),
}

impl<T> Panel<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Panel::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Panel::Ready(view) => Some(view),
            Panel::NoData(_) => None,
        }
    }

    pub fn no_data_message(&self) -> Option<&str> {
        match self {
            Panel::Ready(_) => None,
            Panel::NoData(message) => Some(message),
        }
    }
}

pub fn no_data_for_country(country: &str) -> String {
    format!("No data available for {}", country)
}

pub fn no_data_for_country_and_year(country: &str, year: i32) -> String {
    format!("No data available for {} in {}", country, year)
}

/// Output of one render cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub selection: Selection,
    pub map: Panel<MapView>,
    pub chart: Panel<ChartView>,
    pub info: Panel<InfoView>,
}

impl Dashboard {
    /// Plain-text rendering, one block per panel
    pub fn summary(&self) -> String {
        let map = match &self.map {
            Panel::Ready(view) => format!(
                "{}\nCentre: {} (zoom {}), {} marker(s)\n{}",
                view.title,
                view.center,
                view.zoom,
                view.markers.len(),
                view.markers
                    .first()
                    .map(|m| format!("{}: {}", m.label, m.value_label))
                    .unwrap_or_default()
            ),
            Panel::NoData(message) => message.clone(),
        };

        let chart = match &self.chart {
            Panel::Ready(view) => format!(
                "{}\n{} point(s), trend slope {:+.4}°C/year",
                view.title,
                view.series.points.len(),
                view.fit.slope
            ),
            Panel::NoData(message) => message.clone(),
        };

        let info = match &self.info {
            Panel::Ready(view) => view.lines().join("\n"),
            Panel::NoData(message) => message.clone(),
        };

        format!(
            "Selection: {}\n\n\
            Map:\n{}\n\n\
            Chart:\n{}\n\n\
            Sidebar:\n{}",
            self.selection, map, chart, info
        )
    }
}

/// Run one render cycle with default presentation settings
pub fn render(table: &TemperatureTable, country: &str, year: i32) -> Dashboard {
    render_with(table, &Selection::new(country, year), &DashboardConfig::default())
}

/// Run one render cycle: re-query the full table and build all three panels
pub fn render_with(
    table: &TemperatureTable,
    selection: &Selection,
    config: &DashboardConfig,
) -> Dashboard {
    let query = TemperatureQuery::new(table);
    let country = selection.country.as_str();
    let year = selection.year;

    let year_rows = query.filter_by_country_and_year(country, year);
    let country_rows = query.filter_by_country(country);

    let dashboard = Dashboard {
        selection: selection.clone(),
        map: map_panel(&year_rows, country, year, config),
        chart: chart_panel(&country_rows, country, config),
        info: info_panel(&year_rows, country, year),
    };

    debug!(
        country,
        year,
        map = dashboard.map.is_ready(),
        chart = dashboard.chart.is_ready(),
        info = dashboard.info.is_ready(),
        "Rendered dashboard"
    );

    dashboard
}
