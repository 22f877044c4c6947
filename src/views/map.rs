use serde::Serialize;

use crate::config::DashboardConfig;
use crate::processors::RecordSet;
use crate::views::{no_data_for_country_and_year, Panel};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinates,
    /// Country name, shown in bold
    pub label: String,
    /// Yearly average, e.g. "9.8°C"
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub title: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<MapMarker>,
}

/// Map centred on the country, one marker per monthly row.
///
/// Coordinates are constant per country, so the markers sit on top of each
/// other; that is kept as-is.
pub fn map_panel(
    rows: &RecordSet<'_>,
    country: &str,
    year: i32,
    config: &DashboardConfig,
) -> Panel<MapView> {
    let Some(first) = rows.first() else {
        return Panel::NoData(no_data_for_country_and_year(country, year));
    };

    let markers = rows
        .iter()
        .map(|r| MapMarker {
            position: Coordinates {
                latitude: r.latitude,
                longitude: r.longitude,
            },
            label: country.to_string(),
            value_label: format!("{:.1}°C", r.yearly_average_temperature),
        })
        .collect();

    Panel::Ready(MapView {
        title: format!("Average Temperature in {} for {}", year, country),
        center: Coordinates {
            latitude: first.latitude,
            longitude: first.longitude,
        },
        zoom: config.map_zoom,
        width: config.map_width,
        height: config.map_height,
        markers,
    })
}
