use crate::error::{DashboardError, Result};
use crate::views::{ChartSeries, ChartView, LineStyle};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;
use tracing::info;

const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);
const TREND_COLOR: RGBColor = RED;

/// Draws a chart panel as SVG
pub struct SvgChartWriter {
    caption_size: u32,
    dash_size: u32,
    dash_spacing: u32,
}

impl SvgChartWriter {
    pub fn new() -> Self {
        Self {
            caption_size: 20,
            dash_size: 8,
            dash_spacing: 5,
        }
    }

    pub fn with_caption_size(mut self, size: u32) -> Self {
        self.caption_size = size;
        self
    }

    /// Render to an SVG document held in memory
    pub fn render_to_string(&self, view: &ChartView) -> Result<String> {
        let mut svg = String::new();
        self.draw(view, &mut svg)
            .map_err(|e| DashboardError::Chart(e.to_string()))?;
        Ok(svg)
    }

    pub fn write_chart(&self, view: &ChartView, path: &Path) -> Result<()> {
        let svg = self.render_to_string(view)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;

        info!("Wrote chart: {}", path.display());
        Ok(())
    }

    fn draw(
        &self,
        view: &ChartView,
        out: &mut String,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let ((x_min, x_max), (y_min, y_max)) = view
            .bounds()
            .ok_or("chart has no finite points to draw")?;
        let (x_min, x_max) = pad_range(x_min, x_max, 0.0, 1.0);
        let (y_min, y_max) = pad_range(y_min, y_max, 0.1, 1.0);

        let root = SVGBackend::with_string(out, (view.width, view.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&view.title, ("sans-serif", self.caption_size))
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc(view.x_label.as_str())
            .y_desc(view.y_label.as_str())
            .x_label_formatter(&|v| format!("{:.0}", v))
            .y_label_formatter(&|v| format!("{:.1}", v))
            .light_line_style(BLACK.mix(0.1))
            .draw()?;

        for (series, color) in [(&view.series, SERIES_COLOR), (&view.trend, TREND_COLOR)] {
            let points = finite_points(series);
            let style = color.stroke_width(2);

            let drawn = match series.style {
                LineStyle::Solid => chart.draw_series(LineSeries::new(points, style))?,
                LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                    points,
                    self.dash_size,
                    self.dash_spacing,
                    style,
                ))?,
            };
            drawn
                .label(series.name.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.4))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Default for SvgChartWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_points(series: &ChartSeries) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect()
}

/// Widen a range by `fraction` of its span, or by `fallback` when it is empty
fn pad_range(lo: f64, hi: f64, fraction: f64, fallback: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < 1e-9 {
        (lo - fallback, hi + fallback)
    } else {
        (lo - span * fraction, hi + span * fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::{TemperatureRecord, TemperatureTable};
    use crate::processors::{TemperatureQuery, TrendLine};
    use crate::views::{chart_panel, Panel};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn ireland_chart() -> ChartView {
        let records = (1890..=2012)
            .map(|year| {
                TemperatureRecord::new(
                    "Ireland",
                    year,
                    NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                    5.0,
                    8.8 + 0.01 * (year - 1890) as f64,
                    53.41,
                    -8.24,
                )
            })
            .collect::<Vec<_>>();
        let table = TemperatureTable::new(records);
        let rows = TemperatureQuery::new(&table).filter_by_country("Ireland");

        match chart_panel(&rows, "Ireland", &DashboardConfig::default()) {
            Panel::Ready(view) => view,
            Panel::NoData(message) => panic!("unexpected empty chart: {}", message),
        }
    }

    #[test]
    fn test_render_chart_svg() {
        let svg = SvgChartWriter::new().render_to_string(&ireland_chart()).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Yearly Average Temperature for Ireland (1890 - 2012)"));
        assert!(svg.contains("Trendline (10 years)"));
        assert!(svg.contains("YearlyAverageTemperature"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_write_chart_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("charts/ireland.svg");

        SvgChartWriter::new()
            .write_chart(&ireland_chart(), &path)
            .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Yearly Average Temperature for Ireland"));
    }

    #[test]
    fn test_chart_without_finite_points_fails() {
        let nan_series = |name: &str, style| ChartSeries {
            name: name.to_string(),
            style,
            points: vec![(2012.0, f64::NAN)],
        };
        let view = ChartView {
            title: "Yearly Average Temperature for Nowhere".to_string(),
            x_label: "Year".to_string(),
            y_label: "YearlyAverageTemperature".to_string(),
            width: 700,
            height: 450,
            series: nan_series("Nowhere", LineStyle::Solid),
            trend: nan_series("Trendline (10 years)", LineStyle::Dashed),
            fit: TrendLine::new(0.0, 0.0),
        };

        assert!(matches!(
            SvgChartWriter::new().render_to_string(&view),
            Err(DashboardError::Chart(_))
        ));
    }

    #[test]
    fn test_pad_range() {
        assert_eq!(pad_range(2012.0, 2012.0, 0.0, 1.0), (2011.0, 2013.0));
        assert_eq!(pad_range(0.0, 10.0, 0.1, 1.0), (-1.0, 11.0));
        assert_eq!(pad_range(1890.0, 2012.0, 0.0, 1.0), (1890.0, 2012.0));
    }

    #[test]
    fn test_finite_points_drop_nan() {
        let series = ChartSeries {
            name: "Ireland".to_string(),
            style: LineStyle::Solid,
            points: vec![(1990.0, 9.0), (1991.0, f64::NAN), (1992.0, 9.4)],
        };
        assert_eq!(finite_points(&series), vec![(1990.0, 9.0), (1992.0, 9.4)]);
    }
}
