use serde::Serialize;

use crate::config::DashboardConfig;
use crate::models::Field;
use crate::processors::{trend_line, RecordSet, TrendLine};
use crate::views::{no_data_for_country, Panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub style: LineStyle,
    pub points: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn x_range(&self) -> Option<(f64, f64)> {
        finite_range(self.points.iter().map(|(x, _)| *x))
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        finite_range(self.points.iter().map(|(_, y)| *y))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
    pub series: ChartSeries,
    pub trend: ChartSeries,
    pub fit: TrendLine,
}

impl ChartView {
    /// Bounds covering both series, ignoring NaN
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let x = finite_range(
            self.series
                .points
                .iter()
                .chain(&self.trend.points)
                .map(|(x, _)| *x),
        )?;
        let y = finite_range(
            self.series
                .points
                .iter()
                .chain(&self.trend.points)
                .map(|(_, y)| *y),
        )?;
        Some((x, y))
    }
}

fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })
}

/// Yearly average line for every row of the country, plus the fitted trend
/// evaluated at each row's year
pub fn chart_panel(
    rows: &RecordSet<'_>,
    country: &str,
    config: &DashboardConfig,
) -> Panel<ChartView> {
    if rows.is_empty() {
        return Panel::NoData(no_data_for_country(country));
    }

    let points = rows.pairs(Field::Year, Field::YearlyAverageTemperature);
    let fit = trend_line(rows, Field::Year, Field::YearlyAverageTemperature);
    let trend_points = points.iter().map(|(x, _)| (*x, fit.evaluate(*x))).collect();

    Panel::Ready(ChartView {
        title: format!(
            "Yearly Average Temperature for {} ({})",
            country, config.range_label
        ),
        x_label: Field::Year.column_name().to_string(),
        y_label: Field::YearlyAverageTemperature.column_name().to_string(),
        width: config.chart_width,
        height: config.chart_height,
        series: ChartSeries {
            name: country.to_string(),
            style: LineStyle::Solid,
            points,
        },
        trend: ChartSeries {
            name: config.trend_label.clone(),
            style: LineStyle::Dashed,
            points: trend_points,
        },
        fit,
    })
}
