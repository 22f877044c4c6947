use serde::Serialize;

use crate::models::Field;
use crate::processors::RecordSet;

/// Straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Least-squares fit of a first-degree polynomial.
    ///
    /// Pairs with a non-finite coordinate are skipped. With fewer than two
    /// distinct x values the line is flat at the mean of y (0 when nothing is
    /// left to average).
    pub fn fit(points: &[(f64, f64)]) -> Self {
        let finite: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();

        if finite.is_empty() {
            return Self::new(0.0, 0.0);
        }

        let n = finite.len() as f64;
        let mean_x = finite.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = finite.iter().map(|(_, y)| y).sum::<f64>() / n;

        // Centre x before accumulating; raw years squared lose precision
        let (sxx, sxy) = finite.iter().fold((0.0, 0.0), |(sxx, sxy), (x, y)| {
            let dx = x - mean_x;
            (sxx + dx * dx, sxy + dx * (y - mean_y))
        });

        if sxx == 0.0 {
            return Self::new(0.0, mean_y);
        }

        let slope = sxy / sxx;
        Self::new(slope, mean_y - slope * mean_x)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a trend through two columns of a record set
pub fn trend_line(rows: &RecordSet<'_>, x: Field, y: Field) -> TrendLine {
    TrendLine::fit(&rows.pairs(x, y))
}
