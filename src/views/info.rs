use serde::Serialize;

use crate::processors::{extremes_for_year, RecordSet};
use crate::views::{no_data_for_country_and_year, Panel};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremeReading {
    pub value: f64,
    pub month: String,
}

/// Sidebar text: the year's warmest and coldest months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoView {
    pub header: String,
    pub highest: ExtremeReading,
    pub lowest: ExtremeReading,
}

impl InfoView {
    pub fn highest_line(&self) -> String {
        format!(
            "Highest Recorded: {:.2}°C in {}",
            self.highest.value, self.highest.month
        )
    }

    pub fn lowest_line(&self) -> String {
        format!(
            "Lowest Recorded: {:.2}°C in {}",
            self.lowest.value, self.lowest.month
        )
    }

    pub fn lines(&self) -> Vec<String> {
        vec![self.header.clone(), self.highest_line(), self.lowest_line()]
    }
}

/// Rows exist but carry no usable reading: shown as no data too.
pub fn info_panel(rows: &RecordSet<'_>, country: &str, year: i32) -> Panel<InfoView> {
    let Some(extremes) = extremes_for_year(rows) else {
        return Panel::NoData(no_data_for_country_and_year(country, year));
    };

    Panel::Ready(InfoView {
        header: format!(
            "Highest and Lowest Temperatures for {} in {}:",
            country, year
        ),
        highest: ExtremeReading {
            value: extremes.highest_value(),
            month: extremes.highest_month(),
        },
        lowest: ExtremeReading {
            value: extremes.lowest_value(),
            month: extremes.lowest_month(),
        },
    })
}
