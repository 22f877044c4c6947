use serde::{Deserialize, Serialize};

use crate::models::TemperatureTable;

/// The two user-controlled inputs of the dashboard.
///
/// Neither value is cross-checked against the table: any country string and any
/// year are accepted, and a combination with no rows renders as "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub year: i32,
}

impl Selection {
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
        }
    }

    /// Default selection: `preferred_country` if the table has it, otherwise the
    /// first country; the latest year in the table.
    ///
    /// Returns `None` for an empty table.
    pub fn defaults(table: &TemperatureTable, preferred_country: &str) -> Option<Self> {
        let country = if table.contains_country(preferred_country) {
            preferred_country.to_string()
        } else {
            table.countries().first()?.clone()
        };
        let year = table.max_year()?;

        Some(Self { country, year })
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.country, self.year)
    }
}

/// Choices offered by the two selection controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionOptions {
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub default: Option<Selection>,
}

impl SelectionOptions {
    pub fn from_table(table: &TemperatureTable, preferred_country: &str) -> Self {
        Self {
            countries: table.countries().to_vec(),
            years: table.years().to_vec(),
            default: Selection::defaults(table, preferred_country),
        }
    }

    pub fn summary(&self) -> String {
        let default = self
            .default
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "none (empty dataset)".to_string());

        let years = self
            .years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Countries ({}):\n  {}\n\
            Years ({}):\n  {}\n\
            Default selection: {}",
            self.countries.len(),
            self.countries.join(", "),
            self.years.len(),
            years,
            default
        )
    }
}
