use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One row of the dataset: a country's monthly average temperature, with the
/// yearly average and the country's coordinates repeated on every month row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureRecord {
    pub country: String,

    pub year: i32,

    #[serde(deserialize_with = "deserialize_month")]
    pub month: NaiveDate,

    #[serde(deserialize_with = "deserialize_float_or_nan")]
    pub average_temperature: f64,

    #[serde(deserialize_with = "deserialize_float_or_nan")]
    pub yearly_average_temperature: f64,

    #[serde(deserialize_with = "deserialize_float_or_nan")]
    pub latitude: f64,

    #[serde(deserialize_with = "deserialize_float_or_nan")]
    pub longitude: f64,
}

/// Selectable numeric column of a [`TemperatureRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    AverageTemperature,
    YearlyAverageTemperature,
    Latitude,
    Longitude,
}

impl Field {
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Year => "Year",
            Field::AverageTemperature => "AverageTemperature",
            Field::YearlyAverageTemperature => "YearlyAverageTemperature",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl TemperatureRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        country: impl Into<String>,
        year: i32,
        month: NaiveDate,
        average_temperature: f64,
        yearly_average_temperature: f64,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            country: country.into(),
            year,
            month,
            average_temperature,
            yearly_average_temperature,
            latitude,
            longitude,
        }
    }

    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Year => self.year as f64,
            Field::AverageTemperature => self.average_temperature,
            Field::YearlyAverageTemperature => self.yearly_average_temperature,
            Field::Latitude => self.latitude,
            Field::Longitude => self.longitude,
        }
    }

    /// Full English month name of the `Month` column, e.g. "July"
    pub fn month_name(&self) -> String {
        self.month.format("%B").to_string()
    }

    pub fn month_number(&self) -> u32 {
        self.month.month()
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Parse the `Month` column. Only the month is meaningful; the day is whatever
/// the source wrote (usually the 1st).
pub fn parse_month(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    // Bare `YYYY-MM`; its parse error is the one reported
    Ok(NaiveDate::parse_from_str(
        &format!("{}-01", trimmed),
        "%Y-%m-%d",
    )?)
}

fn deserialize_month<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_month(&raw).map_err(serde::de::Error::custom)
}

/// Empty cells become NaN rather than failing the row.
fn deserialize_float_or_nan<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(f64::NAN);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| serde::de::Error::custom(format!("invalid number: '{}'", raw)))
}
