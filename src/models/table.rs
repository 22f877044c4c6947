use std::collections::HashSet;

use crate::models::TemperatureRecord;

/// The loaded dataset. Built once at startup, never mutated, and passed by
/// reference to the query and view layers.
#[derive(Debug, Clone, Default)]
pub struct TemperatureTable {
    records: Vec<TemperatureRecord>,
    countries: Vec<String>,
    years: Vec<i32>,
}

impl TemperatureTable {
    pub fn new(records: Vec<TemperatureRecord>) -> Self {
        let mut seen_countries = HashSet::new();
        let mut seen_years = HashSet::new();
        let mut countries = Vec::new();
        let mut years = Vec::new();

        for record in &records {
            if seen_countries.insert(record.country.as_str()) {
                countries.push(record.country.clone());
            }
            if seen_years.insert(record.year) {
                years.push(record.year);
            }
        }

        Self {
            records,
            countries,
            years,
        }
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct countries in order of first appearance
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Distinct years in order of first appearance
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn max_year(&self) -> Option<i32> {
        self.years.iter().copied().max()
    }

    pub fn min_year(&self) -> Option<i32> {
        self.years.iter().copied().min()
    }

    pub fn contains_country(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }
}

impl From<Vec<TemperatureRecord>> for TemperatureTable {
    fn from(records: Vec<TemperatureRecord>) -> Self {
        Self::new(records)
    }
}
