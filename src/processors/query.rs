use crate::models::{Field, TemperatureRecord, TemperatureTable};
use tracing::debug;

/// Borrowed subset of the table, in the table's original row order.
///
/// An empty set is the "no data" outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet<'a> {
    rows: Vec<&'a TemperatureRecord>,
}

impl<'a> RecordSet<'a> {
    pub fn new(rows: Vec<&'a TemperatureRecord>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn first(&self) -> Option<&'a TemperatureRecord> {
        self.rows.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a TemperatureRecord> + '_ {
        self.rows.iter().copied()
    }

    pub fn rows(&self) -> &[&'a TemperatureRecord] {
        &self.rows
    }

    /// `(x, y)` pairs of two columns, one per row
    pub fn pairs(&self, x: Field, y: Field) -> Vec<(f64, f64)> {
        self.iter().map(|r| (r.value(x), r.value(y))).collect()
    }
}

/// Read-only filters over a loaded table
pub struct TemperatureQuery<'a> {
    table: &'a TemperatureTable,
}

impl<'a> TemperatureQuery<'a> {
    pub fn new(table: &'a TemperatureTable) -> Self {
        Self { table }
    }

    /// All rows for `country` in `year`. The pair is not checked against the
    /// table; an absent pair gives an empty set.
    pub fn filter_by_country_and_year(&self, country: &str, year: i32) -> RecordSet<'a> {
        let rows: Vec<_> = self
            .table
            .records()
            .iter()
            .filter(|r| r.country == country && r.year == year)
            .collect();

        debug!(country, year, rows = rows.len(), "Filtered by country and year");
        RecordSet::new(rows)
    }

    /// All rows for `country` across every year
    pub fn filter_by_country(&self, country: &str) -> RecordSet<'a> {
        let rows: Vec<_> = self
            .table
            .records()
            .iter()
            .filter(|r| r.country == country)
            .collect();

        debug!(country, rows = rows.len(), "Filtered by country");
        RecordSet::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table() -> TemperatureTable {
        let mut records = Vec::new();
        let groups = [("Ireland", 2011, 12), ("France", 2012, 12), ("Ireland", 2012, 3)];
        for (country, year, months) in groups {
            for month in 1..=months {
                records.push(TemperatureRecord::new(
                    country,
                    year,
                    NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                    month as f64,
                    10.0,
                    53.41,
                    -8.24,
                ));
            }
        }
        TemperatureTable::new(records)
    }

    #[test]
    fn test_filter_by_country_and_year_returns_matching_rows_in_order() {
        let table = table();
        let query = TemperatureQuery::new(&table);

        let rows = query.filter_by_country_and_year("Ireland", 2012);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.country == "Ireland" && r.year == 2012));

        let months: Vec<u32> = rows.iter().map(|r| r.month_number()).collect();
        assert_eq!(months, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_counts_match_month_entries_for_every_pair() {
        let table = table();
        let query = TemperatureQuery::new(&table);

        for country in table.countries() {
            for &year in table.years() {
                let expected = table
                    .records()
                    .iter()
                    .filter(|r| &r.country == country && r.year == year)
                    .count();
                assert_eq!(query.filter_by_country_and_year(country, year).len(), expected);
            }
        }
    }

    #[test]
    fn test_filter_absent_pair_is_empty() {
        let table = table();
        let query = TemperatureQuery::new(&table);

        assert!(query.filter_by_country_and_year("France", 2011).is_empty());
        assert!(query.filter_by_country_and_year("Atlantis", 2012).is_empty());
        assert!(query.filter_by_country("Atlantis").is_empty());
        assert_eq!(query.filter_by_country("Atlantis").first(), None);
    }

    #[test]
    fn test_filter_by_country_spans_years() {
        let table = table();
        let query = TemperatureQuery::new(&table);

        let rows = query.filter_by_country("Ireland");
        assert_eq!(rows.len(), 15);
        assert_eq!(rows.first().map(|r| r.year), Some(2011));

        let pairs = rows.pairs(Field::Year, Field::YearlyAverageTemperature);
        assert_eq!(pairs.len(), 15);
        assert_eq!(pairs[14], (2012.0, 10.0));
    }
}
