use crate::error::Result;
use crate::models::{TemperatureRecord, TemperatureTable};
use crate::utils::progress::ProgressReporter;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads the delimited temperature table (header row required).
///
/// Rows are taken as-is: no schema checks beyond what deserialization needs, and
/// the first malformed row aborts the load.
pub struct TemperatureReader {
    delimiter: u8,
    trim: bool,
    silent: bool,
}

impl TemperatureReader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            silent: true,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Show a spinner while loading from a path
    pub fn with_progress(mut self, show: bool) -> Self {
        self.silent = !show;
        self
    }

    /// Load the whole file into a table
    pub fn read_table(&self, path: &Path) -> Result<TemperatureTable> {
        let progress =
            ProgressReporter::new_spinner(&format!("Loading {}...", path.display()), self.silent);

        let file = File::open(path)?;
        let records = self.read_records_from(BufReader::new(file))?;

        progress.finish_with_message(&format!("Loaded {} records", records.len()));

        let table = TemperatureTable::new(records);
        info!(
            path = %path.display(),
            records = table.len(),
            countries = table.countries().len(),
            years = table.years().len(),
            "Loaded temperature table"
        );

        Ok(table)
    }

    /// Read records from any reader, in file order
    pub fn read_records_from<R: Read>(&self, reader: R) -> Result<Vec<TemperatureRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: TemperatureRecord = result?;
            records.push(record);
        }

        debug!(rows = records.len(), "Parsed temperature rows");
        Ok(records)
    }
}

impl Default for TemperatureReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Country,Year,Month,AverageTemperature,YearlyAverageTemperature,Latitude,Longitude";

    #[test]
    fn test_read_records_from_str() {
        let data = format!(
            "{}\n\
            Ireland,2012,2012-01-01,2.1,9.8,53.41,-8.24\n\
            Ireland,2012,2012-07-01,18.3,9.8,53.41,-8.24\n",
            HEADER
        );

        let records = TemperatureReader::new()
            .read_records_from(data.as_bytes())
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "Ireland");
        assert_eq!(records[0].year, 2012);
        assert_eq!(records[0].month_name(), "January");
        assert_eq!(records[1].average_temperature, 18.3);
        assert_eq!(records[1].yearly_average_temperature, 9.8);
        assert_eq!(records[1].coordinates(), (53.41, -8.24));
    }

    #[test]
    fn test_empty_numeric_cells_become_nan() {
        let data = format!("{}\nIreland,1890,1890-03-01,,8.1,53.41,-8.24\n", HEADER);

        let records = TemperatureReader::new()
            .read_records_from(data.as_bytes())
            .unwrap();

        assert!(records[0].average_temperature.is_nan());
        assert_eq!(records[0].yearly_average_temperature, 8.1);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = format!("{}\nIreland,not-a-year,2012-01-01,2.1,9.8,53.41,-8.24\n", HEADER);
        assert!(TemperatureReader::new()
            .read_records_from(data.as_bytes())
            .is_err());
    }

    #[test]
    fn test_custom_delimiter_and_whitespace() {
        let data = "Country;Year;Month;AverageTemperature;YearlyAverageTemperature;Latitude;Longitude\n\
            Ireland ; 2012 ; 2012-01-01 ; 2.1 ; 9.8 ; 53.41 ; -8.24\n";

        let records = TemperatureReader::new()
            .with_delimiter(b';')
            .read_records_from(data.as_bytes())
            .unwrap();

        assert_eq!(records[0].country, "Ireland");
        assert_eq!(records[0].average_temperature, 2.1);
    }

    #[test]
    fn test_read_table_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "France,1890,1890-01-01,3.2,11.0,46.0,2.0")?;
        writeln!(temp_file, "Ireland,2012,2012-01-01,2.1,9.8,53.41,-8.24")?;
        writeln!(temp_file, "Ireland,1890,1890-01-01,4.1,9.1,53.41,-8.24")?;

        let table = TemperatureReader::new().read_table(temp_file.path())?;

        assert_eq!(table.len(), 3);
        assert_eq!(table.countries(), &["France".to_string(), "Ireland".to_string()]);
        assert_eq!(table.max_year(), Some(2012));

        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let result = TemperatureReader::new().read_table(Path::new("does/not/exist.csv"));
        assert!(result.is_err());
    }
}
