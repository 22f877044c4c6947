use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

use crate::error::{DashboardError, Result};
use crate::utils::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_COUNTRY, DEFAULT_MAP_HEIGHT,
    DEFAULT_MAP_WIDTH, DEFAULT_MAP_ZOOM, ENV_PREFIX, HISTORICAL_RANGE_LABEL, TRENDLINE_LABEL,
};

/// Presentation settings shared by the three views and the writers.
///
/// Layered as: built-in defaults, then an optional config file, then
/// `DASHBOARD_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    #[validate(length(min = 1))]
    pub default_country: String,

    #[validate(range(min = 1, max = 18))]
    pub map_zoom: u8,

    #[validate(range(min = 100))]
    pub map_width: u32,

    #[validate(range(min = 100))]
    pub map_height: u32,

    #[validate(range(min = 100))]
    pub chart_width: u32,

    #[validate(range(min = 100))]
    pub chart_height: u32,

    pub range_label: String,

    #[validate(length(min = 1))]
    pub trend_label: String,

    #[validate(length(min = 1, max = 1))]
    pub delimiter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_country: DEFAULT_COUNTRY.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            range_label: HISTORICAL_RANGE_LABEL.to_string(),
            trend_label: TRENDLINE_LABEL.to_string(),
            delimiter: ",".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from an optional file plus the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            debug!(path = %path.display(), "Reading dashboard config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()?;

        let config: DashboardConfig = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Input delimiter as a single byte for the CSV reader
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(DashboardError::InvalidFormat(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_country, "Ireland");
        assert_eq!(config.map_zoom, 6);
        assert_eq!(config.range_label, "1890 - 2012");
        assert_eq!(config.trend_label, "Trendline (10 years)");
        assert_eq!(config.delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_load_from_file_overrides_defaults() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "default_country = \"France\"")?;
        writeln!(file, "map_zoom = 4")?;
        writeln!(file, "chart_width = 900")?;

        let config = DashboardConfig::load(Some(file.path()))?;

        assert_eq!(
            config,
            DashboardConfig {
                default_country: "France".to_string(),
                map_zoom: 4,
                chart_width: 900,
                ..DashboardConfig::default()
            }
        );
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "map_zoom = 30")?;

        let result = DashboardConfig::load(Some(file.path()));
        assert!(matches!(result, Err(DashboardError::Validation(_))));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = DashboardConfig::load(Some(Path::new("no/such/dashboard.toml")));
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let config = DashboardConfig {
            delimiter: "§".to_string(),
            ..DashboardConfig::default()
        };
        assert!(config.delimiter_byte().is_err());
    }
}
