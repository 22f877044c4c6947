use crate::utils::constants::DEFAULT_OUTPUT_DIR;
use std::path::{Path, PathBuf};

/// Lowercase ASCII slug of a country name, e.g. "Côte D'Ivoire" -> "c-te-d-ivoire"
pub fn country_slug(country: &str) -> String {
    let mut slug = String::with_capacity(country.len());
    let mut last_dash = true;

    for c in country.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "unknown".to_string()
    } else {
        slug
    }
}

/// Generate default dashboard filename: output/temperature-dashboard-{country}-{year}.html
pub fn generate_default_dashboard_filename(country: &str, year: i32) -> PathBuf {
    let filename = format!(
        "temperature-dashboard-{}-{}.html",
        country_slug(country),
        year
    );
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

/// Chart SVG path next to a dashboard file, e.g. foo.html -> foo-chart.svg
pub fn chart_path_for(dashboard: &Path) -> PathBuf {
    let stem = dashboard
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dashboard".to_string());
    dashboard.with_file_name(format!("{}-chart.svg", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_slug() {
        assert_eq!(country_slug("Ireland"), "ireland");
        assert_eq!(country_slug("United Kingdom"), "united-kingdom");
        assert_eq!(country_slug("Côte D'Ivoire"), "c-te-d-ivoire");
        assert_eq!(country_slug("  "), "unknown");
    }

    #[test]
    fn test_generate_default_dashboard_filename() {
        let filename = generate_default_dashboard_filename("Ireland", 2012);
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output"));
        assert!(filename_str.ends_with("temperature-dashboard-ireland-2012.html"));
    }

    #[test]
    fn test_chart_path_for() {
        let chart = chart_path_for(Path::new("output/temperature-dashboard-ireland-2012.html"));
        assert_eq!(
            chart,
            PathBuf::from("output/temperature-dashboard-ireland-2012-chart.svg")
        );
    }
}
