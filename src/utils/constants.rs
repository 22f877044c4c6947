/// Page and panel titles
pub const DASHBOARD_TITLE: &str = "Global Temperatures Visualization";
pub const COUNTRY_PROMPT: &str = "Select Country:";
pub const YEAR_PROMPT: &str = "Select Year:";

/// Selection defaults
pub const DEFAULT_COUNTRY: &str = "Ireland";
pub const DEFAULT_DATA_FILE: &str = "Global_temperatures_for_streamlit.csv";

/// Static extent of the source dataset, shown in the chart title
pub const HISTORICAL_RANGE_LABEL: &str = "1890 - 2012";
pub const TRENDLINE_LABEL: &str = "Trendline (10 years)";

/// Map defaults
pub const DEFAULT_MAP_ZOOM: u8 = 6;
pub const DEFAULT_MAP_WIDTH: u32 = 700;
pub const DEFAULT_MAP_HEIGHT: u32 = 500;

/// Chart defaults
pub const DEFAULT_CHART_WIDTH: u32 = 700;
pub const DEFAULT_CHART_HEIGHT: u32 = 450;

/// Leaflet assets used by the HTML map panel
pub const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Output defaults
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Configuration
pub const ENV_PREFIX: &str = "DASHBOARD";
