use crate::error::Result;
use crate::utils::constants::{
    COUNTRY_PROMPT, DASHBOARD_TITLE, LEAFLET_CSS_URL, LEAFLET_JS_URL, OSM_ATTRIBUTION,
    OSM_TILE_URL, YEAR_PROMPT,
};
use crate::views::{ChartView, Dashboard, InfoView, MapView, Panel};
use crate::writers::SvgChartWriter;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};

const PAGE_STYLE: &str = "\
body { margin: 0; display: flex; font-family: Arial, sans-serif; color: #262730; }
aside.sidebar { width: 280px; min-height: 100vh; padding: 24px; background: #f0f2f6; box-sizing: border-box; }
main { flex: 1; padding: 24px 48px; }
.selection span { margin-right: 24px; }
.no-data { padding: 12px; background: #fff3cd; border-radius: 4px; }
";

const MARKER_STYLE: &str = "background-color: rgba(255, 255, 255, 0.8); \
border: 2px solid #4CAF50; border-radius: 8px; box-shadow: 3px 3px 5px #888888; \
padding: 5px; width: 100px; font-family: Arial, sans-serif; font-size: 12pt; \
color: #4CAF50; text-align: center;";

/// Writes a rendered dashboard as one self-contained HTML page: sidebar text,
/// a Leaflet map and the inline SVG chart.
pub struct HtmlDashboardWriter {
    chart_writer: SvgChartWriter,
}

impl HtmlDashboardWriter {
    pub fn new() -> Self {
        Self {
            chart_writer: SvgChartWriter::new(),
        }
    }

    pub fn with_chart_writer(mut self, chart_writer: SvgChartWriter) -> Self {
        self.chart_writer = chart_writer;
        self
    }

    pub fn render_to_string(&self, dashboard: &Dashboard) -> Result<String> {
        let mut page = String::new();

        let _ = write!(
            page,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
            <meta charset=\"utf-8\">\n\
            <title>{title}</title>\n\
            <link rel=\"stylesheet\" href=\"{css}\">\n\
            <script src=\"{js}\"></script>\n\
            <style>\n{style}</style>\n\
            </head>\n<body>\n",
            title = escape_html(DASHBOARD_TITLE),
            css = LEAFLET_CSS_URL,
            js = LEAFLET_JS_URL,
            style = PAGE_STYLE,
        );

        page.push_str("<aside class=\"sidebar\">\n");
        page.push_str(&info_section(&dashboard.info));
        page.push_str("</aside>\n<main>\n");

        let _ = write!(
            page,
            "<h1>{}</h1>\n<p class=\"selection\">\
            <span>{} <strong>{}</strong></span>\
            <span>{} <strong>{}</strong></span></p>\n",
            escape_html(DASHBOARD_TITLE),
            escape_html(COUNTRY_PROMPT),
            escape_html(&dashboard.selection.country),
            escape_html(YEAR_PROMPT),
            dashboard.selection.year,
        );

        page.push_str(&map_section(&dashboard.map)?);
        page.push_str(&self.chart_section(&dashboard.chart));

        page.push_str("</main>\n</body>\n</html>\n");
        Ok(page)
    }

    pub fn write_dashboard(&self, dashboard: &Dashboard, path: &Path) -> Result<()> {
        let page = self.render_to_string(dashboard)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, page)?;

        info!("Wrote dashboard: {}", path.display());
        Ok(())
    }

    /// A chart that fails to draw is replaced by its error; the other panels
    /// still render.
    fn chart_section(&self, panel: &Panel<ChartView>) -> String {
        let body = match panel {
            Panel::Ready(view) => match self.chart_writer.render_to_string(view) {
                Ok(svg) => svg,
                Err(e) => {
                    warn!("Skipping chart render: {}", e);
                    no_data_paragraph(&e.to_string())
                }
            },
            Panel::NoData(message) => no_data_paragraph(message),
        };

        format!("<section class=\"chart-panel\">\n{}\n</section>\n", body)
    }
}

impl Default for HtmlDashboardWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn info_section(panel: &Panel<InfoView>) -> String {
    match panel {
        Panel::Ready(view) => format!(
            "<p><strong>{}</strong></p>\n<p>{}</p>\n<p>{}</p>\n",
            escape_html(&view.header),
            escape_html(&view.highest_line()),
            escape_html(&view.lowest_line()),
        ),
        Panel::NoData(message) => format!("{}\n", no_data_paragraph(message)),
    }
}

fn map_section(panel: &Panel<MapView>) -> Result<String> {
    let view = match panel {
        Panel::Ready(view) => view,
        Panel::NoData(message) => {
            return Ok(format!(
                "<section class=\"map-panel\">\n{}\n</section>\n",
                no_data_paragraph(message)
            ))
        }
    };

    let mut section = String::new();
    let _ = write!(
        section,
        "<section class=\"map-panel\">\n\
        <h3 align=\"center\" style=\"font-size:20px\"><b>{}</b></h3>\n\
        <div id=\"map\" style=\"width:{}px;height:{}px\"></div>\n\
        <script>\n\
        var map = L.map('map').setView([{}, {}], {});\n\
        L.tileLayer({}, {{attribution: {}}}).addTo(map);\n",
        escape_html(&view.title),
        view.width,
        view.height,
        js_number(view.center.latitude),
        js_number(view.center.longitude),
        view.zoom,
        js_string(OSM_TILE_URL)?,
        js_string(OSM_ATTRIBUTION)?,
    );

    for marker in &view.markers {
        let html = format!(
            "<div style=\"{}\"><strong>{}</strong><br>{}</div>",
            MARKER_STYLE,
            escape_html(&marker.label),
            escape_html(&marker.value_label),
        );
        let _ = writeln!(
            section,
            "L.marker([{}, {}], {{icon: L.divIcon({{className: '', html: {}}})}}).addTo(map);",
            js_number(marker.position.latitude),
            js_number(marker.position.longitude),
            js_string(&html)?,
        );
    }

    section.push_str("</script>\n</section>\n");
    Ok(section)
}

fn no_data_paragraph(message: &str) -> String {
    format!("<p class=\"no-data\">{}</p>", escape_html(message))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// JSON string literal, safe inside a `<script>` element
fn js_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?.replace("</", "<\\/"))
}

/// NaN and infinities are not valid JavaScript number literals
fn js_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "NaN".to_string()
    }
}
