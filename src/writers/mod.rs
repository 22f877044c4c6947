pub mod html_writer;
pub mod json_writer;
pub mod svg_writer;

pub use html_writer::{escape_html, HtmlDashboardWriter};
pub use json_writer::JsonDashboardWriter;
pub use svg_writer::SvgChartWriter;
