pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{chart_path_for, country_slug, generate_default_dashboard_filename};
pub use progress::ProgressReporter;
