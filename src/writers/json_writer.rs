use crate::error::Result;
use crate::views::Dashboard;
use std::path::Path;
use tracing::info;

/// Serializes the rendered panels for hosts that draw them themselves
pub struct JsonDashboardWriter {
    pretty: bool,
}

impl JsonDashboardWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render_to_string(&self, dashboard: &Dashboard) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dashboard)?
        } else {
            serde_json::to_string(dashboard)?
        };
        Ok(json)
    }

    pub fn write_dashboard(&self, dashboard: &Dashboard, path: &Path) -> Result<()> {
        let json = self.render_to_string(dashboard)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;

        info!("Wrote dashboard JSON: {}", path.display());
        Ok(())
    }
}

impl Default for JsonDashboardWriter {
    fn default() -> Self {
        Self::new()
    }
}
