use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::cli::explore::ExploreSession;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::logging::init_logging;
use crate::models::{Selection, SelectionOptions, TemperatureTable};
use crate::readers::TemperatureReader;
use crate::utils::filename::{chart_path_for, generate_default_dashboard_filename};
use crate::views::{render_with, Panel};
use crate::writers::{HtmlDashboardWriter, JsonDashboardWriter, SvgChartWriter};

pub fn run(cli: Cli) -> Result<()> {
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = DashboardConfig::load(cli.config.as_deref())?;
    info!(
        default_country = %config.default_country,
        zoom = config.map_zoom,
        "Loaded dashboard config"
    );

    match cli.command {
        Commands::Render {
            input,
            country,
            year,
            output,
            format,
            chart,
        } => {
            let table = load_table(&input, &config)?;
            let selection = resolve_selection(&table, &config, country, year)?;
            info!(country = %selection.country, year = selection.year, "Rendering dashboard");

            let dashboard = render_with(&table, &selection, &config);

            let output = output.unwrap_or_else(|| {
                let html = generate_default_dashboard_filename(&selection.country, selection.year);
                match format {
                    OutputFormat::Json => html.with_extension("json"),
                    _ => html,
                }
            });

            match format {
                OutputFormat::Text => println!("{}", dashboard.summary()),
                OutputFormat::Json => {
                    JsonDashboardWriter::new().write_dashboard(&dashboard, &output)?;
                    println!("Dashboard JSON written to {}", output.display());
                }
                OutputFormat::Html => {
                    HtmlDashboardWriter::new().write_dashboard(&dashboard, &output)?;
                    println!("Dashboard written to {}", output.display());
                }
            }

            if chart {
                let chart_path = chart_path_for(&output);
                match &dashboard.chart {
                    Panel::Ready(view) => {
                        SvgChartWriter::new().write_chart(view, &chart_path)?;
                        println!("Chart written to {}", chart_path.display());
                    }
                    Panel::NoData(message) => {
                        warn!("Chart not written ({}): {}", chart_path.display(), message)
                    }
                }
            }
        }

        Commands::Options { input } => {
            let table = load_table(&input, &config)?;
            let options = SelectionOptions::from_table(&table, &config.default_country);
            println!("{}", options.summary());
        }

        Commands::Explore { input, output } => {
            let table = load_table(&input, &config)?;
            let selection = resolve_selection(&table, &config, None, None)?;

            if let Some(path) = &output {
                println!("Dashboard page: {}", path.display());
            }

            let mut session = ExploreSession::new(&table, &config, selection).with_output(output);
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;

            info!(renders = session.render_count(), "Explore session finished");
        }
    }

    Ok(())
}

fn load_table(input: &Path, config: &DashboardConfig) -> Result<TemperatureTable> {
    TemperatureReader::new()
        .with_delimiter(config.delimiter_byte()?)
        .with_progress(true)
        .read_table(input)
}

/// Explicit values win; missing ones fall back to the table defaults
fn resolve_selection(
    table: &TemperatureTable,
    config: &DashboardConfig,
    country: Option<String>,
    year: Option<i32>,
) -> Result<Selection> {
    let defaults = Selection::defaults(table, &config.default_country);

    let country = match (country, &defaults) {
        (Some(country), _) => country,
        (None, Some(d)) => d.country.clone(),
        (None, None) => {
            return Err(DashboardError::InvalidFormat(
                "Temperature table is empty; pass --country".to_string(),
            ))
        }
    };

    let year = match (year, &defaults) {
        (Some(year), _) => year,
        (None, Some(d)) => d.year,
        (None, None) => {
            return Err(DashboardError::InvalidFormat(
                "Temperature table is empty; pass --year".to_string(),
            ))
        }
    };

    Ok(Selection::new(country, year))
}
