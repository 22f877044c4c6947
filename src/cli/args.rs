use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_DATA_FILE;

#[derive(Parser)]
#[command(name = "climate-dashboard")]
#[command(about = "Per-country temperature dashboard: map, yearly trend chart and monthly extremes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Dashboard config file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Self-contained HTML page with map, chart and sidebar
    Html,
    /// Panel data as JSON
    Json,
    /// Plain-text summary on stdout
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard for one country and year
    Render {
        #[arg(short, long, help = "Input temperature table", default_value = DEFAULT_DATA_FILE)]
        input: PathBuf,

        #[arg(short, long, help = "Country [default: Ireland, or the first country]")]
        country: Option<String>,

        #[arg(short, long, help = "Year [default: latest year in the table]")]
        year: Option<i32>,

        #[arg(
            short,
            long,
            help = "Output file for html/json [default: output/temperature-dashboard-{country}-{year}.html|.json]"
        )]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        #[arg(long, help = "Also write the chart panel as SVG next to the output file")]
        chart: bool,
    },

    /// List the countries and years offered by the selection controls
    Options {
        #[arg(short, long, help = "Input temperature table", default_value = DEFAULT_DATA_FILE)]
        input: PathBuf,
    },

    /// Interactive session: change the selection and re-render on every change
    Explore {
        #[arg(short, long, help = "Input temperature table", default_value = DEFAULT_DATA_FILE)]
        input: PathBuf,

        #[arg(short, long, help = "HTML file rewritten after each change")]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "climate-dashboard",
            "render",
            "-i",
            "data.csv",
            "-c",
            "Ireland",
            "-y",
            "2012",
            "--format",
            "json",
            "--chart",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                input,
                country,
                year,
                format,
                output,
                chart,
            } => {
                assert_eq!(input, PathBuf::from("data.csv"));
                assert_eq!(country.as_deref(), Some("Ireland"));
                assert_eq!(year, Some(2012));
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
                assert!(chart);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_global_flags_and_defaults() {
        let cli = Cli::try_parse_from(["climate-dashboard", "options", "--verbose"]).unwrap();
        assert!(cli.verbose);

        match cli.command {
            Commands::Options { input } => assert_eq!(input, PathBuf::from(DEFAULT_DATA_FILE)),
            _ => panic!("expected options command"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
