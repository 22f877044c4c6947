use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::models::{Selection, SelectionOptions, TemperatureTable};
use crate::views::{render_with, Dashboard, Panel};
use crate::writers::HtmlDashboardWriter;

const HELP: &str = "Commands:\n  \
    country <name>   select a country\n  \
    year <n>         select a year\n  \
    show             print the current dashboard\n  \
    options          list available countries and years\n  \
    help             show this message\n  \
    quit             leave the session";

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Country(String),
    Year(i32),
    Show,
    Options,
    Help,
    Quit,
}

impl ExploreCommand {
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "country" | "c" if !rest.is_empty() => ExploreCommand::Country(rest.to_string()),
            "year" | "y" => {
                let year = rest.parse::<i32>().map_err(|_| {
                    DashboardError::InvalidCommand(format!("'{}' is not a year", rest))
                })?;
                ExploreCommand::Year(year)
            }
            "show" => ExploreCommand::Show,
            "options" => ExploreCommand::Options,
            "help" | "?" => ExploreCommand::Help,
            "quit" | "exit" | "q" => ExploreCommand::Quit,
            _ => {
                return Err(DashboardError::InvalidCommand(format!(
                    "'{}' (type 'help' for commands)",
                    line
                )))
            }
        };

        Ok(Some(command))
    }
}

/// Interactive host for the dashboard: holds the two selection values and
/// re-renders from the full table after every change.
pub struct ExploreSession<'a> {
    table: &'a TemperatureTable,
    config: &'a DashboardConfig,
    selection: Selection,
    output: Option<PathBuf>,
    writer: HtmlDashboardWriter,
    renders: usize,
}

impl<'a> ExploreSession<'a> {
    pub fn new(
        table: &'a TemperatureTable,
        config: &'a DashboardConfig,
        selection: Selection,
    ) -> Self {
        Self {
            table,
            config,
            selection,
            output: None,
            writer: HtmlDashboardWriter::new(),
            renders: 0,
        }
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "{}", HELP)?;
        self.refresh(out)?;

        for line in input.lines() {
            let line = line?;

            let command = match ExploreCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            debug!(?command, "Explore command");
            match command {
                ExploreCommand::Country(country) => {
                    self.selection = self.selection.clone().with_country(country);
                    self.refresh(out)?;
                }
                ExploreCommand::Year(year) => {
                    self.selection = self.selection.clone().with_year(year);
                    self.refresh(out)?;
                }
                ExploreCommand::Show => {
                    let dashboard = self.render();
                    writeln!(out, "{}", dashboard.summary())?;
                }
                ExploreCommand::Options => {
                    let options =
                        SelectionOptions::from_table(self.table, &self.config.default_country);
                    writeln!(out, "{}", options.summary())?;
                }
                ExploreCommand::Help => writeln!(out, "{}", HELP)?,
                ExploreCommand::Quit => break,
            }
        }

        Ok(())
    }

    fn render(&mut self) -> Dashboard {
        self.renders += 1;
        render_with(self.table, &self.selection, self.config)
    }

    /// Render cycle after a selection change: sidebar text to the terminal,
    /// the full page to the output file
    fn refresh<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let dashboard = self.render();

        writeln!(out, "\n[{}]", dashboard.selection)?;
        match &dashboard.info {
            Panel::Ready(view) => {
                for line in view.lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            Panel::NoData(message) => writeln!(out, "{}", message)?,
        }
        if let Some(message) = dashboard.chart.no_data_message() {
            writeln!(out, "{}", message)?;
        }

        if let Some(path) = &self.output {
            self.writer.write_dashboard(&dashboard, path)?;
        }

        Ok(())
    }
}
