use clap::Parser;
use climate_dashboard::cli::{run, Cli};
use climate_dashboard::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
