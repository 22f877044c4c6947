pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod views;
pub mod writers;

pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use views::{render, render_with, Dashboard, Panel};
