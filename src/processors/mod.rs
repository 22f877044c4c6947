pub mod extremes;
pub mod query;
pub mod trend;

pub use extremes::{extremes_for_year, Extremes};
pub use query::{RecordSet, TemperatureQuery};
pub use trend::{trend_line, TrendLine};
