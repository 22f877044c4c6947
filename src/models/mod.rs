pub mod record;
pub mod selection;
pub mod table;

pub use record::{parse_month, Field, TemperatureRecord};
pub use selection::{Selection, SelectionOptions};
pub use table::TemperatureTable;
