pub mod temperature_reader;

pub use temperature_reader::TemperatureReader;
