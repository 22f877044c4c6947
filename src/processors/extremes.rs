use crate::models::TemperatureRecord;
use crate::processors::RecordSet;

/// Warmest and coldest monthly readings of a record set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    pub highest: &'a TemperatureRecord,
    pub lowest: &'a TemperatureRecord,
}

impl Extremes<'_> {
    pub fn highest_value(&self) -> f64 {
        self.highest.average_temperature
    }

    pub fn lowest_value(&self) -> f64 {
        self.lowest.average_temperature
    }

    pub fn highest_month(&self) -> String {
        self.highest.month_name()
    }

    pub fn lowest_month(&self) -> String {
        self.lowest.month_name()
    }
}

/// Rows holding the maximum and minimum `AverageTemperature`.
///
/// Ties resolve to the earliest row. NaN readings are ignored; `None` when the
/// set has no finite reading at all.
pub fn extremes_for_year<'a>(rows: &RecordSet<'a>) -> Option<Extremes<'a>> {
    let mut highest: Option<&'a TemperatureRecord> = None;
    let mut lowest: Option<&'a TemperatureRecord> = None;

    for record in rows.iter() {
        let value = record.average_temperature;
        if value.is_nan() {
            continue;
        }

        if highest.map_or(true, |h| value > h.average_temperature) {
            highest = Some(record);
        }
        if lowest.map_or(true, |l| value < l.average_temperature) {
            lowest = Some(record);
        }
    }

    Some(Extremes {
        highest: highest?,
        lowest: lowest?,
    })
}
