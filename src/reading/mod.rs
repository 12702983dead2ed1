pub mod date;
pub mod record;
pub mod turbidity;
pub mod weather;

pub use record::{parse_records, RawValue, Record};
pub use turbidity::TurbiditySample;
pub use weather::WeatherSample;

// Define a trait for normalising a parsed record into a typed sample
pub trait Reading: Sized {
    /// Returns `None` when the record is rejected.
    fn from_record(record: &Record) -> Option<Self>;
}
