//! envdash: temperature and drinking-water turbidity aggregation.
//!
//! ```text
//! envdash
//! ├── download     — locate and fetch the two source texts
//! ├── reading      — CSV records, date parsing, weather and turbidity samples
//! ├── deserialise  — source text → normalised samples
//! ├── aggregate    — monthly / yearly means, year profiles, warm-year search
//! ├── align        — coverage gate, dual monthly series, same-day pairs
//! ├── dashboard    — the read API handed to the presentation layer
//! ├── config       — TOML configuration and the coverage registry
//! └── error        — load failures
//! ```

pub mod aggregate;
pub mod align;
pub mod config;
pub mod dashboard;
pub mod deserialise;
pub mod download;
pub mod error;
pub mod reading;

pub use config::{CoverageRegistry, DashboardConfig};
pub use dashboard::{Dashboard, JoinedView, YearRange};
pub use error::PipelineError;
