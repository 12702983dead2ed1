//! Generic function for deserialising source text to a Vec of Readings

use tracing::{debug, warn};

use crate::{
    download::SourceKind,
    reading::{parse_records, Reading},
};

/// Samples kept from one source, with a count of the rows that were dropped.
#[derive(Debug, Clone)]
pub struct Ingested<R> {
    pub samples: Vec<R>,
    pub records: usize,
    pub rejected: usize,
}

/// Parse a source text and normalise each record, preserving row order.
pub fn deserialise<R: Reading>(text: &str, kind: SourceKind) -> Ingested<R> {
    let records = parse_records(text);
    let total = records.len();

    let samples: Vec<R> = records.iter().filter_map(R::from_record).collect();
    let rejected = total - samples.len();

    debug!(source = %kind, records = total, kept = samples.len(), "normalised source");
    if rejected > 0 {
        warn!(source = %kind, rejected, "rows rejected during normalisation");
    }

    Ingested {
        samples,
        records: total,
        rejected,
    }
}

// -- Tests -------------------------------------------------------------------
