//! Reduction of a whole report into one record per retention time.

use std::path::Path;

use log::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EicResult;
use crate::parse::ReportReader;
use crate::scan::{EicParams, ScanRecord};

/// The aggregated result of converting one report.
///
/// Records are kept in file order, keyed by their retention times;
/// [`crate::table::write_table`] sorts rows by ascending retention time
/// when serializing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EicReport {
    params: EicParams,
    scans: Vec<ScanRecord>,
}

impl EicReport {
    pub fn new(params: EicParams, scans: Vec<ScanRecord>) -> Self {
        Self { params, scans }
    }

    pub fn params(&self) -> &EicParams {
        &self.params
    }

    /// All scan records, in file order
    pub fn scans(&self) -> &[ScanRecord] {
        &self.scans
    }

    /// Retention times in file order
    pub fn retention_times(&self) -> impl Iterator<Item = f64> + '_ {
        self.scans.iter().map(|s| s.retention_time)
    }

    /// Look up the record for an exact retention time
    pub fn get(&self, retention_time: f64) -> Option<&ScanRecord> {
        self.scans
            .iter()
            .find(|s| s.retention_time == retention_time)
    }

    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }
}

/// Convert every line of the report at `path` into scan records.
///
/// The file is read sequentially through a [`ReportReader`]. The first
/// unreadable or malformed line aborts the whole conversion; there is no
/// partial-file success.
pub fn parse_report<P: AsRef<Path>>(path: P, params: &EicParams) -> EicResult<EicReport> {
    let reader = ReportReader::open(path.as_ref(), params.clone())?;
    let mut scans = Vec::new();
    for record in reader {
        scans.push(record?);
    }
    info!(
        "parsed {} scans from {}",
        scans.len(),
        path.as_ref().display()
    );
    Ok(EicReport::new(params.clone(), scans))
}
