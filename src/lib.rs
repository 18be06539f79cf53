//! `mzeic` converts a mass-spectrometry instrument export — a text report
//! listing, per retention-time scan, a series of mass/intensity pairs —
//! into an Extracted Ion Chromatogram (EIC) table, keeping only the
//! intensities for a chosen set of target masses within a tolerance
//! window.
//!
//! [`parse_scan_line`] handles one report line: it extracts the retention
//! time, filters the scan's `(mass, intensity)` pairs against the target
//! windows, and sums matched intensities per target along with the
//! all-or-nothing `signal` aggregate. [`parse_report`] reduces a whole
//! report file into one [`ScanRecord`] per retention time, and
//! [`write_table`] serializes the result as a CSV table sorted by
//! retention time.
//!
//! # Usage
//! ```
//! use mzeic::{parse_report, EicParams};
//!
//! let params = EicParams::new(vec![74.0, 87.0], 0.5);
//! let report = parse_report("./test/data/test.ascii", &params).unwrap();
//! assert_eq!(report.len(), 3);
//! for scan in report.scans() {
//!     println!("{}\t{}", scan.retention_time, scan.signal);
//! }
//! ```
pub mod cli;
pub mod error;
pub mod parse;
pub mod report;
pub mod scan;
pub mod table;
pub mod window;

pub use crate::error::{EicError, EicResult};
pub use crate::parse::{parse_scan_line, ReportReader};
pub use crate::report::{parse_report, EicReport};
pub use crate::scan::{EicParams, ScanRecord};
pub use crate::table::write_table;
