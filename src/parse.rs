//! Per-line parsing of instrument ASCII scan reports.
//!
//! Each report line is one scan: a comma-separated record whose first field
//! is the retention time, followed by a mix of metadata tokens and
//! space-separated `mass intensity` pairs.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{EicError, EicResult};
use crate::scan::{EicParams, ScanRecord};
use crate::window::first_match;

/// Parse one report line into a [`ScanRecord`].
///
/// The first comma-separated field is the retention time; a non-numeric
/// retention time fails the whole line. Every following field that splits
/// into exactly two whitespace-separated numeric tokens is a
/// `(mass, intensity)` pair; all other fields are skipped. The intensity of
/// each pair whose mass falls inside the first matching target window is
/// added to that target's accumulator.
pub fn parse_scan_line(line: &str, params: &EicParams) -> EicResult<ScanRecord> {
    let mut fields = line.split(',');
    // `split` always yields at least one item
    let rt_field = fields.next().unwrap_or("");
    let retention_time: f64 = rt_field.trim().parse().map_err(|_| {
        EicError::MalformedRecord(format!("invalid retention time {rt_field:?}"))
    })?;

    let mut intensities = vec![0.0f64; params.targets.len()];
    for field in fields {
        let mut tokens = field.split_whitespace();
        let pair = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(mass), Some(intensity), None) => (mass, intensity),
            _ => continue,
        };
        let (mass, intensity) = match (pair.0.parse::<f64>(), pair.1.parse::<f64>()) {
            (Ok(mass), Ok(intensity)) => (mass, intensity),
            _ => {
                debug!("skipping non-numeric pair {:?} at rt {}", field, retention_time);
                continue;
            }
        };
        if let Some(i) = first_match(mass, &params.targets, params.tolerance) {
            intensities[i] += intensity;
        }
    }

    Ok(ScanRecord::new(retention_time, intensities))
}

/// A restartable, lazy reader over an instrument report file.
///
/// Yields one parsed [`ScanRecord`] per line, in file order, so memory
/// stays bounded for large reports. The underlying file handle is released
/// when the reader is dropped; opening the path again restarts the
/// sequence from the top.
#[derive(Debug)]
pub struct ReportReader {
    lines: io::Lines<io::BufReader<fs::File>>,
    params: EicParams,
    path: PathBuf,
    line_no: u64,
}

impl ReportReader {
    /// Open `path` for sequential scan-record reading
    pub fn open<P: AsRef<Path>>(path: P, params: EicParams) -> EicResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = fs::File::open(&path).map_err(|source| EicError::FileAccess {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            lines: io::BufReader::new(file).lines(),
            params,
            path,
            line_no: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn params(&self) -> &EicParams {
        &self.params
    }
}

impl Iterator for ReportReader {
    type Item = EicResult<ScanRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(EicError::FileAccess {
                    path: self.path.clone(),
                    source,
                }))
            }
        };
        self.line_no += 1;
        Some(parse_scan_line(&line, &self.params).map_err(|e| e.at_line(self.line_no)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const REPORT: &str = include_str!("../test/data/test.ascii");

    fn report_line(n: usize) -> &'static str {
        REPORT.lines().nth(n).expect("Fixture line should exist")
    }

    fn params() -> EicParams {
        EicParams::new(vec![74.0, 87.0], 0.5)
    }

    #[test]
    fn test_retention_time_is_exact() {
        let rec = parse_scan_line(report_line(1), &params()).expect("Should parse");
        assert_eq!(rec.retention_time, 1.11995);
    }

    #[test]
    fn test_intensities_extracted_per_target() {
        let rec = parse_scan_line(report_line(0), &params()).expect("Should parse");
        let r1 = 285253.53;
        let r2 = 235170.67;
        assert_eq!(rec.retention_time, 19.2221);
        assert_eq!(rec.intensities[0], r1);
        assert_eq!(rec.intensities[1], r2);
        assert_eq!(rec.signal, r1 + r2);
    }

    #[test]
    fn test_no_match_yields_zero_row() {
        let rec = parse_scan_line(report_line(1), &params()).expect("Should parse");
        assert_eq!(rec.intensities, vec![0.0, 0.0]);
        assert_eq!(rec.signal, 0.0);
    }

    #[test]
    fn test_single_match_forces_signal_zero() {
        let rec = parse_scan_line(report_line(2), &params()).expect("Should parse");
        assert_eq!(rec.retention_time, 1.29367);
        assert_eq!(rec.intensities[0], 390.51254);
        assert_eq!(rec.intensities[1], 0.0);
        assert_eq!(rec.signal, 0.0);
    }

    #[test]
    fn test_same_target_summed_across_pairs() {
        let rec = parse_scan_line("1.0,73.9 5.0,74.1 10.0", &params()).expect("Should parse");
        assert_eq!(rec.intensities[0], 15.0);
    }

    #[test]
    fn test_metadata_and_malformed_pairs_skipped() {
        // one-token, three-token, and non-numeric two-token fields are all
        // skipped; only `74.0 10.0` counts
        let line = "2.5,+,EI,ms1,33.0-417.0,74.0 10.0 1.0,banana split,74.0 10.0";
        let rec = parse_scan_line(line, &params()).expect("Should parse");
        assert_eq!(rec.intensities[0], 10.0);
        assert_eq!(rec.intensities[1], 0.0);
    }

    #[test]
    fn test_malformed_retention_time_fails_line() {
        let err = parse_scan_line("abc,74.0 10.0", &params()).unwrap_err();
        assert!(matches!(err, EicError::MalformedRecord(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_empty_line_is_malformed() {
        assert!(parse_scan_line("", &params()).is_err());
    }

    #[test]
    fn test_reader_iterates_in_file_order() {
        let reader = ReportReader::open("test/data/test.ascii", params()).expect("Should open");
        let rts: Vec<f64> = reader
            .map(|r| r.expect("Should parse").retention_time)
            .collect();
        assert_eq!(rts, vec![19.2221, 1.11995, 1.29367]);
    }

    #[test]
    fn test_reader_restarts_on_reopen() {
        let first: Vec<ScanRecord> = ReportReader::open("test/data/test.ascii", params())
            .expect("Should open")
            .map(|r| r.expect("Should parse"))
            .collect();
        let second: Vec<ScanRecord> = ReportReader::open("test/data/test.ascii", params())
            .expect("Should open")
            .map(|r| r.expect("Should parse"))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reader_missing_file() {
        let err = ReportReader::open("test/data/no_such.ascii", params()).unwrap_err();
        assert!(matches!(err, EicError::FileAccess { .. }));
    }

    #[test]
    fn test_reader_reports_failing_line_number() {
        let path = std::env::temp_dir().join(format!("mzeic-{}-badline.ascii", std::process::id()));
        let mut file = fs::File::create(&path).expect("Should create scratch file");
        writeln!(file, "1.0,74.0 10.0").unwrap();
        writeln!(file, "oops,74.0 10.0").unwrap();
        drop(file);

        let mut reader = ReportReader::open(&path, params()).expect("Should open");
        assert!(reader.next().expect("First line present").is_ok());
        let err = reader.next().expect("Second line present").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        let _ = fs::remove_file(&path);
    }
}
