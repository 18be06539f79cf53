//! CSV serialization of an [`EicReport`].

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{EicError, EicResult};
use crate::report::EicReport;
use crate::scan::{EicParams, ScanRecord};

/// A table column: one extracted target, or the derived signal aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Target(usize),
    Signal,
}

impl Column {
    fn value(&self, scan: &ScanRecord) -> f64 {
        match self {
            Self::Target(i) => scan.intensities[*i],
            Self::Signal => scan.signal,
        }
    }
}

/// The labelled columns after `rt`, ordered by the string form of their
/// labels rather than numerically (`100` sorts before `74`). The historical
/// table layout orders columns this way and downstream consumers depend on
/// it.
fn sorted_columns(params: &EicParams) -> Vec<(String, Column)> {
    let mut columns: Vec<(String, Column)> = params
        .targets
        .iter()
        .enumerate()
        .map(|(i, t)| (t.to_string(), Column::Target(i)))
        .collect();
    columns.push(("signal".to_string(), Column::Signal));
    columns.sort_by(|a, b| a.0.cmp(&b.0));
    columns
}

/// Write `report` as a CSV table to `path`.
///
/// The header row is `rt` followed by the target-mass labels and `signal`
/// in string-lexicographic order; one data row per retention time, sorted
/// ascending regardless of file order. The table is written to a temporary
/// sibling path and renamed onto `path` on success, so a failed conversion
/// never leaves a partial table behind.
pub fn write_table<P: AsRef<Path>>(report: &EicReport, path: P) -> EicResult<()> {
    let path = path.as_ref();
    let tmp = tmp_path(path);
    let written = write_into(report, &tmp).and_then(|rows| {
        fs::rename(&tmp, path)?;
        Ok(rows)
    });
    match written {
        Ok(rows) => {
            info!("wrote {} rows to {}", rows, path.display());
            Ok(())
        }
        Err(source) => {
            let _ = fs::remove_file(&tmp);
            Err(EicError::FileWrite {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "table".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_into(report: &EicReport, path: &Path) -> Result<usize, csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    let columns = sorted_columns(report.params());

    let mut header = Vec::with_capacity(columns.len() + 1);
    header.push("rt".to_string());
    header.extend(columns.iter().map(|(label, _)| label.clone()));
    writer.write_record(&header)?;

    let mut scans: Vec<&ScanRecord> = report.scans().iter().collect();
    scans.sort_by(|a, b| {
        a.retention_time
            .partial_cmp(&b.retention_time)
            .unwrap_or(Ordering::Equal)
    });

    for scan in &scans {
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(scan.retention_time.to_string());
        row.extend(columns.iter().map(|(_, col)| col.value(scan).to_string()));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(scans.len())
}
