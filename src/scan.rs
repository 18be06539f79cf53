use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The extraction parameters shared by every scan in one conversion.
///
/// These are supplied already validated by the caller: `targets` is
/// non-empty and `tolerance` is non-negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EicParams {
    /// The target masses to extract, in first-match priority order
    pub targets: Vec<f64>,
    /// Half-width of the inclusive matching window around each target
    pub tolerance: f64,
}

impl EicParams {
    pub fn new(targets: Vec<f64>, tolerance: f64) -> Self {
        Self { targets, tolerance }
    }

    /// The table column labels in target order, followed by `signal`.
    ///
    /// Each target is rendered in its standard decimal form, so `74.0`
    /// becomes the label `74`.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.targets.iter().map(|t| t.to_string()).collect();
        labels.push("signal".to_string());
        labels
    }
}

/// One output row: a retention time and the summed intensity for each
/// target mass, plus the derived `signal` aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanRecord {
    /// The time coordinate of the scan, unique within one report
    pub retention_time: f64,
    /// Summed intensity per target, aligned with the target list
    pub intensities: Vec<f64>,
    /// The sum over all targets when every accumulator is nonzero,
    /// otherwise exactly 0. All-or-nothing, never a partial sum.
    pub signal: f64,
}

impl ScanRecord {
    /// Build a record from per-target intensity sums, deriving `signal`
    pub fn new(retention_time: f64, intensities: Vec<f64>) -> Self {
        let signal = if intensities.iter().all(|i| *i != 0.0) {
            intensities.iter().sum()
        } else {
            0.0
        };
        Self {
            retention_time,
            intensities,
            signal,
        }
    }

    /// Look up a value by table column label, either a target's decimal
    /// form or `signal`.
    pub fn value(&self, params: &EicParams, label: &str) -> Option<f64> {
        if label == "signal" {
            return Some(self.signal);
        }
        params
            .targets
            .iter()
            .zip(self.intensities.iter())
            .find(|(t, _)| t.to_string() == label)
            .map(|(_, i)| *i)
    }
}

impl fmt::Display for ScanRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ScanRecord({}, {:?}, {})",
            self.retention_time, self.intensities, self.signal
        )
    }
}
