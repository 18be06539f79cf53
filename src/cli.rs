//! The command line collaborator layer.
//!
//! Everything here is thin input validation: the conversion core receives
//! already-checked paths and [`EicParams`] and never reads arguments or the
//! environment itself.

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::scan::EicParams;

/// Transform an instrument ASCII report into an EIC table for quantity analysis
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Folder containing the report file
    #[arg(short = 'i', long = "input-folder", default_value = ".")]
    pub input_folder: PathBuf,

    /// Name of the instrument report file, `.ascii` extension required
    #[arg(short = 'f', long = "input-file")]
    pub input_file: String,

    /// Ions to extract, separated by dashes, e.g. `74-87-103.1`
    #[arg(short = 'e', long = "eic")]
    pub eic: String,

    /// Mass difference from each ion within which intensities are collected
    #[arg(short = 'r', long = "range", default_value_t = 0.5)]
    pub range: f64,

    /// Output table path; defaults to the report name with a `.csv` extension
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Rejected command line input
#[derive(Debug, Error)]
pub enum InputError {
    /// The input folder does not exist or is not a directory
    #[error("{} is not a directory", .0.display())]
    Folder(PathBuf),
    /// The report file is missing or has the wrong extension
    #[error("{0}")]
    File(String),
    /// The ion list contains a non-numeric entry
    #[error("{0}")]
    Ions(String),
}

/// Fully validated inputs handed to the conversion core
#[derive(Debug, Clone)]
pub struct Inputs {
    pub report_path: PathBuf,
    pub output_path: PathBuf,
    pub params: EicParams,
}

impl Args {
    /// Check every argument the way the conversion core expects it: an
    /// existing input folder, an existing `.ascii` report inside it, a
    /// non-empty numeric ion list, and a non-negative range.
    pub fn validate(&self) -> Result<Inputs, InputError> {
        if !self.input_folder.is_dir() {
            return Err(InputError::Folder(self.input_folder.clone()));
        }
        if Path::new(&self.input_file).extension().and_then(|e| e.to_str()) != Some("ascii") {
            return Err(InputError::File(format!(
                "wrong file type: {} was given, expected a .ascii report",
                self.input_file
            )));
        }
        let report_path = self.input_folder.join(&self.input_file);
        if !report_path.is_file() {
            return Err(InputError::File(format!(
                "file does not exist: {}",
                report_path.display()
            )));
        }
        let targets = parse_ion_list(&self.eic)?;
        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| report_path.with_extension("csv"));
        Ok(Inputs {
            report_path,
            output_path,
            params: EicParams::new(targets, self.range.abs()),
        })
    }
}

/// Parse a dash-separated ion list like `74-87-103.1`
fn parse_ion_list(text: &str) -> Result<Vec<f64>, InputError> {
    text.split('-')
        .map(|token| {
            token.trim().parse::<f64>().map_err(|_| {
                InputError::Ions(format!("number expected, but {token:?} was given"))
            })
        })
        .collect()
}
