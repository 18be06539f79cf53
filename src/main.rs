use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use mzeic::cli::Args;
use mzeic::{parse_report, write_table};

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let inputs = args.validate()?;
    info!("reading report {}", inputs.report_path.display());
    let report = parse_report(&inputs.report_path, &inputs.params)?;
    write_table(&report, &inputs.output_path)?;
    println!(
        "wrote {} scans to {}",
        report.len(),
        inputs.output_path.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
