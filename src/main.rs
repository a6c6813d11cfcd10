// src/main.rs
use clap::Parser;
use dirloc::args::Args;
use dirloc::config::ScanConfig;
use dirloc::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let config = ScanConfig::from(&args);
    let result = dirloc_engine::run(&config)
        .map_err(dirloc::error::AppError::from)
        .and_then(|report| {
            let stdout = std::io::stdout();
            presentation::write_report(&mut stdout.lock(), &report, args.format)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
