use matprops::app::{default_log_dir, run};
use matprops::cli::Args;
use matprops::error::MatpropsError;
use matprops::logger::initialize as LoggerInitialize;
use matprops::report::render_failure;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            let failure = render_failure(&e, args.wants_json());
            if args.wants_json() {
                println!("{failure}");
            } else {
                eprintln!("{failure}");
            }
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(args: &Args) -> Result<(), MatpropsError> {
    let log_dir = match &args.log_dir {
        Some(dir) => dir.clone(),
        None => default_log_dir()?,
    };

    create_dir_all(&log_dir).map_err(|e| MatpropsError::Matprops {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir, args.verbose)
}
