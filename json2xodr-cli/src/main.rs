use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use flexi_logger::Logger;
use json2xodr::transform::ToXodrConfig;

mod batch;
use batch::{convert_all, find_inputs, INPUT_SUFFIX};

/// Convert road editor files to OpenDRIVE
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// A `_raw.json` file, or a directory to search for them
    #[clap(parse(from_os_str))]
    path: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    // Keep the handle alive until exit, dropping it stops logging
    let _logger = match Logger::try_with_env_or_str("info").and_then(Logger::start) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("logging disabled: {}", e);
            None
        },
    };

    let inputs = if args.path.is_file() {
        vec![args.path.clone()]
    } else {
        match find_inputs(&args.path) {
            Ok(inputs) => inputs,
            Err(e) => {
                log::error!("{}: {}", args.path.display(), e);
                return ExitCode::FAILURE;
            },
        }
    };
    if inputs.is_empty() {
        log::warn!("no *{} files in {}", INPUT_SUFFIX, args.path.display());
    }

    let results = convert_all(inputs, Arc::new(ToXodrConfig::default())).await;
    let mut failed = 0_usize;
    for result in &results {
        if let Err(e) = result {
            log::error!("{}", e);
            failed += 1;
        }
    }
    log::info!("converted {} of {} files", results.len() - failed, results.len());

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
