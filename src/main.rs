//! # chatlens CLI
//!
//! Command-line front end: reads a transcript file, prints the analysis
//! report as JSON.

use std::fs;
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use chatlens::Analyzer;
use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::report::ErrorBody;
use chatlens::service::{Upload, analyze_upload_filtered};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        if !e.is_validation() {
            error!(error = %e, "analysis failed");
        }
        let body = ErrorBody::from_error(&e);
        match serde_json::to_string(&body) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{}", body.error),
        }
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let filter = args.filter_config()?;
    let contents = fs::read(&args.input)?;
    let upload = Upload::new(file_name(&args.input), contents);

    let analyzer = Analyzer::with_config(args.analyzer_config())
        .with_parser_config(args.parser_config());
    let report = analyze_upload_filtered(Some(upload), &filter, &analyzer)?;
    let json = report.to_json(!args.compact)?;

    match &args.output {
        Some(path) => fs::write(path, json + "\n")?,
        None => println!("{json}"),
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
