//! # Onion Summary
//!
//! Converts plain-text news articles into a single static HTML page with a
//! styled section per article, then opens the page in the default viewer.
//!
//! ## Usage
//!
//! ```sh
//! onion_summary story                  # story.txt -> output.html
//! onion_summary article -c 3 -o digest # article0..2.txt -> digest.html
//! ```
//!
//! ## Architecture
//!
//! The run is a straight line, single-threaded:
//! 1. **Arguments**: resolve the CLI into [`cli::Settings`] (warnings for fixed-up extensions)
//! 2. **Document**: build the page skeleton titled for the article count
//! 3. **Articles**: read each input file in order and append it as a section
//! 4. **Output**: render the tree and write it to the output path
//! 5. **Launch**: hand the file to the platform viewer; failure is only a warning
//!
//! Any error before the launch step is fatal and no further steps run.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod articles;
mod cli;
mod config;
mod error;
mod launcher;
mod models;
mod outputs;
mod utils;

use cli::{Cli, Settings};
use config::Config;
use launcher::{Opener, SystemOpener};
use models::Document;
use outputs::html;
use utils::{error_chain, failure, status, success, warning};

/// What a completed run produced.
#[derive(Debug, PartialEq, Eq)]
struct RunReport {
    output_path: PathBuf,
    sections: usize,
    bytes: usize,
    launched: bool,
}

fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();

    // Parse CLI
    let cli = Cli::parse();
    let config_path = cli.config.clone();
    let (settings, notes) = cli.resolve();
    debug!(?settings, "Resolved arguments");
    for note in &notes {
        println!("{}", warning(&note.to_string()));
        info!(%note, "Normalized argument");
    }

    let config = match config::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let opener = SystemOpener::for_current_platform();
    debug!(viewer = opener.program(), "Selected default viewer");
    match run(&settings, &config, &opener) {
        Ok(report) => {
            let elapsed = start_time.elapsed();
            info!(
                ?elapsed,
                path = %report.output_path.display(),
                sections = report.sections,
                bytes = report.bytes,
                launched = report.launched,
                "Execution complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Report a fatal error and pick the failure exit code.
fn fail(err: &error::Error) -> ExitCode {
    error!(error = %err, "Aborting");
    eprintln!("{}", failure(&error_chain(err)));
    ExitCode::FAILURE
}

/// Build the page for `settings`, write it, and optionally open it.
///
/// Every input file is read before the output file is touched, so a missing
/// article leaves no partial page behind.
#[instrument(level = "info", skip_all, fields(base = %settings.base_input, count = settings.count))]
fn run(settings: &Settings, config: &Config, opener: &dyn Opener) -> error::Result<RunReport> {
    println!("{}", status("Creating HTML page..."));

    let mut document = Document::new(config.title_for(settings.count), &config.stylesheet);
    let inputs = articles::input_paths(&settings.base_input, settings.count, &config.input_extension);
    info!(files = inputs.len(), title = %document.title(), "Reading articles");

    for path in &inputs {
        articles::append_article(&mut document, path)?;
    }

    let bytes = html::write_document(&settings.output_path, &document)?;
    let sections = document.sections().count();

    println!("{}", success("Success!"));
    println!(
        "{}",
        status(&format!(
            "Converted text file '{}' to HTML file '{}'.",
            settings.base_input,
            settings.output_path.display()
        ))
    );

    let launched = settings.open && launch(opener, settings);

    Ok(RunReport {
        output_path: settings.output_path.clone(),
        sections,
        bytes,
        launched,
    })
}

/// Best-effort open; returns whether the viewer started.
fn launch(opener: &dyn Opener, settings: &Settings) -> bool {
    match opener.open(&settings.output_path) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, path = %settings.output_path.display(), "Could not open output file");
            println!(
                "{}",
                failure(&format!(
                    "Could not open the file '{}'.",
                    settings.output_path.display()
                ))
            );
            false
        }
    }
}
