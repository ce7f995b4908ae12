use std::path::PathBuf;
use std::process;

use blinker::adapters::outbound::console::StderrProgressReporter;
use blinker::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use blinker::adapters::outbound::network::{CachingVehicleSource, CarApiVehicleSource};
use blinker::application::dto::SearchRequest;
use blinker::application::use_cases::{GetVehicleDetailUseCase, SearchVehiclesUseCase};
use blinker::cli::{Args, Command};
use blinker::config::Config;
use blinker::ports::outbound::OutputPresenter;
use blinker::shared::error::{CatalogError, ExitCode};
use blinker::shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

/// Lookup misses get their own exit code so scripts can tell an empty
/// catalog answer from a hard failure.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CatalogError>() {
        Some(e) if e.is_lookup_miss() => ExitCode::NotFound,
        _ => ExitCode::ApplicationError,
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    // Required at startup: a missing variable is fatal before any command runs
    let config = Config::from_env()?;

    // Create adapters (Dependency Injection)
    let source = CachingVehicleSource::new(CarApiVehicleSource::new(&config)?);
    let progress_reporter = StderrProgressReporter::new();

    match args.command {
        Command::Search {
            query,
            state,
            year,
            format,
            output,
        } => {
            let use_case = SearchVehiclesUseCase::new(source, progress_reporter);
            let request = SearchRequest::new(query, state, year);
            let response = use_case.execute(request).await?;

            let formatted = format.create_formatter().format_results(&response)?;
            present(&formatted, output)
        }
        Command::Vehicle { id, format, output } => {
            let use_case = GetVehicleDetailUseCase::new(source, progress_reporter);
            let response = use_case.execute(&id).await?;

            let formatted = format.create_formatter().format_detail(&response)?;
            present(&formatted, output)
        }
    }
}

fn present(content: &str, output: Option<String>) -> Result<()> {
    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(content)
}
