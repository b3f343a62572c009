mod cli;

use anyhow::Context;
use cli::Args;
use owo_colors::OwoColorize;
use repominer::adapters::outbound::console::StderrProgressReporter;
use repominer::adapters::outbound::filesystem::{FileSystemDescriptorStore, WriterSink};
use repominer::adapters::outbound::logging::{self, TracingResolutionLogger};
use repominer::application::dto::{MineRequest, OutputFormat};
use repominer::application::factories::FormatterFactory;
use repominer::application::use_cases::MineDependenciesUseCase;
use repominer::config::{self, ConfigFile};
use repominer::ports::outbound::CoordinateSink;
use repominer::shared::error::{ExitCode, RepominerError};
use repominer::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_REPOSITORY: &str = ".m2/repository";
const DEFAULT_LOG_FILE: &str = "repominer.log";

fn main() {
    // clap exits with code 2 on its own for usage errors
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
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

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq)]
struct Settings {
    repository: PathBuf,
    log_file: PathBuf,
    include_top: bool,
    debug: bool,
    format: OutputFormat,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile, home: Option<&Path>) -> Result<Self> {
        let from_home = |relative: &str| {
            home.map(|home| home.join(relative)).with_context(|| {
                format!(
                    "Cannot determine the home directory for the default {}",
                    relative
                )
            })
        };

        let format = args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default();
        let repository = match args.repository.clone().or(config.repository) {
            Some(repository) => repository,
            None => from_home(DEFAULT_REPOSITORY)?,
        };
        let log_file = match args.log_file.clone().or(config.log_file) {
            Some(log_file) => log_file,
            None => from_home(DEFAULT_LOG_FILE)?,
        };

        Ok(Self {
            repository,
            log_file,
            include_top: args.include_top || config.include_top.unwrap_or(false),
            debug: args.debug || config.debug.unwrap_or(false),
            format,
        })
    }
}

fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            config::discover_config(&cwd)?.unwrap_or_default()
        }
    };
    let settings = Settings::merge(&args, config, dirs::home_dir().as_deref())?;

    let request = MineRequest::builder()
        .group_id(args.group_id)
        .artifact_id(args.artifact_id)
        .version(args.version)
        .classifier(args.classifier)
        .include_top(settings.include_top)
        .build()?;

    logging::init(&settings.log_file, settings.debug)?;
    tracing::info!(
        "Mining {} in {}",
        request.coordinate.gav(),
        settings.repository.display()
    );

    // Create adapters (Dependency Injection)
    let descriptor_store = FileSystemDescriptorStore::open(&settings.repository)?;
    let resolution_logger = TracingResolutionLogger::new();
    let progress_reporter = StderrProgressReporter::new();

    let formatter = FormatterFactory::create(settings.format);
    let mut sink: Box<dyn CoordinateSink> = match args.output.as_deref() {
        Some(output_path) => Box::new(WriterSink::create(output_path, formatter)?),
        None => Box::new(WriterSink::stdout(formatter)),
    };

    // Create use case with injected dependencies
    let use_case =
        MineDependenciesUseCase::new(descriptor_store, resolution_logger, progress_reporter);
    let response = use_case.execute(request, sink.as_mut())?;

    tracing::info!("Emitted {} coordinate(s)", response.emitted_count());
    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RepominerError>() {
        Some(RepominerError::Validation { .. } | RepominerError::InvalidCoordinate { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}
