use crate::shared::Result;
use anyhow::Context;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "repominer=debug"
    } else {
        "repominer=info"
    }
}

/// Filter directives for one run: `RUST_LOG` when set, otherwise the default
pub fn filter_directives(rust_log: Option<&str>, debug: bool) -> String {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => default_filter(debug).to_string(),
    }
}

/// Opens `log_file` for appending, creating its directory if needed
///
/// The file is never rotated.
pub fn open_log_file(log_file: &Path) -> Result<RollingFileAppender> {
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file.display()))?;
    let log_dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(log_dir)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))
}

/// Initialize logging for one repominer run
///
/// Everything goes to `log_file`; stdout stays reserved for coordinates.
/// The RUST_LOG environment variable wins when set; otherwise `--debug`
/// enables resolution traces and the default level is info.
pub fn init(log_file: &Path, debug: bool) -> Result<()> {
    let file_appender = open_log_file(log_file)?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = EnvFilter::try_new(filter_directives(rust_log.as_deref(), debug))
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI colors in log files
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        "repominer {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_file.display()
    );

    Ok(())
}
