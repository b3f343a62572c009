use clap::Parser;
use repominer::application::dto::OutputFormat;
use std::path::PathBuf;

/// List every transitive dependency of an artifact in a local Maven repository
#[derive(Parser, Debug)]
#[command(name = "repominer")]
#[command(disable_version_flag = true)]
#[command(
    about = "List every transitive dependency of an artifact in a local Maven repository",
    long_about = None
)]
pub struct Args {
    /// groupId of the starting asset
    #[arg(short, long = "group-id", value_name = "GROUP_ID")]
    pub group_id: String,

    /// artifactId of the starting asset
    #[arg(short, long = "artifact-id", value_name = "ARTIFACT_ID")]
    pub artifact_id: String,

    /// version of the starting asset
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    pub version: String,

    /// classifier of the starting asset
    #[arg(short, long, value_name = "CLASSIFIER")]
    pub classifier: Option<String>,

    /// Emit the starting coordinate before its dependencies
    #[arg(short, long = "include-top")]
    pub include_top: bool,

    /// Local repository root (defaults to ~/.m2/repository)
    #[arg(short, long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Log file (defaults to ~/repominer.log)
    #[arg(short, long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log every resolution decision
    #[arg(short, long)]
    pub debug: bool,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./repominer.config.yml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
