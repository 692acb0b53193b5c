//! Command-line and environment configuration of the `ttim` binary.
//!
//! Every option has a default, so running `ttim` without arguments loads `iasp91`
//! from the current directory and prints the fixed-width report.
use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_MODEL;
use crate::travel_time::model_source::ModelSource;
use crate::ttim_errors::TtimError;

/// Query seismic phase travel times for a source depth and an epicentral distance
#[derive(Parser, Debug, Clone)]
#[command(name = "ttim", version, about, long_about = None)]
pub struct Cli {
    /// Earth model name; tables are read from `<table-dir>/<model>.hed` and `.tbl`
    #[arg(long, env = "TTIM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Directory holding the model tables
    #[arg(long, env = "TTIM_TABLE_DIR", default_value = ".")]
    pub table_dir: Utf8PathBuf,

    /// Print reports as a labeled table instead of fixed-width rows
    #[arg(long)]
    pub wide: bool,

    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the configured model name and directory.
    pub fn model_source(&self) -> Result<ModelSource, TtimError> {
        ModelSource::new(&self.model, self.table_dir.clone())
    }

    /// Log filter directive for the verbosity count, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so that stdout only carries prompts and reports.
/// `RUST_LOG` takes precedence over the `-v` count.
pub fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .with_line_number(cli.verbose >= 3)
        .init();
}
