use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};

use ttim::config::{init_logging, Cli};
use ttim::session::QuerySession;
use ttim::travel_time::libtau::open_model;
use ttim::travel_time::TravelTimeModel;
use ttim::ttim_errors::TtimError;

fn load_model(cli: &Cli) -> Result<Box<dyn TravelTimeModel>, TtimError> {
    let source = cli.model_source()?;
    info!(tables = %source, dir = %source.table_dir(), "loading travel-time model");
    open_model(&source)
}

fn exit_code(err: &TtimError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    debug!(?cli, "ttim started");

    let model = match load_model(&cli) {
        Ok(model) => model,
        Err(err) => {
            error!(%err, "model load failed");
            println!("Cannot open {0}.hed and {0}.tbl", cli.model);
            eprintln!("Error: {err}");
            return exit_code(&err);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = QuerySession::new(model, stdin.lock(), stdout.lock()).wide(cli.wide);

    match session.run() {
        Ok(summary) => {
            debug!(queries = summary.queries, "session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("Error: {err}");
            exit_code(&err)
        }
    }
}
