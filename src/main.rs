//! hocr-spec CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use hocr_spec::cli::{Cli, CommandDispatcher};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout only carries reports.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("hocr_spec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hocr_spec=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("hocr-spec starting with args: {:?}", cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
