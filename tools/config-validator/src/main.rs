use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config_validator::config::ValidatorConfig;
use config_validator::{reporter, run_all_checks};

/// Check that an Android project's local configuration is in place before a build.
#[derive(Debug, Parser)]
#[command(name = "validate-config", version)]
struct Cli {
    /// Project root to validate. Defaults to the current directory.
    project_root: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Log every probed path to stderr.
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("config_validator=debug,validate_config=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("config_validator=warn,validate_config=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    tracing::debug!("starting with args: {:?}", cli);

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let config = match cli.project_root {
        Some(dir) => ValidatorConfig::from_root(&dir),
        None => match ValidatorConfig::current() {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Error: could not determine current directory: {err}");
                process::exit(1);
            }
        },
    };

    let report = run_all_checks(&config);

    let mut stdout = std::io::stdout().lock();
    let printed = if cli.json {
        reporter::print_json(&mut stdout, &report)
    } else {
        reporter::print_report(&mut stdout, &report)
    }
    .and_then(|passed| stdout.flush().map(|()| passed));

    let code = match printed {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            tracing::error!("failed to write report: {err}");
            1
        }
    };

    process::exit(code);
}
