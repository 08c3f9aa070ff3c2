//! settings-ini CLI entry point

use std::process::ExitCode;

use clap::Parser;

use settings_ini::cli::{app, Cli};

fn main() -> ExitCode {
    app::init_logging();
    let cli = Cli::parse();
    app::run(cli)
}
