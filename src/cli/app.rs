//! Main app runner

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::SettingsStore;
use crate::domain::error::SettingsError;

use super::args::Cli;
use super::presenter::Presenter;
use super::settings_cmd::handle_settings_command;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run one command against the settings file, saving on the way out
pub fn run(cli: Cli) -> ExitCode {
    let presenter = if cli.no_color {
        Presenter::plain()
    } else {
        Presenter::new()
    };

    let mut store = SettingsStore::with_path(&cli.file);
    let result = handle_settings_command(cli.command, &mut store, &presenter)
        .and_then(|()| store.close());

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn exit_code_for(error: &SettingsError) -> u8 {
    if error.is_usage() {
        EXIT_USAGE_ERROR
    } else {
        EXIT_ERROR
    }
}
