#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use cords_manager::cli::{self, Cli, Command, LogLevel};
use cords_manager::constants;
use cords_manager::gui;
use cords_manager::settings::ManagerSettings;
use cords_manager::store::{ErrorKind, Store};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, settings_warning) = ManagerSettings::load();

    // --log-level > LOG_LEVEL > settings file
    let log_level = cli.log_level.unwrap_or_else(|| {
        let name = std::env::var(constants::env::LOG_LEVEL)
            .unwrap_or_else(|_| settings.log_level.clone());
        LogLevel::from_name(&name)
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level.as_tracing())
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    ManagerSettings::report(settings_warning);

    // --data applies to this run only and is not written back to settings
    let data_path = cli.data.clone().unwrap_or_else(|| settings.data_path.clone());

    let mut store = match Store::open(&data_path) {
        Ok(store) => store,
        Err(err) => {
            error!(path = %data_path.display(), error = %err, "Failed to load data file");
            if matches!(
                err.kind(),
                ErrorKind::Parse
                    | ErrorKind::Schema
                    | ErrorKind::Validation
                    | ErrorKind::DuplicateName
            ) {
                error!(path = %data_path.display(), "Please fix or move the data file; it was left untouched.");
            }
            return Err(err).context("Failed to load data file");
        }
    };
    info!(path = %data_path.display(), profiles = store.len(), "Store ready");

    match &cli.command {
        None | Some(Command::Gui) => gui::run_gui(store, settings),
        Some(command) => {
            let stdout = std::io::stdout();
            cli::run_command(command, &mut store, &mut stdout.lock())
        }
    }
}
