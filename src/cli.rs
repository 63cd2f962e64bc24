//! Command-line interface
//!
//! Without a subcommand the GUI is launched. The other subcommands work on
//! the data file directly and exit.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use crate::store::{ImportMode, Store};

#[derive(Debug, Parser)]
#[command(name = "cords-manager", version, about = "Keep Minecraft coordinates per world")]
pub struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Log verbosity (overrides LOG_LEVEL and the settings file)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the GUI (default)
    Gui,
    /// List profiles, or the coordinates of one profile
    List {
        profile: Option<String>,
    },
    /// Print a coordinate the same way the GUI's "Print to console" does
    Print {
        profile: String,
        coordinate: String,
    },
    /// Write all profiles to another JSON file
    Export {
        path: PathBuf,
    },
    /// Read profiles from another JSON file
    Import {
        path: PathBuf,
        /// Replace every profile instead of merging
        #[arg(long)]
        replace: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Unknown names fall back to `Info`
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    pub fn as_tracing(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Run a headless subcommand against `store`, writing results to `out`
pub fn run_command(command: &Command, store: &mut Store, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Gui => anyhow::bail!("the GUI is not a headless command"),
        Command::List { profile: None } => {
            for (name, profile) in store.profiles() {
                let seed = profile.seed.as_deref().unwrap_or("-");
                writeln!(out, "{name}\tseed={seed}\tcoords={}", profile.coordinates.len())?;
            }
        }
        Command::List {
            profile: Some(name),
        } => {
            let profile = store
                .profile(name)
                .with_context(|| format!("Profile '{name}' not found"))?;
            for coord in &profile.coordinates {
                writeln!(out, "{}", coord.clipboard_text())?;
            }
        }
        Command::Print {
            profile,
            coordinate,
        } => {
            let coord = store
                .profile(profile)
                .and_then(|p| p.coordinates.iter().find(|c| &c.name == coordinate))
                .with_context(|| {
                    format!("Coordinate '{coordinate}' not found in profile '{profile}'")
                })?;
            writeln!(out, "{}", coord.console_line(profile))?;
        }
        Command::Export { path } => {
            store
                .export_to(path)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            writeln!(out, "Exported {} profile(s) to {}", store.len(), path.display())?;
        }
        Command::Import { path, replace } => {
            let mode = if *replace {
                ImportMode::Replace
            } else {
                ImportMode::Merge
            };
            let count = store
                .import_from(path, mode)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            info!(count, "Import finished");
            writeln!(out, "Imported {count} profile(s) from {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Coordinate;
    use tempfile::TempDir;

    fn sample_store() -> Store {
        let mut store = Store::in_memory();
        store.create_profile("My SMP").unwrap();
        store.set_seed("My SMP", Some("42")).unwrap();
        store
            .add_coordinate("My SMP", Coordinate::new("Spawn", 0, 64, 0))
            .unwrap();
        store.create_profile("Creative").unwrap();
        store
    }

    fn run(command: Command, store: &mut Store) -> Result<String> {
        let mut out = Vec::new();
        run_command(&command, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from(["cords-manager", "--data", "/tmp/x.json", "import", "in.json", "--replace"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x.json")));
        assert!(matches!(
            cli.command,
            Some(Command::Import { replace: true, .. })
        ));

        let cli = Cli::try_parse_from(["cords-manager"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_level.is_none());

        let cli = Cli::try_parse_from(["cords-manager", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_log_level_from_name() {
        assert_eq!(LogLevel::from_name("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_name("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_name("verbose"), LogLevel::Info);
    }

    #[test]
    fn test_list_profiles_and_coordinates() {
        let mut store = sample_store();

        let output = run(Command::List { profile: None }, &mut store).unwrap();
        assert_eq!(output, "My SMP\tseed=42\tcoords=1\nCreative\tseed=-\tcoords=0\n");

        let output = run(
            Command::List {
                profile: Some("My SMP".to_string()),
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(output, "Spawn: x=0 y=64 z=0\n");

        assert!(run(
            Command::List {
                profile: Some("Ghost".to_string()),
            },
            &mut store,
        )
        .is_err());
    }

    #[test]
    fn test_print_coordinate() {
        let mut store = sample_store();
        let output = run(
            Command::Print {
                profile: "My SMP".to_string(),
                coordinate: "Spawn".to_string(),
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(output, "[My SMP] Spawn: x=0 y=64 z=0\n");
    }

    #[test]
    fn test_export_then_import_replace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("backup.json");

        let mut store = sample_store();
        run(Command::Export { path: path.clone() }, &mut store).unwrap();

        let mut other = Store::in_memory();
        other.create_profile("Old").unwrap();
        let output = run(
            Command::Import {
                path: path.clone(),
                replace: true,
            },
            &mut other,
        )
        .unwrap();

        assert!(output.starts_with("Imported 2 profile(s)"));
        assert_eq!(other.profiles(), store.profiles());
    }
}
