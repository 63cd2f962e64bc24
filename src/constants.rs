//! Application-wide constants
//!
//! File names, directory names and environment variables in one place.

/// Data file locations
pub mod data {
    /// Default data file, resolved against the working directory
    pub const FILENAME: &str = "cords-data.json";

    /// File extension offered for import/export
    pub const EXTENSION: &str = "json";
}

/// Manager settings file locations
pub mod config {
    /// Directory under the platform config dir (~/.config on Linux)
    pub const APP_DIR: &str = "cords-manager";

    /// Settings file inside APP_DIR
    pub const FILENAME: &str = "manager.json";
}

/// Environment variables
pub mod env {
    /// Overrides the log level when no --log-level flag is given
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}
