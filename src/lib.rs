//! Minecraft coordinates manager
//!
//! Profiles (one per world or server) with an optional seed and a list of
//! named coordinates, kept in a single JSON file.
//!
//! - **store**: the data model and its JSON persistence
//! - **settings**: manager preferences under the platform config dir
//! - **cli**: command-line parsing and headless commands
//! - **gui**: the egui front end

#![forbid(unsafe_code)]

pub mod cli;
pub mod constants;
pub mod gui;
pub mod settings;
pub mod store;
