//! egui front end: a profile list on the left, the selected profile's
//! seed and coordinates on the right

mod components;
mod constants;
mod manager;

pub use manager::run_gui;
