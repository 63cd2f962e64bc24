//! GUI manager implemented with egui/eframe

use std::path::Path;

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{error, info};

use super::components::{
    CoordinateAction, CoordinatePanel, ProfileAction, ProfileList, TransferAction, TransferDialog,
    TransferKind,
};
use super::constants::*;
use crate::settings::ManagerSettings;
use crate::store::{Coordinate, CoordinateInput, ImportMode, Store, StoreError};

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct ManagerApp {
    store: Store,
    settings: ManagerSettings,
    selected_profile: Option<String>,
    selected_coord: Option<usize>,
    profile_list: ProfileList,
    coordinate_panel: CoordinatePanel,
    transfer: TransferDialog,
    status_message: Option<StatusMessage>,
}

impl ManagerApp {
    fn new(_cc: &CreationContext<'_>, store: Store, settings: ManagerSettings) -> Self {
        info!(profiles = store.len(), "Initializing egui manager");

        let selected_profile = initial_profile(&store, settings.selected_profile.as_deref());
        let mut app = Self {
            store,
            settings,
            selected_profile: None,
            selected_coord: None,
            profile_list: ProfileList::new(),
            coordinate_panel: CoordinatePanel::new(),
            transfer: TransferDialog::new(),
            status_message: None,
        };
        app.select_profile(selected_profile);
        app
    }

    fn select_profile(&mut self, name: Option<String>) {
        let profile = name.as_deref().and_then(|n| self.store.profile(n));
        self.coordinate_panel.load_profile(profile);
        self.selected_profile = name;
        self.selected_coord = None;
    }

    fn report_ok(&mut self, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            color: STATUS_OK,
        });
    }

    fn report_err(&mut self, context: &str, err: &StoreError) {
        error!(error = %err, kind = ?err.kind(), "{context}");
        self.status_message = Some(StatusMessage {
            text: format!("{}: {err}", err.kind().title()),
            color: STATUS_ERROR,
        });
    }

    fn handle_profile_action(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::None => {}
            ProfileAction::Select(name) => self.select_profile(Some(name)),
            ProfileAction::Create(name) => match self.store.create_profile(&name) {
                Ok(()) => {
                    self.report_ok(format!("Created profile '{name}'"));
                    self.select_profile(Some(name));
                }
                Err(err) => self.report_err("Failed to create profile", &err),
            },
            ProfileAction::Rename { from, to } => match self.store.rename_profile(&from, &to) {
                Ok(()) => {
                    self.report_ok(format!("Renamed '{from}' to '{to}'"));
                    self.selected_profile = Some(to);
                }
                Err(err) => self.report_err("Failed to rename profile", &err),
            },
            ProfileAction::Delete(name) => match self.store.delete_profile(&name) {
                Ok(_) => {
                    self.report_ok(format!("Deleted profile '{name}'"));
                    self.select_profile(None);
                }
                Err(err) => self.report_err("Failed to delete profile", &err),
            },
            ProfileAction::Import => self.transfer.open(TransferKind::Import),
            ProfileAction::Export => self.transfer.open(TransferKind::Export),
        }
    }

    fn handle_coordinate_action(&mut self, ctx: &egui::Context, action: CoordinateAction) {
        let Some(profile) = self.selected_profile.clone() else {
            return;
        };

        match action {
            CoordinateAction::None => {}
            CoordinateAction::SaveSeed => {
                let seed = self.coordinate_panel.seed_input.clone();
                match self.store.set_seed(&profile, Some(&seed)) {
                    Ok(()) => self.report_ok("Seed saved"),
                    Err(err) => self.report_err("Failed to save seed", &err),
                }
            }
            CoordinateAction::Select(idx) => {
                self.selected_coord = Some(idx);
                if let Some(fields) = self.coordinate_at(&profile, idx).map(CoordinateInput::from) {
                    self.coordinate_panel.fields = fields;
                }
            }
            CoordinateAction::Add => {
                let result = self
                    .coordinate_panel
                    .fields
                    .parse()
                    .and_then(|coord| self.store.add_coordinate(&profile, coord));
                match result {
                    Ok(()) => {
                        self.coordinate_panel.fields.clear();
                        self.report_ok("Coordinate added");
                    }
                    Err(err) => self.report_err("Failed to add coordinate", &err),
                }
            }
            CoordinateAction::Update(idx) => {
                let result = self
                    .coordinate_panel
                    .fields
                    .parse()
                    .and_then(|coord| self.store.update_coordinate_at(&profile, idx, coord));
                match result {
                    Ok(()) => self.report_ok("Coordinate updated"),
                    Err(err) => self.report_err("Failed to update coordinate", &err),
                }
            }
            CoordinateAction::Delete(idx) => match self.store.remove_coordinate_at(&profile, idx) {
                Ok(removed) => {
                    let len = self.store.profile(&profile).map_or(0, |p| p.coordinates.len());
                    self.selected_coord = clamp_selection(self.selected_coord, len);
                    self.report_ok(format!("Deleted coordinate '{}'", removed.name));
                }
                Err(err) => self.report_err("Failed to delete coordinate", &err),
            },
            CoordinateAction::Copy(idx) => {
                if let Some(text) = self.coordinate_at(&profile, idx).map(|c| c.clipboard_text()) {
                    ctx.copy_text(text);
                    self.report_ok("Coordinate text copied to clipboard");
                }
            }
            CoordinateAction::Print(idx) => {
                if let Some(line) = self.coordinate_at(&profile, idx).map(|c| c.console_line(&profile)) {
                    println!("{line}");
                    info!(profile = %profile, "Printed coordinate to console");
                    self.report_ok("Coordinate printed to console");
                }
            }
        }
    }

    fn handle_transfer_action(&mut self, action: TransferAction) {
        match action {
            TransferAction::None => {}
            TransferAction::Export(path) => match self.store.export_to(&path) {
                Ok(()) => self.report_ok(format!("Exported to {}", path.display())),
                Err(err) => self.report_err("Failed to export", &err),
            },
            TransferAction::Import(path, mode) => self.import(&path, mode),
        }
    }

    fn import(&mut self, path: &Path, mode: ImportMode) {
        match self.store.import_from(path, mode) {
            Ok(count) => {
                self.report_ok(format!("Imported {count} profile(s) from {}", path.display()));
                let keep = self
                    .selected_profile
                    .take()
                    .filter(|name| self.store.contains(name));
                let next = initial_profile(&self.store, keep.as_deref());
                self.select_profile(next);
            }
            Err(err) => self.report_err("Failed to import", &err),
        }
    }

    fn coordinate_at(&self, profile: &str, idx: usize) -> Option<&Coordinate> {
        self.store.profile(profile)?.coordinates.get(idx)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (save, delete) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Delete),
            )
        });

        if save {
            match self.store.save() {
                Ok(()) => self.report_ok("Saved"),
                Err(err) => self.report_err("Failed to save", &err),
            }
        }

        // Delete inside a text field edits the text instead
        if delete && !ctx.wants_keyboard_input() {
            if let Some(idx) = self.selected_coord {
                self.coordinate_panel.request_delete(idx);
            }
        }
    }

    fn remember_window_size(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_width = rect.width();
            self.settings.window_height = rect.height();
        }
    }
}

impl eframe::App for ManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.remember_window_size(ctx);

        let profile_action = egui::SidePanel::left("profile_panel")
            .resizable(true)
            .default_width(PROFILE_PANEL_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(ITEM_SPACING);
                self.profile_list
                    .ui(ui, &self.store, self.selected_profile.as_deref())
            })
            .inner;
        self.handle_profile_action(profile_action);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.status_message {
                    Some(message) => ui.colored_label(message.color, &message.text),
                    None => ui.label(""),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(path) = self.store.path() {
                        ui.label(egui::RichText::new(path.display().to_string()).weak());
                    }
                });
            });
        });

        let coordinate_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                let selected = self
                    .selected_profile
                    .as_deref()
                    .and_then(|name| self.store.profile(name).map(|p| (name, p)));
                match selected {
                    Some((name, profile)) => {
                        self.coordinate_panel
                            .ui(ui, name, profile, self.selected_coord)
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("(no profile selected)")
                                .heading()
                                .strong(),
                        );
                        ui.add_space(SECTION_SPACING);
                        ui.label("Select or create a profile on the left.");
                        CoordinateAction::None
                    }
                }
            })
            .inner;
        self.handle_coordinate_action(ctx, coordinate_action);

        let transfer_action = self.transfer.ui(ctx, self.store.is_empty());
        self.handle_transfer_action(transfer_action);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.store.save() {
            error!(error = %err, "Failed to save data during shutdown");
        }

        self.settings.selected_profile = self.selected_profile.clone();
        if let Err(err) = self.settings.save() {
            error!(error = ?err, "Failed to save manager settings during shutdown");
        }
        info!("Manager exiting");
    }
}

/// The remembered profile if it still exists, else the first one
fn initial_profile(store: &Store, remembered: Option<&str>) -> Option<String> {
    remembered
        .filter(|name| store.contains(name))
        .or_else(|| store.profile_names().next())
        .map(str::to_string)
}

/// Keep a row selection valid after the list shrank
fn clamp_selection(selected: Option<usize>, len: usize) -> Option<usize> {
    match selected {
        _ if len == 0 => None,
        Some(idx) if idx >= len => Some(len - 1),
        other => other,
    }
}

pub fn run_gui(store: Store, settings: ManagerSettings) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Minecraft Coordinates Manager"),
        ..Default::default()
    };

    eframe::run_native(
        "Minecraft Coordinates Manager",
        options,
        Box::new(move |cc| Ok(Box::new(ManagerApp::new(cc, store, settings)))),
    )
    .map_err(|err| anyhow!("Failed to launch egui manager: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> Store {
        let mut store = Store::in_memory();
        for name in names {
            store.create_profile(name).unwrap();
        }
        store
    }

    #[test]
    fn test_initial_profile_prefers_remembered() {
        let store = store_with(&["My SMP", "Creative"]);
        assert_eq!(initial_profile(&store, Some("Creative")).as_deref(), Some("Creative"));
    }

    #[test]
    fn test_initial_profile_falls_back_to_first() {
        let store = store_with(&["My SMP", "Creative"]);
        assert_eq!(initial_profile(&store, Some("Deleted")).as_deref(), Some("My SMP"));
        assert_eq!(initial_profile(&store, None).as_deref(), Some("My SMP"));
        assert_eq!(initial_profile(&Store::in_memory(), Some("My SMP")), None);
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(2), 2), Some(1));
        assert_eq!(clamp_selection(Some(0), 3), Some(0));
        assert_eq!(clamp_selection(Some(0), 0), None);
        assert_eq!(clamp_selection(None, 4), None);
    }
}
