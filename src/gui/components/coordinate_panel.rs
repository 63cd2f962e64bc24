//! Right-hand panel: seed entry, coordinate table and entry fields

use eframe::egui;

use crate::gui::constants::*;
use crate::store::{CoordinateInput, Profile};

/// Editable state of the panel that outlives a single frame
pub struct CoordinatePanel {
    pub seed_input: String,
    pub fields: CoordinateInput,
    pending_delete: Option<usize>,
}

impl CoordinatePanel {
    pub fn new() -> Self {
        Self {
            seed_input: String::new(),
            fields: CoordinateInput::default(),
            pending_delete: None,
        }
    }

    /// Reset the inputs after switching profiles
    pub fn load_profile(&mut self, profile: Option<&Profile>) {
        self.seed_input = profile.map(|p| p.seed_str().to_string()).unwrap_or_default();
        self.fields.clear();
        self.pending_delete = None;
    }

    /// Open the delete confirmation for a row (Delete key or button)
    pub fn request_delete(&mut self, index: usize) {
        self.pending_delete = Some(index);
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        name: &str,
        profile: &Profile,
        selected: Option<usize>,
    ) -> CoordinateAction {
        let mut action = CoordinateAction::None;

        ui.label(egui::RichText::new(format!("Profile: {name}")).heading().strong());
        ui.add_space(ITEM_SPACING);

        // Seed row
        ui.horizontal(|ui| {
            ui.label("World seed (optional):");
            let width = (ui.available_width() - 90.0).max(NAME_FIELD_WIDTH);
            ui.add(egui::TextEdit::singleline(&mut self.seed_input).desired_width(width));
            if ui.button("Save Seed").clicked() {
                action = CoordinateAction::SaveSeed;
            }
        });

        ui.add_space(SECTION_SPACING);

        let table_height = (ui.available_height() - 110.0).max(120.0);
        ui.group(|ui| {
            egui::ScrollArea::vertical()
                .max_height(table_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Grid::new("coordinate_table")
                        .num_columns(4)
                        .striped(true)
                        .min_col_width(AXIS_FIELD_WIDTH)
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new("Name").strong());
                            ui.label(egui::RichText::new("X").strong());
                            ui.label(egui::RichText::new("Y").strong());
                            ui.label(egui::RichText::new("Z").strong());
                            ui.end_row();

                            for (idx, coord) in profile.coordinates.iter().enumerate() {
                                let is_selected = selected == Some(idx);
                                if ui.selectable_label(is_selected, coord.name.as_str()).clicked() {
                                    action = CoordinateAction::Select(idx);
                                }
                                ui.label(coord.x.to_string());
                                ui.label(coord.y.to_string());
                                ui.label(coord.z.to_string());
                                ui.end_row();
                            }
                        });

                    if profile.coordinates.is_empty() {
                        ui.label(egui::RichText::new("(No coordinates yet)").italics().weak());
                    }
                });
        });

        ui.add_space(ITEM_SPACING);

        // Entry row
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(egui::TextEdit::singleline(&mut self.fields.name).desired_width(NAME_FIELD_WIDTH));
            ui.label("X:");
            ui.add(egui::TextEdit::singleline(&mut self.fields.x).desired_width(AXIS_FIELD_WIDTH));
            ui.label("Y:");
            ui.add(egui::TextEdit::singleline(&mut self.fields.y).desired_width(AXIS_FIELD_WIDTH));
            ui.label("Z:");
            ui.add(egui::TextEdit::singleline(&mut self.fields.z).desired_width(AXIS_FIELD_WIDTH));
        });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if ui.button("➕ Add coordinate").clicked() {
                action = CoordinateAction::Add;
            }

            let has_selection = selected.is_some();
            if ui
                .add_enabled(has_selection, egui::Button::new("💾 Update selected"))
                .clicked()
            {
                if let Some(idx) = selected {
                    action = CoordinateAction::Update(idx);
                }
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("🗑 Delete selected"))
                .clicked()
            {
                self.pending_delete = selected;
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("📋 Copy selected"))
                .clicked()
            {
                if let Some(idx) = selected {
                    action = CoordinateAction::Copy(idx);
                }
            }
            if ui
                .add_enabled(has_selection, egui::Button::new("Print to console"))
                .clicked()
            {
                if let Some(idx) = selected {
                    action = CoordinateAction::Print(idx);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear fields").clicked() {
                    self.fields.clear();
                }
            });
        });

        if let Some(idx) = self.pending_delete {
            match profile.coordinates.get(idx) {
                Some(coord) => {
                    if let Some(confirmed) = self.delete_confirm_dialog(ui.ctx(), &coord.name, idx) {
                        action = confirmed;
                    }
                }
                None => self.pending_delete = None,
            }
        }

        action
    }

    fn delete_confirm_dialog(
        &mut self,
        ctx: &egui::Context,
        coord_name: &str,
        idx: usize,
    ) -> Option<CoordinateAction> {
        let mut action = None;

        egui::Window::new("Confirm Delete Coordinate")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete coordinate '{coord_name}'?"));

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        action = Some(CoordinateAction::Delete(idx));
                        self.pending_delete = None;
                    }

                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });

        action
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAction {
    None,
    SaveSeed,
    Select(usize),
    Add,
    Update(usize),
    Delete(usize),
    Copy(usize),
    Print(usize),
}
