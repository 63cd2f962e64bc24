use eframe::egui;

use crate::gui::constants::*;
use crate::store::Store;

pub struct ProfileList {
    edit_profile_name: String,
    show_new_dialog: bool,
    show_rename_dialog: bool,
    show_delete_confirm: bool,
}

impl ProfileList {
    pub fn new() -> Self {
        Self {
            edit_profile_name: String::new(),
            show_new_dialog: false,
            show_rename_dialog: false,
            show_delete_confirm: false,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, store: &Store, selected: Option<&str>) -> ProfileAction {
        let mut action = ProfileAction::None;

        ui.label(egui::RichText::new("Profiles").heading().strong());
        ui.add_space(ITEM_SPACING);

        // Leave room for the two button rows below the list
        let list_height = (ui.available_height() - 70.0).max(80.0);
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for name in store.profile_names() {
                    let is_selected = selected == Some(name);
                    if ui.selectable_label(is_selected, name).clicked() && !is_selected {
                        action = ProfileAction::Select(name.to_string());
                    }
                }

                if store.is_empty() {
                    ui.label(egui::RichText::new("(No profiles yet)").italics().weak());
                }
            });

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            if ui.button("➕ Add").clicked() {
                self.show_new_dialog = true;
                self.edit_profile_name.clear();
            }

            if ui
                .add_enabled(selected.is_some(), egui::Button::new("✏ Rename"))
                .clicked()
            {
                self.show_rename_dialog = true;
                self.edit_profile_name = selected.unwrap_or_default().to_string();
            }

            if ui
                .add_enabled(selected.is_some(), egui::Button::new("🗑 Delete"))
                .clicked()
            {
                self.show_delete_confirm = true;
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Import JSON").clicked() {
                action = ProfileAction::Import;
            }
            if ui.button("Export JSON").clicked() {
                action = ProfileAction::Export;
            }
        });

        // Modal dialogs
        if self.show_new_dialog {
            action = self.new_profile_dialog(ui.ctx()).or(action);
        }

        if self.show_rename_dialog {
            if let Some(current) = selected {
                action = self.rename_profile_dialog(ui.ctx(), current).or(action);
            } else {
                self.show_rename_dialog = false;
            }
        }

        if self.show_delete_confirm {
            if let Some(current) = selected {
                action = self.delete_confirm_dialog(ui.ctx(), current).or(action);
            } else {
                self.show_delete_confirm = false;
            }
        }

        action
    }

    fn new_profile_dialog(&mut self, ctx: &egui::Context) -> ProfileAction {
        let mut action = ProfileAction::None;

        egui::Window::new("New Profile")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Profile Name:");
                let response = ui.text_edit_singleline(&mut self.edit_profile_name);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if (ui.button("Create").clicked() || submitted)
                        && !self.edit_profile_name.trim().is_empty()
                    {
                        action = ProfileAction::Create(self.edit_profile_name.trim().to_string());
                        self.show_new_dialog = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_new_dialog = false;
                    }
                });
            });

        action
    }

    fn rename_profile_dialog(&mut self, ctx: &egui::Context, current: &str) -> ProfileAction {
        let mut action = ProfileAction::None;

        egui::Window::new("Rename Profile")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("New name for '{current}':"));
                ui.text_edit_singleline(&mut self.edit_profile_name);

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() && !self.edit_profile_name.trim().is_empty() {
                        action = ProfileAction::Rename {
                            from: current.to_string(),
                            to: self.edit_profile_name.trim().to_string(),
                        };
                        self.show_rename_dialog = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_rename_dialog = false;
                    }
                });
            });

        action
    }

    fn delete_confirm_dialog(&mut self, ctx: &egui::Context, current: &str) -> ProfileAction {
        let mut action = ProfileAction::None;

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete profile '{current}' and all its coordinates?"));
                ui.colored_label(WARNING_TEXT, "This cannot be undone!");

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        action = ProfileAction::Delete(current.to_string());
                        self.show_delete_confirm = false;
                    }

                    if ui.button("Cancel").clicked() {
                        self.show_delete_confirm = false;
                    }
                });
            });

        action
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAction {
    None,
    Select(String),
    Create(String),
    Rename { from: String, to: String },
    Delete(String),
    Import,
    Export,
}

impl ProfileAction {
    /// Prefer `self` unless it is `None`
    fn or(self, other: ProfileAction) -> ProfileAction {
        match self {
            ProfileAction::None => other,
            action => action,
        }
    }
}
