//! Import/export path dialog

use std::path::PathBuf;

use eframe::egui;

use crate::constants;
use crate::gui::constants::*;
use crate::store::ImportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Import,
    Export,
}

pub struct TransferDialog {
    kind: Option<TransferKind>,
    path_input: String,
}

impl TransferDialog {
    pub fn new() -> Self {
        Self {
            kind: None,
            path_input: String::new(),
        }
    }

    pub fn open(&mut self, kind: TransferKind) {
        self.kind = Some(kind);
        if self.path_input.is_empty() {
            self.path_input = format!("cords-export.{}", constants::data::EXTENSION);
        }
    }

    /// `store_empty` hides the merge choice: there is nothing to merge into
    pub fn ui(&mut self, ctx: &egui::Context, store_empty: bool) -> TransferAction {
        let Some(kind) = self.kind else {
            return TransferAction::None;
        };

        let mut action = TransferAction::None;
        let title = match kind {
            TransferKind::Import => "Import JSON",
            TransferKind::Export => "Export JSON",
        };

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("File path:");
                ui.add(egui::TextEdit::singleline(&mut self.path_input).desired_width(320.0));

                ui.add_space(ITEM_SPACING);

                ui.horizontal(|ui| {
                    match kind {
                        TransferKind::Export => {
                            if ui.button("Export").clicked() {
                                if let Some(path) = export_path(&self.path_input) {
                                    action = TransferAction::Export(path);
                                    self.kind = None;
                                }
                            }
                        }
                        TransferKind::Import if store_empty => {
                            if ui.button("Import").clicked() {
                                if let Some(path) = import_path(&self.path_input) {
                                    action = TransferAction::Import(path, ImportMode::Replace);
                                    self.kind = None;
                                }
                            }
                        }
                        TransferKind::Import => {
                            if ui
                                .button("Merge")
                                .on_hover_text("Imported profiles overwrite profiles with the same name")
                                .clicked()
                            {
                                if let Some(path) = import_path(&self.path_input) {
                                    action = TransferAction::Import(path, ImportMode::Merge);
                                    self.kind = None;
                                }
                            }
                            if ui
                                .button("Replace")
                                .on_hover_text("Discard all current profiles")
                                .clicked()
                            {
                                if let Some(path) = import_path(&self.path_input) {
                                    action = TransferAction::Import(path, ImportMode::Replace);
                                    self.kind = None;
                                }
                            }
                        }
                    }

                    if ui.button("Cancel").clicked() {
                        self.kind = None;
                    }
                });
            });

        action
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransferAction {
    None,
    Import(PathBuf, ImportMode),
    Export(PathBuf),
}

fn import_path(text: &str) -> Option<PathBuf> {
    let text = text.trim();
    (!text.is_empty()).then(|| PathBuf::from(text))
}

/// Export targets get a `.json` extension when none was typed
fn export_path(text: &str) -> Option<PathBuf> {
    let mut path = import_path(text)?;
    if path.extension().is_none() {
        path.set_extension(constants::data::EXTENSION);
    }
    Some(path)
}
