use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::persistence::project_display_name;
use crate::canvas::{
    ArtboardDimensions, AutosaveState, CurrentProjectFile, ElementKind, LoadProjectRequest,
    NewProjectRequest, ProjectDirtyState, SaveProjectRequest,
};
use crate::config::AppConfig;
use crate::store::ElementStore;
use crate::theme;

use super::file_menu::{pick_project_to_open, pick_project_to_save, FileMenuState};

/// Largest artboard edge the size fields accept
const MAX_ARTBOARD_EDGE: f32 = 10_000.0;

/// Main toolbar: file menu, element creation, history and artboard size
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut store: ResMut<ElementStore>,
    mut artboard: ResMut<ArtboardDimensions>,
    mut dirty_state: ResMut<ProjectDirtyState>,
    mut menu_state: ResMut<FileMenuState>,
    config: Res<AppConfig>,
    current_file: Res<CurrentProjectFile>,
    mut save_events: MessageWriter<SaveProjectRequest>,
    mut load_events: MessageWriter<LoadProjectRequest>,
    mut new_events: MessageWriter<NewProjectRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        if dirty_state.is_dirty(store.revision()) {
                            menu_state.show_new_confirmation = true;
                        } else {
                            new_events.write(NewProjectRequest);
                        }
                        ui.close();
                    }
                    if ui.button("Open...").clicked() {
                        ui.close();
                        if let Some(path) = pick_project_to_open() {
                            load_events.write(LoadProjectRequest { path });
                        }
                    }
                    ui.menu_button("Open Recent", |ui| {
                        if config.data.recent_projects.is_empty() {
                            ui.label(egui::RichText::new("No recent projects").weak());
                        }
                        for path in &config.data.recent_projects {
                            if ui
                                .button(project_display_name(path))
                                .on_hover_text(path.to_string_lossy().into_owned())
                                .clicked()
                            {
                                load_events.write(LoadProjectRequest { path: path.clone() });
                                ui.close();
                            }
                        }
                    });
                    ui.separator();
                    if ui.button("Save").clicked() {
                        ui.close();
                        let path = current_file
                            .path
                            .clone()
                            .or_else(|| pick_project_to_save(None));
                        if let Some(path) = path {
                            save_events.write(SaveProjectRequest { path });
                        }
                    }
                    if ui.button("Save As...").clicked() {
                        ui.close();
                        if let Some(path) = pick_project_to_save(current_file.path.as_deref()) {
                            save_events.write(SaveProjectRequest { path });
                        }
                    }
                });

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                for kind in ElementKind::all() {
                    let label = format!("+ {}", kind.display_name());
                    if toolbar_button(ui, &label, true).clicked() {
                        store.add_element(*kind, &artboard);
                    }
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                let can_undo = store.can_undo();
                if toolbar_button(ui, "Undo", can_undo)
                    .on_hover_text("Ctrl+Z")
                    .clicked()
                {
                    store.undo();
                }
                let can_redo = store.can_redo();
                if toolbar_button(ui, "Redo", can_redo)
                    .on_hover_text("Ctrl+Shift+Z")
                    .clicked()
                {
                    store.redo();
                }
                let has_elements = !store.is_empty();
                if toolbar_button(ui, "Reset", has_elements)
                    .on_hover_text("Remove every element (undoable)")
                    .clicked()
                {
                    store.reset_canvas();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                ui.label("Artboard:");
                let mut size = artboard.size();
                let width = ui.add(
                    egui::DragValue::new(&mut size.x)
                        .range(1.0..=MAX_ARTBOARD_EDGE)
                        .speed(1.0),
                );
                ui.label("×");
                let height = ui.add(
                    egui::DragValue::new(&mut size.y)
                        .range(1.0..=MAX_ARTBOARD_EDGE)
                        .speed(1.0),
                );
                if (width.changed() || height.changed()) && size != artboard.size() {
                    *artboard = ArtboardDimensions::new(size.x, size.y);
                    dirty_state.artboard_modified = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if dirty_state.is_dirty(store.revision()) {
                        ui.colored_label(theme::DIRTY_MARKER, "●")
                            .on_hover_text("Unsaved changes");
                    }
                    let name = current_file
                        .path
                        .as_deref()
                        .map(project_display_name)
                        .unwrap_or_else(|| "Untitled".to_string());
                    ui.label(egui::RichText::new(name).strong());
                });
            });
        });
    Ok(())
}

fn toolbar_button(ui: &mut egui::Ui, label: &str, enabled: bool) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(label).size(14.0).strong())
            .min_size(egui::vec2(0.0, 28.0)),
    )
}

/// Bottom status line: counts, history depth and autosave problems
pub fn status_bar_ui(
    mut contexts: EguiContexts,
    store: Res<ElementStore>,
    autosave: Res<AutosaveState>,
) -> Result {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 4))
                .fill(theme::TOOLBAR_SECONDARY),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                let count = store.len();
                ui.label(format!(
                    "{} element{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ));
                ui.separator();
                ui.label(format!(
                    "History: {} undo / {} redo",
                    store.undo_count(),
                    store.redo_count()
                ));
                if let Some(selected) = store.selected() {
                    ui.separator();
                    ui.label(format!("Selected: {}", selected.name));
                }

                if let Some(ref error) = autosave.last_error {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(theme::ERROR_TEXT, "Autosave failed")
                            .on_hover_text(error.as_str());
                    });
                }
            });
        });
    Ok(())
}
