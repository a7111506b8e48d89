//! File dialogs and the modal windows around project I/O.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use std::path::{Path, PathBuf};

use crate::canvas::{
    AsyncProjectOperation, NewProjectRequest, ProjectLoadError, ProjectSaveError,
};
use crate::config::{
    AppConfig, ConfigResetNotification, MissingProjectWarning, SaveConfigRequest,
};
use crate::paths;
use crate::theme;

#[derive(Resource, Default)]
pub struct FileMenuState {
    pub show_new_confirmation: bool,
}

/// Native picker for an existing project file
pub fn pick_project_to_open() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open Project")
        .set_directory(paths::projects_dir())
        .add_filter("Artforge Project", &["json"])
        .pick_file()
}

/// Native picker for a save destination, always ending in `.json`
pub fn pick_project_to_save(current: Option<&Path>) -> Option<PathBuf> {
    let file_name = current
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("Untitled.json");
    let directory = current
        .and_then(|p| p.parent())
        .map(Path::to_path_buf)
        .unwrap_or_else(paths::projects_dir);

    rfd::FileDialog::new()
        .set_title("Save Project")
        .set_directory(directory)
        .set_file_name(file_name)
        .add_filter("Artforge Project", &["json"])
        .save_file()
        .map(with_json_extension)
}

fn with_json_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "json") {
        path
    } else {
        path.with_extension("json")
    }
}

/// Shorten long paths from the left for dialog labels
fn display_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() > 50 {
        let tail: String = chars[chars.len() - 47..].iter().collect();
        format!("...{}", tail)
    } else {
        path_str.to_string()
    }
}

/// Renders the new-project confirmation and the load/save error dialogs
pub fn file_menu_ui(
    mut contexts: EguiContexts,
    mut menu_state: ResMut<FileMenuState>,
    mut new_events: MessageWriter<NewProjectRequest>,
    mut load_error: ResMut<ProjectLoadError>,
    mut save_error: ResMut<ProjectSaveError>,
) -> Result {
    if menu_state.show_new_confirmation {
        egui::Window::new("New Project")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.label("Create a new project? Unsaved changes will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Create New").clicked() {
                        new_events.write(NewProjectRequest);
                        menu_state.show_new_confirmation = false;
                    }
                    if ui.button("Cancel").clicked() {
                        menu_state.show_new_confirmation = false;
                    }
                });
            });
    }

    if let Some(error) = load_error.message.clone() {
        error_window(contexts.ctx_mut()?, "Load Error", &error, || {
            load_error.message = None;
        });
    }

    if let Some(error) = save_error.message.clone() {
        error_window(contexts.ctx_mut()?, "Save Error", &error, || {
            save_error.message = None;
        });
    }

    Ok(())
}

fn error_window(ctx: &egui::Context, title: &str, error: &str, dismiss: impl FnOnce()) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(theme::ERROR_TEXT, error);
            });
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismiss();
            }
        });
}

/// Renders the missing project warning dialog (shown at startup if the last
/// project doesn't exist)
pub fn missing_project_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<MissingProjectWarning>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Project Not Found")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The last opened project file no longer exists:");

            if let Some(ref path) = warning.path {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(display_path(path)).weak())
                    .on_hover_text(path.to_string_lossy().into_owned());
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    warning.show = false;
                }

                if ui.button("Clear from history").clicked() {
                    if let Some(path) = warning.path.take() {
                        config.data.recent_projects.retain(|p| *p != path);
                    }
                    config.data.last_project_path = None;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                    warning.show = false;
                }
            });
        });

    Ok(())
}

/// Tells the user their settings file was unreadable and has been reset
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be read and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}

/// Blocking modal while a save or load is in flight
pub fn async_operation_modal_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncProjectOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }

    let description = async_op
        .operation_description
        .as_deref()
        .unwrap_or("Working...");

    egui::Window::new("Please Wait")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(description);
            });
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_json_extension_appends() {
        assert_eq!(
            with_json_extension(PathBuf::from("/tmp/poster")),
            PathBuf::from("/tmp/poster.json")
        );
    }

    #[test]
    fn test_with_json_extension_keeps_existing() {
        assert_eq!(
            with_json_extension(PathBuf::from("/tmp/poster.json")),
            PathBuf::from("/tmp/poster.json")
        );
    }

    #[test]
    fn test_with_json_extension_replaces_other() {
        assert_eq!(
            with_json_extension(PathBuf::from("/tmp/poster.txt")),
            PathBuf::from("/tmp/poster.json")
        );
    }

    #[test]
    fn test_display_path_short_is_unchanged() {
        assert_eq!(display_path(Path::new("/a/b.json")), "/a/b.json");
    }

    #[test]
    fn test_display_path_truncates_from_left() {
        let long = format!("/{}/project.json", "x".repeat(80));
        let shown = display_path(Path::new(&long));
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("project.json"));
        assert_eq!(shown.chars().count(), 50);
    }
}
