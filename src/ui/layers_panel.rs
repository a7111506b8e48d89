use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{Element, ElementId, ElementKind};
use crate::editor::PanMode;
use crate::store::ElementStore;

/// A click in the layers list, applied after the list is drawn so the
/// store isn't mutated while it is being iterated
#[derive(Debug, Clone, Copy, PartialEq)]
enum LayerAction {
    Select(ElementId),
    /// Move from one index to another in draw order
    Reorder(usize, usize),
    Delete(ElementId),
}

/// Index one step toward the top of the stack, if there is one
fn raise_target(index: usize, len: usize) -> Option<usize> {
    (index + 1 < len).then_some(index + 1)
}

fn lower_target(index: usize) -> Option<usize> {
    index.checked_sub(1)
}

/// Left panel listing elements topmost first
pub fn layers_panel_ui(
    mut contexts: EguiContexts,
    mut store: ResMut<ElementStore>,
    pan_mode: Res<PanMode>,
) -> Result {
    let mut action = None;

    egui::SidePanel::left("layers_panel")
        .default_width(200.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Layers").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            if store.is_empty() {
                ui.label(egui::RichText::new("No elements yet").weak().italics());
                return;
            }

            let len = store.len();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, element) in store.elements().iter().enumerate().rev() {
                    ui.horizontal(|ui| {
                        let label = format!("{}  {}", kind_icon(element), element.name);
                        if ui.selectable_label(element.selected, label).clicked() {
                            action = Some(LayerAction::Select(element.id));
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").on_hover_text("Delete").clicked() {
                                action = Some(LayerAction::Delete(element.id));
                            }
                            let lower = lower_target(index);
                            if ui
                                .add_enabled(lower.is_some(), egui::Button::new("▼").small())
                                .on_hover_text("Send backward")
                                .clicked()
                                && let Some(to) = lower
                            {
                                action = Some(LayerAction::Reorder(index, to));
                            }
                            let raise = raise_target(index, len);
                            if ui
                                .add_enabled(raise.is_some(), egui::Button::new("▲").small())
                                .on_hover_text("Bring forward")
                                .clicked()
                                && let Some(to) = raise
                            {
                                action = Some(LayerAction::Reorder(index, to));
                            }
                        });
                    });
                }
            });
        });

    match action {
        Some(LayerAction::Select(id)) => {
            store.select_element(id, pan_mode.active);
        }
        Some(LayerAction::Reorder(from, to)) => {
            store.reorder_element(from, to);
        }
        Some(LayerAction::Delete(id)) => {
            store.delete_element(id);
        }
        None => {}
    }

    Ok(())
}

fn kind_icon(element: &Element) -> &'static str {
    match element.kind {
        ElementKind::Rectangle => "▭",
        ElementKind::Text => "T",
    }
}
