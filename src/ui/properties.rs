//! Properties panel for the selected element.
//!
//! Geometry fields drive the continuous store edits on every change, so a
//! drag on a value collapses into one undo step. Style and text fields are
//! edited in a draft and committed once, when the field loses focus or a
//! drag on it ends.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::canvas::{Element, ElementId, ElementKind};
use crate::store::ElementStore;
use crate::theme::parse_hex_color;

/// Uncommitted text of the discrete fields
#[derive(Resource, Default, Debug)]
pub struct PropertiesDraft {
    element: Option<ElementId>,
    revision: u64,
    pub name: String,
    pub content: String,
    pub fill_color: String,
    pub border_width: f32,
    pub border_color: String,
    pub shadow_blur: f32,
    pub shadow_color: String,
}

impl PropertiesDraft {
    /// Reload from the element when the selection or the store changed
    pub fn sync(&mut self, element: &Element, revision: u64) {
        if self.element == Some(element.id) && self.revision == revision {
            return;
        }
        self.element = Some(element.id);
        self.revision = revision;
        self.name = element.name.clone();
        self.content = element.content.clone().unwrap_or_default();
        self.fill_color = element.fill_color.clone();
        self.border_width = element.border_width.unwrap_or(0.0);
        self.border_color = element.border_color.clone().unwrap_or_else(|| "#000000".to_string());
        self.shadow_blur = element.shadow_blur.unwrap_or(0.0);
        self.shadow_color = element.shadow_color.clone().unwrap_or_else(|| "#000000".to_string());
    }

    pub fn clear(&mut self) {
        self.element = None;
    }

    /// Discrete fields whose draft differs from the element's value.
    ///
    /// Invalid colors are skipped.
    fn pending_edits(&self, element: &Element) -> Vec<PropertyEdit> {
        let mut edits = Vec::new();
        if self.name != element.name {
            edits.push(PropertyEdit::Name(self.name.clone()));
        }
        if element.kind == ElementKind::Text
            && element.content.as_deref() != Some(self.content.as_str())
        {
            edits.push(PropertyEdit::Content(self.content.clone()));
        }
        if let Some(color) = changed_color(&self.fill_color, &element.fill_color) {
            edits.push(PropertyEdit::FillColor(color));
        }
        if self.border_width != element.border_width.unwrap_or(0.0) {
            edits.push(PropertyEdit::BorderWidth(self.border_width));
        }
        let current = element.border_color.as_deref().unwrap_or("#000000");
        if let Some(color) = changed_color(&self.border_color, current) {
            edits.push(PropertyEdit::BorderColor(color));
        }
        if self.shadow_blur != element.shadow_blur.unwrap_or(0.0) {
            edits.push(PropertyEdit::ShadowBlur(self.shadow_blur));
        }
        let current = element.shadow_color.as_deref().unwrap_or("#000000");
        if let Some(color) = changed_color(&self.shadow_color, current) {
            edits.push(PropertyEdit::ShadowColor(color));
        }
        edits
    }

    /// When the selection moved away from the drafted element, hand back
    /// its uncommitted edits and forget the draft.
    fn take_abandoned(&mut self, store: &ElementStore) -> Option<(ElementId, Vec<PropertyEdit>)> {
        let drafted = self.element?;
        if store.selected_id() == Some(drafted) {
            return None;
        }
        self.clear();
        let element = store.get(drafted)?;
        Some((drafted, self.pending_edits(element)))
    }
}

/// One committed edit, applied after the panel is drawn
#[derive(Debug, Clone, PartialEq)]
enum PropertyEdit {
    Move(f32, f32),
    Resize(f32, f32),
    CornerRadius(f32),
    Name(String),
    Content(String),
    FillColor(String),
    BorderWidth(f32),
    BorderColor(String),
    ShadowBlur(f32),
    ShadowColor(String),
}

/// Normalize a typed color to `#rrggbb`, rejecting anything unparseable
fn normalize_hex(input: &str) -> Option<String> {
    let trimmed = input.trim();
    parse_hex_color(trimmed)?;
    let digits = trimmed.trim_start_matches('#').to_lowercase();
    Some(format!("#{}", digits))
}

/// The normalized draft color, if it is valid and differs from `current`
fn changed_color(draft: &str, current: &str) -> Option<String> {
    let color = normalize_hex(draft)?;
    let current = normalize_hex(current).unwrap_or_else(|| current.to_string());
    (color != current).then_some(color)
}

fn commit_color(
    edits: &mut Vec<PropertyEdit>,
    response: &egui::Response,
    draft: &mut String,
    current: &str,
    edit: fn(String) -> PropertyEdit,
) {
    if !response.lost_focus() {
        return;
    }
    match normalize_hex(draft) {
        Some(color) if color != current => edits.push(edit(color)),
        Some(_) => {}
        // Revert invalid input
        None => *draft = current.to_string(),
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, draft: &mut String) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(label);
        let swatch = parse_hex_color(draft).unwrap_or(egui::Color32::TRANSPARENT);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, swatch);
        ui.add(egui::TextEdit::singleline(draft).desired_width(80.0))
    })
    .inner
}

pub fn properties_panel_ui(
    mut contexts: EguiContexts,
    time: Res<Time<Real>>,
    mut store: ResMut<ElementStore>,
    mut draft: ResMut<PropertiesDraft>,
) -> Result {
    // Selection changed before the focused field could report lost focus
    if let Some((id, pending)) = draft.take_abandoned(&store) {
        if !pending.is_empty() {
            debug!("Committing {} pending edits to {}", pending.len(), id);
        }
        for edit in pending {
            apply_edit(&mut store, id, edit, time.elapsed());
        }
    }

    let revision = store.revision();
    let mut edits = Vec::new();
    let mut selected_id = None;

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.label(egui::RichText::new("Properties").heading().size(18.0));
            ui.add_space(4.0);
            ui.separator();

            let Some(element) = store.selected() else {
                draft.clear();
                ui.label("No element selected");
                return;
            };
            selected_id = Some(element.id);
            draft.sync(element, revision);

            ui.label(
                egui::RichText::new(format!("{} {}", element.kind.display_name(), element.id))
                    .weak(),
            );

            ui.horizontal(|ui| {
                ui.label("Name:");
                let response = ui.text_edit_singleline(&mut draft.name);
                if response.lost_focus() && draft.name != element.name {
                    edits.push(PropertyEdit::Name(draft.name.clone()));
                }
            });

            ui.separator();

            // Geometry
            let mut position = element.top_left();
            let mut size = element.size();
            egui::Grid::new("geometry").num_columns(4).show(ui, |ui| {
                ui.label("X:");
                let x = ui.add(egui::DragValue::new(&mut position.x).speed(1.0));
                ui.label("Y:");
                let y = ui.add(egui::DragValue::new(&mut position.y).speed(1.0));
                ui.end_row();
                if x.changed() || y.changed() {
                    let delta = position - element.top_left();
                    edits.push(PropertyEdit::Move(delta.x, delta.y));
                }

                ui.label("W:");
                let w = ui.add(egui::DragValue::new(&mut size.x).speed(1.0).range(1.0..=f32::MAX));
                ui.label("H:");
                let h = ui.add(egui::DragValue::new(&mut size.y).speed(1.0).range(1.0..=f32::MAX));
                ui.end_row();
                if w.changed() || h.changed() {
                    edits.push(PropertyEdit::Resize(size.x, size.y));
                }
            });

            if element.supports_corner_radius() {
                let mut radius = element.corner_radius.unwrap_or(0.0);
                ui.horizontal(|ui| {
                    ui.label("Corner radius:");
                    if ui
                        .add(egui::Slider::new(&mut radius, 0.0..=element.max_corner_radius()))
                        .changed()
                    {
                        edits.push(PropertyEdit::CornerRadius(radius));
                    }
                });
            }

            ui.separator();

            if element.kind == ElementKind::Text {
                ui.label("Text:");
                let response = ui.add(
                    egui::TextEdit::multiline(&mut draft.content)
                        .desired_rows(2)
                        .desired_width(f32::INFINITY),
                );
                if response.lost_focus()
                    && element.content.as_deref() != Some(draft.content.as_str())
                {
                    edits.push(PropertyEdit::Content(draft.content.clone()));
                }
                ui.separator();
            }

            // Style
            let response = color_row(ui, "Fill:", &mut draft.fill_color);
            commit_color(
                &mut edits,
                &response,
                &mut draft.fill_color,
                &element.fill_color,
                PropertyEdit::FillColor,
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Border:");
                let response = ui.add(
                    egui::DragValue::new(&mut draft.border_width)
                        .speed(0.25)
                        .range(0.0..=f32::MAX),
                );
                if (response.drag_stopped() || response.lost_focus())
                    && draft.border_width != element.border_width.unwrap_or(0.0)
                {
                    edits.push(PropertyEdit::BorderWidth(draft.border_width));
                }
            });
            let response = color_row(ui, "Border color:", &mut draft.border_color);
            commit_color(
                &mut edits,
                &response,
                &mut draft.border_color,
                element.border_color.as_deref().unwrap_or("#000000"),
                PropertyEdit::BorderColor,
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Shadow blur:");
                let response = ui.add(
                    egui::DragValue::new(&mut draft.shadow_blur)
                        .speed(0.25)
                        .range(0.0..=f32::MAX),
                );
                if (response.drag_stopped() || response.lost_focus())
                    && draft.shadow_blur != element.shadow_blur.unwrap_or(0.0)
                {
                    edits.push(PropertyEdit::ShadowBlur(draft.shadow_blur));
                }
            });
            let response = color_row(ui, "Shadow color:", &mut draft.shadow_color);
            commit_color(
                &mut edits,
                &response,
                &mut draft.shadow_color,
                element.shadow_color.as_deref().unwrap_or("#000000"),
                PropertyEdit::ShadowColor,
            );
        });

    if let Some(id) = selected_id {
        let now = time.elapsed();
        for edit in edits {
            apply_edit(&mut store, id, edit, now);
        }
    }

    Ok(())
}

fn apply_edit(store: &mut ElementStore, id: ElementId, edit: PropertyEdit, now: std::time::Duration) {
    match edit {
        PropertyEdit::Move(dx, dy) => store.move_element(id, dx, dy, now),
        PropertyEdit::Resize(w, h) => store.resize_element(id, w, h, now),
        PropertyEdit::CornerRadius(r) => store.update_corner_radius(id, r, now),
        PropertyEdit::Name(name) => store.update_name(id, &name),
        PropertyEdit::Content(text) => store.update_text_content(id, &text),
        PropertyEdit::FillColor(color) => store.update_fill_color(id, &color),
        PropertyEdit::BorderWidth(width) => store.update_border_width(id, width),
        PropertyEdit::BorderColor(color) => store.update_border_color(id, &color),
        PropertyEdit::ShadowBlur(blur) => store.update_shadow_blur(id, blur),
        PropertyEdit::ShadowColor(color) => store.update_shadow_color(id, &color),
    };
}
