//! Canvas painting through the egui background layer.
//!
//! Elements are drawn back to front from the store every frame, followed by
//! the selection outline and resize handle. Side panels paint over this
//! layer, so ordering relative to the UI systems does not matter.

use bevy::prelude::*;
use bevy_egui::egui::{self, epaint::Shadow};
use bevy_egui::EguiContexts;

use crate::canvas::{ArtboardDimensions, Element, ElementKind};
use crate::store::ElementStore;
use crate::theme::{self, parse_hex_color};

use super::camera::EditorCamera;
use super::selection::resize_handle_rect;

/// Font size for text elements at 100% zoom
const TEXT_FONT_SIZE: f32 = 16.0;

/// Maps artboard-space points to egui screen positions
struct ScreenMapper<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
    artboard: &'a ArtboardDimensions,
}

impl ScreenMapper<'_> {
    fn point(&self, artboard_point: Vec2) -> Option<egui::Pos2> {
        let world = self.artboard.to_world(artboard_point);
        let screen = self
            .camera
            .world_to_viewport(self.transform, world.extend(0.0))
            .ok()?;
        Some(egui::pos2(screen.x, screen.y))
    }

    fn rect(&self, min: Vec2, max: Vec2) -> Option<egui::Rect> {
        Some(egui::Rect::from_two_pos(self.point(min)?, self.point(max)?))
    }
}

pub fn draw_canvas(
    mut contexts: EguiContexts,
    camera_query: Query<(&Camera, &GlobalTransform, &Projection), With<EditorCamera>>,
    artboard: Res<ArtboardDimensions>,
    store: Res<ElementStore>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let Ok((camera, transform, projection)) = camera_query.single() else {
        return Ok(());
    };
    let zoom = match projection {
        Projection::Orthographic(ortho) => 1.0 / ortho.scale,
        _ => 1.0,
    };

    let mapper = ScreenMapper {
        camera,
        transform,
        artboard: &artboard,
    };
    let painter = ctx.layer_painter(egui::LayerId::background());

    if let Some(board) = mapper.rect(Vec2::ZERO, artboard.size()) {
        painter.rect_filled(board, 0.0, theme::ARTBOARD_FILL);
        painter.rect_stroke(
            board,
            0.0,
            egui::Stroke::new(1.0, theme::ARTBOARD_OUTLINE),
            egui::StrokeKind::Outside,
        );
    }

    for element in store.elements() {
        draw_element(&painter, &mapper, element, zoom);
    }

    if let Some(selected) = store.selected() {
        draw_selection(&painter, &mapper, selected, zoom);
    }

    Ok(())
}

fn draw_element(painter: &egui::Painter, mapper: &ScreenMapper, element: &Element, zoom: f32) {
    let Some(rect) = mapper.rect(element.top_left(), element.bottom_right()) else {
        return;
    };
    let fill = parse_hex_color(&element.fill_color).unwrap_or(egui::Color32::GRAY);
    let radius = element.corner_radius.unwrap_or(0.0) * zoom;

    if let Some(blur) = element.shadow_blur.filter(|b| *b > 0.0) {
        let color = element
            .shadow_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(theme::DEFAULT_SHADOW);
        let shadow = Shadow {
            offset: [0, 0],
            blur: (blur * zoom).round().clamp(0.0, 255.0) as u8,
            spread: 0,
            color,
        };
        painter.add(shadow.as_shape(rect, radius));
    }

    match element.kind {
        ElementKind::Rectangle => {
            painter.rect_filled(rect, radius, fill);
        }
        ElementKind::Text => {
            // Text elements use the fill as the glyph color
            let content = element.content.as_deref().unwrap_or_default();
            painter.with_clip_rect(rect).text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                content,
                egui::FontId::proportional(TEXT_FONT_SIZE * zoom),
                fill,
            );
        }
    }

    if let Some(width) = element.border_width.filter(|w| *w > 0.0) {
        let color = element
            .border_color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(theme::DEFAULT_BORDER);
        painter.rect_stroke(
            rect,
            radius,
            egui::Stroke::new(width * zoom, color),
            egui::StrokeKind::Inside,
        );
    }
}

fn draw_selection(painter: &egui::Painter, mapper: &ScreenMapper, element: &Element, zoom: f32) {
    let Some(rect) = mapper.rect(element.top_left(), element.bottom_right()) else {
        return;
    };
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.5, theme::SELECTION_OUTLINE),
        egui::StrokeKind::Outside,
    );

    let (min, max) = resize_handle_rect(element, 1.0 / zoom);
    if let Some(handle) = mapper.rect(min, max) {
        painter.rect_filled(handle, 1.0, theme::RESIZE_HANDLE_FILL);
        painter.rect_stroke(
            handle,
            1.0,
            egui::Stroke::new(1.0, theme::SELECTION_OUTLINE),
            egui::StrokeKind::Inside,
        );
    }
}
