//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and canvas
//! rendering. Modify values here to change the application's color scheme.

use bevy::color::{ColorToPacked, Srgba};
use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Canvas Colors
// ============================================================================

/// Window clear color around the artboard
pub const CANVAS_BACKGROUND: Color = Color::srgb(0.16, 0.16, 0.18);

/// Artboard surface
pub const ARTBOARD_FILL: egui::Color32 = egui::Color32::from_rgb(58, 58, 64);

/// Thin outline around the artboard
pub const ARTBOARD_OUTLINE: egui::Color32 = egui::Color32::from_rgb(90, 90, 98);

/// Drop shadow color used when an element has a blur but no shadow color
pub const DEFAULT_SHADOW: egui::Color32 = egui::Color32::from_black_alpha(120);

/// Border color used when an element has a width but no border color
pub const DEFAULT_BORDER: egui::Color32 = egui::Color32::BLACK;

// ============================================================================
// Selection Colors
// ============================================================================

/// Light blue for selection outlines
pub const SELECTION_OUTLINE: egui::Color32 = egui::Color32::from_rgb(51, 153, 255);

/// Fill of the resize handle on the selected element
pub const RESIZE_HANDLE_FILL: egui::Color32 = egui::Color32::WHITE;

// ============================================================================
// UI Colors
// ============================================================================

/// Secondary toolbar background
pub const TOOLBAR_SECONDARY: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

/// Unsaved-changes marker in the status line
pub const DIRTY_MARKER: egui::Color32 = egui::Color32::from_rgb(230, 180, 80);

/// Error text in dialogs and the status line
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

/// Parse a `#rrggbb` (or `#rrggbbaa`) string into an egui color
pub fn parse_hex_color(hex: &str) -> Option<egui::Color32> {
    let [r, g, b, a] = Srgba::hex(hex).ok()?.to_u8_array();
    Some(egui::Color32::from_rgba_unmultiplied(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#808000"),
            Some(egui::Color32::from_rgb(128, 128, 0))
        );
        assert_eq!(parse_hex_color("#ffffff"), Some(egui::Color32::WHITE));
    }

    #[test]
    fn test_parse_hex_color_without_hash() {
        assert_eq!(parse_hex_color("000000"), Some(egui::Color32::BLACK));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("olive"), None);
        assert_eq!(parse_hex_color(""), None);
    }
}
