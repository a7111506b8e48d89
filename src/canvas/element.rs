//! Canvas element data model.
//!
//! Elements are plain values: the store replaces the whole collection on every
//! committed mutation, so everything here is `Clone + PartialEq` and carries no
//! ECS state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DEFAULT_RECTANGLE_FILL, DEFAULT_RECTANGLE_SIZE, DEFAULT_TEXT_CONTENT, DEFAULT_TEXT_FILL,
    DEFAULT_TEXT_SIZE, MIN_ELEMENT_SIZE,
};

/// Stable identifier of an element for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Text,
}

impl ElementKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Text => "Text",
        }
    }

    pub fn default_size(&self) -> Vec2 {
        match self {
            ElementKind::Rectangle => DEFAULT_RECTANGLE_SIZE,
            ElementKind::Text => DEFAULT_TEXT_SIZE,
        }
    }

    pub fn default_fill(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => DEFAULT_RECTANGLE_FILL,
            ElementKind::Text => DEFAULT_TEXT_FILL,
        }
    }

    pub fn all() -> &'static [ElementKind] {
        &[ElementKind::Rectangle, ElementKind::Text]
    }
}

/// A single visual object on the artboard.
///
/// Geometry is in artboard space: `x`/`y` is the top-left corner, y grows
/// downwards. Colors are `#rrggbb` hex strings so snapshots compare and
/// serialize without any color-space conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Text content (text elements only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub fill_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    /// Rectangle only, always <= min(width, height) / 2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f32>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub selected: bool,
}

impl Element {
    /// Create an element with the defaults for its kind, centered on an
    /// artboard of the given size.
    pub fn with_defaults(id: ElementId, kind: ElementKind, artboard_size: Vec2) -> Self {
        let size = kind.default_size();
        let top_left = (artboard_size - size) / 2.0;

        Self {
            id,
            kind,
            x: top_left.x,
            y: top_left.y,
            width: size.x,
            height: size.y,
            content: match kind {
                ElementKind::Text => Some(DEFAULT_TEXT_CONTENT.to_string()),
                ElementKind::Rectangle => None,
            },
            fill_color: kind.default_fill().to_string(),
            border_width: None,
            border_color: None,
            shadow_blur: None,
            shadow_color: None,
            corner_radius: None,
            name: format!("{} {}", kind.display_name(), id.0),
            selected: false,
        }
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.top_left() + self.size()
    }

    /// Largest corner radius the current size allows
    pub fn max_corner_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }

    pub fn supports_corner_radius(&self) -> bool {
        self.kind == ElementKind::Rectangle
    }

    /// Set the size, keeping it strictly positive and the corner radius in range.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(MIN_ELEMENT_SIZE);
        self.height = height.max(MIN_ELEMENT_SIZE);
        if let Some(radius) = self.corner_radius {
            self.corner_radius = Some(radius.min(self.max_corner_radius()));
        }
    }

    /// Set the corner radius clamped to `[0, min(width, height) / 2]`.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = Some(radius.clamp(0.0, self.max_corner_radius()));
    }

    /// Whether an artboard-space point lies inside this element's bounds
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.top_left();
        let max = self.bottom_right();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
