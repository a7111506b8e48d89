//! Artboard dimensions and coordinate conversion.
//!
//! Artboard space has its origin at the top-left corner with y growing
//! downwards (the space element geometry is stored in). World space is Bevy's:
//! the artboard is centered on the origin and y grows upwards.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARTBOARD_HEIGHT, DEFAULT_ARTBOARD_WIDTH, MIN_ELEMENT_SIZE};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArtboardDimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for ArtboardDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARTBOARD_WIDTH,
            height: DEFAULT_ARTBOARD_HEIGHT,
        }
    }
}

impl ArtboardDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(MIN_ELEMENT_SIZE),
            height: height.max(MIN_ELEMENT_SIZE),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }

    pub fn to_artboard(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x + self.width / 2.0, self.height / 2.0 - world.y)
    }
}
