//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

use bevy::math::Vec2;
use std::time::Duration;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Default artboard size for new projects
pub const DEFAULT_ARTBOARD_WIDTH: f32 = 800.0;
pub const DEFAULT_ARTBOARD_HEIGHT: f32 = 600.0;

/// Smallest width/height an element or the artboard may have
pub const MIN_ELEMENT_SIZE: f32 = 1.0;

pub const DEFAULT_RECTANGLE_SIZE: Vec2 = Vec2::new(100.0, 100.0);
pub const DEFAULT_TEXT_SIZE: Vec2 = Vec2::new(80.0, 40.0);

/// Olive
pub const DEFAULT_RECTANGLE_FILL: &str = "#808000";
pub const DEFAULT_TEXT_FILL: &str = "#ffffff";
pub const DEFAULT_TEXT_CONTENT: &str = "New Text";

/// Idle time after which a drag/resize gesture stops extending its undo step
pub const BATCH_WINDOW: Duration = Duration::from_millis(300);

/// Quiet period after the last edit before the autosave blob is written
pub const AUTOSAVE_DELAY: Duration = Duration::from_secs(1);

/// Maximum number of recent projects to remember in config
pub const MAX_RECENT_PROJECTS: usize = 5;
