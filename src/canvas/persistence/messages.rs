//! Message types for project operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveProjectRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadProjectRequest {
    pub path: PathBuf,
}

/// Discard the current canvas and start an empty project
#[derive(Message)]
pub struct NewProjectRequest;
