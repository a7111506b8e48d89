//! File helpers shared by save, load and autosave.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::canvas::SavedProject;
use crate::paths;

use super::results::{LoadResult, SaveResult};

/// Serialize and write a project. Runs inside an IO task.
pub fn write_project(path: PathBuf, project: &SavedProject, revision: u64) -> SaveResult {
    let error = match serde_json::to_string_pretty(project) {
        Ok(json) => std::fs::write(&path, json)
            .err()
            .map(|e| format!("Failed to write file: {}", e)),
        Err(e) => Some(format!("Failed to serialize project: {}", e)),
    };

    SaveResult {
        path,
        revision,
        error,
    }
}

/// Read and parse a project. Runs inside an IO task.
pub fn read_project(path: PathBuf) -> LoadResult {
    let json = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return LoadResult {
                path,
                saved_project: None,
                error: Some(format!("Failed to read file: {}", e)),
            };
        }
    };

    match serde_json::from_str::<SavedProject>(&json) {
        Ok(saved_project) => LoadResult {
            path,
            saved_project: Some(saved_project),
            error: None,
        },
        Err(e) => LoadResult {
            path,
            saved_project: None,
            error: Some(format!("Failed to parse project file: {}", e)),
        },
    }
}

/// File stem shown in titles and status text
pub fn project_display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("Untitled")
        .to_string()
}

pub fn ensure_projects_directory() {
    let projects_dir = paths::projects_dir();
    if !projects_dir.exists()
        && let Err(e) = std::fs::create_dir_all(&projects_dir)
    {
        warn!("Failed to create projects directory: {}", e);
    }
}
