// Copyright (c) 2025 Pennyplan Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ProjectionInput;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("org.pennyplan", "Pennyplan", "pennyplan"));

/// Location of the saved projection draft (the last set of projection inputs,
/// restored on the next run).
pub fn draft_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("projection_draft.json"))
}

pub fn save_to(path: &Path, input: &ProjectionInput) -> Result<()> {
    let json = serde_json::to_string_pretty(input)?;
    fs::write(path, json).with_context(|| format!("Write draft {}", path.display()))?;
    Ok(())
}

pub fn load_from(path: &Path) -> Result<Option<ProjectionInput>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("Read draft {}", path.display()))?;
    let input = serde_json::from_str(&raw)
        .with_context(|| format!("Parse draft {}", path.display()))?;
    Ok(Some(input))
}

pub fn clear_at(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Remove draft {}", path.display()))?;
        return Ok(true);
    }
    Ok(false)
}

pub fn save(input: &ProjectionInput) -> Result<()> {
    save_to(&draft_path()?, input)
}

pub fn load() -> Result<Option<ProjectionInput>> {
    load_from(&draft_path()?)
}

pub fn clear() -> Result<bool> {
    clear_at(&draft_path()?)
}
