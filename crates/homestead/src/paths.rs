// Copyright (c) Contributors to the Homestead project.
// SPDX-License-Identifier: Apache-2.0

//! Host path helpers.

use std::path::{Path, PathBuf};

use crate::Error;

#[cfg(test)]
#[path = "./paths_test.rs"]
mod paths_test;

/// Expand a host path from the settings document.
///
/// Supports home-relative (`~`, `~/x`), absolute, and relative paths.
/// Relative paths are resolved against `base_dir`. The path is not required
/// to exist.
pub fn expand_path(raw: &str, base_dir: &Path) -> crate::Result<PathBuf> {
    if raw == "~" || raw.starts_with("~/") {
        let home = dirs::home_dir().ok_or_else(|| {
            Error::ValidationFailed("Cannot resolve ~ without HOME".to_string())
        })?;
        let rel = raw.strip_prefix("~/").unwrap_or("");
        return Ok(home.join(rel));
    }

    let path = Path::new(raw);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(base_dir.join(path))
    }
}

/// Last `/` separated component of a host path as written in the settings.
/// Trailing separators are ignored.
pub fn file_name(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
